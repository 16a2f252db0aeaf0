//! A deterministic in-memory gateway for demos and tests.

use crate::gateway::{GatewayError, StkGateway, StkPushAck, ACCEPTED_RESPONSE_CODE};
use crate::request::StkPushRequest;
use async_trait::async_trait;
use tracing::debug;

/// Merchant request id the sandbox hands out.
pub const SANDBOX_MERCHANT_REQUEST_ID: &str = "12345";

/// Checkout request id the sandbox hands out.
pub const SANDBOX_CHECKOUT_REQUEST_ID: &str = "67890";

/// How the sandbox answers a submission.
#[derive(Debug, Clone)]
pub enum SubmitBehavior {
    /// Accept with the canned sandbox identifiers.
    Accept,
    /// Reject synchronously with the given code and description.
    Reject { code: String, description: String },
    /// Fail at the transport level.
    Fail(String),
}

/// How the sandbox answers a confirmation poll.
#[derive(Debug, Clone)]
pub enum ConfirmBehavior {
    /// The customer approved on their handset.
    Approve,
    /// The customer declined, or the prompt lapsed.
    Decline,
    /// Fail at the transport level.
    Fail(String),
}

/// In-memory stand-in for the M-PESA gateway.
///
/// Answers deterministically according to its configured behaviors, which
/// is exactly what the storefront needs until a real Daraja integration is
/// dropped in behind [`StkGateway`].
#[derive(Debug, Clone)]
pub struct SandboxGateway {
    submit: SubmitBehavior,
    confirm: ConfirmBehavior,
}

impl SandboxGateway {
    /// A gateway that accepts every push and approves every confirmation.
    pub fn accepting() -> Self {
        Self {
            submit: SubmitBehavior::Accept,
            confirm: ConfirmBehavior::Approve,
        }
    }

    /// A gateway that rejects every push with the given code and reason.
    pub fn rejecting(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            submit: SubmitBehavior::Reject {
                code: code.into(),
                description: description.into(),
            },
            confirm: ConfirmBehavior::Decline,
        }
    }

    /// A gateway whose transport always fails.
    pub fn unreachable(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            submit: SubmitBehavior::Fail(message.clone()),
            confirm: ConfirmBehavior::Fail(message),
        }
    }

    /// Override the confirmation behavior.
    pub fn with_confirm(mut self, confirm: ConfirmBehavior) -> Self {
        self.confirm = confirm;
        self
    }
}

#[async_trait]
impl StkGateway for SandboxGateway {
    async fn submit(&self, request: &StkPushRequest) -> Result<StkPushAck, GatewayError> {
        debug!(reference = %request.reference, "sandbox gateway received push");
        match &self.submit {
            SubmitBehavior::Accept => Ok(StkPushAck {
                merchant_request_id: SANDBOX_MERCHANT_REQUEST_ID.to_string(),
                checkout_request_id: SANDBOX_CHECKOUT_REQUEST_ID.to_string(),
                response_code: ACCEPTED_RESPONSE_CODE.to_string(),
                response_description: "Success".to_string(),
                customer_message: "Success".to_string(),
            }),
            SubmitBehavior::Reject { code, description } => Ok(StkPushAck {
                merchant_request_id: SANDBOX_MERCHANT_REQUEST_ID.to_string(),
                checkout_request_id: String::new(),
                response_code: code.clone(),
                response_description: description.clone(),
                customer_message: description.clone(),
            }),
            SubmitBehavior::Fail(message) => Err(GatewayError::Transport(message.clone())),
        }
    }

    async fn confirm(&self, checkout_request_id: &str) -> Result<bool, GatewayError> {
        debug!(checkout_request_id, "sandbox gateway confirmation poll");
        match &self.confirm {
            ConfirmBehavior::Approve => Ok(true),
            ConfirmBehavior::Decline => Ok(false),
            ConfirmBehavior::Fail(message) => Err(GatewayError::Timeout(message.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phone::PhoneNumber;
    use duka_commerce::Money;

    fn request() -> StkPushRequest {
        let phone = PhoneNumber::parse("0712345678").unwrap();
        StkPushRequest::new(phone, Money::new(1_000), "ORDER-1").unwrap()
    }

    #[tokio::test]
    async fn test_accepting_gateway() {
        let gateway = SandboxGateway::accepting();
        let ack = gateway.submit(&request()).await.unwrap();
        assert!(ack.is_accepted());
        assert_eq!(ack.checkout_request_id, SANDBOX_CHECKOUT_REQUEST_ID);
        assert!(gateway.confirm(&ack.checkout_request_id).await.unwrap());
    }

    #[tokio::test]
    async fn test_rejecting_gateway() {
        let gateway = SandboxGateway::rejecting("2001", "The initiator information is invalid");
        let ack = gateway.submit(&request()).await.unwrap();
        assert!(!ack.is_accepted());
        assert_eq!(ack.response_description, "The initiator information is invalid");
    }

    #[tokio::test]
    async fn test_unreachable_gateway() {
        let gateway = SandboxGateway::unreachable("dns failure");
        assert!(gateway.submit(&request()).await.is_err());
        assert!(gateway.confirm("67890").await.is_err());
    }
}
