//! The payment gateway contract the orchestrator consumes.

use crate::request::StkPushRequest;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Response code a gateway returns when it accepts an STK push.
pub const ACCEPTED_RESPONSE_CODE: &str = "0";

/// Errors from the gateway transport itself.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Connection-level failure.
    #[error("Gateway transport error: {0}")]
    Transport(String),

    /// The gateway did not answer in time.
    #[error("Gateway timeout: {0}")]
    Timeout(String),

    /// The gateway answered with something unintelligible.
    #[error("Invalid gateway response: {0}")]
    InvalidResponse(String),
}

/// Synchronous acknowledgment of an STK push submission.
///
/// Field names follow the M-PESA wire format on the JSON boundary.
/// Acceptance means the push was queued to the customer's handset, not that
/// the payment completed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StkPushAck {
    /// Gateway-side identifier of the merchant request.
    #[serde(rename = "MerchantRequestID")]
    pub merchant_request_id: String,
    /// Correlation identifier used to confirm this payment attempt later.
    #[serde(rename = "CheckoutRequestID")]
    pub checkout_request_id: String,
    /// "0" for acceptance, anything else for rejection.
    #[serde(rename = "ResponseCode")]
    pub response_code: String,
    /// Human-readable description of the response.
    #[serde(rename = "ResponseDescription")]
    pub response_description: String,
    /// Message suitable for showing to the customer.
    #[serde(rename = "CustomerMessage")]
    pub customer_message: String,
}

impl StkPushAck {
    /// Check whether the gateway accepted the push.
    pub fn is_accepted(&self) -> bool {
        self.response_code == ACCEPTED_RESPONSE_CODE
    }
}

/// An M-PESA STK-push gateway.
///
/// The storefront never talks money movement itself; any real integration
/// (Daraja, an aggregator) or test double is a drop-in implementation of
/// these two operations.
#[async_trait]
pub trait StkGateway: Send + Sync {
    /// Submit an STK push, asking the customer's handset to prompt for the
    /// amount. Resolves with the gateway's synchronous acknowledgment.
    async fn submit(&self, request: &StkPushRequest) -> Result<StkPushAck, GatewayError>;

    /// Confirm whether a previously accepted push has completed. Resolves
    /// `true` once the customer approved on their handset, `false` if they
    /// declined or the attempt lapsed.
    async fn confirm(&self, checkout_request_id: &str) -> Result<bool, GatewayError>;
}
