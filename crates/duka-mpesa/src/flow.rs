//! The payment state machine.

use crate::error::PaymentError;
use crate::gateway::{StkGateway, StkPushAck};
use crate::request::StkPushRequest;
use crate::state::{PaymentState, PaymentStatus};
use tracing::{debug, info, warn};

/// Message shown when a payment could not be confirmed. Verification
/// failure reasons are not differentiated to the customer.
const VERIFICATION_FAILED: &str = "Payment verification failed";

/// Orchestrates a single mobile-money payment attempt.
///
/// Owns the gateway handle and the [`PaymentState`] the UI observes. One
/// flow serves one logical session; on a multi-threaded runtime, wrap it in
/// a mutex or an actor rather than sharing it directly.
///
/// The flow has no intrinsic timeout: if the gateway never resolves, the
/// state stays `Processing` until the caller resets. Timeout policy belongs
/// to the gateway implementation.
pub struct PaymentFlow<G> {
    gateway: G,
    state: PaymentState,
    in_flight: bool,
}

impl<G: StkGateway> PaymentFlow<G> {
    /// Create a flow in the idle state.
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            state: PaymentState::idle(),
            in_flight: false,
        }
    }

    /// The observable payment state.
    pub fn state(&self) -> &PaymentState {
        &self.state
    }

    /// Current phase of the attempt.
    pub fn status(&self) -> PaymentStatus {
        self.state.status
    }

    /// Whether an initiation is currently awaiting the gateway.
    pub fn is_processing(&self) -> bool {
        self.in_flight
    }

    /// Submit an STK push for the request's amount.
    ///
    /// Optimistically enters `Processing` before the gateway round-trip. An
    /// accepted acknowledgment keeps the flow in `Processing` (the customer
    /// still has to approve on their handset) and records the gateway's
    /// correlation id. A rejection or transport failure moves the flow to
    /// `Error` *and* returns the failure, so callers that swallow the error
    /// can still react to the state.
    ///
    /// A second initiation while one is outstanding is refused with
    /// [`PaymentError::PaymentInFlight`]. No automatic retry is performed;
    /// callers [`reset`](Self::reset) and try again.
    pub async fn initiate(&mut self, request: &StkPushRequest) -> Result<StkPushAck, PaymentError> {
        if self.in_flight {
            return Err(PaymentError::PaymentInFlight);
        }
        if !request.amount.is_positive() {
            return Err(PaymentError::InvalidAmount(request.amount));
        }

        self.in_flight = true;
        self.state = PaymentState {
            status: PaymentStatus::Processing,
            error: None,
            checkout_request_id: None,
        };
        debug!(reference = %request.reference, amount = %request.amount, "submitting STK push");

        let result = self.gateway.submit(request).await;
        self.in_flight = false;

        match result {
            Ok(ack) if ack.is_accepted() => {
                info!(
                    checkout_request_id = %ack.checkout_request_id,
                    "STK push accepted, awaiting customer confirmation"
                );
                self.state.checkout_request_id = Some(ack.checkout_request_id.clone());
                Ok(ack)
            }
            Ok(ack) => {
                warn!(code = %ack.response_code, "STK push rejected by gateway");
                self.state = PaymentState {
                    status: PaymentStatus::Error,
                    error: Some(ack.response_description.clone()),
                    checkout_request_id: None,
                };
                Err(PaymentError::GatewayRejected {
                    code: ack.response_code,
                    description: ack.response_description,
                })
            }
            Err(e) => {
                warn!(error = %e, "STK push failed in transport");
                self.state = PaymentState {
                    status: PaymentStatus::Error,
                    error: Some(e.to_string()),
                    checkout_request_id: None,
                };
                Err(PaymentError::Gateway(e))
            }
        }
    }

    /// Confirm whether a previously initiated payment has completed.
    ///
    /// Never fails: success moves the flow to `Success` and returns `true`;
    /// a decline, timeout or transport failure moves it to `Error` with a
    /// fixed message and returns `false`. Verification failure is an
    /// expected outcome, unlike initiation failure.
    pub async fn verify(&mut self, checkout_request_id: &str) -> bool {
        match self.gateway.confirm(checkout_request_id).await {
            Ok(true) => {
                info!(checkout_request_id, "payment confirmed");
                self.state = PaymentState {
                    status: PaymentStatus::Success,
                    error: None,
                    checkout_request_id: Some(checkout_request_id.to_string()),
                };
                true
            }
            Ok(false) => {
                warn!(checkout_request_id, "payment not confirmed");
                self.fail_verification(checkout_request_id);
                false
            }
            Err(e) => {
                warn!(checkout_request_id, error = %e, "verification errored");
                self.fail_verification(checkout_request_id);
                false
            }
        }
    }

    fn fail_verification(&mut self, checkout_request_id: &str) {
        self.state = PaymentState {
            status: PaymentStatus::Error,
            error: Some(VERIFICATION_FAILED.to_string()),
            checkout_request_id: Some(checkout_request_id.to_string()),
        };
    }

    /// Return to `Idle`, clearing the error and correlation id.
    ///
    /// Always succeeds, from any state.
    pub fn reset(&mut self) {
        debug!("payment state reset");
        self.state = PaymentState::idle();
        self.in_flight = false;
    }
}
