//! Observable payment state.

use serde::{Deserialize, Serialize};

/// Phase of a payment attempt.
///
/// `Success` and `Error` are terminal; only an explicit
/// [`crate::PaymentFlow::reset`] leaves them, back to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// No payment attempt underway.
    #[default]
    Idle,
    /// Push submitted, awaiting confirmation from the customer's handset.
    Processing,
    /// Payment verified complete.
    Success,
    /// Initiation was rejected or verification failed.
    Error,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Idle => "idle",
            PaymentStatus::Processing => "processing",
            PaymentStatus::Success => "success",
            PaymentStatus::Error => "error",
        }
    }

    /// Check if this phase only leaves via an explicit reset.
    pub fn is_terminal(&self) -> bool {
        matches!(self, PaymentStatus::Success | PaymentStatus::Error)
    }
}

/// The state record a payment flow exposes to its caller.
///
/// Mutated only by the flow itself, in response to gateway responses or an
/// explicit reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PaymentState {
    /// Current phase.
    pub status: PaymentStatus,
    /// Human-readable failure message, present only in `Error`.
    pub error: Option<String>,
    /// Gateway-issued correlation identifier for the current attempt.
    pub checkout_request_id: Option<String>,
}

impl PaymentState {
    /// The initial state: idle, no error, no correlation id.
    pub fn idle() -> Self {
        Self::default()
    }
}
