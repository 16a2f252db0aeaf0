//! Payment error types.

use crate::gateway::GatewayError;
use duka_commerce::Money;
use thiserror::Error;

/// Errors that can occur when initiating a payment.
///
/// Verification failure is deliberately absent: [`crate::PaymentFlow::verify`]
/// reports failure through its boolean return and the observable state, never
/// through an error.
#[derive(Error, Debug)]
pub enum PaymentError {
    /// Payment amount must be positive.
    #[error("Invalid payment amount: {0}")]
    InvalidAmount(Money),

    /// Input could not be parsed as a Kenyan mobile number.
    #[error("Invalid Kenyan phone number: {0:?}")]
    InvalidPhone(String),

    /// A previous initiation is still awaiting the gateway's acknowledgment.
    #[error("A payment is already being initiated")]
    PaymentInFlight,

    /// The gateway synchronously declined the request.
    #[error("{description}")]
    GatewayRejected {
        /// Gateway response code (anything other than "0").
        code: String,
        /// Human-readable reason, suitable for direct display.
        description: String,
    },

    /// The gateway could not be reached or answered garbage.
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}
