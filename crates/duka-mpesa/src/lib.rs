//! M-PESA STK-push payment orchestration for Autoduka.
//!
//! Drives the lifecycle of a single mobile-money payment attempt:
//! `idle -> processing -> (success | error)`. The actual money movement is
//! delegated to an [`StkGateway`] implementation; this crate only
//! translates gateway responses into the state machine the storefront
//! observes.
//!
//! An STK push is *accepted*, not completed, when the gateway acknowledges
//! it: the customer still has to approve the charge on their handset, so
//! acceptance leaves the flow in `processing` and completion is established
//! later through [`PaymentFlow::verify`].
//!
//! # Example
//!
//! ```rust
//! use duka_mpesa::{PaymentFlow, PaymentStatus, PhoneNumber, SandboxGateway, StkPushRequest};
//! use duka_commerce::Money;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), duka_mpesa::PaymentError> {
//! let phone = PhoneNumber::parse("0712 345 678")?;
//! let request = StkPushRequest::new(phone, Money::new(8_500), "ORDER-1")?;
//!
//! let mut flow = PaymentFlow::new(SandboxGateway::accepting());
//! let ack = flow.initiate(&request).await?;
//! assert_eq!(flow.status(), PaymentStatus::Processing);
//!
//! let confirmed = flow.verify(&ack.checkout_request_id).await;
//! assert!(confirmed);
//! assert_eq!(flow.status(), PaymentStatus::Success);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod flow;
pub mod gateway;
pub mod phone;
pub mod request;
pub mod sandbox;
pub mod state;

pub use error::PaymentError;
pub use flow::PaymentFlow;
pub use gateway::{GatewayError, StkGateway, StkPushAck, ACCEPTED_RESPONSE_CODE};
pub use phone::PhoneNumber;
pub use request::{OrderLine, OrderSummary, StkPushRequest};
pub use sandbox::{ConfirmBehavior, SandboxGateway, SubmitBehavior};
pub use state::{PaymentState, PaymentStatus};
