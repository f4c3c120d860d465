//! # Session Error Type
//!
//! Unified error type for session operations.
//!
//! ## Error Handling Strategy
//! Every error here is recoverable and user-facing: the presentation layer
//! shows the message and stays on the same screen. Nothing is fatal, nothing
//! retries (there is no I/O to retry), and lookup-by-id misses are modeled
//! as no-ops/`Option` elsewhere - they never reach this type.

use thiserror::Error;

use atero_core::{PaymentMethod, ValidationError};

/// Errors surfaced to the presentation layer by session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// User input failed validation (wraps the core error).
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The selected payment method has no checkout flow yet.
    #[error("{0} payment is not yet implemented")]
    UnsupportedPaymentMethod(PaymentMethod),

    /// The chef panel passcode did not match.
    #[error("Incorrect password. Please try again.")]
    IncorrectPasscode,
}

/// Convenience type alias for Results with SessionError.
pub type SessionResult<T> = Result<T, SessionError>;
