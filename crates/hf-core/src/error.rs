//! Simulation error type.
//!
//! Every error the core can produce is a construction-time contract
//! violation.  Once a `Simulator` exists, ticking it cannot fail.

use thiserror::Error;

/// The error type shared by all `hf-*` core crates.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum HfError {
    /// A constructor received an argument outside its contract
    /// (negative radius, empty field, inverted velocity range, …).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl HfError {
    /// Convenience constructor for [`HfError::InvalidArgument`].
    pub fn invalid(msg: impl Into<String>) -> Self {
        HfError::InvalidArgument(msg.into())
    }
}

/// Shorthand result type for all `hf-*` crates.
pub type HfResult<T> = Result<T, HfError>;
