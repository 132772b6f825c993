//! Kernel-wide error type and result alias

use thiserror::Error;
use crate::money::MoneyError;

/// Error type shared by the kernel primitives
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Money arithmetic failed: {0}")]
    Money(#[from] MoneyError),

    #[error("Validation failed: {0}")]
    Validation(String),
}

impl CoreError {
    pub fn validation(message: impl Into<String>) -> Self {
        CoreError::Validation(message.into())
    }
}

/// Convenience alias for kernel results
pub type CoreResult<T> = Result<T, CoreError>;
