//! Settlement domain errors

use core_kernel::{Currency, Money};
use thiserror::Error;

/// Errors that can occur in the settlement domain
#[derive(Debug, Error)]
pub enum SettlementError {
    /// Balance sheet rows or totals disagree on currency
    #[error("Currency mismatch in balance sheet: expected {expected}, found {found}")]
    MixedCurrencies {
        expected: Currency,
        found: Currency,
    },

    /// Expenses were recorded against an empty roster; the fair share is
    /// undefined and the upstream contract is broken
    #[error("Cannot split {total} across zero participants")]
    NoParticipants { total: Money },
}

/// Convenience alias for settlement results
pub type SettlementResult<T> = Result<T, SettlementError>;
