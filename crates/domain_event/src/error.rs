//! Event domain errors
//!
//! This module defines all error types that can occur within the
//! shared-expense event domain.

use core_kernel::{Currency, ExpenseId, MoneyError, ParticipantId};
use domain_settlement::SettlementError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur in the event domain
#[derive(Debug, Error)]
pub enum EventError {
    /// A required name was empty or whitespace
    #[error("{entity} name cannot be empty")]
    EmptyName { entity: &'static str },

    /// A name exceeded its maximum length
    #[error("{entity} name cannot exceed {max} characters")]
    NameTooLong { entity: &'static str, max: usize },

    /// Participant is already attached to the event
    #[error("Participant {participant} is already attached to the event")]
    DuplicateParticipant { participant: ParticipantId },

    /// Participant is not attached to the event
    #[error("Participant {participant} is not attached to the event")]
    ParticipantNotFound { participant: ParticipantId },

    /// Expense payer is not attached to the event
    #[error("{payer} participant is not part of the event {event}.")]
    PayerNotParticipant { payer: ParticipantId, event: String },

    /// Participant cannot be detached while they have recorded expenses
    #[error("Participant {participant} has {expense_count} recorded expense(s) and cannot be detached")]
    ParticipantHasExpenses {
        participant: ParticipantId,
        expense_count: usize,
    },

    /// Expense amount was negative
    #[error("Expense amount cannot be negative: {amount}")]
    NegativeAmount { amount: Decimal },

    /// Expense amount carried more than two decimal places
    #[error("Expense amount cannot have more than two decimal places: {amount}")]
    AmountPrecision { amount: Decimal },

    /// Expense amount exceeded the supported maximum
    #[error("Expense amount {amount} exceeds the maximum {max}")]
    AmountTooLarge { amount: Decimal, max: Decimal },

    /// Expense not found on the event
    #[error("Expense {expense} is not recorded on the event")]
    ExpenseNotFound { expense: ExpenseId },

    /// Currency mismatch between the event and an amount
    #[error("Currency mismatch: expected {expected}, got {found}")]
    CurrencyMismatch { expected: Currency, found: Currency },

    /// Currency cannot change while expenses are recorded
    #[error("Currency cannot change while {expense_count} expense(s) are recorded")]
    CurrencyLocked { expense_count: usize },

    /// Monetary arithmetic error
    #[error("Money arithmetic failed: {0}")]
    Money(#[from] MoneyError),

    /// Balance sheet construction error
    #[error("Settlement error: {0}")]
    Settlement(#[from] SettlementError),
}

/// Result alias for event domain operations
pub type EventResult<T> = Result<T, EventError>;
