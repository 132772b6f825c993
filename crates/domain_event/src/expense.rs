//! Expense records
//!
//! An expense is a single payment made by one participant on behalf of the
//! group. Amounts are stored to cent precision with an upper bound matching
//! the storage width of the product's persistence schema.

use chrono::{DateTime, Utc};
use core_kernel::{ExpenseId, Money, ParticipantId};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::EventResult;
use crate::validation::{validate_amount, validate_name};

/// A single payment recorded against an event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    id: ExpenseId,
    name: String,
    payer: ParticipantId,
    amount: Money,
    created_at: DateTime<Utc>,
}

impl Expense {
    /// Maximum description length in characters
    pub const MAX_NAME_LENGTH: usize = 255;

    /// Largest storable amount (eight integral digits, two fractional)
    pub const MAX_AMOUNT: Decimal = dec!(99_999_999.99);

    /// Creates an expense record
    ///
    /// Identifiers are time-ordered (UUID v7) so recency ordering survives
    /// serialization even when `created_at` ties at clock resolution.
    ///
    /// # Errors
    ///
    /// Returns an error when the name is empty or over-long, or when the
    /// amount is negative, finer than cents, or above [`Self::MAX_AMOUNT`].
    pub fn new(
        name: impl Into<String>,
        payer: ParticipantId,
        amount: Money,
    ) -> EventResult<Self> {
        let name = name.into();
        validate_name("expense", &name, Self::MAX_NAME_LENGTH)?;
        validate_amount(&amount, Self::MAX_AMOUNT)?;

        Ok(Self {
            id: ExpenseId::new_v7(),
            name,
            payer,
            amount,
            created_at: Utc::now(),
        })
    }

    /// Returns the expense identifier
    pub fn id(&self) -> ExpenseId {
        self.id
    }

    /// Returns the description
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the paying participant
    pub fn payer(&self) -> ParticipantId {
        self.payer
    }

    /// Returns the paid amount
    pub fn amount(&self) -> Money {
        self.amount
    }

    /// Returns when the expense was recorded
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
