//! Balance sheet snapshot consumed by the settlement calculator
//!
//! A balance sheet is read-only input: one row per participant attached to
//! the event, the event's total recorded expenses, and how many expense
//! records exist. It is rebuilt from current state on every calculation, so
//! there is nothing to invalidate when expenses change.
//!
//! Rows are keyed by [`ParticipantId`]; display names ride along purely for
//! rendering and may repeat.

use core_kernel::{Currency, Money, ParticipantId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{SettlementError, SettlementResult};

/// What one participant paid towards an event
///
/// `paid` is the sum of that participant's expense amounts for the event;
/// participants with no expenses carry an explicit zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantBalance {
    participant_id: ParticipantId,
    name: String,
    paid: Money,
}

impl ParticipantBalance {
    /// Creates a balance row
    pub fn new(participant_id: ParticipantId, name: impl Into<String>, paid: Money) -> Self {
        Self {
            participant_id,
            name: name.into(),
            paid,
        }
    }

    /// Returns the participant identifier
    pub fn participant_id(&self) -> ParticipantId {
        self.participant_id
    }

    /// Returns the display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the total paid
    pub fn paid(&self) -> Money {
        self.paid
    }
}

/// A participant's derived net position
///
/// Positive net means the group owes the participant, negative means the
/// participant owes the group. Participants at exactly zero are already
/// settled and take no part in matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetPosition {
    participant_id: ParticipantId,
    name: String,
    net: Money,
}

impl NetPosition {
    /// Creates a net position
    pub fn new(participant_id: ParticipantId, name: impl Into<String>, net: Money) -> Self {
        Self {
            participant_id,
            name: name.into(),
            net,
        }
    }

    /// Returns the participant identifier
    pub fn participant_id(&self) -> ParticipantId {
        self.participant_id
    }

    /// Returns the display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the net balance (`paid - fair_share`)
    pub fn net(&self) -> Money {
        self.net
    }

    /// Returns true if the group owes this participant
    pub fn is_creditor(&self) -> bool {
        self.net.is_positive()
    }

    /// Returns true if this participant owes the group
    pub fn is_debtor(&self) -> bool {
        self.net.is_negative()
    }

    /// Returns true if the participant is already square
    pub fn is_settled(&self) -> bool {
        self.net.is_zero()
    }

    /// Returns the magnitude of the net balance
    pub fn open_amount(&self) -> Decimal {
        self.net.amount().abs()
    }
}

/// Read-only snapshot of an event's payments
///
/// Construction checks that every row and the total agree on currency.
/// Amount validation (non-negative paid, totals consistent with rows) is the
/// snapshot producer's contract and is not re-checked here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceSheet {
    currency: Currency,
    entries: Vec<ParticipantBalance>,
    total_expenses: Money,
    expense_count: usize,
}

impl BalanceSheet {
    /// Creates a balance sheet
    ///
    /// # Errors
    ///
    /// Returns [`SettlementError::MixedCurrencies`] if any row or the total
    /// is denominated in a different currency than `currency`.
    pub fn new(
        currency: Currency,
        entries: Vec<ParticipantBalance>,
        total_expenses: Money,
        expense_count: usize,
    ) -> SettlementResult<Self> {
        if total_expenses.currency() != currency {
            return Err(SettlementError::MixedCurrencies {
                expected: currency,
                found: total_expenses.currency(),
            });
        }
        for entry in &entries {
            if entry.paid.currency() != currency {
                return Err(SettlementError::MixedCurrencies {
                    expected: currency,
                    found: entry.paid.currency(),
                });
            }
        }

        Ok(Self {
            currency,
            entries,
            total_expenses,
            expense_count,
        })
    }

    /// Returns the sheet currency
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the balance rows in roster order
    pub fn entries(&self) -> &[ParticipantBalance] {
        &self.entries
    }

    /// Returns the number of participants
    pub fn participant_count(&self) -> usize {
        self.entries.len()
    }

    /// Returns the event's total recorded expenses
    pub fn total_expenses(&self) -> Money {
        self.total_expenses
    }

    /// Returns the number of expense records behind the totals
    pub fn expense_count(&self) -> usize {
        self.expense_count
    }

    /// Returns each participant's equal share of the total
    ///
    /// The division keeps full decimal precision; a share like `100 / 3`
    /// carries its repeating digits until an amount is emitted. Returns
    /// `None` when the sheet has no participants, since the share is
    /// undefined.
    pub fn fair_share(&self) -> Option<Money> {
        if self.entries.is_empty() {
            return None;
        }
        let count = Decimal::from(self.entries.len() as u64);
        // count is non-zero here, plain division cannot fail
        Some(Money::new(self.total_expenses.amount() / count, self.currency))
    }

    /// Derives every participant's net position, in roster order
    ///
    /// Empty when the sheet has no participants.
    pub fn net_positions(&self) -> Vec<NetPosition> {
        let Some(fair_share) = self.fair_share() else {
            return Vec::new();
        };

        self.entries
            .iter()
            .map(|entry| NetPosition::new(entry.participant_id, entry.name.clone(), entry.paid - fair_share))
            .collect()
    }
}
