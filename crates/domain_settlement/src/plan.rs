//! Settlement plan output
//!
//! A plan is transient presentation data: it is recomputed from current
//! expense state on demand and never persisted. Instruction order is part of
//! the contract, being the order the steps should be displayed in.

use core_kernel::{Currency, Money, ParticipantId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A directed payment recommendation: `from` pays `to` the given amount
///
/// Amounts are always rounded to cents. Identity is carried by the
/// participant ids; the names are display payload and may repeat across
/// distinct participants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettlementInstruction {
    from: ParticipantId,
    from_name: String,
    to: ParticipantId,
    to_name: String,
    amount: Money,
}

impl SettlementInstruction {
    /// Creates an instruction
    pub fn new(
        from: ParticipantId,
        from_name: impl Into<String>,
        to: ParticipantId,
        to_name: impl Into<String>,
        amount: Money,
    ) -> Self {
        Self {
            from,
            from_name: from_name.into(),
            to,
            to_name: to_name.into(),
            amount,
        }
    }

    /// Returns the paying participant's id
    pub fn from(&self) -> ParticipantId {
        self.from
    }

    /// Returns the paying participant's display name
    pub fn from_name(&self) -> &str {
        &self.from_name
    }

    /// Returns the receiving participant's id
    pub fn to(&self) -> ParticipantId {
        self.to
    }

    /// Returns the receiving participant's display name
    pub fn to_name(&self) -> &str {
        &self.to_name
    }

    /// Returns the transfer amount, rounded to cents
    pub fn amount(&self) -> Money {
        self.amount
    }
}

impl fmt::Display for SettlementInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} owes {} {}", self.from_name, self.to_name, self.amount)
    }
}

/// The ordered result of a settlement calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettlementPlan {
    currency: Currency,
    fair_share: Money,
    instructions: Vec<SettlementInstruction>,
}

impl SettlementPlan {
    /// Creates a plan from computed instructions
    pub fn new(currency: Currency, fair_share: Money, instructions: Vec<SettlementInstruction>) -> Self {
        Self {
            currency,
            fair_share,
            instructions,
        }
    }

    /// Creates the empty plan for an event with nothing to settle
    pub fn empty(currency: Currency) -> Self {
        Self {
            currency,
            fair_share: Money::zero(currency),
            instructions: Vec::new(),
        }
    }

    /// Returns the plan currency
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the fair share the plan was derived from
    ///
    /// Kept at full precision; round for display.
    pub fn fair_share(&self) -> Money {
        self.fair_share
    }

    /// Returns the instructions in display order
    pub fn instructions(&self) -> &[SettlementInstruction] {
        &self.instructions
    }

    /// Returns true if nothing needs to move
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Returns the number of instructions
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Returns the sum of all transfer amounts
    pub fn total_transferred(&self) -> Money {
        self.instructions
            .iter()
            .fold(Money::zero(self.currency), |acc, step| acc + step.amount)
    }
}
