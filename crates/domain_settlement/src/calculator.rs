//! Debt settlement calculation
//!
//! Matches debtors against creditors until every net balance is cleared.
//! The calculator is stateless and pure: identical sheets always produce
//! identical plans, and concurrent calls on independent sheets need no
//! coordination.
//!
//! # Matching policy
//!
//! Both sides are ordered smallest open amount first (creditors ascending by
//! surplus, debtors by deficit magnitude). The ordering is part of the
//! output contract, not an optimization: it decides which pairs meet first
//! and therefore the exact instruction sequence. The sort is stable, so
//! participants with equal balances keep their roster order.
//!
//! # Rounding
//!
//! Emitted amounts are rounded to cents with banker's rounding; the running
//! remainders are decremented with the unrounded amount so error never
//! compounds across a chain of transfers. Any remainder below one cent
//! counts as settled.

use std::collections::VecDeque;

use core_kernel::{Money, ParticipantId};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::balance::{BalanceSheet, NetPosition};
use crate::error::{SettlementError, SettlementResult};
use crate::plan::{SettlementInstruction, SettlementPlan};

/// One side's remaining obligation while matching runs
///
/// Each queue entry owns its running remainder; the queues never alias the
/// sheet or each other.
#[derive(Debug, Clone)]
struct OpenBalance {
    participant_id: ParticipantId,
    name: String,
    remaining: Decimal,
}

impl OpenBalance {
    fn from_position(position: &NetPosition) -> Self {
        Self {
            participant_id: position.participant_id(),
            name: position.name().to_string(),
            remaining: position.open_amount(),
        }
    }
}

/// Computes settlement plans from balance sheets
///
/// # Examples
///
/// ```rust,ignore
/// use domain_settlement::SettlementCalculator;
///
/// let plan = SettlementCalculator::new().calculate(&sheet)?;
/// assert!(plan.len() < sheet.participant_count());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SettlementCalculator;

impl SettlementCalculator {
    /// Remainders below this are treated as settled
    ///
    /// Sub-cent residue can reach the queues when upstream totals do not sum
    /// exactly; dropping it here prevents endless matching and zero-amount
    /// instructions.
    pub const SETTLED_EPSILON: Decimal = dec!(0.01);

    /// Creates a calculator
    pub fn new() -> Self {
        Self
    }

    /// Produces the ordered settlement plan for a balance sheet
    ///
    /// # Errors
    ///
    /// Returns [`SettlementError::NoParticipants`] when expenses were
    /// recorded but the roster is empty; the fair share is undefined in that
    /// state and dividing would hide a broken upstream contract.
    pub fn calculate(&self, sheet: &BalanceSheet) -> SettlementResult<SettlementPlan> {
        let currency = sheet.currency();

        // No expenses at all: nothing to split, and the fair-share division
        // must not run.
        if sheet.expense_count() == 0 || sheet.total_expenses().is_zero() {
            return Ok(SettlementPlan::empty(currency));
        }

        let Some(fair_share) = sheet.fair_share() else {
            return Err(SettlementError::NoParticipants {
                total: sheet.total_expenses(),
            });
        };

        let mut creditors: Vec<OpenBalance> = Vec::new();
        let mut debtors: Vec<OpenBalance> = Vec::new();
        for position in sheet.net_positions() {
            if position.is_creditor() {
                creditors.push(OpenBalance::from_position(&position));
            } else if position.is_debtor() {
                debtors.push(OpenBalance::from_position(&position));
            }
            // settled participants receive no instructions
        }

        // Stable sorts: equal balances keep roster order.
        creditors.sort_by(|a, b| a.remaining.cmp(&b.remaining));
        debtors.sort_by(|a, b| a.remaining.cmp(&b.remaining));

        tracing::debug!(
            participants = sheet.participant_count(),
            creditors = creditors.len(),
            debtors = debtors.len(),
            fair_share = %fair_share,
            "partitioned net balances"
        );

        let mut creditors: VecDeque<OpenBalance> = creditors.into();
        let mut debtors: VecDeque<OpenBalance> = debtors.into();
        let mut instructions = Vec::new();

        loop {
            let Some(debtor) = debtors.front_mut() else {
                break;
            };
            let Some(creditor) = creditors.front_mut() else {
                break;
            };

            let amount = debtor.remaining.min(creditor.remaining);
            let emitted = Money::new(amount, currency).round_to_cents();
            if !emitted.is_zero() {
                instructions.push(SettlementInstruction::new(
                    debtor.participant_id,
                    debtor.name.clone(),
                    creditor.participant_id,
                    creditor.name.clone(),
                    emitted,
                ));
            }

            // Unrounded decrements; only the emitted value was rounded.
            debtor.remaining -= amount;
            creditor.remaining -= amount;

            let debtor_settled = debtor.remaining < Self::SETTLED_EPSILON;
            let creditor_settled = creditor.remaining < Self::SETTLED_EPSILON;
            if debtor_settled {
                debtors.pop_front();
            }
            if creditor_settled {
                creditors.pop_front();
            }
        }

        for leftover in debtors.iter().chain(creditors.iter()) {
            if leftover.remaining >= Self::SETTLED_EPSILON {
                tracing::warn!(
                    participant = %leftover.participant_id,
                    remaining = %leftover.remaining,
                    "open balance left after settlement; upstream totals are inconsistent"
                );
            }
        }

        Ok(SettlementPlan::new(currency, fair_share, instructions))
    }
}
