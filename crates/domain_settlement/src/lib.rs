//! Settlement Domain - Debt Settlement Planning
//!
//! This crate turns a snapshot of who paid what for a shared event into an
//! ordered list of transfers that squares everyone up.
//!
//! # Settlement model
//!
//! - The snapshot is a [`BalanceSheet`]: one row per participant with the
//!   total they paid, plus the event's total expenses and expense count.
//! - Every participant owes the same **fair share**
//!   (`total_expenses / participant_count`, computed with full decimal
//!   precision).
//! - `paid - fair_share` is a participant's **net balance**: positive means
//!   the group owes them (creditor), negative means they owe the group
//!   (debtor).
//! - The [`SettlementCalculator`] matches debtors against creditors,
//!   smallest open amount first on both sides, and emits one instruction per
//!   match with the amount rounded to cents (banker's rounding). Internal
//!   remainders stay unrounded so rounding error never compounds.
//!
//! # Invariants
//!
//! - Net balances sum to zero for any sheet whose total equals the sum of
//!   paid amounts; after applying a plan every balance is within one cent of
//!   zero.
//! - A plan never contains more than `participants - 1` instructions.
//! - The instruction order is deterministic: equal balances keep their
//!   roster order.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_settlement::{BalanceSheet, SettlementCalculator};
//!
//! let sheet = BalanceSheet::new(currency, entries, total, expense_count)?;
//! let plan = SettlementCalculator::new().calculate(&sheet)?;
//!
//! for step in plan.instructions() {
//!     println!("{step}"); // "Ann owes Bea $ 30.00"
//! }
//! ```

pub mod balance;
pub mod calculator;
pub mod plan;
pub mod error;

pub use balance::{BalanceSheet, ParticipantBalance, NetPosition};
pub use calculator::SettlementCalculator;
pub use plan::{SettlementPlan, SettlementInstruction};
pub use error::{SettlementError, SettlementResult};
