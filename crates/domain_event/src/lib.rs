//! Shared-Expense Event Domain
//!
//! This crate implements the event aggregate for the expense-splitting
//! system: an event owns a participant roster and the expenses recorded
//! against it, and produces the balance sheet the settlement calculator
//! consumes.
//!
//! # Architecture
//!
//! The domain layer is infrastructure-agnostic, containing only business
//! logic:
//! - **Aggregate**: Event is the consistency boundary for roster and
//!   expense changes
//! - **Entities**: Participant, Expense
//! - **Read model**: totals per payer and the roster-ordered balance sheet
//!
//! # Example
//!
//! ```rust,ignore
//! use core_kernel::{Currency, Money};
//! use domain_event::{Event, EventOwner, Participant};
//! use domain_settlement::SettlementCalculator;
//! use rust_decimal_macros::dec;
//!
//! let mut event = Event::new("Ski trip", Currency::USD, EventOwner::User(user_id))?;
//! let ann = Participant::new("Ann", None)?;
//! let ann_id = ann.id();
//! event.add_participant(ann)?;
//! event.record_expense("Lift tickets", ann_id, Money::new(dec!(240.00), Currency::USD))?;
//!
//! let plan = SettlementCalculator::new().calculate(&event.balance_sheet()?)?;
//! ```

pub mod error;
pub mod event;
pub mod expense;
pub mod participant;

mod validation;

pub use error::{EventError, EventResult};
pub use event::{Event, EventOwner};
pub use expense::Expense;
pub use participant::Participant;
