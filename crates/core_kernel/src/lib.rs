//! Core Kernel - Foundational types and utilities for the expense-splitting system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money types with precise decimal arithmetic and cent-rounding policy
//! - Strongly-typed identifiers for events, participants, expenses, and owners
//! - Common error types

pub mod money;
pub mod identifiers;
pub mod error;

pub use money::{Money, Currency, MoneyError};
pub use identifiers::{UserId, EventId, ParticipantId, ExpenseId, SessionKey};
pub use error::{CoreError, CoreResult};
