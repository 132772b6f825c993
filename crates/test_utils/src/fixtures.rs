//! Canned Test Data
//!
//! Deterministic values the unit tests reach for when the exact amount,
//! id, or name is not the point of the test.

use core_kernel::{Currency, EventId, ExpenseId, Money, ParticipantId, SessionKey, UserId};
use rust_decimal_macros::dec;
use uuid::Uuid;

/// Money values that come up in most settlement tests
pub struct AmountFixtures;

impl AmountFixtures {
    /// A round 100.00 USD total
    pub fn hundred_usd() -> Money {
        Money::new(dec!(100.00), Currency::USD)
    }

    /// The classic three-way split share (100 / 3)
    pub fn usd_third() -> Money {
        AmountFixtures::hundred_usd().divide(dec!(3)).unwrap()
    }

    /// A typical single-expense amount
    pub fn usd_dinner() -> Money {
        Money::new(dec!(90.00), Currency::USD)
    }

    /// Zero USD
    pub fn zero_usd() -> Money {
        Money::zero(Currency::USD)
    }

    /// One cent, the settlement residue epsilon
    pub fn usd_cent() -> Money {
        Money::from_minor(1, Currency::USD)
    }

    /// A EUR amount for mixed-currency failure tests
    pub fn hundred_eur() -> Money {
        Money::new(dec!(100.00), Currency::EUR)
    }

    /// The largest storable expense amount
    pub fn usd_max_expense() -> Money {
        Money::new(dec!(99_999_999.99), Currency::USD)
    }
}

/// Deterministic identifiers, stable across test runs
pub struct KnownIds;

impl KnownIds {
    pub fn user() -> UserId {
        UserId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440001").unwrap())
    }

    pub fn event() -> EventId {
        EventId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440002").unwrap())
    }

    pub fn participant_a() -> ParticipantId {
        ParticipantId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440003").unwrap())
    }

    /// A second participant for pair scenarios
    pub fn participant_b() -> ParticipantId {
        ParticipantId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440004").unwrap())
    }

    pub fn expense() -> ExpenseId {
        ExpenseId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440005").unwrap())
    }

    /// An anonymous-owner session key
    pub fn session_key() -> SessionKey {
        SessionKey::new("8f14e45fceea167a5a36dedd4bea2543").unwrap()
    }
}

/// Display names used where the label itself is irrelevant
pub struct NameFixtures;

impl NameFixtures {
    pub fn event_name() -> &'static str {
        "test-event"
    }

    pub fn participant_name() -> &'static str {
        "test-participant"
    }

    pub fn expense_name() -> &'static str {
        "test-expense"
    }

    /// A second participant name for pair scenarios
    pub fn other_participant_name() -> &'static str {
        "other-participant"
    }
}
