//! Proptest Strategies
//!
//! Random domain values for property tests. Every strategy keeps its
//! invariants: generated money is cent-precise, generated sheets total
//! their own rows.

use core_kernel::{Currency, EventId, ExpenseId, Money, ParticipantId, UserId};
use domain_settlement::{BalanceSheet, ParticipantBalance};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Any supported currency
pub fn currency_strategy() -> impl Strategy<Value = Currency> {
    prop_oneof![
        Just(Currency::USD),
        Just(Currency::EUR),
        Just(Currency::GBP),
        Just(Currency::CHF),
        Just(Currency::PLN),
        Just(Currency::CZK),
        Just(Currency::SEK),
        Just(Currency::NOK),
        Just(Currency::DKK),
        Just(Currency::CAD),
    ]
}

/// Strictly positive amounts in cents, capped at 100k units
pub fn positive_cents_strategy() -> impl Strategy<Value = i64> {
    1i64..10_000_000i64
}

/// Amounts in cents, zero included
pub fn cents_strategy() -> impl Strategy<Value = i64> {
    0i64..10_000_000i64
}

/// Positive money in any supported currency
pub fn positive_money_strategy() -> impl Strategy<Value = Money> {
    (positive_cents_strategy(), currency_strategy())
        .prop_map(|(cents, currency)| Money::from_minor(cents, currency))
}

/// Non-negative money in any supported currency
pub fn money_strategy() -> impl Strategy<Value = Money> {
    (cents_strategy(), currency_strategy())
        .prop_map(|(cents, currency)| Money::from_minor(cents, currency))
}

/// Positive USD money, for tests pinned to one currency
pub fn usd_money_strategy() -> impl Strategy<Value = Money> {
    positive_cents_strategy().prop_map(|cents| Money::from_minor(cents, Currency::USD))
}

pub fn user_id_strategy() -> impl Strategy<Value = UserId> {
    any::<[u8; 16]>().prop_map(|bytes| {
        UserId::from_uuid(uuid::Uuid::from_bytes(bytes))
    })
}

pub fn event_id_strategy() -> impl Strategy<Value = EventId> {
    any::<[u8; 16]>().prop_map(|bytes| {
        EventId::from_uuid(uuid::Uuid::from_bytes(bytes))
    })
}

pub fn participant_id_strategy() -> impl Strategy<Value = ParticipantId> {
    any::<[u8; 16]>().prop_map(|bytes| {
        ParticipantId::from_uuid(uuid::Uuid::from_bytes(bytes))
    })
}

pub fn expense_id_strategy() -> impl Strategy<Value = ExpenseId> {
    any::<[u8; 16]>().prop_map(|bytes| {
        ExpenseId::from_uuid(uuid::Uuid::from_bytes(bytes))
    })
}

/// Capitalized participant display names
pub fn display_name_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Z][a-z]{2,10}")
        .expect("display name regex is valid")
}

/// A handful of plausible expense labels
pub fn expense_name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Dinner".to_string()),
        Just("Groceries".to_string()),
        Just("Taxi".to_string()),
        Just("Hotel".to_string()),
        Just("Tickets".to_string()),
        Just("Fuel".to_string()),
        Just("Drinks".to_string()),
    ]
}

/// Strategy for generating per-participant paid amounts in cents
pub fn paid_cents_strategy(participants: usize) -> impl Strategy<Value = Vec<i64>> {
    proptest::collection::vec(cents_strategy(), participants..=participants)
}

/// Strategy for generating whole balance sheets
///
/// Rosters range from one participant up to `max_participants`. Every sheet
/// is internally consistent: single currency, total equal to the sum of the
/// rows, expense count equal to the number of rows that paid anything.
pub fn balance_sheet_strategy(max_participants: usize) -> impl Strategy<Value = BalanceSheet> {
    (1..=max_participants)
        .prop_flat_map(|count| {
            (
                paid_cents_strategy(count),
                proptest::collection::vec(display_name_strategy(), count..=count),
                proptest::collection::vec(any::<[u8; 16]>(), count..=count),
                currency_strategy(),
            )
        })
        .prop_map(|(cents, names, id_bytes, currency)| {
            let entries: Vec<ParticipantBalance> = cents
                .iter()
                .zip(names)
                .zip(id_bytes)
                .map(|((&paid, name), bytes)| {
                    ParticipantBalance::new(
                        ParticipantId::from_uuid(uuid::Uuid::from_bytes(bytes)),
                        name,
                        Money::from_minor(paid, currency),
                    )
                })
                .collect();
            let total: i64 = cents.iter().sum();
            let expense_count = cents.iter().filter(|&&c| c > 0).count();
            BalanceSheet::new(
                currency,
                entries,
                Money::from_minor(total, currency),
                expense_count,
            )
            .expect("Generated sheet mixes currencies")
        })
}
