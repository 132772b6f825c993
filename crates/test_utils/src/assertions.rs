//! Domain Assertions
//!
//! Assertion helpers that panic with the offending values spelled out,
//! which beats a bare `assert!` once a proptest failure has shrunk down
//! to one odd balance sheet.

use core_kernel::Money;
use domain_settlement::{BalanceSheet, SettlementPlan};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Asserts that two amounts agree to within `tolerance`
///
/// # Panics
///
/// Panics when the currencies differ or the gap exceeds `tolerance`.
pub fn assert_money_approx_eq(actual: &Money, expected: &Money, tolerance: Decimal) {
    assert_eq!(
        actual.currency(),
        expected.currency(),
        "currencies differ: {} vs {}",
        actual.currency(),
        expected.currency()
    );

    let diff = (actual.amount() - expected.amount()).abs();
    assert!(
        diff <= tolerance,
        "{} and {} are {} apart, beyond the allowed {}",
        actual.amount(),
        expected.amount(),
        diff,
        tolerance
    );
}

/// Asserts the amount is strictly positive
pub fn assert_money_positive(money: &Money) {
    assert!(
        money.is_positive(),
        "amount should be positive, found {} {}",
        money.currency().symbol(),
        money.amount()
    );
}

/// Asserts the amount is exactly zero
pub fn assert_money_zero(money: &Money) {
    assert!(
        money.is_zero(),
        "amount should be zero, found {} {}",
        money.currency().symbol(),
        money.amount()
    );
}

/// Asserts the amount is strictly negative
pub fn assert_money_negative(money: &Money) {
    assert!(
        money.is_negative(),
        "amount should be negative, found {} {}",
        money.currency().symbol(),
        money.amount()
    );
}

/// Asserts that a settlement plan actually settles its balance sheet
///
/// Checks the three properties every plan must hold:
///
/// 1. at most `participants - 1` instructions
/// 2. every instruction amount is positive, cent-precise, and in the sheet
///    currency
/// 3. executing the plan clears each participant's net balance to within
///    rounding tolerance (half a cent per instruction plus the one-cent
///    residue forgiveness, scaled by roster size)
///
/// # Panics
///
/// Panics with a description of the first violated property.
pub fn assert_plan_settles(sheet: &BalanceSheet, plan: &SettlementPlan) {
    let participant_count = sheet.participant_count();
    assert!(
        plan.len() <= participant_count.saturating_sub(1),
        "Plan has {} instructions for {} participants; at most {} are needed",
        plan.len(),
        participant_count,
        participant_count.saturating_sub(1)
    );

    for step in plan.instructions() {
        assert!(
            step.amount().is_positive(),
            "Instruction {} carries a non-positive amount",
            step
        );
        assert!(
            step.amount().is_cent_precise(),
            "Instruction {} carries a sub-cent amount",
            step
        );
        assert_eq!(
            step.amount().currency(),
            sheet.currency(),
            "Instruction {} is not in the sheet currency {}",
            step,
            sheet.currency()
        );
    }

    let tolerance = dec!(0.02) * Decimal::from(participant_count as u64);
    for position in sheet.net_positions() {
        let mut moved = Decimal::ZERO;
        for step in plan.instructions() {
            if step.from() == position.participant_id() {
                moved += step.amount().amount();
            }
            if step.to() == position.participant_id() {
                moved -= step.amount().amount();
            }
        }
        let residue = (position.net().amount() + moved).abs();
        assert!(
            residue <= tolerance,
            "Participant {} is left with residue {} after the plan (tolerance {})",
            position.name(),
            residue,
            tolerance
        );
    }
}

/// Unwraps an Ok result, panicking with the error otherwise
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("expected Ok, was Err: {:?}", e),
        }
    };
    ($result:expr, $msg:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}

/// Unwraps an Err result, panicking with the value otherwise
#[macro_export]
macro_rules! assert_err {
    ($result:expr) => {
        match $result {
            Ok(value) => panic!("expected Err, was Ok: {:?}", value),
            Err(e) => e,
        }
    };
    ($result:expr, $msg:expr) => {
        match $result {
            Ok(value) => panic!("{}: was Ok({:?})", $msg, value),
            Err(e) => e,
        }
    };
}

/// Asserts an Err whose error matches the given pattern
#[macro_export]
macro_rules! assert_err_variant {
    ($result:expr, $pattern:pat) => {
        match $result {
            Ok(value) => panic!(
                "expected Err matching {}, was Ok({:?})",
                stringify!($pattern),
                value
            ),
            Err(ref e) => {
                assert!(
                    matches!(e, $pattern),
                    "{:?} does not fit pattern {}",
                    e,
                    stringify!($pattern)
                );
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::BalanceSheetBuilder;
    use core_kernel::Currency;
    use domain_settlement::SettlementCalculator;

    #[test]
    fn test_approx_eq_within_tolerance() {
        let m1 = Money::new(dec!(49.999), Currency::USD);
        let m2 = Money::new(dec!(50.001), Currency::USD);
        assert_money_approx_eq(&m1, &m2, dec!(0.01));
    }

    #[test]
    #[should_panic(expected = "currencies differ")]
    fn test_approx_eq_rejects_mixed_currencies() {
        let m1 = Money::new(dec!(25.00), Currency::USD);
        let m2 = Money::new(dec!(25.00), Currency::EUR);
        assert_money_approx_eq(&m1, &m2, dec!(0.01));
    }

    #[test]
    fn test_money_positive_accepts_one_cent() {
        let m = Money::new(dec!(0.01), Currency::USD);
        assert_money_positive(&m);
    }

    #[test]
    #[should_panic(expected = "should be positive")]
    fn test_money_positive_rejects_zero() {
        let m = Money::zero(Currency::USD);
        assert_money_positive(&m);
    }

    #[test]
    fn test_assert_plan_settles_accepts_valid_plan() {
        let sheet = BalanceSheetBuilder::new()
            .with_paid("Ann", dec!(90.00))
            .with_paid("Bea", dec!(0))
            .with_paid("Cat", dec!(0))
            .build();
        let plan = SettlementCalculator::new().calculate(&sheet).unwrap();

        assert_plan_settles(&sheet, &plan);
    }

    #[test]
    #[should_panic(expected = "instructions for")]
    fn test_assert_plan_settles_rejects_foreign_plan() {
        let sheet = BalanceSheetBuilder::new()
            .with_paid("Ann", dec!(90.00))
            .with_paid("Bea", dec!(0))
            .build();
        let plan = SettlementCalculator::new().calculate(&sheet).unwrap();

        // A sheet with a single participant cannot need any instructions.
        let lone = BalanceSheetBuilder::new().with_paid("Zoe", dec!(10.00)).build();
        assert_plan_settles(&lone, &plan);
    }

    #[test]
    fn test_assert_err_variant_matches() {
        let result: Result<(), core_kernel::MoneyError> =
            Err(core_kernel::MoneyError::DivisionByZero);
        assert_err_variant!(result, core_kernel::MoneyError::DivisionByZero);
    }
}
