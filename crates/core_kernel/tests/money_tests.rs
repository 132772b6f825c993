//! Money and Currency unit tests
//!
//! Exercises creation, arithmetic, banker's rounding, currency metadata,
//! display formatting, and serde round trips.

use core_kernel::{Money, Currency, MoneyError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

mod creation {
    use super::*;

    #[test]
    fn test_new_keeps_amount_and_currency() {
        let m = Money::new(dec!(48.75), Currency::USD);
        assert_eq!(m.amount(), dec!(48.75));
        assert_eq!(m.currency(), Currency::USD);
    }

    #[test]
    fn test_new_does_not_round() {
        let m = Money::new(dec!(7.123456789), Currency::USD);
        assert_eq!(m.amount(), dec!(7.123456789));
    }

    #[test]
    fn test_from_minor_converts_cents() {
        let m = Money::from_minor(4875, Currency::USD);
        assert_eq!(m.amount(), dec!(48.75));
    }

    #[test]
    fn test_from_minor_negative_cents() {
        let m = Money::from_minor(-3000, Currency::EUR);
        assert_eq!(m.amount(), dec!(-30.00));
    }

    #[test]
    fn test_zero_creates_zero_amount() {
        let m = Money::zero(Currency::EUR);
        assert!(m.is_zero());
        assert_eq!(m.currency(), Currency::EUR);
    }

    #[test]
    fn test_negative_amount_creation() {
        let m = Money::new(dec!(-62.10), Currency::USD);
        assert!(m.is_negative());
        assert_eq!(m.amount(), dec!(-62.10));
    }
}

mod predicates {
    use super::*;

    #[test]
    fn test_is_zero_true_for_zero_amount() {
        let m = Money::zero(Currency::USD);
        assert!(m.is_zero());
    }

    #[test]
    fn test_is_zero_false_for_one_cent() {
        let m = Money::new(dec!(0.01), Currency::USD);
        assert!(!m.is_zero());
    }

    #[test]
    fn test_is_positive_true_above_zero() {
        let m = Money::new(dec!(15.40), Currency::USD);
        assert!(m.is_positive());
    }

    #[test]
    fn test_is_positive_false_for_zero() {
        let m = Money::zero(Currency::USD);
        assert!(!m.is_positive());
    }

    #[test]
    fn test_is_positive_false_below_zero() {
        let m = Money::new(dec!(-9.95), Currency::USD);
        assert!(!m.is_positive());
    }

    #[test]
    fn test_is_negative_true_below_zero() {
        let m = Money::new(dec!(-9.95), Currency::USD);
        assert!(m.is_negative());
    }

    #[test]
    fn test_is_negative_false_for_zero() {
        let m = Money::zero(Currency::USD);
        assert!(!m.is_negative());
    }

    #[test]
    fn test_sub_cent_amount_is_not_cent_precise() {
        let m = Money::new(dec!(0.005), Currency::USD);
        assert!(!m.is_cent_precise());
    }
}

mod arithmetic {
    use super::*;

    #[test]
    fn test_checked_add_matching_currency() {
        let a = Money::new(dec!(36.40), Currency::USD);
        let b = Money::new(dec!(18.20), Currency::USD);
        let sum = a.checked_add(&b).unwrap();
        assert_eq!(sum.amount(), dec!(54.60));
    }

    #[test]
    fn test_checked_add_rejects_mixed_currencies() {
        let a = Money::new(dec!(12.00), Currency::USD);
        let b = Money::new(dec!(9.50), Currency::EUR);
        assert!(matches!(
            a.checked_add(&b),
            Err(MoneyError::CurrencyMismatch(_, _))
        ));
    }

    #[test]
    fn test_checked_sub_matching_currency() {
        let a = Money::new(dec!(80.25), Currency::USD);
        let b = Money::new(dec!(12.75), Currency::USD);
        let diff = a.checked_sub(&b).unwrap();
        assert_eq!(diff.amount(), dec!(67.50));
    }

    #[test]
    fn test_checked_sub_can_go_negative() {
        let a = Money::new(dec!(12.75), Currency::USD);
        let b = Money::new(dec!(80.25), Currency::USD);
        let diff = a.checked_sub(&b).unwrap();
        assert_eq!(diff.amount(), dec!(-67.50));
    }

    #[test]
    fn test_add_operator() {
        let a = Money::new(dec!(22.10), Currency::USD);
        let b = Money::new(dec!(5.15), Currency::USD);
        assert_eq!((a + b).amount(), dec!(27.25));
    }

    #[test]
    fn test_sub_operator() {
        let a = Money::new(dec!(60.00), Currency::USD);
        let b = Money::new(dec!(0.01), Currency::USD);
        assert_eq!((a - b).amount(), dec!(59.99));
    }

    #[test]
    #[should_panic(expected = "mixed currencies")]
    fn test_add_operator_panics_on_mismatch() {
        let a = Money::new(dec!(7.77), Currency::USD);
        let b = Money::new(dec!(7.77), Currency::PLN);
        let _ = a + b;
    }

    #[test]
    fn test_negation() {
        let m = Money::new(dec!(41.30), Currency::USD);
        assert_eq!((-m).amount(), dec!(-41.30));
    }

    #[test]
    fn test_negation_of_negative() {
        let m = Money::new(dec!(-0.05), Currency::USD);
        assert_eq!((-m).amount(), dec!(0.05));
    }

    #[test]
    fn test_multiply_by_scalar() {
        let m = Money::new(dec!(24.00), Currency::USD);
        assert_eq!(m.multiply(dec!(1.5)).amount(), dec!(36.00));
    }

    #[test]
    fn test_multiply_operator() {
        let m = Money::new(dec!(19.25), Currency::USD);
        assert_eq!((m * dec!(2)).amount(), dec!(38.50));
    }

    #[test]
    fn test_divide_by_scalar() {
        let m = Money::new(dec!(87.00), Currency::USD);
        assert_eq!(m.divide(dec!(4)).unwrap().amount(), dec!(21.75));
    }

    #[test]
    fn test_divide_by_zero_error() {
        let m = Money::new(dec!(55.00), Currency::USD);
        assert!(matches!(m.divide(dec!(0)), Err(MoneyError::DivisionByZero)));
    }

    #[test]
    fn test_divide_three_ways_keeps_repeating_digits() {
        let even = Money::new(dec!(90.00), Currency::USD)
            .divide(dec!(3))
            .unwrap();
        assert_eq!(even.amount(), dec!(30.00));

        let uneven = Money::new(dec!(100.00), Currency::USD)
            .divide(dec!(3))
            .unwrap();
        assert!(uneven.amount() * dec!(3) > dec!(99.99));
        assert!(uneven.amount() * dec!(3) <= dec!(100.00));
    }

    #[test]
    fn test_divide_operator() {
        let m = Money::new(dec!(62.50), Currency::USD);
        assert_eq!((m / dec!(5)).amount(), dec!(12.50));
    }
}

mod abs_and_rounding {
    use super::*;

    #[test]
    fn test_abs_of_positive() {
        let m = Money::new(dec!(73.20), Currency::USD);
        assert_eq!(m.abs().amount(), dec!(73.20));
    }

    #[test]
    fn test_abs_of_negative() {
        let m = Money::new(dec!(-73.20), Currency::USD);
        assert_eq!(m.abs().amount(), dec!(73.20));
    }

    #[test]
    fn test_abs_of_zero() {
        let m = Money::zero(Currency::USD);
        assert_eq!(m.abs().amount(), dec!(0));
    }

    #[test]
    fn test_round_to_cents_trims_long_fractions() {
        let m = Money::new(dec!(33.333333333), Currency::USD);
        assert_eq!(m.round_to_cents().amount(), dec!(33.33));
    }

    #[test]
    fn test_round_to_cents_midpoint_even_stays() {
        // Banker's rounding: 57.665 -> 57.66 (6 is even)
        let m = Money::new(dec!(57.665), Currency::USD);
        assert_eq!(m.round_to_cents().amount(), dec!(57.66));
    }

    #[test]
    fn test_round_to_cents_midpoint_odd_rounds_up() {
        // Banker's rounding: 57.675 -> 57.68 (8 is even)
        let m = Money::new(dec!(57.675), Currency::USD);
        assert_eq!(m.round_to_cents().amount(), dec!(57.68));
    }

    #[test]
    fn test_round_to_cents_half_cent_boundary() {
        let m = Money::new(dec!(0.005), Currency::USD);
        assert_eq!(m.round_to_cents().amount(), dec!(0.00));
    }

    #[test]
    fn test_round_to_cents_negative_midpoint() {
        let m = Money::new(dec!(-0.125), Currency::USD);
        assert_eq!(m.round_to_cents().amount(), dec!(-0.12));
    }
}

mod currency {
    use super::*;

    #[test]
    fn test_all_currencies_carry_code_name_symbol() {
        for currency in Currency::all() {
            assert_eq!(currency.code().len(), 3);
            assert!(!currency.name().is_empty());
            assert!(!currency.symbol().is_empty());
        }
    }

    #[test]
    fn test_currency_codes_are_unique() {
        let mut codes: Vec<&str> = Currency::all().iter().map(|c| c.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), Currency::all().len());
    }

    #[test]
    fn test_currency_names_are_unique() {
        let mut names: Vec<&str> = Currency::all().iter().map(|c| c.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), Currency::all().len());
    }

    #[test]
    fn test_registry_order_follows_names() {
        let names: Vec<&str> = Currency::all().iter().map(|c| c.name()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_from_code_lookup() {
        assert_eq!(Currency::from_code("USD"), Some(Currency::USD));
        assert_eq!(Currency::from_code("eur"), Some(Currency::EUR));
        assert_eq!(Currency::from_code(""), None);
        assert_eq!(Currency::from_code("US"), None);
    }

    #[test]
    fn test_currency_display() {
        assert_eq!(format!("{}", Currency::USD), "$ - USD");
        assert_eq!(format!("{}", Currency::PLN), "zł - PLN");
    }
}

mod display {
    use super::*;

    #[test]
    fn test_money_display_symbol_and_amount() {
        let m = Money::new(dec!(803.17), Currency::USD);
        let rendered = format!("{}", m);
        assert!(rendered.contains('$'));
        assert!(rendered.contains("803.17"));
    }

    #[test]
    fn test_money_display_uses_two_places() {
        let m = Money::new(dec!(33.333333), Currency::EUR);
        assert_eq!(format!("{}", m), "€ 33.33");
    }
}

mod serialization {
    use super::*;

    #[test]
    fn test_money_json_roundtrip() {
        let m = Money::new(dec!(6.25), Currency::USD);
        let json = serde_json::to_string(&m).unwrap();
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, back);
    }

    #[test]
    fn test_currency_serializes_as_code() {
        let json = serde_json::to_string(&Currency::USD).unwrap();
        assert_eq!(json, "\"USD\"");
        let back: Currency = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Currency::USD);
    }
}

mod equality {
    use super::*;

    #[test]
    fn test_same_amount_same_currency_equal() {
        let a = Money::new(dec!(33.33), Currency::USD);
        let b = Money::new(dec!(33.33), Currency::USD);
        assert_eq!(a, b);
    }

    #[test]
    fn test_equality_ignores_scale() {
        let a = Money::new(dec!(5), Currency::USD);
        let b = Money::new(dec!(5.00), Currency::USD);
        assert_eq!(a, b);
    }

    #[test]
    fn test_one_cent_apart_not_equal() {
        let a = Money::new(dec!(33.33), Currency::USD);
        let b = Money::new(dec!(33.34), Currency::USD);
        assert_ne!(a, b);
    }

    #[test]
    fn test_same_amount_different_currency_not_equal() {
        let a = Money::new(dec!(14.00), Currency::USD);
        let b = Money::new(dec!(14.00), Currency::EUR);
        assert_ne!(a, b);
    }

    #[test]
    fn test_money_is_hashable() {
        use std::collections::HashSet;

        let a = Money::new(dec!(9.99), Currency::USD);
        let b = Money::new(dec!(9.99), Currency::USD);

        let mut seen = HashSet::new();
        seen.insert(a);
        assert!(seen.contains(&b));
    }
}

mod precision {
    use super::*;

    #[test]
    fn test_unrounded_share_sums_back_to_total() {
        // 100 split three ways keeps enough precision that re-multiplying
        // loses less than a cent.
        let total = Money::new(dec!(100.00), Currency::USD);
        let share = total.divide(Decimal::from(3u64)).unwrap();
        let reassembled = share.amount() * Decimal::from(3u64);
        assert!((total.amount() - reassembled).abs() < dec!(0.01));
    }

    #[test]
    fn test_cent_precise_accepts_whole_numbers() {
        assert!(Money::new(dec!(45), Currency::USD).is_cent_precise());
        assert!(Money::new(dec!(45.1), Currency::USD).is_cent_precise());
        assert!(Money::new(dec!(45.12), Currency::USD).is_cent_precise());
        assert!(!Money::new(dec!(45.123), Currency::USD).is_cent_precise());
    }
}
