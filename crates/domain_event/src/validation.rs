//! Shared field validation for the event domain

use core_kernel::Money;
use rust_decimal::Decimal;

use crate::error::{EventError, EventResult};

/// Rejects empty or over-long display names
///
/// Length is counted in characters, not bytes, so multi-byte names get the
/// full advertised length.
pub(crate) fn validate_name(entity: &'static str, name: &str, max: usize) -> EventResult<()> {
    if name.trim().is_empty() {
        return Err(EventError::EmptyName { entity });
    }
    if name.chars().count() > max {
        return Err(EventError::NameTooLong { entity, max });
    }
    Ok(())
}

/// Rejects amounts an expense record cannot hold
pub(crate) fn validate_amount(amount: &Money, max: Decimal) -> EventResult<()> {
    if amount.is_negative() {
        return Err(EventError::NegativeAmount {
            amount: amount.amount(),
        });
    }
    if !amount.is_cent_precise() {
        return Err(EventError::AmountPrecision {
            amount: amount.amount(),
        });
    }
    if amount.amount() > max {
        return Err(EventError::AmountTooLarge {
            amount: amount.amount(),
            max,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::Currency;
    use rust_decimal_macros::dec;

    #[test]
    fn test_validate_name_rejects_whitespace_only() {
        let result = validate_name("event", "   ", 100);
        assert!(matches!(result, Err(EventError::EmptyName { entity: "event" })));
    }

    #[test]
    fn test_validate_name_counts_characters_not_bytes() {
        // Four characters, eight bytes.
        assert!(validate_name("participant", "żółć", 4).is_ok());
        assert!(validate_name("participant", "żółć", 3).is_err());
    }

    #[test]
    fn test_validate_amount_rejects_negative() {
        let amount = Money::new(dec!(-0.01), Currency::USD);
        let result = validate_amount(&amount, dec!(99_999_999.99));
        assert!(matches!(result, Err(EventError::NegativeAmount { .. })));
    }

    #[test]
    fn test_validate_amount_rejects_sub_cent_precision() {
        let amount = Money::new(dec!(10.001), Currency::USD);
        let result = validate_amount(&amount, dec!(99_999_999.99));
        assert!(matches!(result, Err(EventError::AmountPrecision { .. })));
    }

    #[test]
    fn test_validate_amount_accepts_boundary() {
        let amount = Money::new(dec!(99_999_999.99), Currency::USD);
        assert!(validate_amount(&amount, dec!(99_999_999.99)).is_ok());

        let amount = Money::new(dec!(100_000_000.00), Currency::USD);
        assert!(matches!(
            validate_amount(&amount, dec!(99_999_999.99)),
            Err(EventError::AmountTooLarge { .. })
        ));
    }

    #[test]
    fn test_validate_amount_accepts_zero() {
        let amount = Money::zero(Currency::USD);
        assert!(validate_amount(&amount, dec!(99_999_999.99)).is_ok());
    }
}
