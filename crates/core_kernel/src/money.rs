//! Currency-aware monetary values on exact decimal arithmetic
//!
//! Amounts are stored as [`Decimal`] so that sums and splits never pick up
//! binary floating-point noise. Every supported currency settles at cent
//! precision (2 decimal places);
//! intermediate values such as an even split of a total may carry more
//! fractional digits and are only rounded when explicitly asked for.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub, Mul, Div, Neg};
use thiserror::Error;

/// Supported currencies with their ISO 4217 codes, display names, and symbols
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    USD,
    EUR,
    GBP,
    CHF,
    PLN,
    CZK,
    SEK,
    NOK,
    DKK,
    CAD,
}

impl Currency {
    /// All supported currencies, ordered by display name
    pub fn all() -> &'static [Currency] {
        &[
            Currency::GBP,
            Currency::CAD,
            Currency::CZK,
            Currency::DKK,
            Currency::EUR,
            Currency::NOK,
            Currency::PLN,
            Currency::SEK,
            Currency::CHF,
            Currency::USD,
        ]
    }

    /// ISO 4217 alphabetic code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::CHF => "CHF",
            Currency::PLN => "PLN",
            Currency::CZK => "CZK",
            Currency::SEK => "SEK",
            Currency::NOK => "NOK",
            Currency::DKK => "DKK",
            Currency::CAD => "CAD",
        }
    }

    /// Human-readable currency name
    pub fn name(&self) -> &'static str {
        match self {
            Currency::USD => "US Dollar",
            Currency::EUR => "Euro",
            Currency::GBP => "British Pound",
            Currency::CHF => "Swiss Franc",
            Currency::PLN => "Polish Zloty",
            Currency::CZK => "Czech Koruna",
            Currency::SEK => "Swedish Krona",
            Currency::NOK => "Norwegian Krone",
            Currency::DKK => "Danish Krone",
            Currency::CAD => "Canadian Dollar",
        }
    }

    /// Symbol used when formatting amounts, e.g. `$` or `zł`
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "€",
            Currency::GBP => "£",
            Currency::CHF => "CHF",
            Currency::PLN => "zł",
            Currency::CZK => "Kč",
            Currency::SEK => "kr",
            Currency::NOK => "kr",
            Currency::DKK => "kr.",
            Currency::CAD => "C$",
        }
    }

    /// Looks up a currency by its ISO 4217 code (case-insensitive)
    pub fn from_code(code: &str) -> Option<Currency> {
        Currency::all()
            .iter()
            .copied()
            .find(|c| c.code().eq_ignore_ascii_case(code))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.symbol(), self.code())
    }
}

/// Failure modes of money arithmetic
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Mixed currencies: {0} and {1} cannot be combined")]
    CurrencyMismatch(String, String),

    #[error("Division by zero")]
    DivisionByZero,
}

/// An exact decimal amount tagged with its currency
///
/// The constructor does not round: derived quantities (an even share of a
/// total, a running remainder) keep their full precision until the caller
/// decides to emit a cent-rounded figure via [`Money::round_to_cents`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Number of fractional digits carried by settled amounts
    pub const CENT_SCALE: u32 = 2;

    /// Creates a new Money value, preserving the full precision of `amount`
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Creates Money from an integer amount of cents
    pub fn from_minor(minor_units: i64, currency: Currency) -> Self {
        Self::new(Decimal::new(minor_units, Self::CENT_SCALE), currency)
    }

    /// The zero value for `currency`
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: dec!(0),
            currency,
        }
    }

    /// The underlying decimal amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// The currency this amount is denominated in
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// True when the amount is exactly zero
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// True for amounts strictly greater than zero
    pub fn is_positive(&self) -> bool {
        self.amount.is_sign_positive() && !self.amount.is_zero()
    }

    /// True for amounts strictly less than zero
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Absolute value, keeping the currency
    pub fn abs(&self) -> Self {
        Self {
            amount: self.amount.abs(),
            currency: self.currency,
        }
    }

    /// Rounds to cent precision using banker's rounding (round half to even)
    ///
    /// This is the rounding policy for every emitted amount in the system;
    /// a midpoint like 0.005 rounds down to 0.00 because 0 is even.
    pub fn round_to_cents(&self) -> Self {
        Self {
            amount: self.amount.round_dp_with_strategy(
                Self::CENT_SCALE,
                rust_decimal::RoundingStrategy::MidpointNearestEven,
            ),
            currency: self.currency,
        }
    }

    /// Returns true if the amount carries at most cent precision
    ///
    /// Trailing zeros do not count: `10.500` is cent-precise, `10.505` is not.
    pub fn is_cent_precise(&self) -> bool {
        self.amount.normalize().scale() <= Self::CENT_SCALE
    }

    /// Adds `other`, failing when the currencies differ
    pub fn checked_add(&self, other: &Money) -> Result<Money, MoneyError> {
        if self.currency != other.currency {
            return Err(MoneyError::CurrencyMismatch(
                self.currency.code().to_string(),
                other.currency.code().to_string(),
            ));
        }
        Ok(Self::new(self.amount + other.amount, self.currency))
    }

    /// Subtracts `other`, failing when the currencies differ
    pub fn checked_sub(&self, other: &Money) -> Result<Money, MoneyError> {
        if self.currency != other.currency {
            return Err(MoneyError::CurrencyMismatch(
                self.currency.code().to_string(),
                other.currency.code().to_string(),
            ));
        }
        Ok(Self::new(self.amount - other.amount, self.currency))
    }

    /// Multiplies by a scalar
    pub fn multiply(&self, factor: Decimal) -> Self {
        Self::new(self.amount * factor, self.currency)
    }

    /// Divides by a scalar, keeping the quotient's full precision
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::DivisionByZero`] when `divisor` is zero.
    pub fn divide(&self, divisor: Decimal) -> Result<Self, MoneyError> {
        if divisor.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        Ok(Self::new(self.amount / divisor, self.currency))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:.dp$}",
            self.currency.symbol(),
            self.amount,
            dp = Self::CENT_SCALE as usize
        )
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.checked_add(&other)
            .expect("Money::add over mixed currencies")
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.checked_sub(&other)
            .expect("Money::sub over mixed currencies")
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.amount, self.currency)
    }
}

impl Mul<Decimal> for Money {
    type Output = Self;

    fn mul(self, factor: Decimal) -> Self {
        self.multiply(factor)
    }
}

impl Div<Decimal> for Money {
    type Output = Self;

    fn div(self, divisor: Decimal) -> Self {
        self.divide(divisor).expect("Money::div by zero")
    }
}
