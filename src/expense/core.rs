//! Defines the core data models for expenses.

use std::{fmt, str::FromStr};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::Error;

// ============================================================================
// MODELS
// ============================================================================

/// The integer type used for expense IDs.
///
/// IDs are assigned sequentially by the [ExpenseStore](super::ExpenseStore),
/// starting at 1.
pub type ExpenseId = i64;

/// An event where money was spent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// The ID of the expense.
    pub id: ExpenseId,
    /// How much money was spent.
    pub amount: Amount,
    /// A text description of what the money was spent on.
    pub description: Description,
    /// When the expense was recorded.
    ///
    /// Set to the current time when the expense is created and only changed
    /// by an explicit date update.
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

/// The largest amount that can be stored, exclusive.
///
/// Amounts have at most eight integer digits and two decimal places.
const AMOUNT_LIMIT: Decimal = Decimal::from_parts(100_000_000, 0, 0, false, 0);

/// The number of decimal places amounts are stored with.
const AMOUNT_SCALE: u32 = 2;

/// A positive amount of money with exactly two decimal places.
///
/// Create an amount by parsing a string, e.g. `"12.50".parse::<Amount>()`, or
/// from a [Decimal] with [Amount::new].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    /// Create an amount from `value`, rounded half away from zero to two decimal places.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::InvalidAmount] if `value` is zero or negative after rounding,
    /// - or [Error::AmountTooLarge] if `value` has more than eight integer digits.
    pub fn new(value: Decimal) -> Result<Self, Error> {
        let mut value =
            value.round_dp_with_strategy(AMOUNT_SCALE, RoundingStrategy::MidpointAwayFromZero);

        if value <= Decimal::ZERO {
            return Err(Error::InvalidAmount);
        }

        if value >= AMOUNT_LIMIT {
            return Err(Error::AmountTooLarge);
        }

        value.rescale(AMOUNT_SCALE);

        Ok(Self(value))
    }

    /// The amount as a decimal number.
    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl FromStr for Amount {
    type Err = Error;

    /// Parse a decimal number such as `"12.50"` or `"1e2"`.
    ///
    /// Surrounding whitespace is ignored. Trailing garbage such as `"12abc"`
    /// and digit separators such as `"1_000"` are rejected.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let text = text.trim();

        if text.contains('_') {
            return Err(Error::InvalidAmount);
        }

        let value = Decimal::from_str(text)
            .or_else(|_| Decimal::from_scientific(text))
            .map_err(|_| not_a_decimal_error(text))?;

        Self::new(value)
    }
}

/// The error for `text` that [Decimal] cannot represent.
///
/// A number too large for [Decimal], e.g. `"1e40"`, is still a number, so it
/// is reported as too large rather than invalid.
fn not_a_decimal_error(text: &str) -> Error {
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 100_000_000.0 => Error::AmountTooLarge,
        _ => Error::InvalidAmount,
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = Error;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The text describing an expense, never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Description(String);

impl Description {
    /// Create a description from `text` with surrounding whitespace removed.
    ///
    /// # Errors
    /// This function will return an [Error::EmptyDescription] if `text` is
    /// empty or only contains whitespace.
    pub fn new(text: &str) -> Result<Self, Error> {
        let text = text.trim();

        if text.is_empty() {
            return Err(Error::EmptyDescription);
        }

        Ok(Self(text.to_owned()))
    }

    /// The description as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Description {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::new(text)
    }
}

impl TryFrom<String> for Description {
    type Error = Error;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Self::new(&text)
    }
}

impl From<Description> for String {
    fn from(description: Description) -> Self {
        description.0
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// TESTS
// ============================================================================


#[cfg(test)]
mod description_tests {
    use crate::{Error, expense::Description};

    #[test]
    fn trims_whitespace() {
        let description = Description::new("  coffee \n").unwrap();

        assert_eq!(description.as_str(), "coffee");
    }

    #[test]
    fn rejects_empty_text() {
        assert_eq!(Description::new(""), Err(Error::EmptyDescription));
        assert_eq!(Description::new("   "), Err(Error::EmptyDescription));
    }
}
