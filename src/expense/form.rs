//! Request bodies for the expense endpoints and their validation.

use serde::{Deserialize, Serialize};
use time::{
    Date, OffsetDateTime, UtcOffset, format_description::well_known::Iso8601,
    macros::format_description,
};

use crate::{
    Error,
    expense::{Amount, Description},
};

/// An amount as sent by a client.
///
/// The web client sends amounts as strings, but plain JSON numbers are
/// accepted too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    /// An amount as text, e.g. `"12.50"`.
    Text(String),
    /// An amount as a JSON number, e.g. `12.5`.
    Number(serde_json::Number),
}

/// The body for creating or editing an expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseForm {
    /// The amount of money spent, must be a positive number.
    #[serde(default)]
    pub amount: Option<AmountInput>,
    /// What the money was spent on, must not be empty.
    #[serde(default)]
    pub description: String,
}

impl ExpenseForm {
    /// Create a form from text, the way the web client sends it.
    pub fn new(amount: &str, description: &str) -> Self {
        Self {
            amount: Some(AmountInput::Text(amount.to_owned())),
            description: description.to_owned(),
        }
    }

    /// Check the form and convert it into an amount and description.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::InvalidAmount] if the amount is missing or not a positive number,
    /// - [Error::AmountTooLarge] if the amount has more than eight integer digits,
    /// - or [Error::EmptyDescription] if the description is empty.
    pub fn validate(&self) -> Result<(Amount, Description), Error> {
        let amount = match &self.amount {
            Some(AmountInput::Text(text)) => text.parse()?,
            Some(AmountInput::Number(number)) => number.to_string().parse()?,
            None => return Err(Error::InvalidAmount),
        };

        let description = Description::new(&self.description)?;

        Ok((amount, description))
    }
}

/// The body for changing the date of an expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateForm {
    /// The new timestamp as an ISO-8601 date or date-time.
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl DateForm {
    /// Check the form and parse the timestamp.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::MissingTimestamp] if the timestamp is missing or empty,
    /// - or [Error::InvalidTimestamp] if the timestamp cannot be parsed.
    pub fn validate(&self) -> Result<OffsetDateTime, Error> {
        match self.timestamp.as_deref().map(str::trim) {
            None | Some("") => Err(Error::MissingTimestamp),
            Some(text) => parse_timestamp(text),
        }
    }
}

/// Parse an ISO-8601 date-time with an offset, or a calendar date.
///
/// The result is converted to UTC. A calendar date such as `2024-03-01` is
/// treated as midnight UTC on that day. A date-time without an offset, such
/// as `2024-03-01T10:15`, is rejected rather than truncated to its date.
///
/// # Errors
/// Returns an [Error::InvalidTimestamp] if `text` is neither.
pub fn parse_timestamp(text: &str) -> Result<OffsetDateTime, Error> {
    if let Ok(timestamp) = OffsetDateTime::parse(text, &Iso8601::DEFAULT) {
        return Ok(timestamp.to_offset(UtcOffset::UTC));
    }

    Date::parse(text, format_description!("[year]-[month]-[day]"))
        .map(|date| date.midnight().assume_utc())
        .map_err(|error| {
            tracing::debug!("could not parse timestamp {text:?}: {error}");
            Error::InvalidTimestamp(text.to_owned())
        })
}
