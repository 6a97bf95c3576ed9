//! Defines the app level error type and its conversion to JSON error responses.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::expense::ExpenseId;

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The amount of an expense was missing, not a number, or not greater than zero.
    #[error("amount must be a positive number")]
    InvalidAmount,

    /// The amount of an expense does not fit in eight integer digits.
    #[error("amount must be less than 100000000")]
    AmountTooLarge,

    /// The description of an expense was empty.
    #[error("description must not be empty")]
    EmptyDescription,

    /// A date update did not include a timestamp.
    #[error("timestamp is required")]
    MissingTimestamp,

    /// A date update included a timestamp that is not an ISO-8601 date or date-time.
    #[error("\"{0}\" is not an ISO-8601 date or date-time")]
    InvalidTimestamp(String),

    /// The request body or path could not be parsed.
    ///
    /// Callers should pass in the original rejection as a string.
    #[error("invalid request: {0}")]
    InvalidPayload(String),

    /// There is no expense with the given ID.
    ///
    /// The client should check that the ID is correct and that the expense
    /// has not already been deleted.
    #[error("could not find an expense with the ID {0}")]
    ExpenseNotFound(ExpenseId),

    /// The requested resource was not found.
    #[error("the requested resource could not be found")]
    NotFound,

    /// The lock on the expense store was poisoned.
    #[error("could not acquire the expense store lock")]
    StoreLockError,

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezone(String),

    /// The body of a response could not be read while logging it.
    #[error("could not read the response body: {0}")]
    ResponseBodyError(String),
}

impl Error {
    /// The HTTP status code the error is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidAmount
            | Error::AmountTooLarge
            | Error::EmptyDescription
            | Error::MissingTimestamp
            | Error::InvalidTimestamp(_)
            | Error::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            Error::ExpenseNotFound(_) | Error::NotFound => StatusCode::NOT_FOUND,
            Error::StoreLockError | Error::InvalidTimezone(_) | Error::ResponseBodyError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// The JSON body of an error response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorMessage {
    /// A human readable description of what went wrong.
    pub message: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = match self {
            Error::InvalidTimezone(timezone) => {
                tracing::error!("invalid timezone {timezone}");
                format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to a valid, canonical timezone string"
                )
            }
            // Any other internal errors are not intended to be shown to the client.
            error if status.is_server_error() => {
                tracing::error!("An unexpected error occurred: {}", error);
                "An unexpected error occurred, check the server logs for more details.".to_owned()
            }
            error => error.to_string(),
        };

        (status, Json(ErrorMessage { message })).into_response()
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("rejected request body: {rejection}");
        Error::InvalidPayload(rejection.body_text())
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!("rejected request path: {rejection}");
        Error::InvalidPayload(rejection.body_text())
    }
}
