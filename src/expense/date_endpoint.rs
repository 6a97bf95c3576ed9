//! Defines the endpoint for changing the date of an expense.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};

use crate::{
    Error,
    expense::{DateForm, Expense, ExpenseId, ExpenseState, store::lock_store},
};

/// A route handler for changing the timestamp of an expense, responds with the updated expense.
///
/// The amount and description of the expense are kept as is.
pub async fn update_expense_date_endpoint(
    State(state): State<ExpenseState>,
    expense_id: Result<Path<ExpenseId>, PathRejection>,
    form: Result<Json<DateForm>, JsonRejection>,
) -> Result<Json<Expense>, Error> {
    let Path(expense_id) = expense_id?;
    let Json(form) = form?;
    let timestamp = form.validate()?;

    let mut store = lock_store(&state.store)?;

    match store.update_date(expense_id, timestamp) {
        Some(expense) => {
            tracing::info!("changed the date of expense {expense_id} to {timestamp}");
            Ok(Json(expense))
        }
        None => {
            tracing::debug!("could not change the date of expense {expense_id}: not found");
            Err(Error::ExpenseNotFound(expense_id))
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        Json,
        extract::{Path, State},
    };
    use time::macros::datetime;

    use crate::{
        Error,
        expense::{DateForm, date_endpoint::update_expense_date_endpoint},
        test_utils::{amount, description, must_create_expense_state, poison_store},
    };

    fn date_form(timestamp: Option<&str>) -> Json<DateForm> {
        Json(DateForm {
            timestamp: timestamp.map(str::to_owned),
        })
    }

    #[tokio::test]
    async fn changes_only_the_timestamp() {
        let state = must_create_expense_state();
        let original = state
            .store
            .lock()
            .unwrap()
            .create(amount("8.00"), description("movie"));

        let Json(updated) = update_expense_date_endpoint(
            State(state.clone()),
            Ok(Path(original.id)),
            Ok(date_form(Some("2024-12-24T18:30:00Z"))),
        )
        .await
        .unwrap();

        assert_eq!(updated.timestamp, datetime!(2024-12-24 18:30 UTC));
        assert_eq!(updated.id, original.id);
        assert_eq!(updated.amount, original.amount);
        assert_eq!(updated.description, original.description);
        assert_eq!(state.store.lock().unwrap().get(original.id), Some(updated));
    }

    #[tokio::test]
    async fn missing_timestamp_is_bad_request() {
        let state = must_create_expense_state();
        let original = state
            .store
            .lock()
            .unwrap()
            .create(amount("8.00"), description("movie"));

        let result = update_expense_date_endpoint(
            State(state.clone()),
            Ok(Path(original.id)),
            Ok(date_form(None)),
        )
        .await;

        assert_eq!(result.err(), Some(Error::MissingTimestamp));
        assert_eq!(state.store.lock().unwrap().get(original.id), Some(original));
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let state = must_create_expense_state();

        let result = update_expense_date_endpoint(
            State(state),
            Ok(Path(3)),
            Ok(date_form(Some("2024-12-24"))),
        )
        .await;

        assert_eq!(result.err(), Some(Error::ExpenseNotFound(3)));
    }

    #[tokio::test]
    async fn poisoned_store_is_internal_error() {
        let state = must_create_expense_state();
        poison_store(&state.store);

        let result = update_expense_date_endpoint(
            State(state),
            Ok(Path(1)),
            Ok(date_form(Some("2024-12-24"))),
        )
        .await;

        assert_eq!(result.err(), Some(Error::StoreLockError));
    }
}
