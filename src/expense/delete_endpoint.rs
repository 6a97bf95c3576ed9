//! Defines the endpoint for deleting an expense.

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    expense::{ExpenseId, ExpenseState, store::lock_store},
};

/// The response body for a successful delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// Always `true`, failures are reported as errors.
    pub success: bool,
}

/// A route handler for deleting an expense.
pub async fn delete_expense_endpoint(
    State(state): State<ExpenseState>,
    expense_id: Result<Path<ExpenseId>, PathRejection>,
) -> Result<Json<DeleteResponse>, Error> {
    let Path(expense_id) = expense_id?;

    if !lock_store(&state.store)?.delete(expense_id) {
        tracing::debug!("could not delete expense {expense_id}: not found");
        return Err(Error::ExpenseNotFound(expense_id));
    }

    tracing::info!("deleted expense {expense_id}");

    Ok(Json(DeleteResponse { success: true }))
}

#[cfg(test)]
mod tests {
    use axum::{
        Json,
        extract::{Path, State},
    };

    use crate::{
        Error,
        expense::delete_endpoint::{DeleteResponse, delete_expense_endpoint},
        test_utils::{amount, description, must_create_expense_state, poison_store},
    };

    #[tokio::test]
    async fn deletes_expense() {
        let state = must_create_expense_state();
        let expense = state
            .store
            .lock()
            .unwrap()
            .create(amount("1.23"), description("test"));

        let Json(response) = delete_expense_endpoint(State(state.clone()), Ok(Path(expense.id)))
            .await
            .unwrap();

        assert_eq!(response, DeleteResponse { success: true });
        assert_eq!(state.store.lock().unwrap().get(expense.id), None);
    }

    #[tokio::test]
    async fn deleting_twice_is_not_found() {
        let state = must_create_expense_state();
        let expense = state
            .store
            .lock()
            .unwrap()
            .create(amount("1.23"), description("test"));
        delete_expense_endpoint(State(state.clone()), Ok(Path(expense.id)))
            .await
            .unwrap();

        let result = delete_expense_endpoint(State(state), Ok(Path(expense.id))).await;

        assert_eq!(result.err(), Some(Error::ExpenseNotFound(expense.id)));
    }

    #[tokio::test]
    async fn poisoned_store_is_internal_error() {
        let state = must_create_expense_state();
        poison_store(&state.store);

        let result = delete_expense_endpoint(State(state), Ok(Path(1))).await;

        assert_eq!(result.err(), Some(Error::StoreLockError));
    }
}
