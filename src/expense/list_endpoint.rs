//! Defines the endpoint for listing expenses.

use axum::{Json, extract::State};

use crate::{
    Error,
    expense::{Expense, ExpenseState, store::lock_store},
};

/// A route handler for listing every expense, most recent first.
pub async fn list_expenses_endpoint(
    State(state): State<ExpenseState>,
) -> Result<Json<Vec<Expense>>, Error> {
    let store = lock_store(&state.store)?;

    Ok(Json(store.list()))
}

#[cfg(test)]
mod tests {
    use axum::{Json, extract::State};
    use time::macros::datetime;

    use crate::{
        Error,
        expense::list_endpoint::list_expenses_endpoint,
        test_utils::{amount, description, must_create_expense_state, poison_store},
    };

    #[tokio::test]
    async fn lists_expenses_most_recent_first() {
        let state = must_create_expense_state();
        {
            let mut store = state.store.lock().unwrap();
            let older = store.create(amount("1.00"), description("older"));
            let newer = store.create(amount("2.00"), description("newer"));
            store.update_date(older.id, datetime!(2025-05-01 09:00 UTC));
            store.update_date(newer.id, datetime!(2025-05-02 09:00 UTC));
        }

        let Json(expenses) = list_expenses_endpoint(State(state)).await.unwrap();

        let descriptions: Vec<_> = expenses
            .iter()
            .map(|expense| expense.description.as_str())
            .collect();
        assert_eq!(descriptions, vec!["newer", "older"]);
    }

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let state = must_create_expense_state();

        let Json(expenses) = list_expenses_endpoint(State(state)).await.unwrap();

        assert!(expenses.is_empty());
    }

    #[tokio::test]
    async fn poisoned_store_is_internal_error() {
        let state = must_create_expense_state();
        poison_store(&state.store);

        let result = list_expenses_endpoint(State(state)).await;

        assert_eq!(result.err(), Some(Error::StoreLockError));
    }
}
