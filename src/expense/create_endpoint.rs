//! Defines the endpoint for creating a new expense.

use axum::{Json, extract::State, extract::rejection::JsonRejection};

use crate::{
    Error,
    expense::{Expense, ExpenseForm, ExpenseState, store::lock_store},
};

/// A route handler for creating a new expense, responds with the created expense.
///
/// The form is validated before the store is touched, so an invalid form never
/// uses up an ID.
pub async fn create_expense_endpoint(
    State(state): State<ExpenseState>,
    form: Result<Json<ExpenseForm>, JsonRejection>,
) -> Result<Json<Expense>, Error> {
    let Json(form) = form?;
    let (amount, description) = form.validate().inspect_err(|error| {
        tracing::debug!("rejected expense form {form:?}: {error}");
    })?;

    let expense = lock_store(&state.store)?.create(amount, description);
    tracing::info!("created expense {}", expense.id);

    Ok(Json(expense))
}
