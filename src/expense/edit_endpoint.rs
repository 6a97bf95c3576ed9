//! Defines the endpoint for editing the amount and description of an expense.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};

use crate::{
    Error,
    expense::{Expense, ExpenseForm, ExpenseId, ExpenseState, store::lock_store},
};

/// A route handler for editing an expense, responds with the updated expense.
///
/// The timestamp of the expense is kept as is.
pub async fn edit_expense_endpoint(
    State(state): State<ExpenseState>,
    expense_id: Result<Path<ExpenseId>, PathRejection>,
    form: Result<Json<ExpenseForm>, JsonRejection>,
) -> Result<Json<Expense>, Error> {
    let Path(expense_id) = expense_id?;
    let Json(form) = form?;
    let (amount, description) = form.validate()?;

    let mut store = lock_store(&state.store)?;

    match store.update(expense_id, amount, description) {
        Some(expense) => {
            tracing::info!("updated expense {expense_id}");
            Ok(Json(expense))
        }
        None => {
            tracing::debug!("could not update expense {expense_id}: not found");
            Err(Error::ExpenseNotFound(expense_id))
        }
    }
}
