//! Groups expenses by the local day they happened on.

use axum::{Json, extract::FromRef, extract::State};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::Date;
use time_tz::Tz;

use crate::{
    AppState, Error,
    expense::{Expense, SharedExpenseStore, store::lock_store},
    timezone::{get_offset_at, get_timezone},
};

/// The expenses that happened on one local calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayGroup {
    /// The local date, serialized as `YYYY-MM-DD`.
    pub date: Date,
    /// The sum of the amounts of the expenses on this day.
    pub total: Decimal,
    /// The expenses on this day, most recent first.
    pub expenses: Vec<Expense>,
}

/// Group `expenses` by their local date in `timezone`.
///
/// `expenses` must be ordered by timestamp descending, as returned by
/// [ExpenseStore::list](super::ExpenseStore::list). The groups are then
/// ordered by date descending.
pub fn group_by_day(expenses: Vec<Expense>, timezone: &Tz) -> Vec<DayGroup> {
    let mut days: Vec<DayGroup> = Vec::new();

    for expense in expenses {
        let offset = get_offset_at(timezone, expense.timestamp);
        let date = expense.timestamp.to_offset(offset).date();

        if let Some(current) = days.last_mut().filter(|day| day.date == date) {
            current.total += expense.amount.value();
            current.expenses.push(expense);
        } else {
            days.push(DayGroup {
                date,
                total: expense.amount.value(),
                expenses: vec![expense],
            });
        }
    }

    for day in &mut days {
        day.total.rescale(2);
    }

    days
}

/// The state needed to group expenses by day.
#[derive(Debug, Clone)]
pub struct DailyExpensesState {
    /// The store holding the expenses.
    pub store: SharedExpenseStore,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for DailyExpensesState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.expense_store.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// A route handler for listing expenses grouped by local day, most recent day first.
pub async fn get_daily_expenses_endpoint(
    State(state): State<DailyExpensesState>,
) -> Result<Json<Vec<DayGroup>>, Error> {
    let Some(timezone) = get_timezone(&state.local_timezone) else {
        return Err(Error::InvalidTimezone(state.local_timezone));
    };

    let expenses = lock_store(&state.store)?.list();

    Ok(Json(group_by_day(expenses, timezone)))
}
