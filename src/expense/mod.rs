//! Expense management for the expense tracker.
//!
//! This module contains everything related to expenses:
//! - The `Expense` model and the validated `Amount` and `Description` types
//! - The in-memory `ExpenseStore` that owns every expense
//! - Route handlers for listing, creating, editing, re-dating and deleting expenses
//! - Grouping of expenses by local day

mod core;
mod create_endpoint;
mod date_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod form;
mod grouping;
mod list_endpoint;
mod store;

pub use core::{Amount, Description, Expense, ExpenseId};
pub use create_endpoint::create_expense_endpoint;
pub use date_endpoint::update_expense_date_endpoint;
pub use delete_endpoint::{DeleteResponse, delete_expense_endpoint};
pub use edit_endpoint::edit_expense_endpoint;
pub use form::{AmountInput, DateForm, ExpenseForm, parse_timestamp};
pub use grouping::{DailyExpensesState, DayGroup, get_daily_expenses_endpoint, group_by_day};
pub use list_endpoint::list_expenses_endpoint;
pub use store::{ExpenseState, ExpenseStore, SharedExpenseStore};
