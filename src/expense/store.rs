//! The in-memory store that owns every expense for the lifetime of the server.

use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex, MutexGuard},
};

use axum::extract::FromRef;
use time::OffsetDateTime;

use crate::{
    AppState, Error,
    expense::{Amount, Description, Expense, ExpenseId},
};

/// The expense store shared between request handlers.
pub type SharedExpenseStore = Arc<Mutex<ExpenseStore>>;

/// Creates, retrieves, updates and deletes expenses held in memory.
///
/// IDs start at 1 and are never reused, even after the expense that held the
/// ID has been deleted.
#[derive(Debug)]
pub struct ExpenseStore {
    expenses: BTreeMap<ExpenseId, Expense>,
    next_id: ExpenseId,
}

impl Default for ExpenseStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpenseStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            expenses: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Create a new expense with the next ID, timestamped with the current time.
    pub fn create(&mut self, amount: Amount, description: Description) -> Expense {
        let id = self.next_id;
        self.next_id += 1;

        let expense = Expense {
            id,
            amount,
            description,
            timestamp: OffsetDateTime::now_utc(),
        };

        self.expenses.insert(id, expense.clone());

        expense
    }

    /// All expenses, most recent first.
    ///
    /// Expenses with the same timestamp are ordered by descending ID.
    pub fn list(&self) -> Vec<Expense> {
        let mut expenses: Vec<Expense> = self.expenses.values().cloned().collect();

        expenses.sort_by(|a, b| {
            b.timestamp
                .cmp(&a.timestamp)
                .then_with(|| b.id.cmp(&a.id))
        });

        expenses
    }

    /// Retrieve an expense by its `id`.
    ///
    /// The handlers go through `update`, `update_date` and `delete`, which do
    /// their own lookups. This is for inspecting the store.
    pub fn get(&self, id: ExpenseId) -> Option<Expense> {
        self.expenses.get(&id).cloned()
    }

    /// The number of expenses in the store.
    pub fn count(&self) -> usize {
        self.expenses.len()
    }

    /// Replace the amount and description of the expense `id`.
    ///
    /// The ID and timestamp are kept. Returns `None` if there is no expense
    /// with the ID `id`.
    pub fn update(
        &mut self,
        id: ExpenseId,
        amount: Amount,
        description: Description,
    ) -> Option<Expense> {
        let expense = self.expenses.get_mut(&id)?;
        expense.amount = amount;
        expense.description = description;

        Some(expense.clone())
    }

    /// Remove the expense `id`, returning whether it existed.
    pub fn delete(&mut self, id: ExpenseId) -> bool {
        self.expenses.remove(&id).is_some()
    }

    /// Replace the timestamp of the expense `id`.
    ///
    /// Returns `None` if there is no expense with the ID `id`.
    pub fn update_date(&mut self, id: ExpenseId, timestamp: OffsetDateTime) -> Option<Expense> {
        let expense = self.expenses.get_mut(&id)?;
        expense.timestamp = timestamp;

        Some(expense.clone())
    }
}

/// Acquire the lock on the shared store.
///
/// # Errors
/// Returns an [Error::StoreLockError] if the lock was poisoned by a panic in
/// another request.
pub(crate) fn lock_store(store: &Mutex<ExpenseStore>) -> Result<MutexGuard<'_, ExpenseStore>, Error> {
    store.lock().map_err(|error| {
        tracing::error!("could not acquire the expense store lock: {error}");
        Error::StoreLockError
    })
}

/// The state needed by the expense endpoints.
#[derive(Debug, Clone)]
pub struct ExpenseState {
    /// The store holding the expenses.
    pub store: SharedExpenseStore,
}

impl FromRef<AppState> for ExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.expense_store.clone(),
        }
    }
}
