use std::{
    sync::{Arc, Mutex},
    thread,
};

use crate::expense::{Amount, Description, ExpenseState, ExpenseStore, SharedExpenseStore};

#[track_caller]
pub(crate) fn amount(text: &str) -> Amount {
    text.parse().expect("could not parse test amount")
}

#[track_caller]
pub(crate) fn description(text: &str) -> Description {
    Description::new(text).expect("could not create test description")
}

pub(crate) fn must_create_expense_state() -> ExpenseState {
    ExpenseState {
        store: Arc::new(Mutex::new(ExpenseStore::new())),
    }
}

/// Poison the lock on `store` by panicking while holding it.
pub(crate) fn poison_store(store: &SharedExpenseStore) {
    let store = store.clone();

    let result = thread::spawn(move || {
        let _guard = store.lock().unwrap();
        panic!("poisoning the expense store for a test");
    })
    .join();

    assert!(result.is_err());
}
