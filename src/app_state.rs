//! Implements a struct that holds the state of the REST server.

use std::{
    path::PathBuf,
    sync::{Arc, Mutex},
};

use crate::{
    Error,
    expense::{ExpenseStore, SharedExpenseStore},
    timezone::get_timezone,
};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The store holding every expense, created empty when the server starts.
    pub expense_store: SharedExpenseStore,

    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,

    /// The directory with the files of the web client, if the server should serve them.
    pub static_dir: Option<PathBuf>,
}

impl AppState {
    /// Create a new [AppState] with an empty expense store.
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Pacific/Auckland".
    ///
    /// # Errors
    /// Returns an [Error::InvalidTimezone] if `local_timezone` is not a known timezone.
    pub fn new(local_timezone: &str) -> Result<Self, Error> {
        if get_timezone(local_timezone).is_none() {
            return Err(Error::InvalidTimezone(local_timezone.to_owned()));
        }

        Ok(Self {
            expense_store: Arc::new(Mutex::new(ExpenseStore::new())),
            local_timezone: local_timezone.to_owned(),
            static_dir: None,
        })
    }

    /// Serve the web client from `static_dir`.
    pub fn with_static_dir(mut self, static_dir: Option<PathBuf>) -> Self {
        self.static_dir = static_dir;
        self
    }
}
