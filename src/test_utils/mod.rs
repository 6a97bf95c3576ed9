#![allow(missing_docs)]

pub(crate) mod expense;
pub(crate) mod http;

pub(crate) use expense::{amount, description, must_create_expense_state, poison_store};
pub(crate) use http::{must_create_test_server, must_read_error_message};
