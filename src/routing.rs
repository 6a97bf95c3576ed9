//! Application router configuration.

use axum::{
    Router,
    handler::HandlerWithoutStateExt,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
};
use tower_http::services::ServeDir;

use crate::{
    AppState, Error, endpoints,
    expense::{
        create_expense_endpoint, delete_expense_endpoint, edit_expense_endpoint,
        get_daily_expenses_endpoint, list_expenses_endpoint, update_expense_date_endpoint,
    },
};

/// Return a router with all the app's routes.
///
/// If `state` has a static directory, any path that does not match an API
/// route is served from that directory.
pub fn build_router(state: AppState) -> Router {
    let router = Router::new()
        .route(endpoints::COFFEE, get(get_coffee))
        .route(
            endpoints::EXPENSES,
            get(list_expenses_endpoint).post(create_expense_endpoint),
        )
        .route(endpoints::DAILY_EXPENSES, get(get_daily_expenses_endpoint))
        .route(
            endpoints::EXPENSE,
            put(edit_expense_endpoint).delete(delete_expense_endpoint),
        )
        .route(endpoints::EXPENSE_DATE, put(update_expense_date_endpoint));

    let router = match &state.static_dir {
        Some(static_dir) => router.fallback_service(
            ServeDir::new(static_dir).not_found_service(get_404_not_found.into_service()),
        ),
        None => router.fallback(get_404_not_found),
    };

    router.with_state(state)
}

/// Attempt to get a cup of coffee from the server.
async fn get_coffee() -> Response {
    (StatusCode::IM_A_TEAPOT, "I'm a teapot").into_response()
}

async fn get_404_not_found() -> Response {
    Error::NotFound.into_response()
}
