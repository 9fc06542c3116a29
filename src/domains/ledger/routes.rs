use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::shared::services::AppState;

use super::handlers;

/// Create ledger router
///
/// # Routes
/// - `POST /migrate` - bulk CSV ingestion
/// - `GET  /users/:user_id/balance` - balance aggregation
pub fn create_ledger_router() -> Router<AppState> {
    Router::new()
        .route(
            "/migrate",
            // Bulk CSV files exceed axum's 2 MB default body cap.
            post(handlers::migrate_csv).layer(DefaultBodyLimit::disable()),
        )
        .route("/users/:user_id/balance", get(handlers::get_balance))
}
