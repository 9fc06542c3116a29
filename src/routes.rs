// Routes module: combines all domain routers
use axum::Router;

use crate::domains::ledger::routes::create_ledger_router;
use crate::shared::services::AppState;

/// Create main router
pub fn create_router() -> Router<AppState> {
    Router::new().merge(create_ledger_router())
}
