use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::domains::ledger::models::{BalanceQuery, BalanceResponse};
use crate::shared::errors::LedgerError;
use crate::shared::services::AppState;

/// User balance handler
///
/// Path: GET /users/{user_id}/balance
///
/// The path parameter is taken as a raw string and parsed here so a
/// non-integer id yields the domain's 400 body before any query runs.
#[utoipa::path(
    get,
    path = "/users/{user_id}/balance",
    params(
        ("user_id" = String, Path, description = "User identifier (integer)"),
        BalanceQuery
    ),
    responses(
        (status = 200, description = "Balance retrieved", body = BalanceResponse),
        (status = 400, description = "Invalid user id or date format", body = crate::domains::ledger::models::ErrorResponse),
        (status = 500, description = "Aggregate query failed", body = crate::domains::ledger::models::ErrorResponse)
    ),
    tag = "Balance"
)]
pub async fn get_balance(
    State(app_state): State<AppState>,
    Path(user_id): Path<String>,
    Query(query): Query<BalanceQuery>,
) -> Result<Json<BalanceResponse>, (StatusCode, Json<serde_json::Value>)> {
    let user_id: i64 = match user_id.parse() {
        Ok(user_id) => user_id,
        Err(_) => return Err(LedgerError::InvalidUserId.into()),
    };

    let response = app_state
        .ledger_state
        .balance_service
        .get_balance(user_id, query.from.as_deref(), query.to.as_deref())
        .await?;

    Ok(Json(response))
}
