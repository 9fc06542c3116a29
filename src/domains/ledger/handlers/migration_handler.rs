use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};

use crate::domains::ledger::models::MigrationStats;
use crate::shared::errors::LedgerError;
use crate::shared::services::AppState;

/// CSV migration handler
///
/// Path: POST /migrate
///
/// Accepts a multipart form with a `file` field holding delimited text
/// with a header row. Per-row failures never fail the request; they are
/// reported inside the returned statistics.
#[utoipa::path(
    post,
    path = "/migrate",
    request_body(
        content = crate::domains::ledger::models::MigrationUpload,
        content_type = "multipart/form-data",
        description = "CSV file with columns id,user_id,amount,datetime"
    ),
    responses(
        (status = 200, description = "Migration processed", body = MigrationStats),
        (status = 400, description = "No file uploaded or unreadable header", body = crate::domains::ledger::models::ErrorResponse),
        (status = 500, description = "Upload could not be read", body = crate::domains::ledger::models::ErrorResponse)
    ),
    tag = "Migration"
)]
pub async fn migrate_csv(
    State(app_state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<MigrationStats>, (StatusCode, Json<serde_json::Value>)> {
    let mut data = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| LedgerError::UnreadableUpload)?
    {
        if field.name() == Some("file") {
            let bytes = field
                .bytes()
                .await
                .map_err(|_| LedgerError::UnreadableUpload)?;
            data = Some(bytes);
            break;
        }
    }

    let data = data.ok_or(LedgerError::MissingFile)?;

    let stats = app_state
        .ledger_state
        .migration_service
        .migrate_csv(&data)
        .await?;

    Ok(Json(stats))
}
