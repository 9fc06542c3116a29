use axum::{http::StatusCode, Json};
use serde_json::json;
use thiserror::Error;

/// Errors surfaced by the migration and balance endpoints.
///
/// Per-row ingestion failures are not here: those are recovered locally
/// and reported inside MigrationStats, never as an HTTP error.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Multipart form carried no `file` field
    #[error("No file uploaded")]
    MissingFile,

    /// The uploaded part could not be read
    #[error("Error opening file")]
    UnreadableUpload,

    /// CSV header row could not be read
    #[error("Error reading CSV header")]
    UnreadableHeader,

    /// Path parameter was not an integer
    #[error("Invalid user ID")]
    InvalidUserId,

    /// `from` query parameter was not RFC 3339
    #[error("Invalid from date format")]
    InvalidFromDate,

    /// `to` query parameter was not RFC 3339
    #[error("Invalid to date format")]
    InvalidToDate,

    /// Aggregate query failed
    #[error("Database query error")]
    QueryFailed,
}

/// Convert LedgerError into an HTTP response
impl From<LedgerError> for (StatusCode, Json<serde_json::Value>) {
    fn from(err: LedgerError) -> Self {
        let status = match &err {
            LedgerError::MissingFile
            | LedgerError::UnreadableHeader
            | LedgerError::InvalidUserId
            | LedgerError::InvalidFromDate
            | LedgerError::InvalidToDate => StatusCode::BAD_REQUEST,
            LedgerError::UnreadableUpload | LedgerError::QueryFailed => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(json!({ "error": err.to_string() })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_for(err: LedgerError) -> (StatusCode, String) {
        let (status, Json(body)): (StatusCode, Json<serde_json::Value>) = err.into();
        (status, body["error"].as_str().unwrap_or_default().to_string())
    }

    #[test]
    fn request_malformation_maps_to_400() {
        assert_eq!(
            response_for(LedgerError::MissingFile),
            (StatusCode::BAD_REQUEST, "No file uploaded".to_string())
        );
        assert_eq!(
            response_for(LedgerError::InvalidUserId),
            (StatusCode::BAD_REQUEST, "Invalid user ID".to_string())
        );
        assert_eq!(
            response_for(LedgerError::InvalidFromDate),
            (StatusCode::BAD_REQUEST, "Invalid from date format".to_string())
        );
    }

    #[test]
    fn infrastructure_failures_map_to_500() {
        assert_eq!(
            response_for(LedgerError::QueryFailed),
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Database query error".to_string()
            )
        );
        assert_eq!(
            response_for(LedgerError::UnreadableUpload),
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error opening file".to_string()
            )
        );
    }
}
