use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Optional datetime window for the balance query.
///
/// The filter applies only when both bounds are supplied and non-empty;
/// a lone `from` or `to` is ignored.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BalanceQuery {
    /// Window start, RFC 3339 (e.g. "2024-01-01T00:00:00Z")
    pub from: Option<String>,
    /// Window end, RFC 3339 (e.g. "2024-02-01T00:00:00Z")
    pub to: Option<String>,
}

/// Balance information for one user.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BalanceResponse {
    /// Signed sum of amounts; exactly 0 when no rows match
    #[schema(value_type = f64, example = 25.21)]
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
    /// Rows with amount strictly below zero
    #[schema(example = 10)]
    pub total_debits: i64,
    /// Rows with amount strictly above zero
    #[schema(example = 15)]
    pub total_credits: i64,
}

/// Error response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Invalid user ID")]
    pub error: String,
}

/// Multipart payload accepted by /migrate.
#[derive(ToSchema)]
pub struct MigrationUpload {
    /// CSV file with header row `id,user_id,amount,datetime`
    #[schema(value_type = String, format = Binary)]
    pub file: String,
}
