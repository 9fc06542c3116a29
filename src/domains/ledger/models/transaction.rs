use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One financial transaction row as persisted in the transactions table.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Transaction {
    pub id: i64,

    pub user_id: i64,

    /// Signed amount with two fractional digits. Positive is a credit,
    /// negative a debit.
    #[schema(value_type = f64, example = 100.00)]
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,

    /// RFC 3339 timestamp with timezone
    pub datetime: DateTime<Utc>,
}
