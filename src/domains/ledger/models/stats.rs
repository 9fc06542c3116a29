use chrono::{DateTime, SecondsFormat, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Observed datetime range across the valid rows of one upload.
/// Rendered as RFC 3339; "N/A" until the first valid datetime shows up.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DateRange {
    #[schema(example = "2024-01-01T00:00:00Z")]
    pub earliest: String,
    #[schema(example = "2024-01-02T00:00:00Z")]
    pub latest: String,
}

/// Credit/debit split of the valid amounts in one upload.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct TransactionTypes {
    /// Rows with amount > 0
    pub credits: u64,
    /// Rows with amount <= 0 (zero counts as a debit here)
    pub debits: u64,
}

/// Per-request ingestion statistics.
///
/// Built up row by row during one /migrate call, serialized into the
/// response and discarded. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MigrationStats {
    /// Rows whose structure could be read (header excluded)
    pub total_records: u64,
    /// Rows validated and written to storage
    pub successful_rows: u64,
    /// Rows skipped for any reason
    pub failed_rows: u64,
    /// Running signed sum of every amount that parsed
    #[schema(value_type = f64, example = 50.00)]
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    /// Distinct user ids seen among rows whose user_id parsed
    pub unique_users: u64,
    pub date_range: DateRange,
    pub transaction_types: TransactionTypes,
    /// One "Line N: <kind>" entry per failed row, in row order
    pub errors: Vec<String>,

    #[serde(skip)]
    earliest: Option<DateTime<Utc>>,
    #[serde(skip)]
    latest: Option<DateTime<Utc>>,
}

impl MigrationStats {
    pub fn new() -> Self {
        Self {
            total_records: 0,
            successful_rows: 0,
            failed_rows: 0,
            total_amount: Decimal::ZERO,
            unique_users: 0,
            date_range: DateRange {
                earliest: "N/A".to_string(),
                latest: "N/A".to_string(),
            },
            transaction_types: TransactionTypes::default(),
            errors: Vec::new(),
            earliest: None,
            latest: None,
        }
    }

    /// Record one failed row. `line_number` is the 1-based data row,
    /// the header not counted.
    pub fn record_error(&mut self, line_number: u64, kind: &str) {
        self.errors.push(format!("Line {}: {}", line_number, kind));
        self.failed_rows += 1;
    }

    /// Fold a parsed amount into the running total and classify it.
    /// Zero is a debit on this side (see the aggregator for the strict
    /// variant used at query time).
    pub fn observe_amount(&mut self, amount: Decimal) {
        self.total_amount += amount;
        if amount > Decimal::ZERO {
            self.transaction_types.credits += 1;
        } else {
            self.transaction_types.debits += 1;
        }
    }

    /// Widen the observed date range with one parsed datetime.
    pub fn observe_datetime(&mut self, datetime: DateTime<Utc>) {
        if self.earliest.map_or(true, |earliest| datetime < earliest) {
            self.earliest = Some(datetime);
            self.date_range.earliest = datetime.to_rfc3339_opts(SecondsFormat::Secs, true);
        }
        if self.latest.map_or(true, |latest| datetime > latest) {
            self.latest = Some(datetime);
            self.date_range.latest = datetime.to_rfc3339_opts(SecondsFormat::Secs, true);
        }
    }
}

impl Default for MigrationStats {
    fn default() -> Self {
        Self::new()
    }
}
