use std::collections::HashSet;

use chrono::{DateTime, Utc};
use csv::{Reader, StringRecord};
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::domains::ledger::models::{MigrationStats, Transaction};
use crate::shared::database::repositories::TransactionRepository;
use crate::shared::errors::LedgerError;

/// CSV ingestion pipeline: validate each row independently, apply the
/// valid ones as delete-then-insert, accumulate statistics.
#[derive(Clone)]
pub struct MigrationService {
    repository: TransactionRepository,
}

impl MigrationService {
    pub fn new(repository: TransactionRepository) -> Self {
        Self { repository }
    }

    /// Ingest one uploaded CSV file.
    ///
    /// Row failures are recorded in the returned stats and never abort
    /// the run; only an unreadable header rejects the call outright.
    /// There is no rollback: rows committed before a later failure stay
    /// committed, which is safe because each row's write is idempotent
    /// per id.
    pub async fn migrate_csv(&self, data: &[u8]) -> Result<MigrationStats, LedgerError> {
        let mut reader = Reader::from_reader(data);

        // Header row is read and discarded without validation.
        reader
            .headers()
            .map_err(|_| LedgerError::UnreadableHeader)?;

        let mut stats = MigrationStats::new();
        let mut unique_users: HashSet<i64> = HashSet::new();
        let mut line_number: u64 = 0;

        for result in reader.records() {
            line_number += 1;

            let record = match result {
                Ok(record) => record,
                Err(_) => {
                    // Structural failure (e.g. wrong field count): the
                    // fields are never looked at.
                    stats.record_error(line_number, "Reading error");
                    continue;
                }
            };

            stats.total_records += 1;

            let transaction =
                match parse_row(&record, line_number, &mut stats, &mut unique_users) {
                    Some(transaction) => transaction,
                    None => continue,
                };

            if let Err(error) = self.repository.upsert(&transaction).await {
                warn!(line = line_number, %error, "transaction row write failed");
                stats.record_error(line_number, "Database error");
                continue;
            }

            stats.successful_rows += 1;
        }

        stats.unique_users = unique_users.len() as u64;

        info!(
            total = stats.total_records,
            successful = stats.successful_rows,
            failed = stats.failed_rows,
            "csv migration finished"
        );

        Ok(stats)
    }
}

/// Validate the four positional fields of one record, folding each
/// field-level observation into the stats as it parses.
///
/// Fields are checked left to right and the first failure wins: a row
/// with a bad id never touches the amount total, while a row with a bad
/// datetime has already contributed its user id and amount. This
/// mirrors the per-field accounting the statistics promise.
///
/// Returns the row ready for storage, or None after recording the
/// failure.
pub fn parse_row(
    record: &StringRecord,
    line_number: u64,
    stats: &mut MigrationStats,
    unique_users: &mut HashSet<i64>,
) -> Option<Transaction> {
    let id = match record.get(0).unwrap_or("").parse::<i64>() {
        Ok(id) => id,
        Err(_) => {
            stats.record_error(line_number, "Invalid ID format");
            return None;
        }
    };

    let user_id = match record.get(1).unwrap_or("").parse::<i64>() {
        Ok(user_id) => user_id,
        Err(_) => {
            stats.record_error(line_number, "Invalid user ID format");
            return None;
        }
    };
    unique_users.insert(user_id);

    let amount = match record.get(2).unwrap_or("").parse::<Decimal>() {
        Ok(amount) => amount,
        Err(_) => {
            stats.record_error(line_number, "Invalid amount format");
            return None;
        }
    };
    stats.observe_amount(amount);

    let datetime = match DateTime::parse_from_rfc3339(record.get(3).unwrap_or("")) {
        Ok(datetime) => datetime.with_timezone(&Utc),
        Err(_) => {
            stats.record_error(line_number, "Invalid datetime format");
            return None;
        }
    };
    stats.observe_datetime(datetime);

    Some(Transaction {
        id,
        user_id,
        amount,
        datetime,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(fields: &[&str]) -> StringRecord {
        StringRecord::from(fields.to_vec())
    }

    #[test]
    fn valid_row_parses_and_updates_stats() {
        let mut stats = MigrationStats::new();
        let mut users = HashSet::new();

        let transaction = parse_row(
            &record(&["1", "1", "100.00", "2024-01-01T00:00:00Z"]),
            1,
            &mut stats,
            &mut users,
        )
        .expect("row should parse");

        assert_eq!(transaction.id, 1);
        assert_eq!(transaction.user_id, 1);
        assert_eq!(transaction.amount, Decimal::new(10000, 2));
        assert_eq!(stats.failed_rows, 0);
        assert_eq!(stats.total_amount, Decimal::new(10000, 2));
        assert_eq!(stats.transaction_types.credits, 1);
        assert_eq!(stats.date_range.earliest, "2024-01-01T00:00:00Z");
        assert!(users.contains(&1));
    }

    #[test]
    fn bad_id_short_circuits_before_later_fields() {
        let mut stats = MigrationStats::new();
        let mut users = HashSet::new();

        let parsed = parse_row(
            &record(&["abc", "1", "100.00", "2024-01-01T00:00:00Z"]),
            1,
            &mut stats,
            &mut users,
        );

        assert!(parsed.is_none());
        assert_eq!(stats.failed_rows, 1);
        assert_eq!(stats.errors, vec!["Line 1: Invalid ID format".to_string()]);
        // Later fields were never parsed.
        assert!(users.is_empty());
        assert_eq!(stats.total_amount, Decimal::ZERO);
        assert_eq!(stats.transaction_types.credits, 0);
    }

    #[test]
    fn bad_amount_still_records_the_user() {
        let mut stats = MigrationStats::new();
        let mut users = HashSet::new();

        let parsed = parse_row(
            &record(&["1", "7", "abc", "2024-01-01T00:00:00Z"]),
            2,
            &mut stats,
            &mut users,
        );

        assert!(parsed.is_none());
        assert_eq!(
            stats.errors,
            vec!["Line 2: Invalid amount format".to_string()]
        );
        assert!(users.contains(&7));
        assert_eq!(stats.total_amount, Decimal::ZERO);
    }

    #[test]
    fn bad_datetime_still_records_user_and_amount() {
        let mut stats = MigrationStats::new();
        let mut users = HashSet::new();

        let parsed = parse_row(
            &record(&["1", "7", "-50.00", "not-a-date"]),
            3,
            &mut stats,
            &mut users,
        );

        assert!(parsed.is_none());
        assert_eq!(
            stats.errors,
            vec!["Line 3: Invalid datetime format".to_string()]
        );
        assert!(users.contains(&7));
        assert_eq!(stats.total_amount, Decimal::new(-5000, 2));
        assert_eq!(stats.transaction_types.debits, 1);
        assert_eq!(stats.date_range.earliest, "N/A");
    }

    #[test]
    fn zero_amount_row_classifies_as_debit() {
        let mut stats = MigrationStats::new();
        let mut users = HashSet::new();

        let transaction = parse_row(
            &record(&["4", "2", "0.00", "2024-01-01T00:00:00Z"]),
            1,
            &mut stats,
            &mut users,
        )
        .expect("row should parse");

        assert_eq!(transaction.amount, Decimal::ZERO);
        assert_eq!(stats.transaction_types.debits, 1);
        assert_eq!(stats.transaction_types.credits, 0);
    }

    #[test]
    fn datetime_is_normalized_to_utc() {
        let mut stats = MigrationStats::new();
        let mut users = HashSet::new();

        let transaction = parse_row(
            &record(&["5", "2", "1.00", "2024-01-01T02:00:00+02:00"]),
            1,
            &mut stats,
            &mut users,
        )
        .expect("row should parse");

        assert_eq!(
            transaction.datetime.to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
            "2024-01-01T00:00:00Z"
        );
    }
}
