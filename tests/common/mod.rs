// Shared helpers for the Postgres-backed tests.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use fintech_backend::domains::ledger::models::Transaction;
use fintech_backend::shared::config::Config;
use fintech_backend::shared::database::{Database, TransactionRepository};

/// Connect with the server's env-or-default settings and recreate the
/// transactions table from scratch.
pub async fn setup_test() -> (Database, TransactionRepository) {
    let config = Config::from_env();

    let db = Database::new(&config.database_url())
        .await
        .expect("Failed to connect to database");

    db.initialize()
        .await
        .expect("Failed to initialize database");

    let repository = TransactionRepository::new(db.pool().clone());
    (db, repository)
}

pub fn transaction(id: i64, user_id: i64, amount: &str, datetime: &str) -> Transaction {
    Transaction {
        id,
        user_id,
        amount: amount.parse::<Decimal>().expect("test amount should parse"),
        datetime: parse_datetime(datetime),
    }
}

pub fn window(from: &str, to: &str) -> (DateTime<Utc>, DateTime<Utc>) {
    (parse_datetime(from), parse_datetime(to))
}

fn parse_datetime(value: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value)
        .expect("test datetime should parse")
        .with_timezone(&Utc)
}
