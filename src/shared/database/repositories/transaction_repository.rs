use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{PgPool, Row};

use crate::domains::ledger::models::{BalanceResponse, Transaction};

/// SQL access to the transactions table. One instance per service,
/// all sharing the pool created at startup.
#[derive(Clone)]
pub struct TransactionRepository {
    pool: PgPool,
}

impl TransactionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Apply one row as delete-then-insert in a single statement.
    ///
    /// The CTE makes the delete+insert pair the unit of atomicity, so
    /// reprocessing a file with the same ids is idempotent per row.
    pub async fn upsert(&self, transaction: &Transaction) -> Result<()> {
        sqlx::query(
            r#"
            WITH del AS (
                DELETE FROM transactions
                WHERE id = $1
            )
            INSERT INTO transactions (id, user_id, amount, datetime)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(transaction.id)
        .bind(transaction.user_id)
        .bind(transaction.amount)
        .bind(transaction.datetime)
        .execute(&self.pool)
        .await
        .context("Failed to write transaction row")?;

        Ok(())
    }

    /// Signed sum plus strict negative/positive counts for one user,
    /// optionally restricted to a datetime window.
    ///
    /// Zero-amount rows land in the sum but in neither count. An empty
    /// or backwards window matches nothing and yields zero sum and
    /// zero counts, not an error.
    pub async fn balance(
        &self,
        user_id: i64,
        window: Option<(DateTime<Utc>, DateTime<Utc>)>,
    ) -> Result<BalanceResponse> {
        let row = match window {
            Some((from, to)) => {
                sqlx::query(
                    r#"
                    SELECT
                        COALESCE(SUM(amount), 0) AS balance,
                        COUNT(CASE WHEN amount < 0 THEN 1 END) AS debits,
                        COUNT(CASE WHEN amount > 0 THEN 1 END) AS credits
                    FROM transactions
                    WHERE user_id = $1 AND datetime BETWEEN $2 AND $3
                    "#,
                )
                .bind(user_id)
                .bind(from)
                .bind(to)
                .fetch_one(&self.pool)
                .await
            }
            None => {
                sqlx::query(
                    r#"
                    SELECT
                        COALESCE(SUM(amount), 0) AS balance,
                        COUNT(CASE WHEN amount < 0 THEN 1 END) AS debits,
                        COUNT(CASE WHEN amount > 0 THEN 1 END) AS credits
                    FROM transactions
                    WHERE user_id = $1
                    "#,
                )
                .bind(user_id)
                .fetch_one(&self.pool)
                .await
            }
        }
        .context("Failed to run balance aggregate")?;

        Ok(BalanceResponse {
            balance: row.get::<Decimal, _>("balance"),
            total_debits: row.get::<i64, _>("debits"),
            total_credits: row.get::<i64, _>("credits"),
        })
    }
}
