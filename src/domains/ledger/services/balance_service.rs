use chrono::{DateTime, Utc};
use tracing::error;

use crate::domains::ledger::models::BalanceResponse;
use crate::shared::database::repositories::TransactionRepository;
use crate::shared::errors::LedgerError;

/// Balance aggregation: one aggregate query per request, nothing cached.
#[derive(Clone)]
pub struct BalanceService {
    repository: TransactionRepository,
}

impl BalanceService {
    pub fn new(repository: TransactionRepository) -> Self {
        Self { repository }
    }

    /// Compute the signed sum and strict debit/credit counts for one
    /// user, optionally windowed by `from`/`to`.
    pub async fn get_balance(
        &self,
        user_id: i64,
        from: Option<&str>,
        to: Option<&str>,
    ) -> Result<BalanceResponse, LedgerError> {
        let window = parse_window(from, to)?;

        self.repository
            .balance(user_id, window)
            .await
            .map_err(|err| {
                error!(user_id, %err, "balance aggregate failed");
                LedgerError::QueryFailed
            })
    }
}

/// Both-or-neither window rule: the filter applies only when both
/// bounds are present and non-empty. A lone bound is ignored; once both
/// are given, each must parse as RFC 3339 or the request is rejected.
pub fn parse_window(
    from: Option<&str>,
    to: Option<&str>,
) -> Result<Option<(DateTime<Utc>, DateTime<Utc>)>, LedgerError> {
    let (from, to) = match (from, to) {
        (Some(from), Some(to)) if !from.is_empty() && !to.is_empty() => (from, to),
        _ => return Ok(None),
    };

    let from = DateTime::parse_from_rfc3339(from)
        .map_err(|_| LedgerError::InvalidFromDate)?
        .with_timezone(&Utc);
    let to = DateTime::parse_from_rfc3339(to)
        .map_err(|_| LedgerError::InvalidToDate)?
        .with_timezone(&Utc);

    Ok(Some((from, to)))
}
