use crate::shared::database::repositories::TransactionRepository;
use crate::shared::database::Database;

use super::{BalanceService, MigrationService};

/// Ledger domain state: both services wired over the shared pool.
#[derive(Clone)]
pub struct LedgerState {
    pub migration_service: MigrationService,
    pub balance_service: BalanceService,
}

impl LedgerState {
    pub fn new(db: Database) -> Self {
        Self {
            migration_service: MigrationService::new(TransactionRepository::new(
                db.pool().clone(),
            )),
            balance_service: BalanceService::new(TransactionRepository::new(db.pool().clone())),
        }
    }
}
