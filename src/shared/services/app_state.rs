use crate::domains::ledger::services::LedgerState;
use crate::shared::database::Database;

/// Application state shared across handlers.
///
/// The database pool is created once in main and handed to every
/// service at construction time; no component reads ambient state.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub ledger_state: LedgerState,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        let ledger_state = LedgerState::new(db.clone());

        Self { db, ledger_state }
    }
}
