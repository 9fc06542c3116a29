// Ledger services module
pub mod balance_service;
pub mod migration_service;
pub mod state;

pub use balance_service::*;
pub use migration_service::*;
pub use state::*;
