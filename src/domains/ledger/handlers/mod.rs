// Ledger handlers module
pub mod balance_handler;
pub mod migration_handler;

pub use balance_handler::*;
pub use migration_handler::*;
