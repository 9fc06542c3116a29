// Ledger models module
pub mod balance;
pub mod stats;
pub mod transaction;

pub use balance::*;
pub use stats::*;
pub use transaction::*;
