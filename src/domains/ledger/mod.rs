// Ledger domain: CSV ingestion and balance aggregation over the
// transactions table.
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
