use axum::http::Method;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use fintech_backend::domains::ledger::models::{
    BalanceResponse, DateRange, ErrorResponse, MigrationStats, MigrationUpload, Transaction,
    TransactionTypes,
};
use fintech_backend::routes::create_router;
use fintech_backend::shared::config::Config;
use fintech_backend::shared::database::Database;
use fintech_backend::shared::services::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        fintech_backend::domains::ledger::handlers::migration_handler::migrate_csv,
        fintech_backend::domains::ledger::handlers::balance_handler::get_balance,
    ),
    components(schemas(
        Transaction,
        MigrationStats,
        MigrationUpload,
        DateRange,
        TransactionTypes,
        BalanceResponse,
        ErrorResponse
    )),
    tags(
        (name = "Migration", description = "Bulk CSV ingestion"),
        (name = "Balance", description = "User balance aggregation")
    ),
    info(
        title = "Fintech Backend API",
        description = "CSV transaction ingestion and balance aggregation",
        version = "1.0.0"
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    let config = Config::from_env();

    let db = Database::new(&config.database_url())
        .await
        .expect("Failed to connect to database");

    // Drop/create of the transactions table is fatal on failure: there
    // is no degraded-start mode.
    db.initialize()
        .await
        .expect("Failed to initialize database");

    let app_state = AppState::new(db);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    let app = Router::new()
        .merge(create_router())
        .merge(SwaggerUi::new("/swagger").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .with_state(app_state);

    let listener = TcpListener::bind(&config.listen_addr())
        .await
        .expect("Failed to bind listen port");

    info!(port = %config.port, "server listening");
    info!("Swagger UI available at /swagger");

    axum::serve(listener, app).await.expect("Server error");
}
