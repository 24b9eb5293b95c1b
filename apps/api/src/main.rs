use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

use hospital_api::api::{router, AppState};
use hospital_api::config::Config;
use hospital_api::domain::errors::HospitalResult;
use hospital_api::infrastructure::repositories::PostgresHospitalRepository;
use hospital_api::service::HospitalService;

#[tokio::main]
async fn main() -> HospitalResult<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("hospital_api=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    // Connect to database
    tracing::info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;
    tracing::info!("Database connected successfully");

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Database migrations applied");

    // Wire repository -> service -> router
    let repo = Arc::new(PostgresHospitalRepository::new(pool));
    let service = HospitalService::new(repo, config.bcrypt_cost);
    let app = router(AppState::new(service));

    // Start server
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Hospital API is running on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
