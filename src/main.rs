use athlete_stats::api::routes::create_routes;
use athlete_stats::config::{run_migrations, AppConfig, DatabaseConfig, StorageBackend};
use athlete_stats::database::{InMemoryStore, PostgresStore, TrainingDataStore};
use athlete_stats::services::{DashboardService, StatisticsService};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
#[instrument]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    let store: Arc<dyn TrainingDataStore> = match config.storage_backend {
        StorageBackend::Postgres => {
            let db_config = DatabaseConfig::from_env()?;
            let pool = db_config.create_pool().await?;
            run_migrations(&pool).await?;
            info!("Connected to PostgreSQL with up to {} connections", db_config.max_connections);
            Arc::new(PostgresStore::new(pool))
        }
        StorageBackend::Memory => {
            if config.is_production() {
                warn!("In-memory storage selected in production; data will not persist");
            }
            Arc::new(InMemoryStore::new())
        }
    };

    let dashboard = DashboardService::new(StatisticsService::new(store));

    // Create the application routes
    let app = create_routes(dashboard);

    // Start the server
    let address = config.server_address();
    let listener = TcpListener::bind(&address).await?;
    info!("Athlete stats server starting on http://{}", address);
    info!("Health check available at http://{}/health", address);

    axum::serve(listener, app).await?;

    Ok(())
}
