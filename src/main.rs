use std::sync::Arc;

use anyhow::Context;
use exercise_tracker::api::create_routes;
use exercise_tracker::config::{AppConfig, DatabaseConfig, StoreBackend};
use exercise_tracker::store::{MemoryStore, PgStore, Store};
use exercise_tracker::telemetry;
use tokio::net::TcpListener;
use tracing::{info, warn};

async fn build_store(backend: StoreBackend) -> anyhow::Result<Arc<dyn Store>> {
    match backend {
        StoreBackend::Postgres => {
            let db_config = DatabaseConfig::from_env()?;
            let pool = db_config
                .create_pool()
                .await
                .context("connect to database")?;

            let store = PgStore::new(pool);
            store.migrate().await.context("run migrations")?;
            Ok(Arc::new(store))
        }
        StoreBackend::Memory => {
            warn!("Using in-memory store, data is lost on shutdown");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    telemetry::init(&config.log_level);

    let store = build_store(config.store_backend).await?;
    let app = create_routes(store, &config.static_files);

    let address = config.server_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("bind {}", address))?;
    info!(
        environment = %config.environment,
        "Exercise tracker listening on http://{}",
        listener.local_addr()?
    );
    info!("Health check available at http://{}/health", address);

    axum::serve(listener, app).await?;

    Ok(())
}
