use std::sync::Arc;

use anyhow::Context;

use orderflow_api::app::{AppServices, build_app};
use orderflow_api::config::ApiConfig;
use orderflow_fulfillment::SystemClock;
use orderflow_infra::{CatalogSeed, InMemoryCatalog, LoggingNotifier};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ApiConfig::from_env().context("invalid configuration")?;
    orderflow_observability::init_with(config.log_format);

    let catalog = match &config.seed_path {
        Some(path) => {
            let seed = CatalogSeed::from_path(path)
                .with_context(|| format!("failed to load seed {}", path.display()))?;
            InMemoryCatalog::from_seed(seed).context("seed rejected")?
        }
        None => {
            tracing::warn!("ORDERFLOW_SEED_PATH not set; starting with an empty catalog");
            InMemoryCatalog::new()
        }
    };

    let services = AppServices::new(Arc::new(catalog), Arc::new(LoggingNotifier), Arc::new(SystemClock));
    let app = build_app(Arc::new(services));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
