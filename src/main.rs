//! Composition root: loads configuration, wires the store and clock, and
//! serves the router.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use festa_web::config::app::AppConfig;
use festa_web::store::JsonFileStore;
use festa_web::time::SystemClock;
use festa_web::web::{build_router, AppDeps};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();
    let bind_addr = config.http.bind_addr.clone();

    let deps = AppDeps {
        store: Arc::new(JsonFileStore::new(config.store.root.clone())),
        clock: Arc::new(SystemClock::new()),
        config,
    };
    let app = build_router(deps);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("bind {bind_addr}"))?;
    tracing::info!(addr = %bind_addr, "listening");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
