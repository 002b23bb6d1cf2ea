// src/main.rs
mod config;
mod content;
mod context;
mod handlers;
mod i18n;
mod middleware;
mod models;
mod routes;
mod storage;
mod templates;
mod utils;
mod wizard;

use crate::config::Config;
use crate::middleware::cache::PageCache;
use crate::middleware::rate_limit::RateLimiter;
use crate::routes::create_router;
use crate::storage::client::ClientStore;
use anyhow::Context;
use std::sync::Arc;
use std::time::Duration;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub client_store: ClientStore,
    pub page_cache: PageCache,
    pub form_limiter: Arc<RateLimiter>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("jifunze=info,tower_http=info")),
        )
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .init();

    tracing::info!("🚀 Starting Jifunze...");

    let config = Config::from_env().context("Failed to load configuration")?;
    let addr = config.server_addr()?;

    if !config.static_dir.is_dir() {
        tracing::warn!("Static directory {} not found, styles will be missing", config.static_dir.display());
    }

    let form_limiter = Arc::new(RateLimiter::new(
        config.form_rate_limit,
        config.form_rate_window_secs,
    ));

    let state = Arc::new(AppState {
        client_store: ClientStore::new(config.cookie_max_age_days),
        page_cache: PageCache::new(config.page_cache_ttl_secs),
        form_limiter: form_limiter.clone(),
        config,
    });

    // Rate limiter cleanup task
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(300));
        loop {
            interval.tick().await;
            form_limiter.cleanup().await;
            tracing::debug!("Rate limiter cleanup completed");
        }
    });

    let app = create_router(state).layer(TraceLayer::new_for_http());

    tracing::info!("✅ Jifunze listening on {}", addr);
    tracing::info!("🌐 Web UI: http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
