//! Binary for the LINE recorder bot: config, tracing, storage, router, and
//! the webhook server.

mod app;
mod config;

use anyhow::Result;
use app::AppState;
use config::AppConfig;
use event_router::{EventRouter, MenuBindingTracker};
use memobot_core::init_tracing;
use memobot_line::{HttpLineClient, LineConfig};
use std::sync::Arc;
use storage::{BindingRepository, SqlitePoolManager, UtteranceRepository};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let app_config = AppConfig::from_env()?;
    let line_config = LineConfig::from_env()?;
    init_tracing(&app_config.log_file)?;

    let pool = SqlitePoolManager::new(&app_config.database_url).await?;
    let utterances = UtteranceRepository::with_pool(pool.clone()).await?;
    let bindings = BindingRepository::with_pool(pool).await?;

    let client = Arc::new(match &line_config.api_url {
        Some(url) => {
            HttpLineClient::with_base_url(line_config.channel_token.clone(), url.clone())
        }
        None => HttpLineClient::new(line_config.channel_token.clone()),
    });

    let tracker = MenuBindingTracker::new(
        Arc::new(bindings),
        client.clone(),
        line_config.rich_menu_id.clone(),
    );
    let router = EventRouter::new(
        Arc::new(utterances),
        tracker,
        app_config.local_zone,
        app_config.triggers.clone(),
    );

    let state = AppState::new(Arc::new(router), client);
    let web = app::build_router(state);

    let listener = tokio::net::TcpListener::bind(&app_config.bind_addr).await?;
    info!(
        addr = %app_config.bind_addr,
        zone = %app_config.local_zone,
        "Webhook server listening"
    );
    axum::serve(listener, web).await?;

    Ok(())
}
