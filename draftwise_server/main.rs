use std::sync::Arc;

use draftwise_app::{app_bus::AppBus, config::Config};
use draftwise_db::InMemoryAppContext;
use draftwise_types::errors::{ApplicationError, Result};
use draftwise_web::{AppState, WebRouter};

mod logs;
use logs::setup_logging;

#[tokio::main]
#[cfg(not(tarpaulin_include))]
async fn main() -> Result<(), ApplicationError> {
    let _log_guard = setup_logging();
    let (config, app_bus) = setup_app().await?;
    let state = AppState::new(app_bus);

    WebRouter::serve(state, config.port).await
}

async fn setup_app() -> Result<(Arc<Config>, Arc<AppBus>), ApplicationError> {
    let config = Arc::new(Config::from_env());
    tracing::debug!(?config, "Configuration loaded");

    let context = match InMemoryAppContext::from_config(&config).await {
        Ok(context) => context,
        Err(e) => {
            tracing::error!("Unable to load hero data: {e}");
            return Err(e);
        }
    };

    let app_bus = Arc::new(AppBus::new(config.clone(), Arc::new(context)));
    Ok((config, app_bus))
}
