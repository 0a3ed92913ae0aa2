use axum::{
    Router,
    routing::{get, post},
};
use std::{io::Error, net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use draftwise_app::app_bus::AppBus;
use draftwise_types::errors::{ApplicationError, Result};

use crate::handlers::{
    create_draft, delete_draft, get_draft, hero_matchups, list_heroes, recommendations,
    submit_action, undo_action, win_probability,
};

#[derive(Clone)]
pub struct AppState {
    pub app_bus: Arc<AppBus>,
}

impl AppState {
    pub fn new(app_bus: Arc<AppBus>) -> AppState {
        AppState { app_bus }
    }
}

pub struct WebRouter {}

impl WebRouter {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/drafts", post(create_draft))
            .route("/drafts/{id}", get(get_draft).delete(delete_draft))
            .route("/drafts/{id}/actions", post(submit_action))
            .route("/drafts/{id}/undo", post(undo_action))
            .route("/drafts/{id}/recommendations", get(recommendations))
            .route("/drafts/{id}/win-probability", get(win_probability))
            .route("/heroes", get(list_heroes))
            .route("/heroes/{id}/matchups", get(hero_matchups))
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    pub async fn serve(state: AppState, port: u16) -> Result<(), ApplicationError> {
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let listener = TcpListener::bind(addr).await.map_err(infra_error)?;
        Self::serve_with_listener(state, listener).await
    }

    /// Serves on an already bound listener (tests bind to port 0).
    pub async fn serve_with_listener(
        state: AppState,
        listener: TcpListener,
    ) -> Result<(), ApplicationError> {
        let addr = listener.local_addr().map_err(infra_error)?;
        tracing::info!("HTTP Server started, listening on http://{}", addr);

        axum::serve(listener, Self::router(state))
            .await
            .map_err(infra_error)?;

        Ok(())
    }
}

fn infra_error(e: Error) -> ApplicationError {
    let err = format!("{:#?}", e);
    ApplicationError::Infrastructure(err)
}
