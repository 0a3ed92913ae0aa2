use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use draftwise_game::{analysis::WinProbability, scoring::Recommendation};
use draftwise_types::common::HeroId;

use crate::{
    handlers::{ApiError, ApiJson, ApiPath, ApiQuery, DraftStateView, SessionView},
    http::AppState,
};

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateDraftRequest {
    pub mode: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitActionRequest {
    pub hero_id: HeroId,
}

#[derive(Debug, Deserialize)]
pub struct RecommendationsQuery {
    pub top_n: Option<usize>,
}

/// POST /drafts
pub async fn create_draft(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateDraftRequest>,
) -> Result<Response, ApiError> {
    let session = state.app_bus.start_draft(&payload.mode).await?;
    Ok((StatusCode::CREATED, Json(SessionView::from(&session))).into_response())
}

/// GET /drafts/{id}
pub async fn get_draft(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<DraftStateView>, ApiError> {
    let draft = state.app_bus.get_draft_state(id).await?;
    Ok(Json(DraftStateView::from(&draft)))
}

/// POST /drafts/{id}/actions
pub async fn submit_action(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<SubmitActionRequest>,
) -> Result<Json<DraftStateView>, ApiError> {
    let draft = state.app_bus.submit_action(id, payload.hero_id).await?;
    Ok(Json(DraftStateView::from(&draft)))
}

/// POST /drafts/{id}/undo
pub async fn undo_action(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<DraftStateView>, ApiError> {
    let draft = state.app_bus.undo_last_action(id).await?;
    Ok(Json(DraftStateView::from(&draft)))
}

/// GET /drafts/{id}/recommendations?top_n={n}
pub async fn recommendations(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiQuery(params): ApiQuery<RecommendationsQuery>,
) -> Result<Json<Vec<Recommendation>>, ApiError> {
    let recs = state.app_bus.get_recommendations(id, params.top_n).await?;
    Ok(Json(recs))
}

/// GET /drafts/{id}/win-probability
pub async fn win_probability(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<WinProbability>, ApiError> {
    let probability = state.app_bus.get_win_probability(id).await?;
    Ok(Json(probability))
}

/// DELETE /drafts/{id}
pub async fn delete_draft(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.app_bus.end_draft(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
