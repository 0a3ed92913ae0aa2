use axum::{Json, extract::State};
use serde::Deserialize;

use draftwise_app::cqrs::queries::ListHeroes;
use draftwise_game::{matchups::HeroMatchups, models::hero::Hero};
use draftwise_types::{
    common::HeroId,
    hero::{PrimaryAttribute, Role},
};

use crate::{
    handlers::{ApiError, ApiPath, ApiQuery},
    http::AppState,
};

#[derive(Debug, Default, Deserialize)]
pub struct HeroesQuery {
    pub name: Option<String>,
    pub search: Option<String>,
    pub role: Option<Role>,
    pub attribute: Option<PrimaryAttribute>,
}

impl From<HeroesQuery> for ListHeroes {
    fn from(params: HeroesQuery) -> Self {
        ListHeroes {
            name: params.name,
            search: params.search,
            role: params.role,
            attribute: params.attribute,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct MatchupsQuery {
    pub limit: Option<usize>,
}

/// GET /heroes?name=&search=&role=&attribute=
pub async fn list_heroes(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<HeroesQuery>,
) -> Result<Json<Vec<Hero>>, ApiError> {
    let heroes = state.app_bus.list_heroes(params.into()).await?;
    Ok(Json(heroes))
}

/// GET /heroes/{id}/matchups?limit={n}
pub async fn hero_matchups(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<u32>,
    ApiQuery(params): ApiQuery<MatchupsQuery>,
) -> Result<Json<HeroMatchups>, ApiError> {
    let summary = state
        .app_bus
        .get_hero_matchups(HeroId(id), params.limit)
        .await?;
    Ok(Json(summary))
}
