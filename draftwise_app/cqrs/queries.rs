use uuid::Uuid;

use draftwise_game::{
    analysis::WinProbability,
    matchups::HeroMatchups,
    models::{draft::DraftState, hero::Hero},
    scoring::Recommendation,
};
use draftwise_types::{
    common::HeroId,
    hero::{PrimaryAttribute, Role},
};

use crate::cqrs::Query;

/// Ranked candidates for the side on the clock.
/// Without `top_n`, the configured default length is used.
pub struct GetRecommendations {
    pub session_id: Uuid,
    pub top_n: Option<usize>,
}

impl Query for GetRecommendations {
    type Output = Vec<Recommendation>;
}

pub struct GetDraftState {
    pub session_id: Uuid,
}

impl Query for GetDraftState {
    type Output = DraftState;
}

pub struct GetWinProbability {
    pub session_id: Uuid,
}

impl Query for GetWinProbability {
    type Output = WinProbability;
}

/// Catalog listing. Every given filter must match; none lists the whole catalog.
#[derive(Debug, Clone, Default)]
pub struct ListHeroes {
    /// Exact internal or localized name.
    pub name: Option<String>,
    /// Substring of the localized name.
    pub search: Option<String>,
    pub role: Option<Role>,
    pub attribute: Option<PrimaryAttribute>,
}

impl Query for ListHeroes {
    type Output = Vec<Hero>;
}

/// Without `limit`, the configured default length is used for each list.
pub struct GetHeroMatchups {
    pub hero_id: HeroId,
    pub limit: Option<usize>,
}

impl Query for GetHeroMatchups {
    type Output = HeroMatchups;
}
