use std::sync::Arc;

use draftwise_app::{config::Config, context::AppContext, repository::SessionRepository};
use draftwise_game::{
    catalog::{HeroCatalog, InMemoryHeroCatalog},
    matchups::{MatchupMatrix, MatchupRepository},
};
use draftwise_types::errors::Result;

use crate::{
    loader::{load_hero_catalog, load_matchups},
    repository::InMemorySessionRepository,
};

/// Wires the in-memory session store to the loaded hero and matchup data.
#[derive(Clone)]
pub struct InMemoryAppContext {
    sessions: Arc<InMemorySessionRepository>,
    heroes: Arc<InMemoryHeroCatalog>,
    matchups: Arc<MatchupMatrix>,
}

impl InMemoryAppContext {
    pub fn new(heroes: InMemoryHeroCatalog, matchups: MatchupMatrix) -> Self {
        Self {
            sessions: Arc::new(InMemorySessionRepository::new()),
            heroes: Arc::new(heroes),
            matchups: Arc::new(matchups),
        }
    }

    /// Loads the data files named in `config`.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let heroes = load_hero_catalog(&config.heroes_path).await?;
        let matchups = load_matchups(&config.matchups_path, &heroes).await?;
        Ok(Self::new(heroes, matchups))
    }
}

impl AppContext for InMemoryAppContext {
    fn sessions(&self) -> Arc<dyn SessionRepository> {
        self.sessions.clone()
    }

    fn heroes(&self) -> Arc<dyn HeroCatalog> {
        self.heroes.clone()
    }

    fn matchups(&self) -> Arc<dyn MatchupRepository> {
        self.matchups.clone()
    }
}

#[cfg(test)]
mod tests {
    use draftwise_app::session::DraftSession;
    use draftwise_game::{
        models::draft_mode::DraftMode,
        test_utils::{catalog_factory, matchups_factory},
    };
    use draftwise_types::common::HeroId;

    use super::*;

    #[tokio::test]
    async fn exposes_shared_repositories() {
        let ctx = InMemoryAppContext::new(
            catalog_factory(&[1, 2]),
            matchups_factory(&[(1, 2, 4.0)], &[]),
        );

        let session = DraftSession::new(None, DraftMode::all_pick());
        let id = session.id;
        ctx.sessions().insert(session).await.unwrap();

        assert!(ctx.sessions().get(id).await.is_ok());
        assert!(ctx.heroes().exists(HeroId(2)));
        assert_eq!(ctx.matchups().counter_score(HeroId(1), HeroId(2)), 4.0);
    }
}
