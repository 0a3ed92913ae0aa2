use async_trait::async_trait;
use std::sync::Arc;

use draftwise_game::matchups::HeroMatchups;
use draftwise_types::errors::{AppError, ApplicationError};

use crate::{
    config::Config,
    context::AppContext,
    cqrs::{Query, QueryHandler, queries::GetHeroMatchups},
};

pub struct GetHeroMatchupsHandler {}

impl GetHeroMatchupsHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<GetHeroMatchups> for GetHeroMatchupsHandler {
    async fn handle(
        &self,
        query: GetHeroMatchups,
        ctx: &dyn AppContext,
        config: &Arc<Config>,
    ) -> Result<<GetHeroMatchups as Query>::Output, ApplicationError> {
        let hero = ctx
            .heroes()
            .get(query.hero_id)
            .cloned()
            .ok_or(AppError::HeroNotFound(query.hero_id))?;
        let limit = query.limit.unwrap_or(config.default_top_n);
        let matchups = ctx.matchups();

        Ok(HeroMatchups::for_hero(hero, matchups.as_ref(), limit))
    }
}

#[cfg(test)]
mod tests {
    use draftwise_game::test_utils::{catalog_factory, matchups_factory};
    use draftwise_types::common::HeroId;

    use super::*;
    use crate::test_utils::tests::MockAppContext;

    fn setup() -> MockAppContext {
        let catalog = catalog_factory(&[1, 2, 3, 4]);
        let matchups = matchups_factory(
            &[(1, 2, 0.4), (1, 3, 0.1), (4, 1, 0.3)],
            &[(1, 3, 0.2), (1, 4, 0.05)],
        );
        MockAppContext::new(catalog, matchups)
    }

    #[tokio::test]
    async fn summarises_counters_and_synergies() {
        let ctx = setup();
        let config = Arc::new(Config::default());
        let query = GetHeroMatchups {
            hero_id: HeroId(1),
            limit: None,
        };

        let summary = GetHeroMatchupsHandler::new()
            .handle(query, &ctx, &config)
            .await
            .unwrap();

        assert_eq!(summary.hero.id, HeroId(1));
        let counters: Vec<HeroId> = summary.counters.iter().map(|m| m.hero_id).collect();
        assert_eq!(counters, vec![HeroId(2), HeroId(3)]);
        let countered_by: Vec<HeroId> = summary.countered_by.iter().map(|m| m.hero_id).collect();
        assert_eq!(countered_by, vec![HeroId(4)]);
        assert_eq!(summary.synergies[0].hero_id, HeroId(3));
        assert_eq!(summary.synergies.len(), 2);
    }

    #[tokio::test]
    async fn limit_caps_every_list() {
        let ctx = setup();
        let config = Arc::new(Config::default());
        let query = GetHeroMatchups {
            hero_id: HeroId(1),
            limit: Some(1),
        };

        let summary = GetHeroMatchupsHandler::new()
            .handle(query, &ctx, &config)
            .await
            .unwrap();

        assert_eq!(summary.counters.len(), 1);
        assert_eq!(summary.synergies.len(), 1);
    }

    #[tokio::test]
    async fn unknown_hero_is_not_found() {
        let ctx = setup();
        let config = Arc::new(Config::default());
        let query = GetHeroMatchups {
            hero_id: HeroId(99),
            limit: None,
        };

        let result = GetHeroMatchupsHandler::new()
            .handle(query, &ctx, &config)
            .await;

        assert!(matches!(
            result,
            Err(ApplicationError::App(AppError::HeroNotFound(HeroId(99))))
        ));
    }
}
