use async_trait::async_trait;
use std::sync::Arc;

use draftwise_game::models::hero::Hero;
use draftwise_types::errors::ApplicationError;

use crate::{
    config::Config,
    context::AppContext,
    cqrs::{Query, QueryHandler, queries::ListHeroes},
};

pub struct ListHeroesHandler {}

impl ListHeroesHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<ListHeroes> for ListHeroesHandler {
    async fn handle(
        &self,
        query: ListHeroes,
        ctx: &dyn AppContext,
        _config: &Arc<Config>,
    ) -> Result<<ListHeroes as Query>::Output, ApplicationError> {
        let catalog = ctx.heroes();

        // Narrowest lookup first, remaining filters applied on top.
        let candidates: Vec<&Hero> = if let Some(name) = &query.name {
            catalog.find_by_name(name).into_iter().collect()
        } else if let Some(text) = &query.search {
            catalog.search(text)
        } else if let Some(role) = query.role {
            catalog.find_by_role(role)
        } else if let Some(attribute) = query.attribute {
            catalog.find_by_attribute(attribute)
        } else {
            catalog.heroes()
        };

        let needle = query.search.as_ref().map(|text| text.trim().to_lowercase());
        let heroes = candidates
            .into_iter()
            .filter(|h| {
                needle
                    .as_ref()
                    .is_none_or(|n| h.localized_name.to_lowercase().contains(n))
            })
            .filter(|h| query.role.is_none_or(|role| h.has_role(role)))
            .filter(|h| query.attribute.is_none_or(|a| h.primary_attribute == a))
            .cloned()
            .collect();

        Ok(heroes)
    }
}
