use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use draftwise_types::errors::ApplicationError;

use crate::{
    config::Config,
    context::AppContext,
    cqrs::{Query, QueryHandler, queries::GetRecommendations},
};

pub struct GetRecommendationsHandler {}

impl GetRecommendationsHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<GetRecommendations> for GetRecommendationsHandler {
    async fn handle(
        &self,
        query: GetRecommendations,
        ctx: &dyn AppContext,
        config: &Arc<Config>,
    ) -> Result<<GetRecommendations as Query>::Output, ApplicationError> {
        let handle = ctx.sessions().get(query.session_id).await?;
        // Score a snapshot so writers aren't blocked while ranking.
        let state = handle.lock().await.state.clone();

        let top_n = query.top_n.unwrap_or(config.default_top_n);
        let catalog = ctx.heroes();
        let matchups = ctx.matchups();

        let recommendations = config
            .scorer()
            .recommend(&state, matchups.as_ref(), catalog.as_ref(), top_n)?;

        debug!(
            session_id = %query.session_id,
            slot = state.current_slot(),
            top_n,
            returned = recommendations.len(),
            "Recommendations computed"
        );

        Ok(recommendations)
    }
}
