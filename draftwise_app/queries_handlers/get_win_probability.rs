use async_trait::async_trait;
use std::sync::Arc;

use draftwise_game::analysis::win_probability;
use draftwise_types::errors::ApplicationError;

use crate::{
    config::Config,
    context::AppContext,
    cqrs::{Query, QueryHandler, queries::GetWinProbability},
};

pub struct GetWinProbabilityHandler {}

impl GetWinProbabilityHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<GetWinProbability> for GetWinProbabilityHandler {
    async fn handle(
        &self,
        query: GetWinProbability,
        ctx: &dyn AppContext,
        _config: &Arc<Config>,
    ) -> Result<<GetWinProbability as Query>::Output, ApplicationError> {
        let handle = ctx.sessions().get(query.session_id).await?;
        let state = handle.lock().await.state.clone();
        let matchups = ctx.matchups();

        Ok(win_probability(&state, matchups.as_ref()))
    }
}
