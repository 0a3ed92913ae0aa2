use async_trait::async_trait;
use std::sync::Arc;

use draftwise_types::errors::ApplicationError;

use crate::{
    config::Config,
    context::AppContext,
    cqrs::{Query, QueryHandler, queries::GetDraftState},
};

pub struct GetDraftStateHandler {}

impl GetDraftStateHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<GetDraftState> for GetDraftStateHandler {
    async fn handle(
        &self,
        query: GetDraftState,
        ctx: &dyn AppContext,
        _config: &Arc<Config>,
    ) -> Result<<GetDraftState as Query>::Output, ApplicationError> {
        let handle = ctx.sessions().get(query.session_id).await?;
        let state = handle.lock().await.state.clone();
        Ok(state)
    }
}
