use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use draftwise_types::errors::ApplicationError;

use crate::{
    config::Config,
    context::AppContext,
    cqrs::{CommandHandler, commands::EndDraft},
};

pub struct EndDraftCommandHandler;

impl EndDraftCommandHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandHandler<EndDraft> for EndDraftCommandHandler {
    async fn handle(
        &self,
        command: EndDraft,
        ctx: &dyn AppContext,
        _config: &Arc<Config>,
    ) -> Result<(), ApplicationError> {
        ctx.sessions().remove(command.session_id).await?;
        info!(session_id = %command.session_id, "Draft session ended");
        Ok(())
    }
}
