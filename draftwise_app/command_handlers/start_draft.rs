use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use draftwise_game::models::draft_mode::DraftMode;
use draftwise_types::errors::{AppError, ApplicationError};

use crate::{
    config::Config,
    context::AppContext,
    cqrs::{CommandHandler, commands::StartDraft},
    session::DraftSession,
};

pub struct StartDraftCommandHandler;

impl StartDraftCommandHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandHandler<StartDraft> for StartDraftCommandHandler {
    async fn handle(
        &self,
        command: StartDraft,
        ctx: &dyn AppContext,
        _config: &Arc<Config>,
    ) -> Result<DraftSession, ApplicationError> {
        let mode = DraftMode::by_name(&command.mode)
            .ok_or_else(|| AppError::UnknownDraftMode(command.mode.clone()))?;

        let session = DraftSession::new(Some(command.id), mode);
        ctx.sessions().insert(session.clone()).await?;

        info!(
            session_id = %session.id,
            mode = %session.state.mode().name,
            slots = session.state.mode().len(),
            "Draft session started"
        );

        Ok(session)
    }
}
