use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use draftwise_game::models::draft::DraftState;
use draftwise_types::errors::ApplicationError;

use crate::{
    config::Config,
    context::AppContext,
    cqrs::{CommandHandler, commands::SubmitAction},
};

pub struct SubmitActionCommandHandler;

impl SubmitActionCommandHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandHandler<SubmitAction> for SubmitActionCommandHandler {
    async fn handle(
        &self,
        command: SubmitAction,
        ctx: &dyn AppContext,
        _config: &Arc<Config>,
    ) -> Result<DraftState, ApplicationError> {
        let catalog = ctx.heroes();
        let handle = ctx.sessions().get(command.session_id).await?;

        // One writer at a time per session; a rejected action leaves the stored state as is.
        let mut session = handle.lock().await;
        let next = session
            .state
            .apply_action(command.hero_id, catalog.as_ref())?;
        session.state = next.clone();

        if let Some(action) = next.history().last() {
            info!(
                session_id = %command.session_id,
                hero_id = %action.hero_id,
                side = %action.side,
                action = %action.action,
                slot = action.slot_index,
                "Draft action applied"
            );
        }

        Ok(next)
    }
}
