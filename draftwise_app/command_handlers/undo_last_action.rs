use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use draftwise_game::models::draft::DraftState;
use draftwise_types::errors::ApplicationError;

use crate::{
    config::Config,
    context::AppContext,
    cqrs::{CommandHandler, commands::UndoLastAction},
};

pub struct UndoLastActionCommandHandler;

impl UndoLastActionCommandHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandHandler<UndoLastAction> for UndoLastActionCommandHandler {
    async fn handle(
        &self,
        command: UndoLastAction,
        ctx: &dyn AppContext,
        _config: &Arc<Config>,
    ) -> Result<DraftState, ApplicationError> {
        let handle = ctx.sessions().get(command.session_id).await?;

        let mut session = handle.lock().await;
        let next = session.state.undo()?;
        session.state = next.clone();

        info!(
            session_id = %command.session_id,
            slot = next.current_slot(),
            "Draft action undone"
        );

        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use draftwise_game::{matchups::MatchupMatrix, test_utils::catalog_factory};
    use draftwise_types::{common::HeroId, errors::DraftError};

    use super::*;
    use crate::{
        command_handlers::{StartDraftCommandHandler, SubmitActionCommandHandler},
        cqrs::commands::{StartDraft, SubmitAction},
        test_utils::tests::MockAppContext,
    };

    #[tokio::test]
    async fn undo_walks_back_to_empty_then_fails() {
        let ctx = MockAppContext::new(catalog_factory(&[1, 2, 3]), MatchupMatrix::default());
        let config = Arc::new(Config::default());
        let session = StartDraftCommandHandler::new()
            .handle(StartDraft::new(None, "cm"), &ctx, &config)
            .await
            .unwrap();

        for hero in [1, 2] {
            SubmitActionCommandHandler::new()
                .handle(
                    SubmitAction {
                        session_id: session.id,
                        hero_id: HeroId(hero),
                    },
                    &ctx,
                    &config,
                )
                .await
                .unwrap();
        }

        let handler = UndoLastActionCommandHandler::new();
        let cmd = UndoLastAction {
            session_id: session.id,
        };

        let state = handler.handle(cmd.clone(), &ctx, &config).await.unwrap();
        assert_eq!(state.current_slot(), 1);
        assert!(!state.banned().contains(&HeroId(2)));

        let state = handler.handle(cmd.clone(), &ctx, &config).await.unwrap();
        assert_eq!(state, session.state);

        let result = handler.handle(cmd, &ctx, &config).await;
        assert!(matches!(
            result,
            Err(ApplicationError::Draft(DraftError::EmptyHistory))
        ));
    }
}
