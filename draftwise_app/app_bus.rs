use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

use draftwise_game::{
    analysis::WinProbability,
    matchups::HeroMatchups,
    models::{draft::DraftState, hero::Hero},
    scoring::Recommendation,
};
use draftwise_types::{
    common::HeroId,
    errors::{ApplicationError, Result},
};

use crate::{
    command_handlers::{
        EndDraftCommandHandler, StartDraftCommandHandler, SubmitActionCommandHandler,
        UndoLastActionCommandHandler,
    },
    config::Config,
    context::AppContext,
    cqrs::{
        Command, CommandHandler, Query, QueryHandler,
        commands::{EndDraft, StartDraft, SubmitAction, UndoLastAction},
        queries::{
            GetDraftState, GetHeroMatchups, GetRecommendations, GetWinProbability, ListHeroes,
        },
    },
    queries_handlers::{
        GetDraftStateHandler, GetHeroMatchupsHandler, GetRecommendationsHandler,
        GetWinProbabilityHandler, ListHeroesHandler,
    },
    session::DraftSession,
};

/// AppBus (Mediator)
/// This struct is the central entry point for draft sessions.
/// It does not contain any draft or scoring logic itself: it dispatches
/// Commands and Queries to their handlers and surfaces their typed errors.
pub struct AppBus {
    config: Arc<Config>,
    context: Arc<dyn AppContext>,
}

impl AppBus {
    pub fn new(config: Arc<Config>, context: Arc<dyn AppContext>) -> Self {
        Self { config, context }
    }

    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Executes a command.
    /// A command is an operation that modifies a session.
    pub async fn execute<C, H>(&self, cmd: C, handler: H) -> Result<C::Output, ApplicationError>
    where
        C: Command,
        H: CommandHandler<C>,
    {
        let result = handler.handle(cmd, self.context.as_ref(), &self.config).await;
        if let Err(e) = &result {
            warn!(error = %e, "Command rejected");
        }
        result
    }

    /// Executes a query.
    /// A query reads session state and returns data. It never modifies it.
    pub async fn query<Q, H>(&self, query: Q, handler: H) -> Result<Q::Output, ApplicationError>
    where
        Q: Query,
        H: QueryHandler<Q>,
    {
        handler
            .handle(query, self.context.as_ref(), &self.config)
            .await
    }

    pub async fn start_draft(&self, mode: &str) -> Result<DraftSession, ApplicationError> {
        self.execute(StartDraft::new(None, mode), StartDraftCommandHandler::new())
            .await
    }

    pub async fn submit_action(
        &self,
        session_id: Uuid,
        hero_id: HeroId,
    ) -> Result<DraftState, ApplicationError> {
        self.execute(
            SubmitAction {
                session_id,
                hero_id,
            },
            SubmitActionCommandHandler::new(),
        )
        .await
    }

    pub async fn undo_last_action(&self, session_id: Uuid) -> Result<DraftState, ApplicationError> {
        self.execute(
            UndoLastAction { session_id },
            UndoLastActionCommandHandler::new(),
        )
        .await
    }

    pub async fn end_draft(&self, session_id: Uuid) -> Result<(), ApplicationError> {
        self.execute(EndDraft { session_id }, EndDraftCommandHandler::new())
            .await
    }

    pub async fn get_recommendations(
        &self,
        session_id: Uuid,
        top_n: Option<usize>,
    ) -> Result<Vec<Recommendation>, ApplicationError> {
        self.query(
            GetRecommendations { session_id, top_n },
            GetRecommendationsHandler::new(),
        )
        .await
    }

    pub async fn get_draft_state(&self, session_id: Uuid) -> Result<DraftState, ApplicationError> {
        self.query(GetDraftState { session_id }, GetDraftStateHandler::new())
            .await
    }

    pub async fn get_win_probability(
        &self,
        session_id: Uuid,
    ) -> Result<WinProbability, ApplicationError> {
        self.query(
            GetWinProbability { session_id },
            GetWinProbabilityHandler::new(),
        )
        .await
    }

    pub async fn list_heroes(&self, filter: ListHeroes) -> Result<Vec<Hero>, ApplicationError> {
        self.query(filter, ListHeroesHandler::new()).await
    }

    pub async fn get_hero_matchups(
        &self,
        hero_id: HeroId,
        limit: Option<usize>,
    ) -> Result<HeroMatchups, ApplicationError> {
        self.query(
            GetHeroMatchups { hero_id, limit },
            GetHeroMatchupsHandler::new(),
        )
        .await
    }
}
