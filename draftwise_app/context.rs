use std::sync::Arc;

use draftwise_game::{catalog::HeroCatalog, matchups::MatchupRepository};

use crate::repository::SessionRepository;

/// Provides the repositories every handler works with.
/// Hero and matchup data are read-only snapshots shared by all sessions.
pub trait AppContext: Send + Sync {
    fn sessions(&self) -> Arc<dyn SessionRepository>;
    fn heroes(&self) -> Arc<dyn HeroCatalog>;
    fn matchups(&self) -> Arc<dyn MatchupRepository>;
}
