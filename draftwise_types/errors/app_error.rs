use thiserror::Error;
use uuid::Uuid;

use crate::common::HeroId;

/// Errors for app logic.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Draft session {0} not found")]
    SessionNotFound(Uuid),

    #[error("Draft session {0} already exists")]
    SessionExists(Uuid),

    #[error("Unknown draft mode '{0}'")]
    UnknownDraftMode(String),

    #[error("Hero {0} not found")]
    HeroNotFound(HeroId),
}
