use std::path::PathBuf;
use thiserror::Error;

use crate::common::HeroId;

/// Errors for loading hero and matchup data.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("Unable to read {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("Hero {0} is defined more than once")]
    DuplicateHero(HeroId),

    #[error("Matchup entry references hero {0}, which is not in the catalog")]
    UnknownHeroInMatchups(HeroId),
}
