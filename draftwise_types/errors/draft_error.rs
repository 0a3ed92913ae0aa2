use thiserror::Error;

use crate::common::HeroId;

/// Errors for domain logic (draft rules).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Hero {hero_id} is not in the hero catalog (slot {slot})")]
    UnknownHero { hero_id: HeroId, slot: usize },

    #[error("Hero {hero_id} is not available at slot {slot}: already picked or banned")]
    IllegalAction { hero_id: HeroId, slot: usize },

    #[error("Draft is complete: no slot left after {slot}")]
    TerminalDraft {
        slot: usize,
        /// The hero of the rejected action, if one was attempted.
        hero_id: Option<HeroId>,
    },

    #[error("No actions to undo")]
    EmptyHistory,
}
