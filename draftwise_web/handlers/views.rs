use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use draftwise_app::session::DraftSession;
use draftwise_game::models::{
    draft::{DraftAction, DraftState, LegalAction},
    draft_mode::DraftPhase,
};
use draftwise_types::common::{HeroId, Side};

/// Client-facing snapshot of a draft.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftStateView {
    pub mode: String,
    pub current_slot: usize,
    pub total_slots: usize,
    pub phase: DraftPhase,
    pub is_terminal: bool,
    /// `None` once the draft is over.
    pub next: Option<LegalAction>,
    pub radiant_picks: Vec<HeroId>,
    pub dire_picks: Vec<HeroId>,
    pub radiant_bans: Vec<HeroId>,
    pub dire_bans: Vec<HeroId>,
    pub history: Vec<DraftAction>,
}

impl From<&DraftState> for DraftStateView {
    fn from(state: &DraftState) -> Self {
        Self {
            mode: state.mode().name.clone(),
            current_slot: state.current_slot(),
            total_slots: state.mode().len(),
            phase: state.phase(),
            is_terminal: state.is_terminal(),
            next: state.legal_action().ok(),
            radiant_picks: state.picks(Side::Radiant).to_vec(),
            dire_picks: state.picks(Side::Dire).to_vec(),
            radiant_bans: state.bans_by(Side::Radiant),
            dire_bans: state.bans_by(Side::Dire),
            history: state.history().to_vec(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionView {
    pub session_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub state: DraftStateView,
}

impl From<&DraftSession> for SessionView {
    fn from(session: &DraftSession) -> Self {
        Self {
            session_id: session.id,
            created_at: session.created_at,
            state: DraftStateView::from(&session.state),
        }
    }
}
