use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use draftwise_game::models::{draft::DraftState, draft_mode::DraftMode};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftSession {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub state: DraftState,
}

impl DraftSession {
    pub fn new(id: Option<Uuid>, mode: DraftMode) -> Self {
        Self {
            id: id.unwrap_or(Uuid::new_v4()),
            created_at: Utc::now(),
            state: DraftState::new(mode),
        }
    }
}
