use uuid::Uuid;

use draftwise_game::models::draft::DraftState;
use draftwise_types::common::HeroId;

use crate::{cqrs::Command, session::DraftSession};

#[derive(Debug, Clone)]
pub struct StartDraft {
    pub id: Uuid,
    pub mode: String,
}

impl StartDraft {
    pub fn new(id: Option<Uuid>, mode: impl Into<String>) -> Self {
        Self {
            id: id.unwrap_or(Uuid::new_v4()),
            mode: mode.into(),
        }
    }
}

impl Command for StartDraft {
    type Output = DraftSession;
}

#[derive(Debug, Clone)]
pub struct SubmitAction {
    pub session_id: Uuid,
    pub hero_id: HeroId,
}

impl Command for SubmitAction {
    type Output = DraftState;
}

#[derive(Debug, Clone)]
pub struct UndoLastAction {
    pub session_id: Uuid,
}

impl Command for UndoLastAction {
    type Output = DraftState;
}

#[derive(Debug, Clone)]
pub struct EndDraft {
    pub session_id: Uuid,
}

impl Command for EndDraft {
    type Output = ();
}
