mod end_draft;
mod start_draft;
mod submit_action;
mod undo_last_action;

pub use end_draft::EndDraftCommandHandler;
pub use start_draft::StartDraftCommandHandler;
pub use submit_action::SubmitActionCommandHandler;
pub use undo_last_action::UndoLastActionCommandHandler;
