pub mod draft;
pub mod draft_mode;
pub mod hero;
