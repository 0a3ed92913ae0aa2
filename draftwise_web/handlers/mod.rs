mod drafts;
mod error;
mod extract;
mod heroes;
mod views;

pub use drafts::{
    CreateDraftRequest, RecommendationsQuery, SubmitActionRequest, create_draft, delete_draft,
    get_draft, recommendations, submit_action, undo_action, win_probability,
};
pub use error::{ApiError, ErrorResponse};
pub use extract::{ApiJson, ApiPath, ApiQuery};
pub use heroes::{HeroesQuery, MatchupsQuery, hero_matchups, list_heroes};
pub use views::{DraftStateView, SessionView};
