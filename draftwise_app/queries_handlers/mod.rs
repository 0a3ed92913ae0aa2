mod get_draft_state;
mod get_hero_matchups;
mod get_recommendations;
mod get_win_probability;
mod list_heroes;

pub use get_draft_state::GetDraftStateHandler;
pub use get_hero_matchups::GetHeroMatchupsHandler;
pub use get_recommendations::GetRecommendationsHandler;
pub use get_win_probability::GetWinProbabilityHandler;
pub use list_heroes::ListHeroesHandler;
