pub mod loader;
pub mod mapping;

mod context;
mod models;
mod repository;

pub use context::InMemoryAppContext;
pub use loader::{load_hero_catalog, load_matchups, parse_hero_catalog, parse_matchups};
pub use repository::*;
