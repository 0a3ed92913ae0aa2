pub mod common;
pub mod errors;
pub mod hero;

pub use errors::Result;
