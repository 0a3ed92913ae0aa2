pub mod analysis;
pub mod catalog;
pub mod matchups;
pub mod models;
pub mod scoring;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
