pub mod app_bus;
pub mod command_handlers;
pub mod config;
pub mod context;
pub mod cqrs;
pub mod queries_handlers;
pub mod repository;
pub mod session;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
