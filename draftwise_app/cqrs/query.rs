use async_trait::async_trait;
use draftwise_types::errors::ApplicationError;
use std::sync::Arc;

use crate::{config::Config, context::AppContext};

/// A marker trait for Query structs.
/// Queries are operations that read the state of the system.
pub trait Query: Send + Sync {
    /// The data type that this query will return.
    type Output: Send + Sync;
}

/// A trait for handlers that execute Queries.
#[async_trait]
pub trait QueryHandler<Q: Query> {
    async fn handle(
        &self,
        query: Q,
        ctx: &dyn AppContext,
        config: &Arc<Config>,
    ) -> Result<Q::Output, ApplicationError>;
}
