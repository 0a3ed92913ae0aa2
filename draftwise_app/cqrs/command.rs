use async_trait::async_trait;
use draftwise_types::errors::ApplicationError;
use std::sync::Arc;

use crate::{config::Config, context::AppContext};

/// A trait for Command structs.
/// Commands are operations that change the state of a draft session.
pub trait Command: Send + Sync {
    /// The data type returned once the command is applied.
    type Output: Send + Sync;
}

/// A trait for handlers that execute Commands.
/// It receives the command and the app context to reach repositories.
#[async_trait]
pub trait CommandHandler<C: Command> {
    async fn handle(
        &self,
        cmd: C,
        ctx: &dyn AppContext,
        config: &Arc<Config>,
    ) -> Result<C::Output, ApplicationError>;
}
