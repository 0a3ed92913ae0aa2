use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use draftwise_types::errors::{ApplicationError, Result};

use crate::session::DraftSession;

/// Shared, exclusively-lockable draft session. Holding the lock is what
/// serialises concurrent writers on the same session.
pub type SessionHandle = Arc<Mutex<DraftSession>>;

#[async_trait::async_trait]
pub trait SessionRepository: Send + Sync {
    /// Stores a new session.
    async fn insert(&self, session: DraftSession) -> Result<(), ApplicationError>;

    /// Retrieves a session handle by id.
    async fn get(&self, session_id: Uuid) -> Result<SessionHandle, ApplicationError>;

    /// Drops a session.
    async fn remove(&self, session_id: Uuid) -> Result<(), ApplicationError>;
}
