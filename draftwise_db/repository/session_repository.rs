use std::{
    collections::{HashMap, hash_map::Entry},
    sync::Arc,
};
use tokio::sync::{Mutex, RwLock};
use tracing::debug;
use uuid::Uuid;

use draftwise_app::{
    repository::{SessionHandle, SessionRepository},
    session::DraftSession,
};
use draftwise_types::errors::{AppError, ApplicationError, Result};

/// Process-local session store. The map lock is only held to look up or
/// swap handles; work on a session happens under that session's own lock,
/// so distinct sessions never wait on each other.
#[derive(Debug, Default, Clone)]
pub struct InMemorySessionRepository {
    sessions: Arc<RwLock<HashMap<Uuid, SessionHandle>>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn insert(&self, session: DraftSession) -> Result<(), ApplicationError> {
        let id = session.id;
        match self.sessions.write().await.entry(id) {
            Entry::Occupied(_) => Err(ApplicationError::App(AppError::SessionExists(id))),
            Entry::Vacant(slot) => {
                slot.insert(Arc::new(Mutex::new(session)));
                debug!(session_id = %id, "Session stored");
                Ok(())
            }
        }
    }

    async fn get(&self, session_id: Uuid) -> Result<SessionHandle, ApplicationError> {
        self.sessions
            .read()
            .await
            .get(&session_id)
            .cloned()
            .ok_or(ApplicationError::App(AppError::SessionNotFound(session_id)))
    }

    async fn remove(&self, session_id: Uuid) -> Result<(), ApplicationError> {
        self.sessions
            .write()
            .await
            .remove(&session_id)
            .map(|_| debug!(session_id = %session_id, "Session removed"))
            .ok_or(ApplicationError::App(AppError::SessionNotFound(session_id)))
    }
}
