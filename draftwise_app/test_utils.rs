#[cfg(any(test, feature = "test-utils"))]
#[cfg(not(tarpaulin_include))]
pub mod tests {
    use async_trait::async_trait;
    use std::{
        collections::HashMap,
        sync::{Arc, Mutex},
    };
    use uuid::Uuid;

    use draftwise_game::{
        catalog::{HeroCatalog, InMemoryHeroCatalog},
        matchups::{MatchupMatrix, MatchupRepository},
    };
    use draftwise_types::errors::{AppError, ApplicationError};

    use crate::{
        context::AppContext,
        repository::{SessionHandle, SessionRepository},
        session::DraftSession,
    };

    #[derive(Default, Clone)]
    pub struct MockSessionRepository {
        sessions: Arc<Mutex<HashMap<Uuid, SessionHandle>>>,
    }

    impl MockSessionRepository {
        pub fn len(&self) -> usize {
            self.sessions.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl SessionRepository for MockSessionRepository {
        async fn insert(&self, session: DraftSession) -> Result<(), ApplicationError> {
            let mut sessions = self.sessions.lock().unwrap();
            if sessions.contains_key(&session.id) {
                return Err(ApplicationError::App(AppError::SessionExists(session.id)));
            }
            sessions.insert(session.id, Arc::new(tokio::sync::Mutex::new(session)));
            Ok(())
        }

        async fn get(&self, session_id: Uuid) -> Result<SessionHandle, ApplicationError> {
            let sessions = self.sessions.lock().unwrap();
            Ok(sessions
                .get(&session_id)
                .cloned()
                .ok_or(ApplicationError::App(AppError::SessionNotFound(session_id)))?)
        }

        async fn remove(&self, session_id: Uuid) -> Result<(), ApplicationError> {
            self.sessions
                .lock()
                .unwrap()
                .remove(&session_id)
                .map(|_| ())
                .ok_or(ApplicationError::App(AppError::SessionNotFound(session_id)))
        }
    }

    #[derive(Clone)]
    pub struct MockAppContext {
        pub session_repo: Arc<MockSessionRepository>,
        pub catalog: Arc<InMemoryHeroCatalog>,
        pub matchup_matrix: Arc<MatchupMatrix>,
    }

    impl MockAppContext {
        pub fn new(catalog: InMemoryHeroCatalog, matchups: MatchupMatrix) -> Self {
            Self {
                session_repo: Arc::new(MockSessionRepository::default()),
                catalog: Arc::new(catalog),
                matchup_matrix: Arc::new(matchups),
            }
        }
    }

    impl AppContext for MockAppContext {
        fn sessions(&self) -> Arc<dyn SessionRepository> {
            self.session_repo.clone()
        }

        fn heroes(&self) -> Arc<dyn HeroCatalog> {
            self.catalog.clone()
        }

        fn matchups(&self) -> Arc<dyn MatchupRepository> {
            self.matchup_matrix.clone()
        }
    }
}
