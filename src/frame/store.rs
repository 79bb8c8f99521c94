use super::*;
use crate::game::GameError;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Server-side home of Frame sessions.
#[async_trait::async_trait]
pub trait SessionStore: Send + Sync {
    /// The stored session, or `SessionNotFound`.
    async fn get(&self, id: &SessionId) -> Result<Session, GameError>;
    async fn save(&self, id: SessionId, session: Session);
    async fn len(&self) -> usize;
}

/// Process-lifetime session map. Nothing is ever evicted.
#[derive(Debug, Default)]
pub struct MemorySessions {
    sessions: RwLock<HashMap<SessionId, Session>>,
}

#[async_trait::async_trait]
impl SessionStore for MemorySessions {
    async fn get(&self, id: &SessionId) -> Result<Session, GameError> {
        self.sessions
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| GameError::SessionNotFound(id.to_string()))
    }
    async fn save(&self, id: SessionId, session: Session) {
        self.sessions.write().await.insert(id, session);
    }
    async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}
