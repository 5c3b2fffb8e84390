//! InMemory Client Registry 実装
//!
//! Keyed by `ConnectionId` in a `BTreeMap`, so iteration order is the order in
//! which connections were accepted.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{ClientRegistry, ClientSession, ConnectionId, RoomId, UserPresence};

#[derive(Default)]
pub struct InMemoryClientRegistry {
    sessions: Mutex<BTreeMap<ConnectionId, ClientSession>>,
}

impl InMemoryClientRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ClientRegistry for InMemoryClientRegistry {
    async fn register(
        &self,
        connection_id: ConnectionId,
        session: ClientSession,
    ) -> Option<ClientSession> {
        let mut sessions = self.sessions.lock().await;
        let previous = sessions.insert(connection_id, session);
        tracing::debug!("Connection '{}' registered to ClientRegistry", connection_id);
        previous
    }

    async fn unregister(&self, connection_id: &ConnectionId) -> Option<ClientSession> {
        let mut sessions = self.sessions.lock().await;
        let removed = sessions.remove(connection_id);
        if removed.is_some() {
            tracing::debug!(
                "Connection '{}' unregistered from ClientRegistry",
                connection_id
            );
        }
        removed
    }

    async fn session(&self, connection_id: &ConnectionId) -> Option<ClientSession> {
        let sessions = self.sessions.lock().await;
        sessions.get(connection_id).cloned()
    }

    async fn list_users(&self, room_id: &RoomId) -> Vec<UserPresence> {
        let sessions = self.sessions.lock().await;
        sessions
            .values()
            .filter(|session| &session.room_id == room_id)
            .map(ClientSession::presence)
            .collect()
    }

    async fn connections_in(&self, room_id: &RoomId) -> Vec<ConnectionId> {
        let sessions = self.sessions.lock().await;
        sessions
            .iter()
            .filter(|(_, session)| &session.room_id == room_id)
            .map(|(connection_id, _)| *connection_id)
            .collect()
    }
}
