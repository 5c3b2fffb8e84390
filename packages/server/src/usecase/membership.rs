//! Guard shared by the mutation use cases: the connection must have joined a
//! room before it can change one.

use crate::domain::{ClientRegistry, ClientSession, ConnectionId};

use super::error::RoomActionError;

/// Session of a joined connection. Unknown rooms are left to the repository,
/// which reports them as `RoomNotFound`.
pub(crate) async fn require_joined(
    clients: &dyn ClientRegistry,
    connection_id: ConnectionId,
) -> Result<ClientSession, RoomActionError> {
    clients
        .session(&connection_id)
        .await
        .ok_or(RoomActionError::NotJoined(connection_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecase::test_support::RelayFixture;

    #[tokio::test]
    async fn test_require_joined() {
        // テスト項目: JOIN_ROOM 済みの接続だけがセッションを得られる
        // given (前提条件):
        let fixture = RelayFixture::new();
        let (joined, _rx) = fixture.joined("R1", "alice").await;
        let (lurker, _lurker_rx) = fixture.connected().await;

        // when (操作):
        let ok = require_joined(fixture.clients.as_ref(), joined).await;
        let not_joined = require_joined(fixture.clients.as_ref(), lurker).await;

        // then (期待する結果):
        assert_eq!(ok.unwrap().user_name, "alice");
        assert_eq!(not_joined, Err(RoomActionError::NotJoined(lurker)));
    }
}
