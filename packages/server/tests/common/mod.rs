//! Helpers shared by the integration tests: an in-process server on an
//! ephemeral port and a thin JSON WebSocket client.

#![allow(dead_code)]

use std::{net::SocketAddr, sync::Arc, time::Duration};

use codecouncil_server::{
    app::build_server_with,
    config::ServerConfig,
    domain::LlmGateway,
    infrastructure::llm::UnconfiguredGateway,
};
use codecouncil_shared::time::SystemClock;
use futures_util::{SinkExt, StreamExt};
use tokio::{net::TcpStream, task::JoinHandle};
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async, tungstenite::Message};

/// How long to wait for a frame that must arrive.
pub const RECV_TIMEOUT: Duration = Duration::from_secs(2);
/// How long to wait before concluding that no frame is coming.
pub const SILENCE: Duration = Duration::from_millis(200);

/// Server running in the test's runtime; stopped on drop.
pub struct TestServer {
    pub addr: SocketAddr,
    handle: JoinHandle<std::io::Result<()>>,
}

impl TestServer {
    /// Start with no LLM provider configured.
    pub async fn start() -> Self {
        Self::start_with(ServerConfig::default(), Arc::new(UnconfiguredGateway)).await
    }

    pub async fn start_with(config: ServerConfig, gateway: Arc<dyn LlmGateway>) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = build_server_with(&config, Arc::new(SystemClock), gateway);
        let handle = tokio::spawn(server.serve(listener));
        TestServer { addr, handle }
    }

    pub fn ws_url(&self) -> String {
        format!("ws://{}/ws", self.addr)
    }

    pub fn http_url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn connect(&self) -> TestClient {
        let (stream, _) = connect_async(self.ws_url()).await.unwrap();
        TestClient { stream }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub struct TestClient {
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

impl TestClient {
    pub async fn send_json(&mut self, value: serde_json::Value) {
        self.send_text(&value.to_string()).await;
    }

    pub async fn send_text(&mut self, text: &str) {
        self.stream.send(Message::text(text.to_string())).await.unwrap();
    }

    /// Send JOIN_ROOM and wait for the ROOM_STATE answer.
    pub async fn join(&mut self, room_id: &str, user_name: &str) -> serde_json::Value {
        self.send_json(serde_json::json!({
            "type": "JOIN_ROOM",
            "roomId": room_id,
            "userName": user_name,
            "avatarColor": "#3B82F6",
        }))
        .await;
        let state = self.recv().await;
        assert_eq!(state["type"], "ROOM_STATE");
        state
    }

    /// Next text frame, decoded as JSON.
    pub async fn recv(&mut self) -> serde_json::Value {
        tokio::time::timeout(RECV_TIMEOUT, self.next_text())
            .await
            .expect("timed out waiting for a frame")
    }

    /// `true` if nothing arrives within [`SILENCE`].
    pub async fn is_silent(&mut self) -> bool {
        tokio::time::timeout(SILENCE, self.next_text()).await.is_err()
    }

    pub async fn close(mut self) {
        self.stream.close(None).await.unwrap();
    }

    async fn next_text(&mut self) -> serde_json::Value {
        loop {
            match self.stream.next().await {
                Some(Ok(Message::Text(text))) => return serde_json::from_str(&text).unwrap(),
                Some(Ok(_)) => continue,
                other => panic!("connection ended unexpectedly: {:?}", other),
            }
        }
    }
}
