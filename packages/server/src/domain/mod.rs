//! Domain layer: room state, sessions, events and the ports the use cases
//! depend on.

pub mod assist;
pub mod entity;
pub mod error;
pub mod event;
pub mod fixture;
pub mod llm;
pub mod message_pusher;
pub mod repository;
pub mod value_object;

pub use assist::{ChatLine, CodeAnalysis, DOCS_FALLBACK, SuggestedFix};
pub use entity::{
    ChatMessage, ChatMessageDraft, ClientSession, Room, Snapshot, SnapshotDraft, UserPresence,
};
pub use error::{MessagePushError, RepositoryError, ValueObjectError};
pub use event::RoomEvent;
pub use fixture::{DEMO_ROOM_ID, demo_room, is_demo_room};
pub use llm::{LlmError, LlmGateway, LlmRequest};
pub use message_pusher::{MessagePusher, PusherChannel};
pub use repository::{ClientRegistry, RoomRepository};
pub use value_object::{ConnectionId, ConnectionIdFactory, FileName, RoomId};
