mod http;
mod websocket;

pub use http::{analyze_code, generate_docs, get_room_detail, get_rooms, health_check};
pub use websocket::websocket_handler;
