//! In-memory implementations; all state is lost on restart.

mod client;
mod room;

pub use client::InMemoryClientRegistry;
pub use room::InMemoryRoomRepository;
