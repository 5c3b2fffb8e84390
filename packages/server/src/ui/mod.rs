//! WebSocket relay and HTTP API surface.

pub mod dispatcher;
mod handler;
mod server;
mod signal;
pub mod state;

pub use dispatcher::{DispatchError, RelayDispatcher, RelayUseCases};
pub use server::Server;
