//! CodeCouncil relay server library.
//!
//! Clients join rooms over WebSocket and share chat, files and snapshots;
//! every accepted change is fanned out to the room. An HTTP API exposes room
//! state and two AI assistant endpoints backed by an LLM gateway.

pub mod app;
pub mod config;

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
