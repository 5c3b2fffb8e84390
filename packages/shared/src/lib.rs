//! Utilities shared by the CodeCouncil binaries: logging setup and clock helpers.

pub mod logger;
pub mod time;
