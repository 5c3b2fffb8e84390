//! Value objects for the relay domain.

use std::{
    fmt,
    sync::atomic::{AtomicU64, Ordering},
};

use super::error::ValueObjectError;

/// Identifier of a collaborative room. Also used as its display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(String);

impl RoomId {
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        if value.trim().is_empty() {
            return Err(ValueObjectError::EmptyRoomId);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for RoomId {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Name of a file inside a room, unique within that room.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileName(String);

impl FileName {
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        if value.trim().is_empty() {
            return Err(ValueObjectError::EmptyFileName);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl FileName {
    /// Build a file name from a non-empty literal.
    pub(crate) fn from_static(value: &'static str) -> Self {
        debug_assert!(!value.trim().is_empty());
        Self(value.to_string())
    }
}

impl TryFrom<String> for FileName {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for FileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque handle of one live transport connection.
///
/// The transport object itself is never used as a key; the pusher maps this id
/// to the outbound channel and the client registry maps it to session metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectionId(u64);

impl ConnectionId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for ConnectionId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "conn-{}", self.0)
    }
}

/// Issues process-unique, increasing connection ids.
#[derive(Debug)]
pub struct ConnectionIdFactory {
    next: AtomicU64,
}

impl Default for ConnectionIdFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ConnectionIdFactory {
    pub fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
        }
    }

    pub fn generate(&self) -> ConnectionId {
        ConnectionId(self.next.fetch_add(1, Ordering::Relaxed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_id_rejects_blank_value() {
        // テスト項目: 空白のみの RoomId は作成できない
        // given (前提条件):
        let value = "   ".to_string();

        // when (操作):
        let result = RoomId::try_from(value);

        // then (期待する結果):
        assert_eq!(result, Err(ValueObjectError::EmptyRoomId));
    }

    #[test]
    fn test_room_id_keeps_value_verbatim() {
        // テスト項目: RoomId は値をそのまま保持する
        // given (前提条件):
        let value = "ALPHA-4291".to_string();

        // when (操作):
        let room_id = RoomId::new(value).unwrap();

        // then (期待する結果):
        assert_eq!(room_id.as_str(), "ALPHA-4291");
        assert_eq!(room_id.to_string(), "ALPHA-4291");
    }

    #[test]
    fn test_file_name_rejects_empty_value() {
        // テスト項目: 空の FileName は作成できない
        // given (前提条件):
        let value = String::new();

        // when (操作):
        let result = FileName::new(value);

        // then (期待する結果):
        assert_eq!(result, Err(ValueObjectError::EmptyFileName));
    }

    #[test]
    fn test_connection_id_factory_issues_increasing_ids() {
        // テスト項目: ConnectionIdFactory が単調増加する ID を発行する
        // given (前提条件):
        let factory = ConnectionIdFactory::new();

        // when (操作):
        let first = factory.generate();
        let second = factory.generate();

        // then (期待する結果):
        assert!(second > first);
        assert_ne!(first, second);
    }
}
