use teloxide::types::ChatId;

/// Identifier for a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChatKey(pub i64);

/// Zero-based index into the current sequence of custom encouragements.
///
/// Only valid until the next mutation of that sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position(pub usize);

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ChatId> for ChatKey {
    fn from(id: ChatId) -> Self {
        ChatKey(id.0)
    }
}
