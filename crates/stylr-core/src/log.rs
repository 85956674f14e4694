//! Append-only message log.

use crate::message::{Message, MessageKind, Origin};
use serde::{Deserialize, Serialize};

/// Ordered messages of one conversation.
///
/// Insertion order is preserved. The only removal is [`MessageLog::clear`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageLog {
    messages: Vec<Message>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// All messages in insertion order.
    pub fn all(&self) -> &[Message] {
        &self.messages
    }

    /// Most recent message of `kind`, scanning from the tail.
    pub fn last_of_kind(&self, kind: MessageKind) -> Option<&Message> {
        self.messages.iter().rev().find(|m| m.kind() == kind)
    }

    /// Most recent message authored by `origin`.
    pub fn last_from(&self, origin: Origin) -> Option<&Message> {
        self.messages.iter().rev().find(|m| m.is_from(origin))
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}
