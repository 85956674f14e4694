//! In-memory conversation collection.

use super::model::Conversation;
use crate::assistant::Assistant;
use crate::config::ConversationConfig;
use crate::error::{Result, StylrError};

/// All conversations of the running process, newest first.
///
/// Nothing is persisted; a restart loses every conversation.
#[derive(Debug, Clone, Default)]
pub struct ConversationStore {
    conversations: Vec<Conversation>,
    config: ConversationConfig,
}

impl ConversationStore {
    pub fn new(config: ConversationConfig) -> Self {
        Self {
            conversations: Vec::new(),
            config,
        }
    }

    /// Creates a conversation greeting from `assistant` and returns its id.
    pub fn create(&mut self, assistant: &Assistant) -> String {
        let conversation = Conversation::new(assistant, &self.config);
        self.insert(conversation)
    }

    /// Creates a conversation whose first user message is `text`.
    pub fn create_with_message(&mut self, assistant: &Assistant, text: &str) -> String {
        let conversation = Conversation::with_initial_message(assistant, &self.config, text);
        self.insert(conversation)
    }

    fn insert(&mut self, conversation: Conversation) -> String {
        let id = conversation.id().to_string();
        tracing::info!(
            conversation_id = %id,
            assistant_id = conversation.assistant_id(),
            "Conversation created"
        );
        self.conversations.insert(0, conversation);
        id
    }

    pub fn get(&self, id: &str) -> Result<&Conversation> {
        self.conversations
            .iter()
            .find(|c| c.id() == id)
            .ok_or_else(|| StylrError::not_found("conversation", id))
    }

    pub fn get_mut(&mut self, id: &str) -> Result<&mut Conversation> {
        self.conversations
            .iter_mut()
            .find(|c| c.id() == id)
            .ok_or_else(|| StylrError::not_found("conversation", id))
    }

    /// Every conversation, newest first.
    pub fn all(&self) -> &[Conversation] {
        &self.conversations
    }

    /// Conversations of one assistant, newest first.
    pub fn for_assistant<'a>(&'a self, assistant_id: &'a str) -> impl Iterator<Item = &'a Conversation> + 'a {
        self.conversations
            .iter()
            .filter(move |c| c.assistant_id() == assistant_id)
    }

    pub fn delete(&mut self, id: &str) -> Result<Conversation> {
        let index = self
            .conversations
            .iter()
            .position(|c| c.id() == id)
            .ok_or_else(|| StylrError::not_found("conversation", id))?;
        tracing::info!(conversation_id = %id, "Conversation deleted");
        Ok(self.conversations.remove(index))
    }

    /// Deletes every conversation of an assistant; returns how many went.
    pub fn delete_for_assistant(&mut self, assistant_id: &str) -> usize {
        let before = self.conversations.len();
        self.conversations.retain(|c| c.assistant_id() != assistant_id);
        before - self.conversations.len()
    }

    pub fn len(&self) -> usize {
        self.conversations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conversations.is_empty()
    }
}
