//! Conversation domain model.

use crate::assistant::Assistant;
use crate::catalog::CatalogItem;
use crate::config::ConversationConfig;
use crate::log::MessageLog;
use crate::message::{Attachment, Message, Origin};
use crate::purchase::PurchaseSession;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

pub const NEW_CHAT_TITLE: &str = "New Chat";

/// One chat thread with one assistant.
///
/// A conversation contains:
/// - The message log, starting with the assistant's greeting
/// - Sidebar metadata (title, preview of the latest message, last activity)
/// - The purchase in progress, if any
/// - Items the user tried on, most recent last
///
/// Every message goes through [`Conversation::append`], which keeps the
/// metadata and the purchase session in step with the log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    id: String,
    title: String,
    assistant_id: String,
    log: MessageLog,
    last_message: String,
    last_activity: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    purchase_session: Option<PurchaseSession>,
    #[serde(default)]
    tried_on: Vec<Arc<CatalogItem>>,
    #[serde(skip)]
    limits: ConversationConfig,
}

impl Conversation {
    /// Starts a conversation with the assistant's greeting.
    pub fn new(assistant: &Assistant, config: &ConversationConfig) -> Self {
        let greeting = config
            .greeting_override
            .clone()
            .unwrap_or_else(|| assistant.greeting.clone());

        let mut conversation = Self {
            id: Uuid::new_v4().to_string(),
            title: NEW_CHAT_TITLE.to_string(),
            assistant_id: assistant.id.clone(),
            log: MessageLog::new(),
            last_message: String::new(),
            last_activity: Utc::now(),
            purchase_session: None,
            tried_on: Vec::new(),
            limits: config.clone(),
        };
        conversation.append(Message::responder(greeting));
        conversation
    }

    /// Starts a conversation that already carries the user's first message.
    pub fn with_initial_message(
        assistant: &Assistant,
        config: &ConversationConfig,
        text: impl Into<String>,
    ) -> Self {
        let mut conversation = Self::new(assistant, config);
        conversation.append(Message::user(text));
        conversation
    }

    /// Appends a message and refreshes the derived state.
    ///
    /// - the preview always follows the newest message
    /// - the title follows the newest user message
    /// - a purchase prompt opens or moves the purchase session, keeping an
    ///   earlier address request when the new prompt does not ask for one
    /// - a purchase confirmation closes it
    pub fn append(&mut self, message: Message) {
        self.last_activity = Utc::now();
        self.last_message = truncate_chars(message.text_content(), self.limits.preview_chars);
        if message.is_from(Origin::User) {
            self.title = truncate_chars(message.text_content(), self.limits.title_chars);
        }

        match message.attachment() {
            Some(Attachment::PurchasePrompt(offer)) => {
                let session = PurchaseSession::after_offer(self.purchase_session.as_ref(), offer);
                self.purchase_session = Some(session);
            }
            Some(Attachment::PurchaseConfirmation(_)) => {
                self.purchase_session = None;
            }
            _ => {}
        }

        self.log.append(message);
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn assistant_id(&self) -> &str {
        &self.assistant_id
    }

    pub fn log(&self) -> &MessageLog {
        &self.log
    }

    /// Messages in display order.
    pub fn messages(&self) -> &[Message] {
        self.log.all()
    }

    pub fn message_count(&self) -> usize {
        self.log.len()
    }

    /// Preview of the newest message.
    pub fn last_message(&self) -> &str {
        &self.last_message
    }

    pub fn last_activity(&self) -> DateTime<Utc> {
        self.last_activity
    }

    pub fn purchase_session(&self) -> Option<&PurchaseSession> {
        self.purchase_session.as_ref()
    }

    /// Records a kept try-on look; re-trying an item makes it the most recent.
    pub fn record_try_on(&mut self, item: Arc<CatalogItem>) {
        self.tried_on.retain(|existing| existing.id != item.id);
        self.tried_on.push(item);
    }

    /// Forgets a try-on look. Returns whether the item had been tried on.
    pub fn clear_try_on(&mut self, item_id: &str) -> bool {
        let before = self.tried_on.len();
        self.tried_on.retain(|existing| existing.id != item_id);
        before != self.tried_on.len()
    }

    pub fn tried_on(&self) -> &[Arc<CatalogItem>] {
        &self.tried_on
    }

    pub fn last_tried_on(&self) -> Option<&Arc<CatalogItem>> {
        self.tried_on.last()
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
