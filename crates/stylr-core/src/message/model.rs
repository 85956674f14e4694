//! Chat message types.
//!
//! A [`Message`] is the unit the render boundary consumes. Its `kind` is
//! derived from its [`Attachment`], so a message whose payload disagrees with
//! its kind cannot be constructed through this API.

use super::attachment::Attachment;
use crate::catalog::CatalogItem;
use crate::error::{Result, StylrError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use strum::{Display, EnumIter};
use uuid::Uuid;

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Origin {
    /// Typed or uploaded by the user.
    User,
    /// Produced by the scripted responder.
    Responder,
}

/// Presentation kind; the renderer switches on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MessageKind {
    Text,
    ItemList,
    Recommendation,
    Bundle,
    AnalysisResult,
    PurchasePrompt,
    PurchaseConfirmation,
    MediaUpload,
}

/// A single message in a conversation log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    id: String,
    origin: Origin,
    kind: MessageKind,
    text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    attachment: Option<Attachment>,
    created_at: DateTime<Utc>,
}

impl Message {
    /// Creates a plain text message.
    pub fn text(origin: Origin, text: impl Into<String>) -> Self {
        Self::build(origin, text.into(), None)
    }

    /// Creates a message carrying a structured payload; the kind follows the payload.
    pub fn with_attachment(origin: Origin, text: impl Into<String>, attachment: Attachment) -> Self {
        Self::build(origin, text.into(), Some(attachment))
    }

    /// Shorthand for a user text message.
    pub fn user(text: impl Into<String>) -> Self {
        Self::text(Origin::User, text)
    }

    /// Shorthand for a responder text message.
    pub fn responder(text: impl Into<String>) -> Self {
        Self::text(Origin::Responder, text)
    }

    fn build(origin: Origin, text: String, attachment: Option<Attachment>) -> Self {
        let kind = attachment
            .as_ref()
            .map(Attachment::kind)
            .unwrap_or(MessageKind::Text);

        Self {
            id: Uuid::new_v4().to_string(),
            origin,
            kind,
            text,
            attachment,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    pub fn kind(&self) -> MessageKind {
        self.kind
    }

    pub fn text_content(&self) -> &str {
        &self.text
    }

    pub fn attachment(&self) -> Option<&Attachment> {
        self.attachment.as_ref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_from(&self, origin: Origin) -> bool {
        self.origin == origin
    }

    /// Catalog items carried by an `ItemList` message, empty otherwise.
    pub fn items(&self) -> &[Arc<CatalogItem>] {
        match &self.attachment {
            Some(Attachment::ItemList { items }) => items,
            _ => &[],
        }
    }

    /// Re-checks the kind/attachment invariant.
    ///
    /// Messages built through the constructors always pass; this guards
    /// messages that arrive through deserialization.
    pub fn validate(&self) -> Result<()> {
        match &self.attachment {
            None if self.kind == MessageKind::Text => Ok(()),
            None => Err(StylrError::invalid_input(format!(
                "message {} of kind {} has no attachment",
                self.id, self.kind
            ))),
            Some(attachment) if attachment.kind() != self.kind => {
                Err(StylrError::invalid_input(format!(
                    "message {} declares kind {} but carries a {} attachment",
                    self.id,
                    self.kind,
                    attachment.kind()
                )))
            }
            Some(attachment) => attachment.validate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{MediaPayload, Recommendation};

    #[test]
    fn test_text_message_has_no_attachment() {
        let message = Message::user("hello");
        assert_eq!(message.kind(), MessageKind::Text);
        assert_eq!(message.origin(), Origin::User);
        assert!(message.attachment().is_none());
        assert!(message.items().is_empty());
        assert!(message.validate().is_ok());
    }

    #[test]
    fn test_kind_follows_attachment() {
        let message = Message::with_attachment(
            Origin::Responder,
            "upload please",
            Attachment::MediaUpload(MediaPayload::request()),
        );
        assert_eq!(message.kind(), MessageKind::MediaUpload);
        assert!(message.validate().is_ok());
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Message::responder("a");
        let b = Message::responder("a");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_validate_rejects_tampered_kind() {
        let message = Message::with_attachment(
            Origin::Responder,
            "guide",
            Attachment::Recommendation(Recommendation {
                title: "t".to_string(),
                advice: "a".to_string(),
                suggested_sizes: vec![],
                style_notes: vec![],
            }),
        );
        let mut json = serde_json::to_value(&message).unwrap();
        json["kind"] = serde_json::Value::String("text".to_string());
        let tampered: Message = serde_json::from_value(json).unwrap();

        let err = tampered.validate().unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_serializes_kind_in_snake_case() {
        let message = Message::responder("hi");
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["kind"], "text");
        assert_eq!(json["origin"], "responder");
        assert!(json.get("attachment").is_none());
    }
}
