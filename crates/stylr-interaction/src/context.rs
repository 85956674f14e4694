//! Inputs handed to responders.

use chrono::NaiveDate;
use std::sync::Arc;
use stylr_core::assistant::Assistant;
use stylr_core::catalog::CatalogItem;
use stylr_core::config::PacingConfig;
use stylr_core::conversation::Conversation;
use stylr_core::error::{Result, StylrError};
use stylr_core::log::MessageLog;
use stylr_core::purchase::PurchaseSession;

/// Text typed by the user, with its lowercased form for rule matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInput {
    raw: String,
    normalized: String,
}

impl UserInput {
    /// Rejects empty or whitespace-only input.
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Err(StylrError::invalid_input("Message must not be empty"));
        }
        Ok(Self {
            raw: raw.to_string(),
            normalized: raw.to_lowercase(),
        })
    }

    /// As typed; used where case matters (addresses).
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }
}

/// Read-only view of the conversation state a reply may depend on.
///
/// Builders never mutate the log: they only see it through this context.
#[derive(Debug, Clone, Copy)]
pub struct ReplyContext<'a> {
    pub assistant: &'a Assistant,
    pub log: &'a MessageLog,
    pub purchase_session: Option<&'a PurchaseSession>,
    /// Tried-on items, most recent last
    pub tried_on: &'a [Arc<CatalogItem>],
    pub pacing: &'a PacingConfig,
    /// Base date for delivery estimates
    pub today: NaiveDate,
}

impl<'a> ReplyContext<'a> {
    pub fn for_conversation(
        conversation: &'a Conversation,
        assistant: &'a Assistant,
        pacing: &'a PacingConfig,
        today: NaiveDate,
    ) -> Self {
        Self {
            assistant,
            log: conversation.log(),
            purchase_session: conversation.purchase_session(),
            tried_on: conversation.tried_on(),
            pacing,
            today,
        }
    }
}
