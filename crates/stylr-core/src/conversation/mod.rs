//! Conversation domain module.
//!
//! - `model`: A single conversation and its derived sidebar state
//! - `store`: The in-memory collection of conversations

mod model;
mod store;

pub use model::{Conversation, NEW_CHAT_TITLE};
pub use store::ConversationStore;
