//! Domain layer of the Stylr scripted responder.
//!
//! Catalogs, messages, conversations, assistants and the purchase model.
//! Nothing in this crate decides *what* to reply; see `stylr-interaction`.

pub mod assistant;
pub mod catalog;
pub mod config;
pub mod conversation;
pub mod error;
pub mod log;
pub mod media;
pub mod message;
pub mod purchase;

// Re-export common error type
pub use error::{Result, StylrError};
