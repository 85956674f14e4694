//! Application layer for Stylr.
//!
//! Drives conversations: takes user actions, asks the responders for
//! scripted replies and delivers them on schedule.

pub mod chat_service;
pub mod sequencer;

pub use chat_service::ChatService;
pub use sequencer::{Clock, Delivery, ManualClock, Sequencer, SystemClock};
