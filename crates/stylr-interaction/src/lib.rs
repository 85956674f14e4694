//! Reply logic of the Stylr scripted responder.
//!
//! Every assistant kind has a [`Responder`] that maps user input to a
//! [`ScriptedReply`]: an ordered list of messages, each with its own delay
//! from the triggering event. Responders never touch the message log; the
//! application layer schedules and appends what they return.
//!
//! # Module Structure
//!
//! - `rule`: ordered first-match keyword tables
//! - `reply`: scripted replies and their steps
//! - `context`: user input and the read-only reply context
//! - `random`: injectable random source
//! - `fashion`, `car`, `retail`, `custom`: one responder per assistant kind

pub mod car;
pub mod context;
pub mod custom;
pub mod fashion;
pub mod random;
pub mod reply;
pub mod responder;
pub mod retail;
pub mod rule;

pub use context::{ReplyContext, UserInput};
pub use random::{ChoiceSource, ScriptedChoice, SeededChoice};
pub use reply::{ReplyStep, ScriptedReply};
pub use responder::{Responder, responder_for};
pub use rule::{Matched, Rule, RuleTable, Trigger};
