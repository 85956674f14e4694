//! Scripted replies: messages paired with their delivery delays.

use std::time::Duration;
use stylr_core::message::Message;

/// One message of a scripted reply.
///
/// `delay` is measured from the triggering event, not from the previous
/// step, so steps are delivered independently.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplyStep {
    pub delay: Duration,
    pub message: Message,
}

/// Everything a responder wants to say about one input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScriptedReply {
    steps: Vec<ReplyStep>,
}

impl ScriptedReply {
    pub fn new() -> Self {
        Self::default()
    }

    /// A reply with a single message.
    pub fn single(message: Message, delay: Duration) -> Self {
        Self::new().then(message, delay)
    }

    /// Adds a step `delay` after the triggering event.
    pub fn then(mut self, message: Message, delay: Duration) -> Self {
        self.steps.push(ReplyStep { delay, message });
        self
    }

    pub fn steps(&self) -> &[ReplyStep] {
        &self.steps
    }

    pub fn into_steps(self) -> Vec<ReplyStep> {
        self.steps
    }

    pub fn messages(&self) -> impl Iterator<Item = &Message> {
        self.steps.iter().map(|step| &step.message)
    }

    /// The first message, usually the direct answer.
    pub fn first(&self) -> Option<&Message> {
        self.steps.first().map(|step| &step.message)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
