//! Tracing layer that streams responder events to the UI.
//!
//! Events are captured as they are emitted and forwarded over an unbounded
//! tokio channel, so the render loop can show conversation activity
//! (scheduled replies, deliveries, rejected uploads) without polling.

use serde_json::Value;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::span::{Attributes, Id};
use tracing::{Event, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;

/// Event data sent to the UI
#[derive(Debug, Clone, serde::Serialize)]
pub struct ResponderEvent {
    /// Event target (e.g. "stylr_application::chat_service")
    pub target: String,
    /// Log level (INFO, DEBUG, WARN, ERROR)
    pub level: String,
    pub message: String,
    /// Conversation the event belongs to, when it carries one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
    /// Structured fields from the event
    pub fields: HashMap<String, Value>,
    /// Fields of the enclosing span
    pub span: HashMap<String, Value>,
    pub timestamp: String,
}

/// A tracing layer that sends events under a target prefix to a channel.
pub struct ResponderEventLayer {
    sender: mpsc::UnboundedSender<ResponderEvent>,
    target_prefix: String,
}

impl ResponderEventLayer {
    /// Forwards events from every `stylr_*` crate.
    pub fn new(sender: mpsc::UnboundedSender<ResponderEvent>) -> Self {
        Self::with_target_prefix(sender, "stylr")
    }

    pub fn with_target_prefix(
        sender: mpsc::UnboundedSender<ResponderEvent>,
        target_prefix: impl Into<String>,
    ) -> Self {
        Self {
            sender,
            target_prefix: target_prefix.into(),
        }
    }
}

impl<S> Layer<S> for ResponderEventLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
        let mut fields = HashMap::new();
        attrs.record(&mut FieldVisitor(&mut fields));
        if let Some(span) = ctx.span(id) {
            span.extensions_mut().insert(fields);
        }
    }

    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with(&self.target_prefix) {
            return;
        }

        let mut fields = HashMap::new();
        event.record(&mut FieldVisitor(&mut fields));

        let mut span_fields = HashMap::new();
        if let Some(span) = ctx.event_span(event) {
            let extensions = span.extensions();
            if let Some(stored) = extensions.get::<HashMap<String, Value>>() {
                span_fields = stored.clone();
            }
        }

        let conversation_id = fields
            .get("conversation_id")
            .or_else(|| span_fields.get("conversation_id"))
            .and_then(Value::as_str)
            .map(str::to_string);

        let responder_event = ResponderEvent {
            target: metadata.target().to_string(),
            level: metadata.level().to_string(),
            message: fields
                .remove("message")
                .and_then(|v| v.as_str().map(str::to_string))
                .unwrap_or_default(),
            conversation_id,
            fields,
            span: span_fields,
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        // Receiver gone means nobody is listening
        let _ = self.sender.send(responder_event);
    }
}

/// Field visitor that extracts tracing fields into a HashMap
struct FieldVisitor<'a>(&'a mut HashMap<String, Value>);

impl tracing::field::Visit for FieldVisitor<'_> {
    fn record_f64(&mut self, field: &tracing::field::Field, value: f64) {
        self.0.insert(field.name().to_string(), serde_json::json!(value));
    }

    fn record_i64(&mut self, field: &tracing::field::Field, value: i64) {
        self.0.insert(field.name().to_string(), serde_json::json!(value));
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.0.insert(field.name().to_string(), serde_json::json!(value));
    }

    fn record_bool(&mut self, field: &tracing::field::Field, value: bool) {
        self.0.insert(field.name().to_string(), serde_json::json!(value));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.0.insert(field.name().to_string(), serde_json::json!(value));
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        // Display-formatted fields (`%id`) arrive here too
        self.0.insert(
            field.name().to_string(),
            serde_json::json!(format!("{:?}", value)),
        );
    }
}
