//! Runtime wiring: tracing setup and the event stream for the UI.

pub mod logging;
pub mod tracing_layer;

pub use logging::{LogFormat, init_tracing, init_tracing_with_events};
pub use tracing_layer::{ResponderEvent, ResponderEventLayer};
