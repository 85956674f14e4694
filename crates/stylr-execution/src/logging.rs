//! Global tracing subscriber setup.

use crate::tracing_layer::{ResponderEvent, ResponderEventLayer};
use tokio::sync::mpsc;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, fmt};

/// Default directive when neither `RUST_LOG` nor an explicit filter is given.
pub const DEFAULT_FILTER: &str = "info";

/// Console output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Builds the filter: `RUST_LOG` wins over `directive`.
fn env_filter(directive: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directive.unwrap_or(DEFAULT_FILTER)))
}

/// Installs the global subscriber: filter, fmt layer and registry.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init_tracing(filter: Option<&str>, format: LogFormat) -> Result<(), TryInitError> {
    let registry = tracing_subscriber::registry().with(env_filter(filter));
    match format {
        LogFormat::Json => registry.with(fmt::layer().with_target(true).json()).try_init(),
        LogFormat::Pretty => registry.with(fmt::layer().with_target(true)).try_init(),
    }
}

/// Like [`init_tracing`], and also streams `stylr_*` events to the returned receiver.
pub fn init_tracing_with_events(
    filter: Option<&str>,
) -> Result<mpsc::UnboundedReceiver<ResponderEvent>, TryInitError> {
    let (sender, receiver) = mpsc::unbounded_channel();
    tracing_subscriber::registry()
        .with(env_filter(filter))
        .with(fmt::layer().with_target(true))
        .with(ResponderEventLayer::new(sender))
        .try_init()?;
    Ok(receiver)
}
