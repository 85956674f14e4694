//! File-backed services for STYLR.
//!
//! - `paths`: Where configuration lives on each platform
//! - `config_service`: Loads and caches `config.toml`

pub mod config_service;
pub mod paths;

pub use config_service::ConfigService;
pub use paths::{PathError, StylrPaths};
