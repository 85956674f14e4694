//! Assistant domain module.
//!
//! # Module Structure
//!
//! - `model`: `Assistant`, `AssistantKind`, `CustomTemplate`
//! - `preset`: Built-in assistants and custom templates
//! - `roster`: The user's assistant list with the active selection

mod model;
mod preset;
mod roster;

pub use model::{Assistant, AssistantKind, CustomTemplate};
pub use preset::{
    custom_templates, find_template, get_default_assistants, CAR_ASSISTANT_ID, CAR_GREETING,
    FASHION_ASSISTANT_ID, FASHION_GREETING, RETAIL_AGENT_ID, RETAIL_GREETING,
};
pub use roster::AssistantRoster;
