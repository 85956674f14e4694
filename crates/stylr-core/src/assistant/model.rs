use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use uuid::Uuid;

/// Which scripted responder drives an assistant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AssistantKind {
    Fashion,
    Car,
    Retail,
    Custom,
}

/// A chat persona the user can talk to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assistant {
    pub id: String,
    pub name: String,
    pub kind: AssistantKind,
    pub icon: String,
    pub description: String,
    /// First message of every new conversation
    pub greeting: String,
    /// Input field placeholder
    pub placeholder: String,
}

/// A quick-add template for custom assistants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomTemplate {
    pub key: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

impl CustomTemplate {
    /// Instantiates the template as a new custom assistant with a fresh id.
    pub fn instantiate(&self) -> Assistant {
        let topic = self.label.to_lowercase();
        Assistant {
            id: Uuid::new_v4().to_string(),
            name: self.label.to_string(),
            kind: AssistantKind::Custom,
            icon: self.icon.to_string(),
            description: format!("AI-powered {} assistant", topic),
            greeting: format!("Hi! I'm your {}. How can I help you today?", topic),
            placeholder: format!("Ask me anything about {}...", topic),
        }
    }
}
