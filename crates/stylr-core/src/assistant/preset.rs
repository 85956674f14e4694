//! Default assistant presets.
//!
//! Provides the built-in assistants and the quick-add templates for custom
//! assistants.

use super::model::{Assistant, AssistantKind, CustomTemplate};

pub const FASHION_ASSISTANT_ID: &str = "fashion-assistant";
pub const CAR_ASSISTANT_ID: &str = "car-assistant";
pub const RETAIL_AGENT_ID: &str = "retail-agent";

pub const FASHION_GREETING: &str = "Hi! I'm your personal style assistant. I can help you find the perfect outfit, suggest sizes, and give you styling advice. What are you looking for today?";
pub const CAR_GREETING: &str = "🚗 Hi! I'm your car enhancement assistant. I can help you upgrade and improve your vehicle with the perfect parts and modifications. Upload a photo of your car or describe what you'd like to enhance, and I'll provide personalized recommendations!";
pub const RETAIL_GREETING: &str = "Hello! I'm your AI Retail Agent. I can help you analyze customer feedback, inventory insights, and provide recommendations. What would you like to know?";

/// Returns the built-in assistants.
///
/// - **Fashion Stylist**: outfit, size and styling advice over the fashion catalog
/// - **Car Enhancement**: vehicle photo analysis and part recommendations
/// - **AI Retail Agent**: canned analytics answers for the dashboard widget
pub fn get_default_assistants() -> Vec<Assistant> {
    vec![
        Assistant {
            id: FASHION_ASSISTANT_ID.to_string(),
            name: "Fashion Stylist".to_string(),
            kind: AssistantKind::Fashion,
            icon: "✨".to_string(),
            description: "Your personal fashion advisor for outfit recommendations and styling advice".to_string(),
            greeting: FASHION_GREETING.to_string(),
            placeholder: "Ask about style, sizes, or describe what you're looking for...".to_string(),
        },
        Assistant {
            id: CAR_ASSISTANT_ID.to_string(),
            name: "Car Enhancement".to_string(),
            kind: AssistantKind::Car,
            icon: "🚗".to_string(),
            description: "AI-powered car modification and upgrade recommendations".to_string(),
            greeting: CAR_GREETING.to_string(),
            placeholder: "Describe what you want to enhance about your car...".to_string(),
        },
        Assistant {
            id: RETAIL_AGENT_ID.to_string(),
            name: "AI Retail Agent".to_string(),
            kind: AssistantKind::Retail,
            icon: "🤖".to_string(),
            description: "Inventory, customer feedback, sales and campaign insights".to_string(),
            greeting: RETAIL_GREETING.to_string(),
            placeholder: "Ask about inventory, feedback, sales...".to_string(),
        },
    ]
}

const CUSTOM_TEMPLATES: &[CustomTemplate] = &[
    CustomTemplate { key: "fitness", label: "Fitness Trainer", icon: "💪" },
    CustomTemplate { key: "nutrition", label: "Nutrition Coach", icon: "🥗" },
    CustomTemplate { key: "travel", label: "Travel Advisor", icon: "✈️" },
    CustomTemplate { key: "tech", label: "Tech Support", icon: "🔧" },
    CustomTemplate { key: "cooking", label: "Cooking Assistant", icon: "👨‍🍳" },
    CustomTemplate { key: "finance", label: "Financial Advisor", icon: "💰" },
    CustomTemplate { key: "learning", label: "Learning Tutor", icon: "📚" },
    CustomTemplate { key: "health", label: "Health Coach", icon: "🏥" },
    CustomTemplate { key: "custom", label: "Custom Assistant", icon: "🤖" },
];

/// Quick-add templates for custom assistants.
pub fn custom_templates() -> &'static [CustomTemplate] {
    CUSTOM_TEMPLATES
}

/// Finds a template by key (`fitness`, `travel`, ...).
pub fn find_template(key: &str) -> Option<&'static CustomTemplate> {
    CUSTOM_TEMPLATES.iter().find(|t| t.key == key)
}
