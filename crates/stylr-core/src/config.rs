//! Responder configuration.
//!
//! Every field has a default, so an empty or partial TOML file is valid.
//!
//! ```toml
//! [pacing]
//! reply_delay_ms = 1500
//!
//! [random]
//! seed = 42
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct StylrConfig {
    #[serde(default)]
    pub pacing: PacingConfig,
    #[serde(default)]
    pub conversation: ConversationConfig,
    #[serde(default)]
    pub upload: UploadConfig,
    #[serde(default)]
    pub random: RandomConfig,
}

/// Simulated "thinking" delays, in milliseconds.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PacingConfig {
    /// User message to first reply
    pub reply_delay_ms: u64,
    /// Item list to purchase suggestion
    pub purchase_prompt_delay_ms: u64,
    /// Item list to styling-profile follow-up
    pub follow_up_delay_ms: u64,
    /// Photo upload to analysis result
    pub image_analysis_delay_ms: u64,
    /// Vehicle analysis to parts recommendation
    pub parts_recommendation_delay_ms: u64,
    /// Photo upload to reply for custom assistants
    pub custom_image_delay_ms: u64,
    /// Kept try-on look to purchase prompt
    pub try_on_prompt_delay_ms: u64,
    /// Retail dashboard reply delay
    pub retail_reply_delay_ms: u64,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: 1500,
            purchase_prompt_delay_ms: 1500,
            follow_up_delay_ms: 3500,
            image_analysis_delay_ms: 2500,
            parts_recommendation_delay_ms: 3500,
            custom_image_delay_ms: 2000,
            try_on_prompt_delay_ms: 1500,
            retail_reply_delay_ms: 1000,
        }
    }
}

impl PacingConfig {
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }

    pub fn purchase_prompt_delay(&self) -> Duration {
        Duration::from_millis(self.purchase_prompt_delay_ms)
    }

    pub fn follow_up_delay(&self) -> Duration {
        Duration::from_millis(self.follow_up_delay_ms)
    }

    pub fn image_analysis_delay(&self) -> Duration {
        Duration::from_millis(self.image_analysis_delay_ms)
    }

    pub fn parts_recommendation_delay(&self) -> Duration {
        Duration::from_millis(self.parts_recommendation_delay_ms)
    }

    pub fn custom_image_delay(&self) -> Duration {
        Duration::from_millis(self.custom_image_delay_ms)
    }

    pub fn try_on_prompt_delay(&self) -> Duration {
        Duration::from_millis(self.try_on_prompt_delay_ms)
    }

    pub fn retail_reply_delay(&self) -> Duration {
        Duration::from_millis(self.retail_reply_delay_ms)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ConversationConfig {
    /// Characters of the latest user message used as the title
    pub title_chars: usize,
    /// Characters of the latest message shown in the sidebar
    pub preview_chars: usize,
    /// Replaces every assistant's greeting when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub greeting_override: Option<String>,
}

impl Default for ConversationConfig {
    fn default() -> Self {
        Self {
            title_chars: 40,
            preview_chars: 60,
            greeting_override: None,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct UploadConfig {
    pub max_bytes: u64,
    pub accepted_mime_prefix: String,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_bytes: 10 * 1024 * 1024,
            accepted_mime_prefix: "image/".to_string(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RandomConfig {
    /// Fixed seed for reproducible mock selections; entropy when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: StylrConfig = toml::from_str("").unwrap();
        assert_eq!(config, StylrConfig::default());
        assert_eq!(config.pacing.reply_delay(), Duration::from_millis(1500));
        assert_eq!(config.upload.max_bytes, 10_485_760);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: StylrConfig = toml::from_str(
            r#"
            [pacing]
            reply_delay_ms = 10

            [random]
            seed = 7
            "#,
        )
        .unwrap();

        assert_eq!(config.pacing.reply_delay_ms, 10);
        assert_eq!(config.pacing.follow_up_delay_ms, 3500);
        assert_eq!(config.random.seed, Some(7));
        assert_eq!(config.conversation.title_chars, 40);
    }

    #[test]
    fn test_round_trip_through_toml() {
        let mut config = StylrConfig::default();
        config.conversation.greeting_override = Some("Welcome back!".to_string());

        let text = toml::to_string(&config).unwrap();
        let parsed: StylrConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
