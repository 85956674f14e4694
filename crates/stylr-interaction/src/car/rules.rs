//! Keyword rules of the car enhancement assistant.

use crate::rule::{Rule, RuleTable, Trigger};
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarReply {
    /// Asks for a photo of the car.
    PhotoRequest(&'static str),
    /// Parts from the car parts catalog.
    Parts {
        text: &'static str,
        ids: &'static [&'static str],
    },
    Help,
}

pub const HELP_TEXT: &str = "I'm here to help you enhance your car! I can assist with:\n\n🔧 **Performance Upgrades** - Exhaust, intake, ECU tuning\n💡 **Lighting Mods** - LED headlights, fog lights, underglow\n🎨 **Aesthetic Changes** - Body kits, wheels, wraps\n🔊 **Audio Systems** - Speakers, subwoofers, amplifiers\n⚙️ **Suspension** - Coilovers, springs, sway bars\n\nTell me what you'd like to improve, or upload a photo of your car for personalized recommendations!";

fn build_table() -> RuleTable<CarReply> {
    let rules = vec![
        Rule::new(
            "enhance",
            Trigger::Any(&["enhance", "upgrade", "improve", "modify"]),
            CarReply::PhotoRequest(
                "Great! I'd love to help you enhance your car. To provide the best recommendations, I can analyze your vehicle in two ways:\n\n🔹 **Upload a photo** of your car for detailed analysis\n🔹 **Describe** what you want to change or improve\n\nWhich would you prefer?",
            ),
        ),
        Rule::new(
            "performance",
            Trigger::Any(&["performance", "speed", "horsepower", "engine"]),
            CarReply::Parts {
                text: "Here are some excellent performance upgrades that can boost your car's power and efficiency:",
                ids: &["2", "4"],
            },
        ),
        Rule::new(
            "lighting",
            Trigger::Any(&["lights", "headlight", "led", "lighting"]),
            CarReply::Parts {
                text: "Upgrade your car's lighting for better visibility and modern aesthetics:",
                ids: &["1"],
            },
        ),
        Rule::new(
            "wheels",
            Trigger::Any(&["wheels", "rims", "alloy"]),
            CarReply::Parts {
                text: "Transform your car's appearance with these premium wheel options:",
                ids: &["3"],
            },
        ),
        Rule::new(
            "exterior",
            Trigger::Any(&["exterior", "body", "aesthetic", "looks"]),
            CarReply::Parts {
                text: "Enhance your car's exterior styling with these popular modifications:",
                ids: &["5", "6"],
            },
        ),
        Rule::new(
            "upload",
            Trigger::Any(&["upload", "photo", "image", "picture"]),
            CarReply::PhotoRequest(
                "Perfect! Upload a clear photo of your car and I'll analyze it to provide personalized recommendations.",
            ),
        ),
    ];

    RuleTable::new(rules, "help", CarReply::Help)
}

pub fn car_rules() -> &'static RuleTable<CarReply> {
    static TABLE: OnceLock<RuleTable<CarReply>> = OnceLock::new();
    TABLE.get_or_init(build_table)
}
