//! Keyword rules of the fashion assistant.
//!
//! Order matters: several triggers overlap ("professional" fires the blazer
//! rule before the business rule, "yes i want to buy" fires complete-style
//! before confirm-purchase) and the first match wins.

use super::checkout::looks_like_address;
use crate::rule::{Rule, RuleTable, Trigger};
use std::sync::OnceLock;

/// What a fashion rule answers with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FashionReply {
    Text(&'static str),
    /// Catalog items, followed by the purchase exchange.
    Items {
        text: &'static str,
        ids: &'static [&'static str],
    },
    SizeGuide,
    CompleteStyle,
    BuyIntent,
    ConfirmPurchase,
    ShippingAddress,
    Help,
}

pub const HELP_TEXT: &str = "I'd love to help you find the perfect outfit! I can show you specific items and complete style combinations. Try asking me about:\n\n• 'Show me casual outfits'\n• 'I need business casual looks'\n• 'Winter outfit ideas'\n• 'Show me jeans and blazers'\n• 'Complete wardrobe essentials'\n• 'What size should I get?'\n\nWhat style are you looking for today?";

const UPLOAD_PROMPT: &str = "I'd love to help you with personalized styling! 📸 Upload a photo of yourself so I can give you tailored fashion advice based on your style, body type, and preferences. Click the upload button above or in the input area to get started!";

const ALTERNATIVES: &str = "Of course! 🎨 Based on your photo, here are some other styling directions we could explore:\n\n• **Smart Casual** - Elevated everyday pieces that are comfortable yet polished\n• **Trendy & Fun** - Current fashion-forward pieces with personality\n• **Classic & Timeless** - Investment pieces that never go out of style\n• **Bohemian Chic** - Flowy, artistic pieces with unique textures\n• **Sporty Luxe** - Athletic-inspired pieces elevated for everyday wear\n\nWhich direction sounds most appealing to you? Or tell me about a specific occasion you're dressing for!";

const STYLING_TIPS: &str = "Great question! 💫 From analyzing your photo, here are some personalized styling tips just for you:\n\n• **Color Palette**: You'd look stunning in both warm and cool tones - try rich jewel tones or soft pastels\n• **Silhouettes**: Your body shape would shine in both fitted and flowy pieces\n• **Proportions**: You can confidently wear high-waisted bottoms and cropped tops\n• **Layering**: Mix textures like denim with silk, or leather with cotton for visual interest\n\nWould you like me to show you specific pieces that incorporate these styling principles? What type of outfit are you most interested in trying?";

fn items(text: &'static str, ids: &'static [&'static str]) -> FashionReply {
    FashionReply::Items { text, ids }
}

fn build_table() -> RuleTable<FashionReply> {
    let rules = vec![
        Rule::new(
            "upload-prompt",
            Trigger::Any(&["upload", "photo", "image", "picture"]),
            FashionReply::Text(UPLOAD_PROMPT),
        ),
        Rule::new(
            "wedding",
            Trigger::Any(&["dress for wedding", "dress for a wedding", "wedding dress", "wedding"]),
            items(
                "Perfect choice for a wedding! 💃🌹 Red dresses are stunning for wedding guests - elegant, sophisticated, and absolutely eye-catching. Here are my top red dress recommendations that will make you look fabulous at the celebration:",
                &["21", "22", "23"],
            ),
        ),
        Rule::new(
            "dresses",
            Trigger::Any(&["dress", "formal", "elegant", "special event", "date night", "evening"]),
            items(
                "Gorgeous choice! 💃 Based on your photo, these elegant dresses would look absolutely stunning on you. I've selected pieces that complement your style and would make you feel confident and beautiful:",
                &["1", "2", "11", "12"],
            ),
        ),
        Rule::new(
            "pants",
            Trigger::Any(&["adidas", "pants", "sweatpants"]),
            items("Perfect! Here are some Adidas pants that would be great for you:", &["3"]),
        ),
        Rule::new(
            "jeans",
            Trigger::Any(&["jeans", "denim"]),
            items("Here are some perfect jeans that would look great on you:", &["6", "14"]),
        ),
        Rule::new(
            "blazer",
            Trigger::Any(&["blazer", "professional", "work"]),
            items("Here are some professional blazer options perfect for work:", &["7"]),
        ),
        Rule::new(
            "boots",
            Trigger::Any(&["boots", "ankle boots"]),
            items("Here are some stylish boot options that would complete your look:", &["8"]),
        ),
        Rule::new(
            "sweater",
            Trigger::Any(&["sweater", "knitwear", "cozy"]),
            items("Here are some cozy sweater options perfect for any season:", &["9"]),
        ),
        Rule::new(
            "skirt",
            Trigger::Any(&["skirt", "pleated"]),
            items("Here are some beautiful skirt options that would look amazing:", &["10"]),
        ),
        Rule::new(
            "jacket",
            Trigger::Any(&["jacket", "leather", "outerwear"]),
            items("I found some amazing jacket options for you! Here are my top picks:", &["5"]),
        ),
        Rule::new(
            "sneakers",
            Trigger::Any(&["shoes", "sneakers", "footwear"]),
            items("Here are some stylish sneaker options perfect for you:", &["4"]),
        ),
        Rule::new(
            "casual",
            Trigger::Any(&["casual", "everyday", "relaxed", "comfortable", "weekend"]),
            items(
                "Perfect choice! 😊 Based on your style from the photo, here's a casual yet chic outfit combination that would look amazing on you. These pieces will keep you comfortable while looking effortlessly stylish:",
                &["3", "6", "4", "9"],
            ),
        ),
        Rule::new(
            "business",
            Trigger::Any(&["business", "business casual", "professional", "work", "office"]),
            items(
                "Excellent! 💼 From your photo, I can tell you'd look incredibly polished and professional in these pieces. This combination will give you confidence and command respect while staying true to your personal style:",
                &["7", "6", "8", "15"],
            ),
        ),
        Rule::new(
            "winter",
            Trigger::Any(&["winter", "cold", "warm", "cozy", "seasonal"]),
            items(
                "Perfect timing! ❄️ Based on your photo, here's a cozy yet stylish winter outfit that would look amazing on you. These pieces will keep you warm while maintaining that effortless style I can see you already have:",
                &["9", "6", "8", "5"],
            ),
        ),
        Rule::new(
            "outfit",
            Trigger::Any(&["outfit", "complete look"]),
            items("Here's a complete stylish outfit I've curated for you:", &["9", "10", "8", "7"]),
        ),
        Rule::new(
            "size-guide",
            Trigger::Any(&["size", "fit", "recommend"]),
            FashionReply::SizeGuide,
        ),
        Rule::new(
            "wardrobe",
            Trigger::Any(&["everything", "full wardrobe"]),
            items(
                "Here's a complete wardrobe selection with versatile pieces that work together:",
                &["1", "2", "6", "7", "9", "4"],
            ),
        ),
        Rule::new(
            "complete-style",
            Trigger::Any(&[
                "yes",
                "complete",
                "shoes",
                "accessories",
                "finish the look",
                "complete the look",
                "complete the style",
            ]),
            FashionReply::CompleteStyle,
        ),
        Rule::new(
            "alternatives",
            Trigger::Any(&["more", "other", "different", "else", "something else", "alternatives"]),
            FashionReply::Text(ALTERNATIVES),
        ),
        Rule::new(
            "styling-tips",
            Trigger::Any(&["how", "style", "wear", "look good"]),
            FashionReply::Text(STYLING_TIPS),
        ),
        Rule::new(
            "buy-intent",
            Trigger::Any(&["want to buy", "buy it", "purchase it", "take it", "buy this", "purchase this"]),
            FashionReply::BuyIntent,
        ),
        Rule::new(
            "confirm-purchase",
            Trigger::AllOf(&[&["yes"], &["buy", "purchase", "want it"]]),
            FashionReply::ConfirmPurchase,
        ),
        Rule::new(
            "shipping-address",
            Trigger::Matches(looks_like_address),
            FashionReply::ShippingAddress,
        ),
    ];

    RuleTable::new(rules, "help", FashionReply::Help)
}

/// The fashion rule table, built once.
pub fn fashion_rules() -> &'static RuleTable<FashionReply> {
    static TABLE: OnceLock<RuleTable<FashionReply>> = OnceLock::new();
    TABLE.get_or_init(build_table)
}
