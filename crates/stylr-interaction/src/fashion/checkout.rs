//! Purchase prompts and (mock) order confirmation.

use crate::random::ChoiceSource;
use chrono::{Duration, NaiveDate};
use regex::Regex;
use std::sync::{Arc, LazyLock};
use stylr_core::catalog::CatalogItem;
use stylr_core::message::{Attachment, Message, Origin};
use stylr_core::purchase::{
    DEFAULT_COUNTRY, OrderConfirmation, PurchaseOffer, PurchaseSession, ShippingAddress,
};

/// `Name, Street, City, State, ZIP[, Country]`, unanchored.
static ADDRESS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([^,]+),\s*([^,]+),\s*([^,]+),\s*([^,]+),\s*([^,]+)(?:,\s*([^,]+))?")
        .expect("address pattern is a valid regex")
});

const STREET_TOKENS: &[&str] = &["st", "ave", "rd"];
const ADDRESS_LIKE_MIN_CHARS: usize = 20;

const ORDER_PREFIX: &str = "ORD-";
const ORDER_ID_LEN: usize = 8;
const BASE36: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Inclusive range of days until delivery.
pub const DELIVERY_DAYS_MIN: i64 = 2;
pub const DELIVERY_DAYS_MAX: i64 = 7;

pub const STYLE_PROFILE_FOLLOW_UP: &str = "✨ **Let's create your personal style profile!**\n\nTo give you the most accurate recommendations, I'd love to learn more about you. Could you share a photo of yourself? This will help me:\n\n• Analyze your body shape for perfect sizing\n• Determine your skin tone for ideal color matches\n• Assess your eye color for complementary palettes\n• Create a personalized style profile just for you\n\n📸 Simply upload or take a photo, and I'll provide tailored recommendations that are uniquely yours!\n\n*Your image is only used for styling analysis and kept completely private.*";

pub const BUY_INTENT_NUDGE: &str = "I love your enthusiasm! 😍 To help you purchase the perfect item, could you tell me what you're interested in buying? \n\n✨ **I can show you:**\n• Elegant dresses for special occasions\n• Casual everyday outfits\n• Professional work attire\n• Seasonal pieces\n• Complete style looks\n\nWhat type of fashion item are you looking for? Once I show you some options, I'll be happy to help you purchase your favorites! 🛍️";

fn matches_pattern(text: &str) -> bool {
    ADDRESS_PATTERN.is_match(text)
}

fn is_address_like(text: &str) -> bool {
    let lower = text.to_lowercase();
    STREET_TOKENS.iter().any(|token| lower.contains(token))
        && text.chars().count() > ADDRESS_LIKE_MIN_CHARS
}

/// Whether the text should be treated as a shipping address.
pub fn looks_like_address(text: &str) -> bool {
    matches_pattern(text) || is_address_like(text)
}

/// Extracts a shipping address from free text.
///
/// The positional pattern wins; otherwise address-like text is kept whole
/// with placeholder city, state and ZIP.
pub fn parse_address(raw: &str) -> Option<ShippingAddress> {
    if let Some(captures) = ADDRESS_PATTERN.captures(raw) {
        let field = |index: usize| {
            captures
                .get(index)
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default()
        };
        let country = captures
            .get(6)
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_else(|| DEFAULT_COUNTRY.to_string());

        return Some(ShippingAddress {
            full_name: field(1),
            address: field(2),
            city: field(3),
            state: field(4),
            zip_code: field(5),
            country,
        });
    }

    if is_address_like(raw) {
        tracing::debug!("Address did not match the positional pattern, using placeholders");
        return Some(ShippingAddress {
            full_name: "Customer".to_string(),
            address: raw.trim().to_string(),
            city: "Your City".to_string(),
            state: "State".to_string(),
            zip_code: "ZIP".to_string(),
            country: DEFAULT_COUNTRY.to_string(),
        });
    }

    None
}

/// `ORD-` followed by eight uppercase base36 characters.
pub fn order_number(rng: &mut dyn ChoiceSource) -> String {
    let suffix: String = (0..ORDER_ID_LEN)
        .map(|_| BASE36[rng.pick_index(BASE36.len())] as char)
        .collect();
    format!("{}{}", ORDER_PREFIX, suffix)
}

/// `today` plus a uniform number of days in the delivery window.
pub fn estimated_delivery(today: NaiveDate, rng: &mut dyn ChoiceSource) -> NaiveDate {
    let days = rng.int_inclusive(DELIVERY_DAYS_MIN, DELIVERY_DAYS_MAX);
    today + Duration::days(days)
}

fn offer_message(item: Arc<CatalogItem>, requesting_address: bool, text: String) -> Message {
    Message::with_attachment(
        Origin::Responder,
        text,
        Attachment::PurchasePrompt(PurchaseOffer::new(item, requesting_address)),
    )
}

/// Purchase suggestion that follows an item list.
pub fn first_pick_prompt(item: Arc<CatalogItem>) -> Message {
    let text = format!(
        "I think the first one from {} is so pretty and appropriate for you! 😍✨ Let me help you buy it - enter your shipping address below:",
        item.brand
    );
    offer_message(item, true, text)
}

/// Reply to "I want to buy it".
pub fn buy_intent_prompt(item: Arc<CatalogItem>) -> Message {
    let text = format!(
        "🎉 **Amazing choice!** The {name} by {brand} is going to look absolutely stunning on you! ✨\n\n💫 **Why you'll love it:**\n• Perfect for your style and body type\n• High-quality {brand} craftsmanship\n• Versatile piece you can style multiple ways\n• Great value at {price}\n\n🛍️ **Let's make it yours!** I just need your shipping details to get this gorgeous piece delivered to you:\n\n📋 **Shipping Information:**\n• Full Name\n• Street Address\n• City, State, ZIP Code\n• Country\n\nYou can type it all in one message like:\n\"Sarah Johnson, 456 Oak Ave, Los Angeles, CA 90210, USA\"\n\n📦 **Fast & secure delivery guaranteed!** Ready to complete your purchase?",
        name = item.name,
        brand = item.brand,
        price = item.price,
    );
    offer_message(item, true, text)
}

/// Asks for the shipping address of the item being purchased.
pub fn address_request(item: Arc<CatalogItem>) -> Message {
    let text = format!(
        "🛍️ **Excellent choice!** Let's get your {} ordered for you.\n\nI'll need your shipping information to complete the purchase. Please provide:\n\n📋 **Shipping Details:**\n• Full Name\n• Street Address\n• City, State, ZIP Code\n• Country\n\nYou can type it all in one message like:\n\"John Smith, 123 Main St, New York, NY 10001, USA\"\n\nOr just start typing and I'll guide you through each step! 📦",
        item.name
    );
    offer_message(item, true, text)
}

/// Purchase prompt shown after the user keeps a try-on look.
pub fn try_on_prompt(item: Arc<CatalogItem>) -> Message {
    let text = format!(
        "✨ **You look absolutely stunning in the {}!**\n\nI can see this piece is perfect for you. Would you like to purchase it and make this amazing look yours?\n\n💫 **What happens next:**\n• Select your size\n• Provide shipping details\n• Get fast, secure delivery\n\n🛍️ Ready to add this gorgeous piece to your wardrobe?",
        item.name
    );
    offer_message(item, false, text)
}

/// Confirms the order for the item awaiting an address, or `None` if there
/// is no such item or `raw` holds no address.
pub fn confirm_order(
    raw: &str,
    session: &PurchaseSession,
    today: NaiveDate,
    rng: &mut dyn ChoiceSource,
) -> Option<Message> {
    let item = session.address_item()?.clone();
    let shipping_address = parse_address(raw)?;
    let order_number = order_number(rng);
    let estimated_delivery = estimated_delivery(today, rng);
    let size = item.variant_or_default().to_string();

    tracing::info!(
        order_number = %order_number,
        item_id = %item.id,
        delivery = %estimated_delivery,
        "Order confirmed"
    );

    let text = format!(
        "🎉 **Order Confirmed!** Your {name} is on its way!\n\n✅ **Order Summary:**\n• Product: {name}\n• Brand: {brand}\n• Price: {price}\n• Size: {size}\n\n📦 **Shipping Details:**\n• Order #: {order}\n• Estimated Delivery: {delivery}\n• Shipping Method: Standard (Free on orders over $50)\n\n📧 You'll receive a confirmation email with tracking information shortly.\n\n💫 Thank you for shopping with us! Your style is going to look absolutely amazing! ✨",
        name = item.name,
        brand = item.brand,
        price = item.price,
        size = size,
        order = order_number,
        delivery = estimated_delivery.format("%A, %B %-d, %Y"),
    );

    Some(Message::with_attachment(
        Origin::Responder,
        text,
        Attachment::PurchaseConfirmation(OrderConfirmation {
            item,
            size,
            shipping_address,
            order_number,
            estimated_delivery,
        }),
    ))
}
