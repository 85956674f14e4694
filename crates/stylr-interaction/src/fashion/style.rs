//! "Complete the look" bundles.

use crate::random::{ChoiceSource, choose};
use std::sync::Arc;
use stylr_core::catalog::{CatalogItem, CatalogStore, Money};
use stylr_core::message::{Attachment, Message, Origin, StyleBundle};
use uuid::Uuid;

/// Bundle discount in percent.
const BUNDLE_DISCOUNT_PERCENT: u32 = 15;

/// Item the look falls back to when nothing was tried on.
pub const FALLBACK_MAIN_ITEM_ID: &str = "1";

/// Complementary pieces for one kind of main item.
#[derive(Debug, Clone, Copy)]
struct LookTemplate {
    title: &'static str,
    description: &'static str,
    occasion: &'static str,
    item_ids: [&'static str; 3],
}

const DRESS_LOOK: LookTemplate = LookTemplate {
    title: "Elegant Evening Look",
    description: "Complete your dress with sophisticated accessories",
    occasion: "Evening Out",
    item_ids: ["15", "16", "17"],
};

const JEANS_LOOK: LookTemplate = LookTemplate {
    title: "Casual Chic Style",
    description: "Perfect pieces for a relaxed yet stylish look",
    occasion: "Casual Weekend",
    item_ids: ["18", "19", "17"],
};

const BLAZER_LOOK: LookTemplate = LookTemplate {
    title: "Professional Power Look",
    description: "Elevate your professional style with these refined pieces",
    occasion: "Business Professional",
    item_ids: ["15", "19", "17"],
};

/// Candidates for everything else; one is picked at random.
const OPEN_LOOKS: &[LookTemplate] = &[
    LookTemplate {
        title: "Stylish Complete Look",
        description: "Finish your outfit with these perfect accessories",
        occasion: "Date Night",
        item_ids: ["20", "16", "17"],
    },
    LookTemplate {
        title: "Relaxed Chic Look",
        description: "Easygoing pieces that still feel put together",
        occasion: "Weekend Brunch",
        item_ids: ["18", "16", "17"],
    },
    LookTemplate {
        title: "Statement Street Look",
        description: "Edgy boots and sleek accents for the city",
        occasion: "Urban Evening",
        item_ids: ["15", "19", "17"],
    },
];

fn is_jeans(item: &CatalogItem) -> bool {
    item.category_key == "jeans"
        || (item.category_key == "pant" && item.name.to_lowercase().contains("jean"))
}

fn is_blazer(item: &CatalogItem) -> bool {
    item.category_key == "blazer" || item.name.to_lowercase().contains("blazer")
}

fn template_for(main: &CatalogItem, rng: &mut dyn ChoiceSource) -> LookTemplate {
    if main.category_key == "dress" {
        DRESS_LOOK
    } else if is_jeans(main) {
        JEANS_LOOK
    } else if is_blazer(main) {
        BLAZER_LOOK
    } else {
        choose(rng, OPEN_LOOKS).copied().unwrap_or(OPEN_LOOKS[0])
    }
}

/// Builds the bundle around `main`; the discount is rounded to whole units.
pub fn build_bundle(
    main: Arc<CatalogItem>,
    catalog: &CatalogStore,
    rng: &mut dyn ChoiceSource,
) -> StyleBundle {
    let template = template_for(&main, rng);

    let mut items = vec![main.clone()];
    items.extend(catalog.get_many(&template.item_ids));

    let original_price: Money = items.iter().map(|item| item.price).sum();
    let discount = Money((original_price.amount() * BUNDLE_DISCOUNT_PERCENT + 50) / 100);
    let total_price = Money(original_price.amount() - discount.amount());

    StyleBundle {
        id: format!("style-{}", Uuid::new_v4()),
        title: template.title.to_string(),
        description: template.description.to_string(),
        occasion: template.occasion.to_string(),
        main_item: main,
        items,
        original_price,
        discount,
        total_price,
    }
}

pub fn bundle_message(bundle: StyleBundle) -> Message {
    let text = format!(
        "🎉 Perfect! I've curated a complete {} look for you! This coordinated outfit includes your {} plus carefully selected shoes and accessories that complement your style perfectly.\n\n✨ **Special Bundle Offer:** Save {} when you get the complete look!",
        bundle.occasion.to_lowercase(),
        bundle.main_item.name,
        bundle.discount,
    );
    Message::with_attachment(Origin::Responder, text, Attachment::Bundle(bundle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedChoice;
    use stylr_core::catalog::fashion_catalog;

    fn ids(bundle: &StyleBundle) -> Vec<&str> {
        bundle.items.iter().map(|item| item.id.as_str()).collect()
    }

    #[test]
    fn test_dress_bundle() {
        let catalog = fashion_catalog();
        let mut rng = ScriptedChoice::default();
        let bundle = build_bundle(catalog.get_by_id("1").unwrap(), catalog, &mut rng);

        assert_eq!(bundle.title, "Elegant Evening Look");
        assert_eq!(ids(&bundle), ["1", "15", "16", "17"]);
        // 129 + 120 + 85 + 195 = 529; 15% = 79.35
        assert_eq!(bundle.original_price, Money(529));
        assert_eq!(bundle.discount, Money(79));
        assert_eq!(bundle.total_price, Money(450));
    }

    #[test]
    fn test_jeans_and_blazer_bundles() {
        let catalog = fashion_catalog();
        let mut rng = ScriptedChoice::default();

        let jeans = build_bundle(catalog.get_by_id("14").unwrap(), catalog, &mut rng);
        assert_eq!(jeans.occasion, "Casual Weekend");
        assert_eq!(ids(&jeans), ["14", "18", "19", "17"]);

        let blazer = build_bundle(catalog.get_by_id("7").unwrap(), catalog, &mut rng);
        assert_eq!(blazer.occasion, "Business Professional");
    }

    #[test]
    fn test_open_look_uses_random_source() {
        let catalog = fashion_catalog();
        let sweater = catalog.get_by_id("9").unwrap();

        let first = build_bundle(sweater.clone(), catalog, &mut ScriptedChoice::new([0]));
        assert_eq!(first.occasion, "Date Night");

        let second = build_bundle(sweater, catalog, &mut ScriptedChoice::new([1]));
        assert_eq!(second.occasion, "Weekend Brunch");
    }

    #[test]
    fn test_discount_rounds_to_whole_units() {
        let catalog = fashion_catalog();
        // 250 + 120 + 150 + 195 = 715; 15% = 107.25
        let pants = catalog.get_by_id("13").unwrap();
        let bundle = build_bundle(pants, catalog, &mut ScriptedChoice::new([2]));
        assert_eq!(bundle.occasion, "Urban Evening");
        assert_eq!(bundle.original_price, Money(715));
        assert_eq!(bundle.discount, Money(107));
        assert_eq!(bundle.total_price, Money(608));
    }

    #[test]
    fn test_bundle_message_text() {
        let catalog = fashion_catalog();
        let bundle = build_bundle(catalog.get_by_id("1").unwrap(), catalog, &mut ScriptedChoice::default());
        let message = bundle_message(bundle);
        assert!(message.text_content().contains("complete evening out look"));
        assert!(message.text_content().contains("Save $79"));
    }
}
