//! Built-in mock catalogs.
//!
//! These catalogs are loaded once and cached for the lifetime of the
//! process. Ids are stable: reply mapping tables refer to them directly.

use super::model::{AttributeValue, CatalogItem, Money};
use super::store::CatalogStore;
use std::collections::BTreeMap;
use std::sync::OnceLock;

static FASHION_CATALOG: OnceLock<CatalogStore> = OnceLock::new();
static CAR_PARTS_CATALOG: OnceLock<CatalogStore> = OnceLock::new();

/// Vehicle keys used as category keys in the car parts catalog.
pub const TOYOTA_CAMRY: &str = "toyota_camry";
pub const HONDA_CIVIC: &str = "honda_civic";
pub const BMW_3SERIES: &str = "bmw_3series";

const APPAREL_SIZES: &[&str] = &["XS", "S", "M", "L", "XL"];
const APPAREL_SIZES_XXL: &[&str] = &["XS", "S", "M", "L", "XL", "XXL"];
const SHOE_SIZES: &[&str] = &["6", "6.5", "7", "7.5", "8", "8.5", "9", "9.5", "10"];
const SNEAKER_SIZES: &[&str] = &["7", "7.5", "8", "8.5", "9", "9.5", "10", "10.5", "11"];
const WAIST_SIZES: &[&str] = &["24", "25", "26", "27", "28", "29", "30", "31", "32"];
const ONE_SIZE: &[&str] = &["One Size"];

#[allow(clippy::too_many_arguments)]
fn garment(
    id: &str,
    name: &str,
    brand: &str,
    price: u32,
    image: &str,
    category: &str,
    category_key: &str,
    color: &str,
    sizes: &[&str],
    recommended: &str,
) -> CatalogItem {
    let mut attributes = BTreeMap::new();
    attributes.insert("category".to_string(), AttributeValue::from(category));
    attributes.insert("color".to_string(), AttributeValue::from(color));
    attributes.insert("sizes".to_string(), AttributeValue::from(sizes.to_vec()));

    CatalogItem {
        id: id.to_string(),
        name: name.to_string(),
        brand: brand.to_string(),
        price: Money(price),
        image: image.to_string(),
        category_key: category_key.to_string(),
        attributes,
        recommended_variant: Some(recommended.to_string()),
    }
}

/// Static description of a car part, expanded into a [`CatalogItem`].
struct PartSpec {
    id: &'static str,
    vehicle: &'static str,
    name: &'static str,
    brand: &'static str,
    price: u32,
    image: &'static str,
    category: &'static str,
    compatibility: &'static [&'static str],
    rating: &'static str,
    reviews: &'static str,
    buy_url: &'static str,
    specifications: &'static [&'static str],
    installation_level: &'static str,
}

impl From<&PartSpec> for CatalogItem {
    fn from(spec: &PartSpec) -> Self {
        let mut attributes = BTreeMap::new();
        attributes.insert("category".to_string(), AttributeValue::from(spec.category));
        attributes.insert(
            "compatibility".to_string(),
            AttributeValue::from(spec.compatibility.to_vec()),
        );
        attributes.insert(
            "specifications".to_string(),
            AttributeValue::from(spec.specifications.to_vec()),
        );
        attributes.insert("rating".to_string(), AttributeValue::from(spec.rating));
        attributes.insert("reviews".to_string(), AttributeValue::from(spec.reviews));
        attributes.insert("buy_url".to_string(), AttributeValue::from(spec.buy_url));
        attributes.insert(
            "installation_level".to_string(),
            AttributeValue::from(spec.installation_level),
        );

        CatalogItem {
            id: spec.id.to_string(),
            name: spec.name.to_string(),
            brand: spec.brand.to_string(),
            price: Money(spec.price),
            image: spec.image.to_string(),
            category_key: spec.vehicle.to_string(),
            attributes,
            recommended_variant: None,
        }
    }
}

const CAR_PARTS: &[PartSpec] = &[
    PartSpec {
        id: "1",
        vehicle: TOYOTA_CAMRY,
        name: "LED Headlight Assembly",
        brand: "VLAND",
        price: 289,
        image: "https://images.unsplash.com/photo-1551150441-649e0b074fe4",
        category: "Lighting",
        compatibility: &["Toyota Camry 2018-2023", "Camry Hybrid"],
        rating: "4.8",
        reviews: "1247",
        buy_url: "https://amazon.com/vland-headlights",
        specifications: &["Plug & Play", "6000K White", "DOT Approved"],
        installation_level: "Moderate",
    },
    PartSpec {
        id: "2",
        vehicle: TOYOTA_CAMRY,
        name: "Cold Air Intake System",
        brand: "K&N",
        price: 359,
        image: "https://images.unsplash.com/photo-1654267195844-0c42bc469da2",
        category: "Performance",
        compatibility: &["Toyota Camry 2018-2023"],
        rating: "4.7",
        reviews: "892",
        buy_url: "https://knfilters.com/toyota-camry",
        specifications: &["+15 HP", "Reusable Filter", "Million Mile Warranty"],
        installation_level: "Easy",
    },
    PartSpec {
        id: "3",
        vehicle: TOYOTA_CAMRY,
        name: "Alloy Wheel Set (18\")",
        brand: "Enkei",
        price: 1299,
        image: "https://images.unsplash.com/photo-1658058765281-0833dce61996",
        category: "Wheels",
        compatibility: &["Toyota Camry 2015-2023"],
        rating: "4.9",
        reviews: "456",
        buy_url: "https://enkei.com/wheels/camry",
        specifications: &["18x8.5\", +45 Offset", "Flow Formed", "19.2 lbs"],
        installation_level: "Professional",
    },
    PartSpec {
        id: "4",
        vehicle: HONDA_CIVIC,
        name: "Sport Exhaust System",
        brand: "Injen",
        price: 649,
        image: "https://images.unsplash.com/photo-1722078260099-961a157a46d8",
        category: "Exhaust",
        compatibility: &["Honda Civic 2016-2023", "Civic Type R"],
        rating: "4.6",
        reviews: "723",
        buy_url: "https://injen.com/honda-civic",
        specifications: &["304 Stainless Steel", "+12 HP", "Deep Tone"],
        installation_level: "Moderate",
    },
    PartSpec {
        id: "5",
        vehicle: HONDA_CIVIC,
        name: "Carbon Fiber Front Lip",
        brand: "Seibon",
        price: 425,
        image: "https://images.unsplash.com/photo-1654742967873-0bfb6cd0e719",
        category: "Aero",
        compatibility: &["Honda Civic 2022-2023"],
        rating: "4.8",
        reviews: "234",
        buy_url: "https://seibon.com/civic-lip",
        specifications: &["Real Carbon Fiber", "OEM Style", "Clear Coat"],
        installation_level: "Moderate",
    },
    PartSpec {
        id: "6",
        vehicle: BMW_3SERIES,
        name: "M Performance Grille",
        brand: "BMW",
        price: 899,
        image: "https://images.unsplash.com/photo-1758563920526-2f6006462533",
        category: "Exterior",
        compatibility: &["BMW 3 Series G20", "320i, 330i, M340i"],
        rating: "4.9",
        reviews: "567",
        buy_url: "https://bmw.com/m-performance",
        specifications: &["Gloss Black", "OEM Quality", "Direct Replacement"],
        installation_level: "Easy",
    },
];

fn build_fashion_catalog() -> Vec<CatalogItem> {
    vec![
        garment("1", "Elegant Red Dress", "Revolve", 129, "https://is4.revolveassets.com/images/p4/n/z/AMAN-WD1348_V1.jpg", "Dresses", "dress", "Red", APPAREL_SIZES, "S"),
        garment("2", "Party Red dress", "Zara", 450, "https://static.zara.net/assets/public/5020/ed8e/b0214db4a5f9/925d23e3cfe3/02180280632-a1/02180280632-a1.jpg", "dress", "dress", "red", APPAREL_SIZES_XXL, "L"),
        garment("3", "Adidas Track Pants", "Adidas", 85, "https://images.unsplash.com/photo-1715532098035-a343b26eaeaa", "Pants", "pant", "Navy", APPAREL_SIZES, "M"),
        garment("4", "Classic White Sneakers", "Adidas", 120, "https://images.unsplash.com/photo-1578314921455-34dd4626b38d", "Shoes", "shoes", "White", SNEAKER_SIZES, "9"),
        garment("5", "Black Leather Jacket", "AllSaints", 295, "https://images.unsplash.com/photo-1606715791286-6e43e9838f44", "Jackets", "jacket", "Black", APPAREL_SIZES, "L"),
        garment("6", "High-Waisted Blue Jeans", "Levi's", 98, "https://images.unsplash.com/photo-1713880442898-0f151fba5e16", "Jeans", "jeans", "Blue", WAIST_SIZES, "28"),
        garment("7", "Classic White Blazer", "Theory", 215, "https://images.unsplash.com/photo-1657846447142-77d301981276", "Blazers", "blazer", "White", APPAREL_SIZES, "M"),
        garment("8", "Black Ankle Boots", "Dr. Martens", 180, "https://images.unsplash.com/photo-1605732440685-d0654d81aa30", "Boots", "boots", "Black", SHOE_SIZES, "8"),
        garment("9", "Cozy Beige Sweater", "COS", 135, "https://images.unsplash.com/photo-1646270968802-6bad28659329", "Sweaters", "sweater", "Beige", APPAREL_SIZES, "M"),
        garment("10", "Navy Pleated Skirt", "Uniqlo", 69, "https://images.unsplash.com/photo-1464170400324-dda9eb57e9ed", "Skirts", "skirt", "Navy", APPAREL_SIZES, "S"),
        garment("11", "elegant Red Dress", "Zara", 340, "https://images.asos-media.com/products/oh-polly-aldona-slinky-jersey-rose-detail-maxi-dress-in-scarlet-red/209121141-1-red", "Dresses", "dress", "Red", APPAREL_SIZES, "M"),
        garment("12", "Long Red dress", "Zara", 550, "https://static.zara.net/assets/public/a6cc/1e80/d8ec41019083/f1f86e8ff6f8/02965278600-p/02965278600-p.jpg", "dress", "dress", "red", APPAREL_SIZES_XXL, "L"),
        garment("13", "flowy or satin pants", "Zara", 250, "https://static.zara.net/assets/public/c172/2a23/b0264d6281f5/fce723d6c58d/01478278610-p/01478278610-p.jpg", "pant", "pant", "purple", APPAREL_SIZES_XXL, "M"),
        garment("14", "jeans", "Zara", 280, "https://static.zara.net/assets/public/9c0a/27cc/79c34a17bca3/820d39a47432/00858815250-000-p/00858815250-000-p.jpg", "pant", "jeans", "blue", APPAREL_SIZES_XXL, "M"),
        // Shoes and accessories
        garment("15", "Black Ankle Boots", "Steve Madden", 120, "https://images.unsplash.com/photo-1572550907105-dc3c8e55f5b1", "shoes", "shoes", "black", SHOE_SIZES, "8"),
        garment("16", "Gold Statement Necklace", "Mejuri", 85, "https://images.unsplash.com/photo-1733761013921-89d19f4a2194", "accessories", "accessories", "gold", ONE_SIZE, "One Size"),
        garment("17", "Leather Crossbody Bag", "Marc Jacobs", 195, "https://images.unsplash.com/photo-1564842505181-8862a3b9b173", "accessories", "accessories", "brown", ONE_SIZE, "One Size"),
        garment("18", "White Sneakers", "Adidas", 90, "https://images.unsplash.com/photo-1718882707232-a1c6a8484b0f", "shoes", "shoes", "white", SHOE_SIZES, "8"),
        garment("19", "Silver Watch", "Fossil", 150, "https://images.unsplash.com/photo-1623998024112-74fd3267d19c", "accessories", "accessories", "silver", ONE_SIZE, "One Size"),
        garment("20", "Heeled Sandals", "Sam Edelman", 110, "https://images.unsplash.com/photo-1689711880342-0cb516d7be0e", "shoes", "shoes", "nude", SHOE_SIZES, "8"),
        // Wedding guest dresses
        garment("21", "Red Evening Gown", "Revolve", 420, "https://images.unsplash.com/photo-1566174053879-31528523f8ae", "dress", "dress", "red", APPAREL_SIZES, "S"),
        garment("22", "Red Formal Wedding Guest Dress", "Reformation", 298, "https://images.unsplash.com/photo-1595777457583-95e059d581b8", "dress", "dress", "red", APPAREL_SIZES_XXL, "M"),
        garment("23", "Red Cocktail Party Dress", "Zara", 159, "https://images.unsplash.com/photo-1583391733956-3750e0ff4e8b", "dress", "dress", "red", APPAREL_SIZES, "M"),
    ]
}

/// Returns the fashion catalog (garments, shoes and accessories).
pub fn fashion_catalog() -> &'static CatalogStore {
    FASHION_CATALOG.get_or_init(|| CatalogStore::new(build_fashion_catalog()))
}

/// Returns the car parts catalog, keyed by vehicle.
pub fn car_parts_catalog() -> &'static CatalogStore {
    CAR_PARTS_CATALOG.get_or_init(|| CatalogStore::new(CAR_PARTS.iter().map(CatalogItem::from).collect()))
}

/// Builds the vehicle key for a make/model pair (`Toyota`, `Camry` -> `toyota_camry`).
pub fn vehicle_key(make: &str, model: &str) -> String {
    format!(
        "{}_{}",
        make.to_lowercase(),
        model.to_lowercase().replacen(' ', "", 1)
    )
}
