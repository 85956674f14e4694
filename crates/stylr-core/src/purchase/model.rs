//! Purchase flow models.

use crate::catalog::CatalogItem;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Country used when the user leaves it out.
pub const DEFAULT_COUNTRY: &str = "USA";

/// Offer to buy a single item, shown as a purchase prompt card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOffer {
    pub item: Arc<CatalogItem>,
    /// Whether the responder is waiting for a shipping address
    pub requesting_address: bool,
}

impl PurchaseOffer {
    pub fn new(item: Arc<CatalogItem>, requesting_address: bool) -> Self {
        Self {
            item,
            requesting_address,
        }
    }
}

/// Shipping address captured from free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingAddress {
    pub full_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

impl fmt::Display for ShippingAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {} {}, {}",
            self.full_name, self.address, self.city, self.state, self.zip_code, self.country
        )
    }
}

/// A confirmed (mock) order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    pub item: Arc<CatalogItem>,
    pub size: String,
    pub shipping_address: ShippingAddress,
    /// `ORD-` followed by eight uppercase base36 characters
    pub order_number: String,
    pub estimated_delivery: NaiveDate,
}

/// The purchase in progress in a conversation.
///
/// Opened by a purchase prompt and closed when the order is confirmed. A
/// later prompt that does not ask for an address moves `item` but leaves an
/// earlier address request standing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseSession {
    /// Item of the most recent purchase prompt
    pub item: Arc<CatalogItem>,
    /// Item of the most recent prompt that asked for a shipping address
    pub awaiting_address: Option<Arc<CatalogItem>>,
}

impl PurchaseSession {
    /// The session after `offer` is shown, given the session before it.
    pub fn after_offer(previous: Option<&PurchaseSession>, offer: &PurchaseOffer) -> Self {
        let awaiting_address = if offer.requesting_address {
            Some(offer.item.clone())
        } else {
            previous.and_then(|session| session.awaiting_address.clone())
        };
        Self {
            item: offer.item.clone(),
            awaiting_address,
        }
    }

    pub fn requests_address(&self) -> bool {
        self.awaiting_address.is_some()
    }

    /// The item a shipping address would be applied to.
    pub fn address_item(&self) -> Option<&Arc<CatalogItem>> {
        self.awaiting_address.as_ref()
    }
}
