//! Purchase domain module.
//!
//! Offers, confirmations, shipping addresses and the per-conversation
//! purchase session.

mod model;

pub use model::{
    OrderConfirmation, PurchaseOffer, PurchaseSession, ShippingAddress, DEFAULT_COUNTRY,
};
