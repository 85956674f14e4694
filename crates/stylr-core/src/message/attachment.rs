//! Structured message payloads.

use super::model::MessageKind;
use crate::catalog::{CatalogItem, Money};
use crate::error::{Result, StylrError};
use crate::media::MediaHandle;
use crate::purchase::{OrderConfirmation, PurchaseOffer};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Payload attached to a non-text message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum Attachment {
    ItemList { items: Vec<Arc<CatalogItem>> },
    Recommendation(Recommendation),
    Bundle(StyleBundle),
    AnalysisResult(AnalysisReport),
    PurchasePrompt(PurchaseOffer),
    PurchaseConfirmation(OrderConfirmation),
    MediaUpload(MediaPayload),
}

impl Attachment {
    /// The message kind this payload renders as.
    pub fn kind(&self) -> MessageKind {
        match self {
            Attachment::ItemList { .. } => MessageKind::ItemList,
            Attachment::Recommendation(_) => MessageKind::Recommendation,
            Attachment::Bundle(_) => MessageKind::Bundle,
            Attachment::AnalysisResult(_) => MessageKind::AnalysisResult,
            Attachment::PurchasePrompt(_) => MessageKind::PurchasePrompt,
            Attachment::PurchaseConfirmation(_) => MessageKind::PurchaseConfirmation,
            Attachment::MediaUpload(_) => MessageKind::MediaUpload,
        }
    }

    pub fn item_list(items: Vec<Arc<CatalogItem>>) -> Self {
        Attachment::ItemList { items }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        match self {
            Attachment::ItemList { items } if items.is_empty() => {
                Err(StylrError::invalid_input("item list is empty"))
            }
            Attachment::Bundle(bundle) if bundle.items.is_empty() => {
                Err(StylrError::invalid_input("style bundle has no items"))
            }
            _ => Ok(()),
        }
    }
}

/// Static size and styling guidance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub advice: String,
    pub suggested_sizes: Vec<String>,
    pub style_notes: Vec<String>,
}

/// A coordinated outfit offered at a bundle discount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleBundle {
    pub id: String,
    pub title: String,
    pub description: String,
    pub occasion: String,
    /// The piece the look is built around
    pub main_item: Arc<CatalogItem>,
    /// Main item first, then complementary pieces
    pub items: Vec<Arc<CatalogItem>>,
    pub original_price: Money,
    pub discount: Money,
    pub total_price: Money,
}

/// Result of a (mock) image analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "subject", rename_all = "snake_case")]
pub enum AnalysisReport {
    Fashion(FashionAnalysis),
    Vehicle(VehicleAnalysis),
}

/// Personal style profile derived from a user photo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FashionAnalysis {
    pub body_shape: String,
    /// Confidence in percent
    pub body_shape_confidence: u8,
    pub skin_tone: String,
    pub skin_tone_category: String,
    pub eye_color: String,
    pub hair_color: String,
    pub best_silhouettes: Vec<String>,
    pub colors_to_wear: Vec<String>,
    pub colors_to_avoid: Vec<String>,
    pub styling_tips: Vec<String>,
}

/// Body scan produced by the 3D fit viewer for one garment.
///
/// Measurements are display strings as the viewer formats them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelAnalysis {
    pub measurements: BodyMeasurements,
    pub body_shape: String,
    pub skin_tone: String,
    pub eye_color: String,
    pub recommended_styles: Vec<String>,
    /// 0.0 to 1.0
    #[serde(default)]
    pub fit_confidence: f32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyMeasurements {
    pub height: String,
    pub chest: String,
    pub waist: String,
    pub hips: String,
    pub shoulder_width: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum VehicleCondition {
    Excellent,
    Good,
    Fair,
    #[strum(serialize = "Needs Work")]
    NeedsWork,
}

/// Vehicle details extracted from a car photo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleAnalysis {
    pub make: String,
    pub model: String,
    pub year: String,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_plate: Option<String>,
    pub body_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_mileage: Option<String>,
    pub condition: VehicleCondition,
    pub identified_parts: Vec<String>,
    pub recommended_upgrades: Vec<String>,
}

impl VehicleAnalysis {
    /// Catalog key for this vehicle's parts.
    pub fn vehicle_key(&self) -> String {
        crate::catalog::vehicle_key(&self.make, &self.model)
    }
}

/// An uploaded image, or a request for one when `handle` is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle: Option<MediaHandle>,
}

impl MediaPayload {
    /// Asks the user to upload an image.
    pub fn request() -> Self {
        Self { handle: None }
    }

    pub fn uploaded(handle: MediaHandle) -> Self {
        Self {
            handle: Some(handle),
        }
    }

    pub fn is_request(&self) -> bool {
        self.handle.is_none()
    }
}
