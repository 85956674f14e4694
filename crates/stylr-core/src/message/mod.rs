//! Message domain module.
//!
//! - `model`: `Message`, `Origin`, `MessageKind`
//! - `attachment`: structured payloads (`Attachment` and friends)

mod attachment;
mod model;

pub use attachment::{
    AnalysisReport, Attachment, BodyMeasurements, FashionAnalysis, MediaPayload, ModelAnalysis,
    Recommendation, StyleBundle, VehicleAnalysis, VehicleCondition,
};
pub use model::{Message, MessageKind, Origin};
