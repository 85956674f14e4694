//! Car enhancement assistant.

pub mod analysis;
pub mod rules;

pub use rules::{CarReply, car_rules};

use crate::context::{ReplyContext, UserInput};
use crate::random::ChoiceSource;
use crate::reply::ScriptedReply;
use crate::responder::Responder;
use stylr_core::assistant::AssistantKind;
use stylr_core::catalog::{TOYOTA_CAMRY, car_parts_catalog};
use stylr_core::media::MediaHandle;
use stylr_core::message::{
    AnalysisReport, Attachment, MediaPayload, Message, Origin, VehicleAnalysis,
};

fn help() -> Message {
    Message::responder(rules::HELP_TEXT)
}

fn analysis_message(analysis: VehicleAnalysis) -> Message {
    let text = format!(
        "🔍 **Analysis Complete!** I've successfully analyzed your {} {}! Here are the details I extracted from your image:",
        analysis.make, analysis.model
    );
    Message::with_attachment(
        Origin::Responder,
        text,
        Attachment::AnalysisResult(AnalysisReport::Vehicle(analysis)),
    )
}

/// Parts for the analysed vehicle; unknown vehicles get the Camry parts.
fn parts_message(analysis: &VehicleAnalysis) -> Message {
    let catalog = car_parts_catalog();
    let mut parts = catalog.get_by_category_key(&analysis.vehicle_key());
    if parts.is_empty() {
        parts = catalog.get_by_category_key(TOYOTA_CAMRY);
    }

    let text = format!(
        "🔧 **Perfect! Now let's enhance your {make} {model}!**\n\nBased on the analysis of your {year} {make} {model} in {color}, here are carefully selected upgrades that would significantly improve performance, aesthetics, and functionality:\n\n💡 Each part includes compatibility verification, installation difficulty, and direct purchase links from trusted retailers.",
        make = analysis.make,
        model = analysis.model,
        year = analysis.year,
        color = analysis.color,
    );
    Message::with_attachment(Origin::Responder, text, Attachment::item_list(parts))
}

/// Scripted car assistant: parts lookups and a mock photo analysis.
#[derive(Debug, Clone, Copy, Default)]
pub struct CarResponder;

impl Responder for CarResponder {
    fn kind(&self) -> AssistantKind {
        AssistantKind::Car
    }

    fn respond(
        &self,
        input: &UserInput,
        ctx: &ReplyContext<'_>,
        _rng: &mut dyn ChoiceSource,
    ) -> ScriptedReply {
        let message = match *car_rules().match_rule(input.normalized()).reply {
            CarReply::PhotoRequest(text) => Message::with_attachment(
                Origin::Responder,
                text,
                Attachment::MediaUpload(MediaPayload::request()),
            ),
            CarReply::Parts { text, ids } => {
                let parts = car_parts_catalog().get_many(ids);
                if parts.is_empty() {
                    help()
                } else {
                    Message::with_attachment(Origin::Responder, text, Attachment::item_list(parts))
                }
            }
            CarReply::Help => help(),
        };
        ScriptedReply::single(message, ctx.pacing.reply_delay())
    }

    fn upload_caption(&self) -> &'static str {
        analysis::UPLOAD_CAPTION
    }

    /// Analysis first, then the matching parts once the analysis has been
    /// on screen for the parts delay.
    fn respond_to_image(
        &self,
        _handle: &MediaHandle,
        ctx: &ReplyContext<'_>,
        rng: &mut dyn ChoiceSource,
    ) -> ScriptedReply {
        let analysis = analysis::analyze_vehicle(rng);
        let parts = parts_message(&analysis);
        let analysis_delay = ctx.pacing.image_analysis_delay();

        ScriptedReply::single(analysis_message(analysis), analysis_delay)
            .then(parts, analysis_delay + ctx.pacing.parts_recommendation_delay())
    }
}
