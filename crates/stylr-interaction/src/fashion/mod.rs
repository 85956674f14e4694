//! Fashion stylist assistant.

pub mod analysis;
pub mod checkout;
pub mod rules;
pub mod style;

pub use rules::{FashionReply, fashion_rules};

use crate::context::{ReplyContext, UserInput};
use crate::random::ChoiceSource;
use crate::reply::ScriptedReply;
use crate::responder::Responder;
use std::sync::Arc;
use stylr_core::assistant::AssistantKind;
use stylr_core::catalog::{CatalogItem, fashion_catalog};
use stylr_core::config::PacingConfig;
use stylr_core::media::MediaHandle;
use stylr_core::message::{Attachment, Message, MessageKind, Origin, Recommendation};

const SIZE_GUIDE_TEXT: &str = "Here are my size and styling recommendations for you:";

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn size_guide() -> Recommendation {
    Recommendation {
        title: "Personal Size & Style Guide".to_string(),
        advice: "Based on your preferences and current fashion trends, here are my personalized recommendations for the perfect fit.".to_string(),
        suggested_sizes: owned(&[
            "Medium (M) for tops and dresses",
            "Large (L) for relaxed fit shirts",
            "Size 9 for shoes",
            "Size 28 for jeans",
        ]),
        style_notes: owned(&[
            "Layer pieces for versatility and style depth",
            "Mix textures like leather with cotton for interest",
            "Stick to a cohesive color palette with 2-3 main colors",
            "Invest in quality basics that can be styled multiple ways",
            "Consider your lifestyle when choosing fabrics and fits",
        ]),
    }
}

fn help(pacing: &PacingConfig) -> ScriptedReply {
    ScriptedReply::single(Message::responder(rules::HELP_TEXT), pacing.reply_delay())
}

/// An item list followed by a purchase suggestion for its first item and
/// the style-profile invitation.
fn item_list_reply(text: &str, items: Vec<Arc<CatalogItem>>, pacing: &PacingConfig) -> ScriptedReply {
    let Some(first) = items.first().cloned() else {
        return help(pacing);
    };
    let base = pacing.reply_delay();

    ScriptedReply::single(
        Message::with_attachment(Origin::Responder, text, Attachment::item_list(items)),
        base,
    )
    .then(checkout::first_pick_prompt(first), base + pacing.purchase_prompt_delay())
    .then(
        Message::responder(checkout::STYLE_PROFILE_FOLLOW_UP),
        base + pacing.follow_up_delay(),
    )
}

/// Scripted stylist: keyword rules, curated looks and a mock checkout.
#[derive(Debug, Clone, Copy, Default)]
pub struct FashionResponder;

impl Responder for FashionResponder {
    fn kind(&self) -> AssistantKind {
        AssistantKind::Fashion
    }

    fn respond(
        &self,
        input: &UserInput,
        ctx: &ReplyContext<'_>,
        rng: &mut dyn ChoiceSource,
    ) -> ScriptedReply {
        let catalog = fashion_catalog();
        let pacing = ctx.pacing;
        let delay = pacing.reply_delay();

        match *fashion_rules().match_rule(input.normalized()).reply {
            FashionReply::Text(text) => ScriptedReply::single(Message::responder(text), delay),
            FashionReply::Items { text, ids } => item_list_reply(text, catalog.get_many(ids), pacing),
            FashionReply::SizeGuide => ScriptedReply::single(
                Message::with_attachment(
                    Origin::Responder,
                    SIZE_GUIDE_TEXT,
                    Attachment::Recommendation(size_guide()),
                ),
                delay,
            ),
            FashionReply::CompleteStyle => {
                let main = ctx
                    .tried_on
                    .last()
                    .cloned()
                    .or_else(|| catalog.get_by_id(style::FALLBACK_MAIN_ITEM_ID));
                match main {
                    Some(main) => ScriptedReply::single(
                        style::bundle_message(style::build_bundle(main, catalog, rng)),
                        delay,
                    ),
                    None => help(pacing),
                }
            }
            FashionReply::BuyIntent => {
                let message = ctx
                    .log
                    .last_of_kind(MessageKind::ItemList)
                    .and_then(|list| list.items().first().cloned())
                    .map(checkout::buy_intent_prompt)
                    .unwrap_or_else(|| Message::responder(checkout::BUY_INTENT_NUDGE));
                ScriptedReply::single(message, delay)
            }
            FashionReply::ConfirmPurchase => match ctx.purchase_session {
                Some(session) => {
                    ScriptedReply::single(checkout::address_request(session.item.clone()), delay)
                }
                None => help(pacing),
            },
            FashionReply::ShippingAddress => ctx
                .purchase_session
                .and_then(|session| checkout::confirm_order(input.raw(), session, ctx.today, rng))
                .map(|confirmation| ScriptedReply::single(confirmation, delay))
                .unwrap_or_else(|| help(pacing)),
            FashionReply::Help => help(pacing),
        }
    }

    fn upload_caption(&self) -> &'static str {
        analysis::UPLOAD_CAPTION
    }

    fn respond_to_image(
        &self,
        _handle: &MediaHandle,
        ctx: &ReplyContext<'_>,
        rng: &mut dyn ChoiceSource,
    ) -> ScriptedReply {
        ScriptedReply::single(
            analysis::analysis_message(analysis::analyze_photo(rng)),
            ctx.pacing.image_analysis_delay(),
        )
    }
}
