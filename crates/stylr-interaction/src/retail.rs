//! Retail dashboard agent: canned merchandising insights.

use crate::context::{ReplyContext, UserInput};
use crate::random::ChoiceSource;
use crate::reply::ScriptedReply;
use crate::responder::Responder;
use crate::rule::{Rule, RuleTable, Trigger};
use std::sync::OnceLock;
use stylr_core::assistant::AssistantKind;
use stylr_core::media::MediaHandle;
use stylr_core::message::Message;

pub const HELP_TEXT: &str = "I can help you with inventory analysis, customer feedback insights, sales performance, and campaign recommendations. What specific area would you like to explore?";

const UPLOAD_CAPTION: &str = "I've uploaded an image. Please analyze it and provide recommendations.";

pub fn retail_rules() -> &'static RuleTable<&'static str> {
    static TABLE: OnceLock<RuleTable<&'static str>> = OnceLock::new();
    TABLE.get_or_init(|| {
        RuleTable::new(
            vec![
                Rule::new(
                    "inventory",
                    Trigger::Any(&["stock", "inventory"]),
                    "Current inventory analysis: Size M items are critically low across all categories. I recommend increasing production by 200 units. Size XS and XXL are overstocked - consider promotional campaigns to clear inventory.",
                ),
                Rule::new(
                    "feedback",
                    Trigger::Any(&["feedback", "customer"]),
                    "Recent customer insights: 1) 30% of size M customers reject shiny fabrics 2) 67% prefer matte finishes 3) Red dress searches up 45% for weddings 4) Customers complain about sizing inconsistency in XL category.",
                ),
                Rule::new(
                    "sales",
                    Trigger::Any(&["sales", "revenue"]),
                    "Sales performance: Total revenue $127.4K (+12.5% MoM). Top performing: Blue Denim Jeans ($11.3K), Classic White T-Shirt ($4.7K). Underperforming: Leather Jackets (declining trend).",
                ),
                Rule::new(
                    "campaign",
                    Trigger::Any(&["campaign", "email"]),
                    "Campaign opportunities: 384 customers abandoned carts with Size M items (potential $12K recovery). VIP customers haven't received targeted emails in 2 weeks. Seasonal sale campaign can target 890 seasonal shoppers.",
                ),
            ],
            "help",
            HELP_TEXT,
        )
    })
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RetailResponder;

impl Responder for RetailResponder {
    fn kind(&self) -> AssistantKind {
        AssistantKind::Retail
    }

    fn respond(
        &self,
        input: &UserInput,
        ctx: &ReplyContext<'_>,
        _rng: &mut dyn ChoiceSource,
    ) -> ScriptedReply {
        let text = *retail_rules().match_rule(input.normalized()).reply;
        ScriptedReply::single(Message::responder(text), ctx.pacing.retail_reply_delay())
    }

    fn upload_caption(&self) -> &'static str {
        UPLOAD_CAPTION
    }

    // The agent has no image flow; it answers with its help text.
    fn respond_to_image(
        &self,
        _handle: &MediaHandle,
        ctx: &ReplyContext<'_>,
        _rng: &mut dyn ChoiceSource,
    ) -> ScriptedReply {
        ScriptedReply::single(Message::responder(HELP_TEXT), ctx.pacing.retail_reply_delay())
    }
}
