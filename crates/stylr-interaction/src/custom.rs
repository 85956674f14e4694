//! User-created assistants: persona-templated generic replies.

use crate::context::{ReplyContext, UserInput};
use crate::random::ChoiceSource;
use crate::reply::ScriptedReply;
use crate::responder::Responder;
use stylr_core::assistant::AssistantKind;
use stylr_core::media::MediaHandle;
use stylr_core::message::Message;

const UPLOAD_CAPTION: &str = "I've uploaded an image. Please analyze it and provide recommendations.";

const IMAGE_REPLY: &str = "I can see your image! Based on what I observe, here are my recommendations and suggestions tailored to your needs.";

const REPLY_TEMPLATES: usize = 4;

fn persona_reply(index: usize, persona: &str) -> String {
    match index {
        0 => format!(
            "As your {persona}, I'm here to help! Can you tell me more about what you're looking for?"
        ),
        1 => format!(
            "I'd be happy to assist you with that! Based on my expertise in {persona}, here are some suggestions..."
        ),
        2 => "That's a great question! Let me help you with my knowledge in this area.".to_string(),
        _ => format!(
            "I understand what you're asking about. Here's how I can help as your {persona}..."
        ),
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CustomResponder;

impl Responder for CustomResponder {
    fn kind(&self) -> AssistantKind {
        AssistantKind::Custom
    }

    /// Ignores the input text; one of four templates is picked at random.
    fn respond(
        &self,
        _input: &UserInput,
        ctx: &ReplyContext<'_>,
        rng: &mut dyn ChoiceSource,
    ) -> ScriptedReply {
        let persona = ctx.assistant.name.to_lowercase();
        let text = persona_reply(rng.pick_index(REPLY_TEMPLATES), &persona);
        ScriptedReply::single(Message::responder(text), ctx.pacing.reply_delay())
    }

    fn upload_caption(&self) -> &'static str {
        UPLOAD_CAPTION
    }

    fn respond_to_image(
        &self,
        _handle: &MediaHandle,
        ctx: &ReplyContext<'_>,
        _rng: &mut dyn ChoiceSource,
    ) -> ScriptedReply {
        ScriptedReply::single(Message::responder(IMAGE_REPLY), ctx.pacing.custom_image_delay())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedChoice;
    use chrono::NaiveDate;
    use stylr_core::assistant::find_template;
    use stylr_core::config::{ConversationConfig, PacingConfig};
    use stylr_core::conversation::Conversation;

    #[test]
    fn test_reply_mentions_persona() {
        let assistant = find_template("travel").unwrap().instantiate();
        let conversation = Conversation::new(&assistant, &ConversationConfig::default());
        let pacing = PacingConfig::default();
        let today = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        let ctx = ReplyContext::for_conversation(&conversation, &assistant, &pacing, today);
        let input = UserInput::parse("plan a trip").unwrap();

        let reply = CustomResponder.respond(&input, &ctx, &mut ScriptedChoice::new([0]));
        let expected = format!("As your {},", assistant.name.to_lowercase());
        assert!(reply.first().unwrap().text_content().starts_with(&expected));

        let reply = CustomResponder.respond(&input, &ctx, &mut ScriptedChoice::new([2]));
        assert!(!reply.first().unwrap().text_content().contains("travel"));
    }
}
