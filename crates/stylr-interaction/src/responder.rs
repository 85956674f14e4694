//! The responder seam: one implementation per assistant kind.

use crate::car::CarResponder;
use crate::context::{ReplyContext, UserInput};
use crate::custom::CustomResponder;
use crate::fashion::FashionResponder;
use crate::random::ChoiceSource;
use crate::reply::ScriptedReply;
use crate::retail::RetailResponder;
use stylr_core::assistant::AssistantKind;
use stylr_core::media::MediaHandle;
use stylr_core::message::{Attachment, MediaPayload, Message, Origin};

/// Turns user input into a scripted reply.
///
/// Implementations are pure: they read the conversation through
/// [`ReplyContext`] and draw randomness from the injected source only.
pub trait Responder: Send + Sync {
    fn kind(&self) -> AssistantKind;

    /// Reply to a text message.
    fn respond(
        &self,
        input: &UserInput,
        ctx: &ReplyContext<'_>,
        rng: &mut dyn ChoiceSource,
    ) -> ScriptedReply;

    /// Caption of the user message that carries an uploaded image.
    fn upload_caption(&self) -> &'static str;

    /// Reply to an uploaded image.
    fn respond_to_image(
        &self,
        handle: &MediaHandle,
        ctx: &ReplyContext<'_>,
        rng: &mut dyn ChoiceSource,
    ) -> ScriptedReply;

    /// The user message recording an upload.
    fn upload_message(&self, handle: MediaHandle) -> Message {
        Message::with_attachment(
            Origin::User,
            self.upload_caption(),
            Attachment::MediaUpload(MediaPayload::uploaded(handle)),
        )
    }
}

static FASHION: FashionResponder = FashionResponder;
static CAR: CarResponder = CarResponder;
static RETAIL: RetailResponder = RetailResponder;
static CUSTOM: CustomResponder = CustomResponder;

/// Responder for an assistant kind.
pub fn responder_for(kind: AssistantKind) -> &'static dyn Responder {
    match kind {
        AssistantKind::Fashion => &FASHION,
        AssistantKind::Car => &CAR,
        AssistantKind::Retail => &RETAIL,
        AssistantKind::Custom => &CUSTOM,
    }
}
