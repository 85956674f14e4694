//! The chat controller.
//!
//! `ChatService` owns the assistant roster, every conversation and the reply
//! sequencer. All state changes go through `&mut self`; there is a single
//! logical thread of control and no locking.
//!
//! # Flow
//!
//! 1. A user action appends the user's message to the conversation
//! 2. The assistant's responder builds a scripted reply from a read-only view
//! 3. The reply steps are enqueued relative to the moment of the action
//! 4. [`ChatService::tick`] appends whatever has come due

use crate::sequencer::{Clock, Delivery, Sequencer, SystemClock};
use std::sync::Arc;
use stylr_core::assistant::{Assistant, AssistantRoster, find_template};
use stylr_core::catalog::{CatalogItem, fashion_catalog};
use stylr_core::config::StylrConfig;
use stylr_core::conversation::{Conversation, ConversationStore};
use stylr_core::error::{Result, StylrError};
use stylr_core::media::{MediaCapture, MediaHandle, ShareSink, ShareTarget};
use stylr_core::message::{Message, ModelAnalysis};
use stylr_interaction::fashion::{analysis, checkout};
use stylr_interaction::{
    ChoiceSource, ReplyContext, ReplyStep, ScriptedReply, SeededChoice, UserInput, responder_for,
};

pub struct ChatService<C: Clock = SystemClock> {
    roster: AssistantRoster,
    conversations: ConversationStore,
    active_conversation: Option<String>,
    config: StylrConfig,
    sequencer: Sequencer,
    clock: C,
    rng: Box<dyn ChoiceSource>,
}

impl ChatService<SystemClock> {
    /// Creates a service on the wall clock with the default assistants.
    pub fn new(config: StylrConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }

    /// Waits for and delivers every pending step, then returns.
    ///
    /// Sleeps on tokio's clock, so a paused test runtime completes instantly.
    pub async fn run_until_idle(&mut self) -> usize {
        let mut delivered = 0;
        while let Some(due) = self.sequencer.next_due() {
            tokio::time::sleep_until(due).await;
            delivered += self.tick();
        }
        delivered
    }
}

impl<C: Clock> ChatService<C> {
    pub fn with_clock(config: StylrConfig, clock: C) -> Self {
        let rng = SeededChoice::from_optional_seed(config.random.seed);
        Self {
            roster: AssistantRoster::with_defaults(),
            conversations: ConversationStore::new(config.conversation.clone()),
            active_conversation: None,
            config,
            sequencer: Sequencer::new(),
            clock,
            rng: Box::new(rng),
        }
    }

    /// Replaces the random source (mock analyses, bundles, order numbers).
    pub fn with_choice_source(mut self, rng: impl ChoiceSource + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    pub fn config(&self) -> &StylrConfig {
        &self.config
    }

    // ---- Assistants ----

    pub fn assistants(&self) -> &[Assistant] {
        self.roster.all()
    }

    pub fn active_assistant(&self) -> &Assistant {
        self.roster.active()
    }

    /// Switches assistant; the conversation selection is cleared.
    pub fn select_assistant(&mut self, id: &str) -> Result<&Assistant> {
        let changed = self.roster.active_id() != id;
        let assistant = self.roster.select(id)?;
        if changed {
            self.active_conversation = None;
        }
        Ok(assistant)
    }

    /// Adds an assistant and makes it active.
    pub fn add_assistant(&mut self, assistant: Assistant) -> Result<()> {
        self.roster.add(assistant)?;
        self.active_conversation = None;
        Ok(())
    }

    /// Adds a custom assistant from a quick-add template and returns its id.
    pub fn add_assistant_from_template(&mut self, key: &str) -> Result<String> {
        let template = find_template(key).ok_or_else(|| StylrError::not_found("template", key))?;
        let assistant = template.instantiate();
        let id = assistant.id.clone();
        self.add_assistant(assistant)?;
        Ok(id)
    }

    pub fn update_assistant(&mut self, assistant: Assistant) -> Result<()> {
        self.roster.update(assistant)
    }

    /// Deletes an assistant together with all of its conversations.
    ///
    /// Replies still pending for those conversations are dropped on delivery.
    pub fn delete_assistant(&mut self, id: &str) -> Result<Assistant> {
        let removed = self.roster.delete(id)?;
        let conversations = self.conversations.delete_for_assistant(id);
        tracing::info!(assistant_id = id, conversations, "Assistant deleted");

        let active_gone = self
            .active_conversation
            .as_deref()
            .is_some_and(|cid| self.conversations.get(cid).is_err());
        if active_gone {
            self.active_conversation = None;
        }
        Ok(removed)
    }

    // ---- Conversations ----

    /// Conversations of the active assistant, newest first.
    pub fn conversations(&self) -> impl Iterator<Item = &Conversation> {
        self.conversations.for_assistant(self.roster.active_id())
    }

    pub fn conversation(&self, id: &str) -> Result<&Conversation> {
        self.conversations.get(id)
    }

    pub fn active_conversation(&self) -> Option<&Conversation> {
        self.active_conversation
            .as_deref()
            .and_then(|id| self.conversations.get(id).ok())
    }

    /// Starts a conversation with the active assistant and selects it.
    pub fn create_conversation(&mut self) -> String {
        let id = self.conversations.create(self.roster.active());
        self.active_conversation = Some(id.clone());
        id
    }

    pub fn select_conversation(&mut self, id: &str) -> Result<&Conversation> {
        let conversation = self.conversations.get(id)?;
        self.active_conversation = Some(id.to_string());
        Ok(conversation)
    }

    pub fn delete_conversation(&mut self, id: &str) -> Result<()> {
        self.conversations.delete(id)?;
        if self.active_conversation.as_deref() == Some(id) {
            self.active_conversation = None;
        }
        Ok(())
    }

    /// Opens a conversation whose first user message is `text`.
    ///
    /// Only the direct answer is scheduled. Follow-up steps such as the
    /// first-pick purchase prompt are not.
    pub fn open_with_message(&mut self, text: &str) -> Result<String> {
        let input = UserInput::parse(text)?;
        let id = self
            .conversations
            .create_with_message(self.roster.active(), input.raw());
        self.active_conversation = Some(id.clone());

        let t0 = self.clock.now();
        let reply = self.compose_text_reply(&id, &input)?;
        let answer = reply.into_steps().into_iter().take(1);
        self.sequencer.enqueue(&id, t0, answer);
        Ok(id)
    }

    // ---- Messages ----

    /// Appends the user's message and schedules the reply.
    ///
    /// Blank input is rejected and nothing is appended.
    pub fn send_text(&mut self, conversation_id: &str, text: &str) -> Result<()> {
        let input = UserInput::parse(text)?;
        self.conversations
            .get_mut(conversation_id)?
            .append(Message::user(input.raw()));
        self.reply_to_text(conversation_id, &input)
    }

    /// Validates a `data:` URI upload, then runs the assistant's image flow.
    ///
    /// A rejected upload is also reported inline as a responder message.
    pub fn upload_media(&mut self, conversation_id: &str, data_uri: &str) -> Result<()> {
        match MediaHandle::from_data_uri(data_uri, &self.config.upload) {
            Ok(handle) => self.submit_image(conversation_id, handle),
            Err(err) => {
                tracing::warn!(conversation_id, error = %err, "Upload rejected");
                self.report_inline(conversation_id, &err)?;
                Err(err)
            }
        }
    }

    /// Takes or picks a photo through the host, then runs the image flow.
    pub async fn capture_media(
        &mut self,
        conversation_id: &str,
        capture: &dyn MediaCapture,
    ) -> Result<()> {
        self.conversations.get(conversation_id)?;
        match capture.capture_or_select_image().await {
            Ok(handle) => self.submit_image(conversation_id, handle),
            Err(err) => {
                tracing::warn!(conversation_id, error = %err, "Media capture failed");
                self.report_inline(conversation_id, &err)?;
                Err(err)
            }
        }
    }

    // ---- Try-on and purchase ----

    pub fn record_try_on(&mut self, conversation_id: &str, item_id: &str) -> Result<()> {
        let item = fashion_item(item_id)?;
        self.conversations.get_mut(conversation_id)?.record_try_on(item);
        Ok(())
    }

    pub fn clear_try_on(&mut self, conversation_id: &str, item_id: &str) -> Result<bool> {
        Ok(self
            .conversations
            .get_mut(conversation_id)?
            .clear_try_on(item_id))
    }

    /// The user kept a try-on look: record it and offer the item.
    pub fn try_on_success(&mut self, conversation_id: &str, item_id: &str) -> Result<()> {
        let item = fashion_item(item_id)?;
        self.conversations
            .get_mut(conversation_id)?
            .record_try_on(item.clone());

        let step = ReplyStep {
            delay: self.config.pacing.try_on_prompt_delay(),
            message: checkout::try_on_prompt(item),
        };
        self.sequencer
            .enqueue(conversation_id, self.clock.now(), [step]);
        Ok(())
    }

    /// The 3D fit viewer finished analysing `item_id`: reports the result right away.
    pub fn model_analysis_complete(
        &mut self,
        conversation_id: &str,
        item_id: &str,
        report: &ModelAnalysis,
    ) -> Result<()> {
        let item = fashion_item(item_id)?;
        let message = analysis::model_analysis_message(&item, report);
        self.conversations.get_mut(conversation_id)?.append(message);
        tracing::debug!(conversation_id, item_id, "3D analysis reported");
        Ok(())
    }

    /// "Buy" on a purchase prompt: asks for the shipping address right away.
    pub fn purchase_confirm(&mut self, conversation_id: &str) -> Result<()> {
        let conversation = self.conversations.get_mut(conversation_id)?;
        let session = conversation
            .purchase_session()
            .ok_or_else(|| StylrError::invalid_input("No purchase in progress"))?;
        let request = checkout::address_request(session.item.clone());
        conversation.append(request);
        Ok(())
    }

    // ---- Sharing ----

    pub fn share_item(&self, item_id: &str, sink: &dyn ShareSink) -> Result<()> {
        let item = fashion_item(item_id)?;
        sink.share(ShareTarget::Item { item });
        Ok(())
    }

    pub fn share_text(&self, text: impl Into<String>, sink: &dyn ShareSink) {
        sink.share(ShareTarget::Text { text: text.into() });
    }

    // ---- Delivery ----

    /// Appends every step that is due now. Returns how many were appended.
    pub fn tick(&mut self) -> usize {
        let now = self.clock.now();
        let mut delivered = 0;
        for delivery in self.sequencer.drain_due(now) {
            if self.deliver(delivery) {
                delivered += 1;
            }
        }
        delivered
    }

    pub fn pending(&self) -> usize {
        self.sequencer.len()
    }

    fn deliver(&mut self, delivery: Delivery) -> bool {
        match self.conversations.get_mut(&delivery.conversation_id) {
            Ok(conversation) => {
                conversation.append(delivery.message);
                true
            }
            Err(_) => {
                tracing::debug!(
                    conversation_id = %delivery.conversation_id,
                    "Dropped reply for deleted conversation"
                );
                false
            }
        }
    }

    fn reply_to_text(&mut self, conversation_id: &str, input: &UserInput) -> Result<()> {
        let t0 = self.clock.now();
        let reply = self.compose_text_reply(conversation_id, input)?;
        self.schedule(conversation_id, t0, reply);
        Ok(())
    }

    fn compose_text_reply(
        &mut self,
        conversation_id: &str,
        input: &UserInput,
    ) -> Result<ScriptedReply> {
        let conversation = self.conversations.get(conversation_id)?;
        let assistant = assistant_of(&self.roster, conversation)?;
        let ctx = ReplyContext::for_conversation(
            conversation,
            assistant,
            &self.config.pacing,
            self.clock.today(),
        );
        Ok(responder_for(assistant.kind).respond(input, &ctx, self.rng.as_mut()))
    }

    fn submit_image(&mut self, conversation_id: &str, handle: MediaHandle) -> Result<()> {
        let t0 = self.clock.now();
        let kind = {
            let conversation = self.conversations.get(conversation_id)?;
            assistant_of(&self.roster, conversation)?.kind
        };
        let responder = responder_for(kind);
        let upload = responder.upload_message(handle.clone());
        self.conversations.get_mut(conversation_id)?.append(upload);

        let reply = {
            let conversation = self.conversations.get(conversation_id)?;
            let assistant = assistant_of(&self.roster, conversation)?;
            let ctx = ReplyContext::for_conversation(
                conversation,
                assistant,
                &self.config.pacing,
                self.clock.today(),
            );
            responder.respond_to_image(&handle, &ctx, self.rng.as_mut())
        };
        self.schedule(conversation_id, t0, reply);
        Ok(())
    }

    fn schedule(&mut self, conversation_id: &str, t0: tokio::time::Instant, reply: ScriptedReply) {
        tracing::debug!(conversation_id, steps = reply.len(), "Reply scheduled");
        self.sequencer
            .enqueue(conversation_id, t0, reply.into_steps());
    }

    fn report_inline(&mut self, conversation_id: &str, err: &StylrError) -> Result<()> {
        self.conversations
            .get_mut(conversation_id)?
            .append(Message::responder(err.user_message()));
        Ok(())
    }
}

fn assistant_of<'a>(roster: &'a AssistantRoster, conversation: &Conversation) -> Result<&'a Assistant> {
    roster
        .get(conversation.assistant_id())
        .ok_or_else(|| StylrError::not_found("assistant", conversation.assistant_id()))
}

fn fashion_item(item_id: &str) -> Result<Arc<CatalogItem>> {
    fashion_catalog()
        .get_by_id(item_id)
        .ok_or_else(|| StylrError::not_found("catalog item", item_id))
}
