use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::NaiveDate;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use stylr_application::{ChatService, ManualClock};
use stylr_core::assistant::{CAR_ASSISTANT_ID, RETAIL_AGENT_ID};
use stylr_core::config::StylrConfig;
use stylr_core::error::{Result, StylrError};
use stylr_core::media::{
    INVALID_IMAGE_MESSAGE, MediaCapture, MediaHandle, ShareSink, ShareTarget,
};
use stylr_core::message::{Attachment, BodyMeasurements, MessageKind, ModelAnalysis, Origin};
use stylr_interaction::ScriptedChoice;

fn setup() -> (ChatService<Arc<ManualClock>>, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()));
    let service = ChatService::with_clock(StylrConfig::default(), clock.clone())
        .with_choice_source(ScriptedChoice::default());
    (service, clock)
}

fn advance_and_tick(
    service: &mut ChatService<Arc<ManualClock>>,
    clock: &ManualClock,
    ms: u64,
) -> usize {
    clock.advance(Duration::from_millis(ms));
    service.tick()
}

fn kinds(service: &ChatService<Arc<ManualClock>>, id: &str) -> Vec<MessageKind> {
    service
        .conversation(id)
        .unwrap()
        .messages()
        .iter()
        .map(|m| m.kind())
        .collect()
}

#[test]
fn wedding_scenario_end_to_end() {
    let (mut service, clock) = setup();
    let id = service.create_conversation();
    assert_eq!(service.conversation(&id).unwrap().message_count(), 1);

    service.send_text(&id, "Find a dress for wedding").unwrap();
    assert_eq!(service.conversation(&id).unwrap().message_count(), 2);

    assert_eq!(advance_and_tick(&mut service, &clock, 1499), 0);
    assert_eq!(advance_and_tick(&mut service, &clock, 1), 1);
    assert_eq!(advance_and_tick(&mut service, &clock, 1500), 1);
    assert_eq!(advance_and_tick(&mut service, &clock, 2000), 1);

    let conversation = service.conversation(&id).unwrap();
    assert_eq!(conversation.message_count(), 5);
    assert_eq!(
        kinds(&service, &id)[1..],
        [
            MessageKind::Text,
            MessageKind::ItemList,
            MessageKind::PurchasePrompt,
            MessageKind::Text,
        ]
    );
    let session = conversation.purchase_session().unwrap();
    assert_eq!(session.item.id, "21");
    assert!(session.requests_address());

    service
        .send_text(&id, "Jane Doe, 123 Main St, Springfield, IL, 62704, USA")
        .unwrap();
    advance_and_tick(&mut service, &clock, 1500);

    let conversation = service.conversation(&id).unwrap();
    let Some(Attachment::PurchaseConfirmation(order)) = conversation.log().last().unwrap().attachment()
    else {
        panic!("expected an order confirmation");
    };
    assert_eq!(order.order_number, "ORD-00000000");
    assert_eq!(order.estimated_delivery, NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
    assert_eq!(order.shipping_address.full_name, "Jane Doe");
    assert!(conversation.purchase_session().is_none());
}

#[test]
fn interleaved_message_does_not_cancel_pending_steps() {
    let (mut service, clock) = setup();
    let id = service.create_conversation();

    // Steps at t0+1500, t0+3000, t0+5000
    service.send_text(&id, "show me jeans").unwrap();
    clock.advance(Duration::from_millis(500));
    // Help text at t0+2000
    service.send_text(&id, "zzz_no_match_zzz").unwrap();
    assert_eq!(service.pending(), 4);

    assert_eq!(advance_and_tick(&mut service, &clock, 1000), 1);
    assert_eq!(advance_and_tick(&mut service, &clock, 500), 1);
    assert_eq!(advance_and_tick(&mut service, &clock, 3000), 2);

    assert_eq!(
        kinds(&service, &id),
        [
            MessageKind::Text,
            MessageKind::Text,
            MessageKind::Text,
            MessageKind::ItemList,
            MessageKind::Text,
            MessageKind::PurchasePrompt,
            MessageKind::Text,
        ]
    );
}

#[test]
fn blank_input_is_rejected_without_appending() {
    let (mut service, _clock) = setup();
    let id = service.create_conversation();

    let err = service.send_text(&id, "   ").unwrap_err();
    assert!(err.is_invalid_input());
    assert_eq!(service.conversation(&id).unwrap().message_count(), 1);
    assert_eq!(service.pending(), 0);
    assert!(service.open_with_message("").is_err());
}

#[test]
fn rejected_upload_is_reported_inline() {
    let (mut service, _clock) = setup();
    let id = service.create_conversation();

    let uri = format!("data:application/pdf;base64,{}", STANDARD.encode(b"%PDF"));
    let err = service.upload_media(&id, &uri).unwrap_err();
    assert!(err.is_user_recoverable());

    let last = service.conversation(&id).unwrap().log().last().unwrap().clone();
    assert!(last.is_from(Origin::Responder));
    assert_eq!(last.text_content(), INVALID_IMAGE_MESSAGE);
    assert_eq!(service.pending(), 0);
}

#[test]
fn fashion_photo_gets_style_analysis() {
    let (mut service, clock) = setup();
    let id = service.create_conversation();

    let uri = format!("data:image/jpeg;base64,{}", STANDARD.encode([7u8; 64]));
    service.upload_media(&id, &uri).unwrap();

    let upload = service.conversation(&id).unwrap().log().last().unwrap().clone();
    assert_eq!(upload.kind(), MessageKind::MediaUpload);
    assert_eq!(upload.text_content(), "Here's my photo for styling advice!");

    assert_eq!(advance_and_tick(&mut service, &clock, 2500), 1);
    let analysis = service.conversation(&id).unwrap().log().last().unwrap().clone();
    assert!(matches!(
        analysis.attachment(),
        Some(Attachment::AnalysisResult(stylr_core::message::AnalysisReport::Fashion(_)))
    ));
}

#[test]
fn car_photo_gets_analysis_then_parts() {
    let (mut service, clock) = setup();
    service.select_assistant(CAR_ASSISTANT_ID).unwrap();
    let id = service.create_conversation();

    let uri = format!("data:image/png;base64,{}", STANDARD.encode([1u8; 32]));
    service.upload_media(&id, &uri).unwrap();

    assert_eq!(advance_and_tick(&mut service, &clock, 2500), 1);
    assert_eq!(advance_and_tick(&mut service, &clock, 3499), 0);
    assert_eq!(advance_and_tick(&mut service, &clock, 1), 1);

    let parts = service.conversation(&id).unwrap().log().last().unwrap().clone();
    let ids: Vec<_> = parts.items().iter().map(|p| p.id.clone()).collect();
    assert_eq!(ids, ["1", "2", "3"]);
}

#[test]
fn try_on_then_purchase_confirm() {
    let (mut service, clock) = setup();
    let id = service.create_conversation();

    service.try_on_success(&id, "7").unwrap();
    assert_eq!(advance_and_tick(&mut service, &clock, 1500), 1);

    let conversation = service.conversation(&id).unwrap();
    assert_eq!(conversation.last_tried_on().unwrap().id, "7");
    assert!(!conversation.purchase_session().unwrap().requests_address());

    service.purchase_confirm(&id).unwrap();
    let conversation = service.conversation(&id).unwrap();
    assert_eq!(conversation.message_count(), 3);
    assert!(conversation.purchase_session().unwrap().requests_address());

    // Complete-style now builds around the blazer
    service.send_text(&id, "complete the look").unwrap();
    advance_and_tick(&mut service, &clock, 1500);
    let last = service.conversation(&id).unwrap().log().last().unwrap().clone();
    let Some(Attachment::Bundle(bundle)) = last.attachment() else {
        panic!("expected a bundle");
    };
    assert_eq!(bundle.occasion, "Business Professional");
}

#[test]
fn purchase_confirm_without_session_fails() {
    let (mut service, _clock) = setup();
    let id = service.create_conversation();
    assert!(service.purchase_confirm(&id).unwrap_err().is_invalid_input());
    assert!(service.record_try_on(&id, "999").unwrap_err().is_not_found());
}

#[test]
fn deleting_assistant_deletes_its_conversations() {
    let (mut service, clock) = setup();
    let custom = service.add_assistant_from_template("cooking").unwrap();
    let id = service.create_conversation();
    service.send_text(&id, "what's for dinner?").unwrap();

    service.delete_assistant(&custom).unwrap();
    assert!(service.conversation(&id).unwrap_err().is_not_found());
    assert!(service.active_conversation().is_none());

    // The pending reply is dropped on delivery
    assert_eq!(advance_and_tick(&mut service, &clock, 1500), 0);
    assert_eq!(service.pending(), 0);
}

#[test]
fn last_assistant_cannot_be_deleted() {
    let (mut service, _clock) = setup();
    for id in ["fashion-assistant", CAR_ASSISTANT_ID] {
        service.delete_assistant(id).unwrap();
    }
    assert_eq!(service.active_assistant().id, RETAIL_AGENT_ID);
    assert!(service.delete_assistant(RETAIL_AGENT_ID).is_err());
}

#[test]
fn open_with_message_gets_only_the_direct_answer() {
    let (mut service, clock) = setup();
    let text = "I'm looking for something elegant to wear to a gala dinner next month";
    let id = service.open_with_message(text).unwrap();

    let conversation = service.active_conversation().unwrap();
    assert_eq!(conversation.id(), id);
    assert_eq!(conversation.title().chars().count(), 40);
    assert_eq!(conversation.message_count(), 2);
    assert_eq!(service.pending(), 1);

    assert_eq!(advance_and_tick(&mut service, &clock, 1500), 1);
    assert_eq!(advance_and_tick(&mut service, &clock, 10_000), 0);
    assert_eq!(
        kinds(&service, &id)[1..],
        [MessageKind::Text, MessageKind::ItemList]
    );
    assert!(service.conversation(&id).unwrap().purchase_session().is_none());
}

#[test]
fn wedding_request_appends_list_prompt_and_follow_up() {
    let (mut service, clock) = setup();
    let id = service.create_conversation();
    assert_eq!(service.conversation(&id).unwrap().message_count(), 1);

    service.send_text(&id, "Help me find a dress for a wedding").unwrap();
    advance_and_tick(&mut service, &clock, 5000);

    let conversation = service.conversation(&id).unwrap();
    assert_eq!(conversation.message_count(), 5);
    assert_eq!(
        kinds(&service, &id)[1..],
        [
            MessageKind::Text,
            MessageKind::ItemList,
            MessageKind::PurchasePrompt,
            MessageKind::Text,
        ]
    );
    let list = &conversation.messages()[2];
    let ids: Vec<_> = list.items().iter().map(|item| item.id.as_str()).collect();
    assert_eq!(ids, ["21", "22", "23"]);
    assert_eq!(conversation.purchase_session().unwrap().item.id, "21");
}

#[test]
fn address_after_try_on_confirms_the_first_pick() {
    let (mut service, clock) = setup();
    let id = service.create_conversation();

    service.send_text(&id, "show me jeans").unwrap();
    advance_and_tick(&mut service, &clock, 3000);
    service.try_on_success(&id, "7").unwrap();
    advance_and_tick(&mut service, &clock, 2000);

    let session = service.conversation(&id).unwrap().purchase_session().unwrap().clone();
    assert_eq!(session.item.id, "7");
    assert_eq!(session.address_item().unwrap().id, "6");

    service
        .send_text(&id, "Jane Doe, 123 Main St, Springfield, IL, 62704, USA")
        .unwrap();
    advance_and_tick(&mut service, &clock, 1500);

    let conversation = service.conversation(&id).unwrap();
    let last = conversation.log().last().unwrap();
    assert_eq!(last.kind(), MessageKind::PurchaseConfirmation);
    let Some(Attachment::PurchaseConfirmation(order)) = last.attachment() else {
        panic!("expected an order confirmation");
    };
    assert_eq!(order.item.id, "6");
    assert!(conversation.purchase_session().is_none());
}

#[test]
fn model_analysis_is_reported_immediately() {
    let (mut service, _clock) = setup();
    let id = service.create_conversation();
    let report = ModelAnalysis {
        measurements: BodyMeasurements {
            height: "5'6\"".to_string(),
            chest: "34\"".to_string(),
            waist: "27\"".to_string(),
            hips: "37\"".to_string(),
            shoulder_width: "15\"".to_string(),
        },
        body_shape: "Pear".to_string(),
        skin_tone: "Fair with Warm Undertones".to_string(),
        eye_color: "Green".to_string(),
        recommended_styles: vec!["A-line dresses".to_string()],
        fit_confidence: 0.85,
    };

    service.model_analysis_complete(&id, "1", &report).unwrap();
    let conversation = service.conversation(&id).unwrap();
    assert_eq!(conversation.message_count(), 2);
    let text = conversation.log().last().unwrap().text_content();
    assert!(text.contains("The pear body shape"));
    assert_eq!(service.pending(), 0);

    assert!(
        service
            .model_analysis_complete(&id, "999", &report)
            .unwrap_err()
            .is_not_found()
    );
}

#[test]
fn conversations_are_listed_per_assistant() {
    let (mut service, _clock) = setup();
    let first = service.create_conversation();
    let second = service.create_conversation();
    service.select_assistant(RETAIL_AGENT_ID).unwrap();
    assert!(service.active_conversation().is_none());
    service.create_conversation();

    service.select_assistant("fashion-assistant").unwrap();
    let ids: Vec<_> = service.conversations().map(|c| c.id().to_string()).collect();
    assert_eq!(ids, [second.clone(), first]);

    service.delete_conversation(&second).unwrap();
    assert_eq!(service.conversations().count(), 1);
}

#[derive(Default)]
struct RecordingSink(Mutex<Vec<ShareTarget>>);

impl ShareSink for RecordingSink {
    fn share(&self, target: ShareTarget) {
        self.0.lock().unwrap().push(target);
    }
}

#[test]
fn share_item_and_text() {
    let (service, _clock) = setup();
    let sink = RecordingSink::default();

    service.share_item("16", &sink).unwrap();
    service.share_text("Look at this!", &sink);
    assert!(service.share_item("nope", &sink).is_err());

    let shared = sink.0.lock().unwrap();
    assert_eq!(shared.len(), 2);
    assert!(matches!(&shared[0], ShareTarget::Item { item } if item.name == "Gold Statement Necklace"));
}

struct DeniedCamera;

#[async_trait::async_trait]
impl MediaCapture for DeniedCamera {
    async fn capture_or_select_image(&self) -> Result<MediaHandle> {
        Err(StylrError::media_capture(
            "Unable to access camera. Please check your permissions.",
        ))
    }
}

struct FixedCamera;

#[async_trait::async_trait]
impl MediaCapture for FixedCamera {
    async fn capture_or_select_image(&self) -> Result<MediaHandle> {
        Ok(MediaHandle::new("blob:camera-1"))
    }
}

#[tokio::test]
async fn capture_failure_is_shown_inline() {
    let (mut service, _clock) = setup();
    let id = service.create_conversation();

    let err = service.capture_media(&id, &DeniedCamera).await.unwrap_err();
    assert!(matches!(err, StylrError::MediaCapture(_)));
    let last = service.conversation(&id).unwrap().log().last().unwrap().clone();
    assert!(last.text_content().starts_with("Unable to access camera"));

    service.capture_media(&id, &FixedCamera).await.unwrap();
    assert_eq!(service.pending(), 1);
}

#[tokio::test(start_paused = true)]
async fn run_until_idle_on_paused_clock() {
    let config = StylrConfig {
        random: stylr_core::config::RandomConfig { seed: Some(3) },
        ..StylrConfig::default()
    };
    let mut service = ChatService::new(config);
    service.select_assistant(RETAIL_AGENT_ID).unwrap();
    let id = service.create_conversation();

    service.send_text(&id, "how is inventory looking?").unwrap();
    service.send_text(&id, "and sales?").unwrap();
    assert_eq!(service.run_until_idle().await, 2);

    let texts: Vec<_> = service
        .conversation(&id)
        .unwrap()
        .messages()
        .iter()
        .filter(|m| m.is_from(Origin::Responder))
        .map(|m| m.text_content().to_string())
        .collect();
    assert!(texts[1].starts_with("Current inventory analysis"));
    assert!(texts[2].starts_with("Sales performance"));
}
