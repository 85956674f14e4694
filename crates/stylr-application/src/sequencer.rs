//! Delayed delivery of scripted reply steps.
//!
//! Every step is scheduled at `t0 + delay` where `t0` is the event that
//! triggered the reply. Steps from different replies interleave freely and
//! nothing is ever cancelled: a new user message does not remove pending
//! steps of an earlier reply.

use chrono::{NaiveDate, Utc};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::time::Duration;
use stylr_core::message::Message;
use stylr_interaction::ReplyStep;
use tokio::time::Instant;

/// Source of time for scheduling.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;

    /// Calendar date used for delivery estimates.
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Wall clock. Uses tokio's clock, so it follows a paused test runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    origin: Instant,
    elapsed_ms: AtomicU64,
    today: NaiveDate,
}

impl ManualClock {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            origin: Instant::now(),
            elapsed_ms: AtomicU64::new(0),
            today,
        }
    }

    pub fn advance(&self, by: Duration) {
        let millis = u64::try_from(by.as_millis()).unwrap_or(u64::MAX);
        self.elapsed_ms.fetch_add(millis, AtomicOrdering::SeqCst);
    }

    pub fn elapsed(&self) -> Duration {
        Duration::from_millis(self.elapsed_ms.load(AtomicOrdering::SeqCst))
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + self.elapsed()
    }

    fn today(&self) -> NaiveDate {
        self.today
    }
}

impl<C: Clock + ?Sized> Clock for std::sync::Arc<C> {
    fn now(&self) -> Instant {
        (**self).now()
    }

    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

/// A message that has come due for a conversation.
#[derive(Debug, Clone, PartialEq)]
pub struct Delivery {
    pub conversation_id: String,
    pub due: Instant,
    pub message: Message,
}

#[derive(Debug)]
struct Pending {
    due: Instant,
    seq: u64,
    conversation_id: String,
    message: Message,
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl Eq for Pending {}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pending {
    // Reversed: BinaryHeap is a max-heap and the earliest step must pop first.
    fn cmp(&self, other: &Self) -> Ordering {
        (other.due, other.seq).cmp(&(self.due, self.seq))
    }
}

/// Queue of pending reply steps ordered by (due time, enqueue order).
#[derive(Debug, Default)]
pub struct Sequencer {
    queue: BinaryHeap<Pending>,
    next_seq: u64,
}

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules every step at `t0 + step.delay`.
    ///
    /// # Arguments
    ///
    /// * `conversation_id` - Conversation the messages belong to
    /// * `t0` - The triggering event
    /// * `steps` - Reply steps, each with its own delay from `t0`
    pub fn enqueue(
        &mut self,
        conversation_id: &str,
        t0: Instant,
        steps: impl IntoIterator<Item = ReplyStep>,
    ) {
        for step in steps {
            let seq = self.next_seq;
            self.next_seq += 1;
            self.queue.push(Pending {
                due: t0 + step.delay,
                seq,
                conversation_id: conversation_id.to_string(),
                message: step.message,
            });
        }
    }

    /// Removes and returns every step due at or before `now`, earliest first.
    pub fn drain_due(&mut self, now: Instant) -> Vec<Delivery> {
        let mut due = Vec::new();
        while self.queue.peek().is_some_and(|pending| pending.due <= now) {
            if let Some(pending) = self.queue.pop() {
                due.push(Delivery {
                    conversation_id: pending.conversation_id,
                    due: pending.due,
                    message: pending.message,
                });
            }
        }
        due
    }

    /// When the next step comes due.
    pub fn next_due(&self) -> Option<Instant> {
        self.queue.peek().map(|pending| pending.due)
    }

    pub fn pending_for(&self, conversation_id: &str) -> usize {
        self.queue
            .iter()
            .filter(|pending| pending.conversation_id == conversation_id)
            .count()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(text: &str, ms: u64) -> ReplyStep {
        ReplyStep {
            delay: Duration::from_millis(ms),
            message: Message::responder(text),
        }
    }

    fn texts(deliveries: &[Delivery]) -> Vec<&str> {
        deliveries.iter().map(|d| d.message.text_content()).collect()
    }

    #[test]
    fn test_delivers_in_due_order() {
        let clock = ManualClock::new(NaiveDate::from_ymd_opt(2026, 10, 17).unwrap());
        let t0 = clock.now();
        let mut sequencer = Sequencer::new();
        sequencer.enqueue("c1", t0, [step("late", 3000), step("early", 1000)]);

        assert!(sequencer.drain_due(t0).is_empty());
        assert_eq!(sequencer.next_due(), Some(t0 + Duration::from_millis(1000)));

        clock.advance(Duration::from_millis(3000));
        assert_eq!(texts(&sequencer.drain_due(clock.now())), ["early", "late"]);
        assert!(sequencer.is_empty());
    }

    #[test]
    fn test_ties_keep_enqueue_order() {
        let clock = ManualClock::new(NaiveDate::from_ymd_opt(2026, 10, 17).unwrap());
        let t0 = clock.now();
        let mut sequencer = Sequencer::new();
        sequencer.enqueue("c1", t0, [step("a", 1000), step("b", 1000)]);
        sequencer.enqueue("c2", t0, [step("c", 1000)]);

        clock.advance(Duration::from_secs(1));
        let delivered = sequencer.drain_due(clock.now());
        assert_eq!(texts(&delivered), ["a", "b", "c"]);
        assert_eq!(delivered[2].conversation_id, "c2");
    }

    #[test]
    fn test_later_enqueue_does_not_cancel_earlier_steps() {
        let clock = ManualClock::new(NaiveDate::from_ymd_opt(2026, 10, 17).unwrap());
        let t0 = clock.now();
        let mut sequencer = Sequencer::new();
        sequencer.enqueue("c1", t0, [step("first", 1500), step("second", 3500)]);

        clock.advance(Duration::from_millis(500));
        sequencer.enqueue("c1", clock.now(), [step("reply", 1500)]);

        clock.advance(Duration::from_millis(1000));
        assert_eq!(texts(&sequencer.drain_due(clock.now())), ["first"]);
        clock.advance(Duration::from_millis(500));
        assert_eq!(texts(&sequencer.drain_due(clock.now())), ["reply"]);
        clock.advance(Duration::from_millis(1500));
        assert_eq!(texts(&sequencer.drain_due(clock.now())), ["second"]);
        assert!(sequencer.is_empty());
    }

    #[test]
    fn test_pending_for_counts_per_conversation() {
        let mut sequencer = Sequencer::new();
        let t0 = Instant::now();
        sequencer.enqueue("c1", t0, [step("a", 1), step("b", 2)]);
        sequencer.enqueue("c2", t0, [step("c", 1)]);
        assert_eq!(sequencer.pending_for("c1"), 2);
        assert_eq!(sequencer.len(), 3);
    }
}
