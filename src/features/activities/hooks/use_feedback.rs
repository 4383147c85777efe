use leptos::prelude::*;
use leptos::task::spawn_local;
use gloo_timers::future::TimeoutFuture;
use crate::models::{Feedback, FeedbackSlot};

#[derive(Clone, Copy)]
pub struct FeedbackHook {
    slot: RwSignal<FeedbackSlot>,
    timeout_ms: u32,
}

impl FeedbackHook {
    pub fn current(&self) -> Option<Feedback> {
        self.slot.with(|slot| slot.current().cloned())
    }

    /// Replace whatever is showing and schedule this message's auto-hide.
    pub fn show(&self, feedback: Feedback) {
        let mut generation = 0;
        self.slot.update(|slot| generation = slot.show(feedback));

        let slot = self.slot;
        let timeout_ms = self.timeout_ms;
        spawn_local(async move {
            TimeoutFuture::new(timeout_ms).await;
            slot.try_update(|slot| slot.dismiss(generation));
        });
    }
}

pub fn use_feedback(timeout_ms: u32) -> FeedbackHook {
    FeedbackHook {
        slot: RwSignal::new(FeedbackSlot::default()),
        timeout_ms,
    }
}
