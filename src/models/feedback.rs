#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Error,
}

impl FeedbackKind {
    pub fn as_class(&self) -> &'static str {
        match self {
            FeedbackKind::Success => "success",
            FeedbackKind::Error => "error",
        }
    }
}

/// Transient message shown after a signup or unregister attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    pub text: String,
    pub kind: FeedbackKind,
}

impl Feedback {
    pub fn success(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: FeedbackKind::Success }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: FeedbackKind::Error }
    }
}

/// Holds at most one message. Every `show` bumps the generation so a dismiss
/// timer started for an older message leaves a newer one alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedbackSlot {
    current: Option<Feedback>,
    generation: u64,
}

impl FeedbackSlot {
    pub fn show(&mut self, feedback: Feedback) -> u64 {
        self.generation += 1;
        self.current = Some(feedback);
        self.generation
    }

    /// Clears the message only if it is still the one `generation` was issued for.
    pub fn dismiss(&mut self, generation: u64) -> bool {
        if self.generation == generation && self.current.is_some() {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> Option<&Feedback> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dismiss_hides_the_message_it_was_issued_for() {
        let mut slot = FeedbackSlot::default();
        let ticket = slot.show(Feedback::success("Signed up a@x.com for Chess Club"));
        assert_eq!(slot.current().map(|f| f.kind), Some(FeedbackKind::Success));

        assert!(slot.dismiss(ticket));
        assert!(slot.current().is_none());
        assert!(!slot.dismiss(ticket));
    }

    #[test]
    fn newer_message_survives_older_timer() {
        let mut slot = FeedbackSlot::default();
        let first = slot.show(Feedback::success("Signed up a@x.com for Chess Club"));
        let second = slot.show(Feedback::error("Student is already signed up"));

        assert!(!slot.dismiss(first));
        assert_eq!(
            slot.current(),
            Some(&Feedback::error("Student is already signed up"))
        );

        assert!(slot.dismiss(second));
        assert!(slot.current().is_none());
    }

    #[test]
    fn kind_maps_to_css_class() {
        assert_eq!(Feedback::success("ok").kind.as_class(), "success");
        assert_eq!(Feedback::error("no").kind.as_class(), "error");
    }
}
