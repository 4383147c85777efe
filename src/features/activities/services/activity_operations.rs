use leptos::task::spawn_local;
use crate::core::services::{delete_participant, post_signup};
use crate::error::{ApiError, Result};
use crate::features::activities::hooks::{ActivitiesHook, FeedbackHook, SignupFields};
use crate::models::Feedback;

pub const SIGNUP_FALLBACK: &str = "Failed to sign up. Please try again.";
pub const UNREGISTER_FALLBACK: &str = "Failed to unregister. Please try again.";

/// What the board should do once a signup or unregister call has settled.
#[derive(Debug, Clone, PartialEq)]
pub struct MutationReport {
    pub feedback: Feedback,
    /// The server accepted the change: clear the form and refresh.
    pub applied: bool,
}

pub fn report_for(result: &Result<String>, fallback: &str) -> MutationReport {
    match result {
        Ok(message) => MutationReport { feedback: Feedback::success(message.clone()), applied: true },
        Err(e) => MutationReport { feedback: Feedback::error(e.user_message(fallback)), applied: false },
    }
}

/// Apply a settled mutation: always show its message; on success clear the
/// form (when there is one) and refresh the list.
pub fn settle_mutation(
    report: MutationReport,
    show: impl FnOnce(Feedback),
    fields: Option<SignupFields>,
    refresh: impl FnOnce(),
) {
    show(report.feedback);
    if report.applied {
        if let Some(fields) = fields {
            fields.clear();
        }
        refresh();
    }
}

fn log_failure(action: &str, error: &ApiError) {
    match error {
        ApiError::Server { .. } => {
            web_sys::console::log_1(&format!("{} rejected: {}", action, error).into());
        }
        ApiError::Transport(_) | ApiError::Decode(_) => {
            web_sys::console::error_1(&format!("Error {}: {}", action, error).into());
        }
    }
}

// Submit a registration; the form keeps its values unless the server accepted it
pub fn signup(
    activities: ActivitiesHook,
    fields: SignupFields,
    feedback: FeedbackHook,
    activity: String,
    email: String,
) {
    let config = activities.config();
    spawn_local(async move {
        let result = post_signup(&config, &activity, &email).await;
        if let Err(e) = &result {
            log_failure("signing up", e);
        }

        settle_mutation(
            report_for(&result, SIGNUP_FALLBACK),
            |f| feedback.show(f),
            Some(fields),
            || activities.refresh(),
        );
    });
}

// Remove a participant, triggered from the roster's removal control
pub fn unregister(
    activities: ActivitiesHook,
    feedback: FeedbackHook,
    activity: String,
    email: String,
) {
    let config = activities.config();
    spawn_local(async move {
        let result = delete_participant(&config, &activity, &email).await;
        if let Err(e) = &result {
            log_failure("unregistering", e);
        }

        settle_mutation(
            report_for(&result, UNREGISTER_FALLBACK),
            |f| feedback.show(f),
            None,
            || activities.refresh(),
        );
    });
}
