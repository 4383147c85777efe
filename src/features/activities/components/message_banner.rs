use leptos::prelude::*;
use crate::features::activities::hooks::FeedbackHook;

#[component]
pub fn MessageBanner(feedback: FeedbackHook) -> impl IntoView {
    view! {
        <div
            id="message"
            class=move || match feedback.current() {
                Some(f) => format!("message {}", f.kind.as_class()),
                None => "message hidden".to_string(),
            }
        >
            {move || feedback.current().map(|f| f.text).unwrap_or_default()}
        </div>
    }
}
