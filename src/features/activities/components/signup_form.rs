use leptos::ev;
use leptos::prelude::*;
use crate::features::activities::hooks::SignupFields;

pub const ACTIVITY_PLACEHOLDER: &str = "-- Select an activity --";

#[component]
pub fn SignupForm(
    fields: SignupFields,
    #[prop(into)] options: Signal<Vec<String>>,
    on_submit: Callback<(String, String)>,
) -> impl IntoView {
    let handle_submit = move |ev: ev::SubmitEvent| {
        // Stay on the page; the request goes out over fetch
        ev.prevent_default();

        if let Some(submission) = fields.submission() {
            on_submit.run(submission);
        }
    };

    view! {
        <form id="signup-form" on:submit=handle_submit>
            <div class="form-group">
                <label for="email">"Student Email:"</label>
                <input
                    type="email"
                    id="email"
                    required
                    placeholder="your-email@mergington.edu"
                    on:input=move |ev| fields.email.set(event_target_value(&ev))
                    prop:value=move || fields.email.get()
                />
            </div>
            <div class="form-group">
                <label for="activity">"Select Activity:"</label>
                <select
                    id="activity"
                    required
                    on:change=move |ev| fields.activity.set(event_target_value(&ev))
                    prop:value=move || fields.activity.get()
                >
                    <option value="">{ACTIVITY_PLACEHOLDER}</option>
                    {move || {
                        options
                            .get()
                            .into_iter()
                            .map(|name| view! { <option value=name.clone()>{name.clone()}</option> })
                            .collect_view()
                    }}
                </select>
            </div>
            <button type="submit">"Sign Up"</button>
        </form>
    }
}
