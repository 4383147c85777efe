use leptos::prelude::*;

#[component]
pub fn ParticipantList(
    #[prop(into)] activity_name: String,
    participants: Vec<String>,
    on_remove: Callback<(String, String)>,
) -> impl IntoView {
    if participants.is_empty() {
        return view! { <p class="no-participants">"No participants yet"</p> }.into_any();
    }

    let rows = participants
        .into_iter()
        .map(|email| {
            let data_activity = activity_name.clone();
            let data_participant = email.clone();
            let activity = activity_name.clone();
            let participant = email.clone();
            view! {
                <li class="participant-item">
                    <span class="participant-email">{email}</span>
                    <button
                        type="button"
                        class="delete-btn"
                        title="Unregister participant"
                        data-activity=data_activity
                        data-participant=data_participant
                        on:click=move |_| on_remove.run((activity.clone(), participant.clone()))
                    >"✖"</button>
                </li>
            }
        })
        .collect_view();

    view! { <ul class="participants-list">{rows}</ul> }.into_any()
}
