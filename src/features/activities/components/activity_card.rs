use leptos::prelude::*;
use crate::models::Activity;
use super::ParticipantList;

pub fn availability_text(activity: &Activity) -> String {
    format!("{} spots left", activity.spots_left())
}

#[component]
pub fn ActivityCard(
    activity: Activity,
    on_remove: Callback<(String, String)>,
) -> impl IntoView {
    let availability = availability_text(&activity);
    let Activity { name, description, schedule, participants, .. } = activity;

    view! {
        <div class="activity-card">
            <h4>{name.clone()}</h4>
            <p>{description}</p>
            <p><strong>"Schedule:"</strong>" "{schedule}</p>
            <p><strong>"Availability:"</strong>" "{availability}</p>
            <div class="participants-section">
                <h5>"Participants"</h5>
                <ParticipantList activity_name=name participants=participants on_remove=on_remove />
            </div>
        </div>
    }
}
