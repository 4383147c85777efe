use leptos::prelude::*;
use crate::config::BoardConfig;
use crate::features::activities::{
    signup, unregister, use_activities, use_feedback, use_signup_fields, ActivityCard, BoardState,
    MessageBanner, SignupForm,
};

pub const LOAD_FAILED_NOTICE: &str = "Failed to load activities. Please try again later.";

#[component]
pub fn ActivityBoard() -> impl IntoView {
    let config = use_context::<BoardConfig>().unwrap_or_else(BoardConfig::from_build_env);

    let activities = use_activities(config.clone());
    let feedback = use_feedback(config.message_timeout_ms);
    let fields = use_signup_fields();

    let on_signup = Callback::new(move |(activity, email): (String, String)| {
        signup(activities, fields, feedback, activity, email);
    });

    let on_remove = Callback::new(move |(activity, email): (String, String)| {
        unregister(activities, feedback, activity, email);
    });

    let options = Signal::derive(move || activities.options());

    view! {
        <div class="activity-board">
            <header>
                <h1>"Mergington High School"</h1>
                <h2>"Extracurricular Activities"</h2>
            </header>

            <div class="board-content">
                <section id="activities-container">
                    <h3>"Available Activities"</h3>
                    <div id="activities-list">
                        {move || match activities.state() {
                            BoardState::Loading => view! { <p>"Loading activities..."</p> }.into_any(),
                            BoardState::Failed => view! { <p>{LOAD_FAILED_NOTICE}</p> }.into_any(),
                            BoardState::Ready(list) => list
                                .into_iter()
                                .map(|activity| view! { <ActivityCard activity=activity on_remove=on_remove /> })
                                .collect_view()
                                .into_any(),
                        }}
                    </div>
                </section>

                <section id="signup-container">
                    <h3>"Sign Up for an Activity"</h3>
                    <SignupForm fields=fields options=options on_submit=on_signup />
                    <MessageBanner feedback=feedback />
                </section>
            </div>
        </div>
    }
}
