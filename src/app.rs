use leptos::prelude::*;
use crate::config::BoardConfig;
use crate::pages::ActivityBoard;

#[component]
pub fn App() -> impl IntoView {
    provide_context(BoardConfig::from_build_env());

    view! {
        <main class="app">
            <ActivityBoard />
        </main>
    }
}
