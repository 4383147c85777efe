use leptos::prelude::*;
use leptos::task::spawn_local;
use crate::config::BoardConfig;
use crate::core::services::fetch_activities;
use crate::error::Result;
use crate::models::{activity_names, Activity};

#[derive(Debug, Clone, PartialEq)]
pub enum BoardState {
    Loading,
    Ready(Vec<Activity>),
    Failed,
}

/// Reactive handle on the activity list and the signup form's option list.
///
/// Every fetch replaces the whole list; nothing is patched in place. Overlapping
/// fetches are not sequenced, so whichever response lands last is what shows.
#[derive(Clone, Copy)]
pub struct ActivitiesHook {
    state: RwSignal<BoardState>,
    options: RwSignal<Vec<String>>,
    config: StoredValue<BoardConfig>,
}

impl ActivitiesHook {
    pub fn state(&self) -> BoardState {
        self.state.get()
    }

    pub fn options(&self) -> Vec<String> {
        self.options.get()
    }

    pub fn config(&self) -> BoardConfig {
        self.config.get_value()
    }

    /// Fetch and render, repopulating the selection control too. Runs once at startup.
    pub fn load(&self) {
        self.fetch(true);
    }

    /// Fetch and render, leaving the selection control as the user left it.
    pub fn refresh(&self) {
        self.fetch(false);
    }

    fn fetch(&self, with_options: bool) {
        let state = self.state;
        let options = self.options;
        let config = self.config.get_value();
        spawn_local(async move {
            let result = fetch_activities(&config).await;
            if let Err(e) = &result {
                web_sys::console::error_1(&format!("Error fetching activities: {}", e).into());
            }

            let mut next_state = state.get_untracked();
            let mut next_options = options.get_untracked();
            apply_fetch(&mut next_state, &mut next_options, result, with_options);
            if with_options {
                options.set(next_options);
            }
            state.set(next_state);
        });
    }
}

/// Settle one fetch into the list state and, on load, the option list.
/// A failed fetch never touches the options.
pub fn apply_fetch(
    state: &mut BoardState,
    options: &mut Vec<String>,
    result: Result<Vec<Activity>>,
    with_options: bool,
) {
    match result {
        Ok(activities) => {
            if with_options {
                *options = activity_names(&activities);
            }
            *state = BoardState::Ready(activities);
        }
        Err(_) => *state = BoardState::Failed,
    }
}

pub fn use_activities(config: BoardConfig) -> ActivitiesHook {
    let hook = ActivitiesHook {
        state: RwSignal::new(BoardState::Loading),
        options: RwSignal::new(Vec::new()),
        config: StoredValue::new(config),
    };

    // Load on mount
    hook.load();

    hook
}
