use crate::config::BoardConfig;
use crate::error::Result;
use crate::models::{activities_from_json, Activity};
use super::http::{check_status, execute_request, interpret_mutation, Endpoint};

// Fetch every activity, in the order the server lists them
pub async fn fetch_activities(config: &BoardConfig) -> Result<Vec<Activity>> {
    let raw = check_status(execute_request(config, Endpoint::Activities).await?)?;
    let activities = activities_from_json(&raw.body)?;
    web_sys::console::log_1(&format!("Loaded {} activities", activities.len()).into());
    Ok(activities)
}

// Register an email for an activity; Ok carries the server's confirmation text
pub async fn post_signup(config: &BoardConfig, activity: &str, email: &str) -> Result<String> {
    let raw = execute_request(config, Endpoint::Signup { activity, email }).await?;
    interpret_mutation(raw)
}

// Remove an email from an activity's roster
pub async fn delete_participant(config: &BoardConfig, activity: &str, email: &str) -> Result<String> {
    let raw = execute_request(config, Endpoint::Unregister { activity, email }).await?;
    interpret_mutation(raw)
}
