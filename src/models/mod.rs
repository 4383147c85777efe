pub mod activity;
pub mod feedback;

pub use activity::{activities_from_json, activity_names, Activity};
pub use feedback::{Feedback, FeedbackKind, FeedbackSlot};
