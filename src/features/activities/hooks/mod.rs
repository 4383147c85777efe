pub mod use_activities;
pub mod use_feedback;
pub mod use_signup_fields;

pub use use_activities::*;
pub use use_feedback::*;
pub use use_signup_fields::*;
