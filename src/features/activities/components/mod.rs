pub mod activity_card;
pub mod message_banner;
pub mod participant_list;
pub mod signup_form;

pub use activity_card::ActivityCard;
pub use message_banner::MessageBanner;
pub use participant_list::ParticipantList;
pub use signup_form::SignupForm;
