use leptos::prelude::*;

/// Values of the signup form, owned outside the form so operations can clear it.
#[derive(Clone, Copy)]
pub struct SignupFields {
    pub email: RwSignal<String>,
    pub activity: RwSignal<String>,
}

impl SignupFields {
    /// `(activity, email)` when both are filled in. Only the email is trimmed;
    /// the activity is a server key and goes out exactly as selected.
    pub fn submission(&self) -> Option<(String, String)> {
        let activity = self.activity.get_untracked();
        let email = self.email.get_untracked().trim().to_string();
        if activity.is_empty() || email.is_empty() {
            None
        } else {
            Some((activity, email))
        }
    }

    // Same as a native form reset: the select goes back to its placeholder
    pub fn clear(&self) {
        self.email.set(String::new());
        self.activity.set(String::new());
    }
}

pub fn use_signup_fields() -> SignupFields {
    SignupFields {
        email: RwSignal::new(String::new()),
        activity: RwSignal::new(String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_requires_both_fields() {
        let fields = use_signup_fields();
        assert_eq!(fields.submission(), None);

        fields.email.set("a@x.com".to_string());
        assert_eq!(fields.submission(), None);

        fields.activity.set("Chess Club".to_string());
        assert_eq!(
            fields.submission(),
            Some(("Chess Club".to_string(), "a@x.com".to_string()))
        );
    }

    #[test]
    fn submission_trims_email() {
        let fields = use_signup_fields();
        fields.email.set("  a@x.com ".to_string());
        fields.activity.set("Chess Club".to_string());
        assert_eq!(
            fields.submission(),
            Some(("Chess Club".to_string(), "a@x.com".to_string()))
        );

        fields.email.set("   ".to_string());
        assert_eq!(fields.submission(), None);
    }

    #[test]
    fn submission_keeps_activity_name_verbatim() {
        let fields = use_signup_fields();
        fields.email.set("a@x.com".to_string());
        fields.activity.set(" Chess Club ".to_string());
        assert_eq!(
            fields.submission(),
            Some((" Chess Club ".to_string(), "a@x.com".to_string()))
        );
    }

    #[test]
    fn clear_resets_both_fields() {
        let fields = use_signup_fields();
        fields.email.set("a@x.com".to_string());
        fields.activity.set("Chess Club".to_string());

        fields.clear();

        assert_eq!(fields.email.get_untracked(), "");
        assert_eq!(fields.activity.get_untracked(), "");
    }
}
