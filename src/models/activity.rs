use serde::{Deserialize, Serialize};
use serde_json::Map;

/// One entry of the `GET /activities` payload, keyed by activity name on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityDetails {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl Activity {
    pub fn from_details(name: String, details: ActivityDetails) -> Self {
        Self {
            name,
            description: details.description,
            schedule: details.schedule,
            max_participants: details.max_participants,
            participants: details.participants,
        }
    }

    // Signed so an over-full roster shows up as negative instead of wrapping
    pub fn spots_left(&self) -> i64 {
        i64::from(self.max_participants) - self.participants.len() as i64
    }
}

/// Flatten the name-keyed activities object into a list, keeping the server's order.
pub fn activities_from_json(body: &str) -> Result<Vec<Activity>, serde_json::Error> {
    let raw: Map<String, serde_json::Value> = serde_json::from_str(body)?;
    raw.into_iter()
        .map(|(name, value)| {
            let details: ActivityDetails = serde_json::from_value(value)?;
            Ok::<_, serde_json::Error>(Activity::from_details(name, details))
        })
        .collect()
}

/// Names for the selection control, in display order.
pub fn activity_names(activities: &[Activity]) -> Vec<String> {
    activities.iter().map(|a| a.name.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHESS_CLUB: &str = r#"{
        "Chess Club": {
            "description": "Learn strategies and compete in chess tournaments",
            "schedule": "Fri 3pm",
            "max_participants": 10,
            "participants": ["a@x.com"]
        }
    }"#;

    #[test]
    fn chess_club_has_nine_spots_left() {
        let activities = activities_from_json(CHESS_CLUB).unwrap();
        assert_eq!(activities.len(), 1);

        let chess = &activities[0];
        assert_eq!(chess.name, "Chess Club");
        assert_eq!(chess.schedule, "Fri 3pm");
        assert_eq!(chess.participants, vec!["a@x.com".to_string()]);
        assert_eq!(chess.spots_left(), 9);
    }

    #[test]
    fn spots_left_tracks_roster_for_every_entry() {
        let body = r#"{
            "Test Club": {"description": "d", "schedule": "s", "max_participants": 5,
                          "participants": ["test1@mergington.edu", "test2@mergington.edu"]},
            "Empty Club": {"description": "d", "schedule": "s", "max_participants": 10,
                           "participants": []},
            "Full Club": {"description": "d", "schedule": "s", "max_participants": 1,
                          "participants": ["x@y.z"]}
        }"#;
        let activities = activities_from_json(body).unwrap();

        for activity in &activities {
            assert_eq!(
                activity.spots_left(),
                activity.max_participants as i64 - activity.participants.len() as i64,
                "{}",
                activity.name
            );
        }
        assert_eq!(activities[2].spots_left(), 0);
    }

    #[test]
    fn over_full_roster_goes_negative() {
        let activity = Activity {
            name: "Tiny".into(),
            description: String::new(),
            schedule: String::new(),
            max_participants: 1,
            participants: vec!["a@x.com".into(), "b@x.com".into()],
        };
        assert_eq!(activity.spots_left(), -1);
    }

    #[test]
    fn keeps_server_order() {
        let body = r#"{
            "Programming Class": {"description": "", "schedule": "", "max_participants": 20, "participants": []},
            "Chess Club": {"description": "", "schedule": "", "max_participants": 12, "participants": []},
            "Gym Class": {"description": "", "schedule": "", "max_participants": 30, "participants": []}
        }"#;
        let activities = activities_from_json(body).unwrap();
        assert_eq!(
            activity_names(&activities),
            vec!["Programming Class", "Chess Club", "Gym Class"]
        );
    }

    #[test]
    fn missing_participants_means_empty_roster() {
        let body = r#"{"Art": {"description": "", "schedule": "", "max_participants": 3}}"#;
        let activities = activities_from_json(body).unwrap();
        assert!(activities[0].participants.is_empty());
        assert_eq!(activities[0].spots_left(), 3);
    }

    #[test]
    fn rejects_non_object_payload() {
        assert!(activities_from_json("[]").is_err());
        assert!(activities_from_json(r#"{"Art": {"schedule": ""}}"#).is_err());
    }
}
