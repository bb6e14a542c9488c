use std::path::{Path, PathBuf};

use crate::database::activity_store::Activities;
use crate::models::Activity;

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse seed file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Built-in roster used when no seed file is configured.
pub fn default_activities() -> Activities {
    let rows = [
        (
            "Chess Club",
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                &["michael@mergington.edu", "daniel@mergington.edu"],
            ),
        ),
        (
            "Programming Class",
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                &["emma@mergington.edu", "sophia@mergington.edu"],
            ),
        ),
        (
            "Gym Class",
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
                &["john@mergington.edu", "olivia@mergington.edu"],
            ),
        ),
        (
            "Soccer Team",
            Activity::new(
                "Join the school soccer team and compete in matches",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                22,
                &["liam@mergington.edu", "noah@mergington.edu"],
            ),
        ),
        (
            "Basketball Team",
            Activity::new(
                "Practice and play basketball with the school team",
                "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
                15,
                &["ava@mergington.edu", "mia@mergington.edu"],
            ),
        ),
        (
            "Art Club",
            Activity::new(
                "Explore your creativity through painting and drawing",
                "Thursdays, 3:30 PM - 5:00 PM",
                15,
                &["amelia@mergington.edu", "harper@mergington.edu"],
            ),
        ),
        (
            "Drama Club",
            Activity::new(
                "Act, direct, and produce plays and performances",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                20,
                &["ella@mergington.edu", "scarlett@mergington.edu"],
            ),
        ),
        (
            "Math Olympiad",
            Activity::new(
                "Solve challenging problems and prepare for math competitions",
                "Tuesdays, 3:30 PM - 4:30 PM",
                10,
                &["james@mergington.edu", "benjamin@mergington.edu"],
            ),
        ),
        (
            "Debate Society",
            Activity::new(
                "Develop public speaking and argumentation skills",
                "Fridays, 4:00 PM - 5:30 PM",
                12,
                &["charlotte@mergington.edu", "henry@mergington.edu"],
            ),
        ),
    ];

    rows.into_iter()
        .map(|(name, activity)| (name.to_string(), activity))
        .collect()
}

/// Reads a roster shaped like the `GET /activities` response body.
pub fn load_seed_file(path: &Path) -> Result<Activities, SeedError> {
    let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mut activities: Activities =
        serde_json::from_str(&raw).map_err(|source| SeedError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    for activity in activities.values_mut() {
        activity.dedup_participants();
    }
    Ok(activities)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_roster_has_unique_participants() {
        let activities = default_activities();
        assert_eq!(activities.get_index(0).map(|(k, _)| k.as_str()), Some("Chess Club"));
        for (name, activity) in &activities {
            let mut deduped = activity.clone();
            deduped.dedup_participants();
            assert_eq!(deduped.participants, activity.participants, "{name}");
        }
    }

    #[test]
    fn seed_file_keeps_order_and_collapses_duplicates() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "Robotics": {{"description":"Build robots","schedule":"Mondays","max_participants":8,
                              "participants":["a@mergington.edu","a@mergington.edu","b@mergington.edu"]}},
                "Choir": {{"description":"Sing","schedule":"Tuesdays","max_participants":40}}
            }}"#
        )
        .unwrap();

        let activities = load_seed_file(file.path()).unwrap();
        let names: Vec<&str> = activities.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["Robotics", "Choir"]);
        assert_eq!(
            activities["Robotics"].participants,
            vec!["a@mergington.edu", "b@mergington.edu"]
        );
        assert!(activities["Choir"].participants.is_empty());
    }

    #[test]
    fn missing_seed_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = load_seed_file(&path).unwrap_err();
        assert!(matches!(err, SeedError::Read { .. }));
        assert!(err.to_string().contains("absent.json"));
    }

    #[test]
    fn malformed_seed_file_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"Robotics": {{"description": 3}}}}"#).unwrap();
        let err = load_seed_file(file.path()).unwrap_err();
        assert!(matches!(err, SeedError::Parse { .. }));
    }
}
