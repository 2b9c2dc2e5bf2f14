use std::{fs, io, path::Path};
use thiserror::Error;
use tripsplit_application::TripSnapshot;

#[derive(Debug, Error)]
pub enum SnapshotLoadError {
    #[error("failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("invalid trip snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reads trip snapshots exported by the data service.
pub struct JsonSnapshotLoader;

impl JsonSnapshotLoader {
    pub fn load(&self, path: &Path) -> Result<TripSnapshot, SnapshotLoadError> {
        let content = fs::read_to_string(path).map_err(|source| SnapshotLoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        self.parse(&content)
    }

    pub fn parse(&self, content: &str) -> Result<TripSnapshot, SnapshotLoadError> {
        let snapshot: TripSnapshot = serde_json::from_str(content)?;
        tracing::debug!(
            participants = snapshot.participants.len(),
            expenses = snapshot.expenses.len(),
            "loaded trip snapshot"
        );
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn parses_minimal_snapshot() {
        let snapshot = JsonSnapshotLoader
            .parse(r#"{"participants": ["A"], "expenses": []}"#)
            .expect("valid snapshot");

        assert_eq!(snapshot.participants, vec!["A".to_owned()]);
        assert_eq!(snapshot.trip_name, None);
    }

    #[rstest]
    #[case::not_json("participants: A")]
    #[case::missing_split(r#"{"expenses": [{"id": "e1", "amount": 5, "payer": "A"}]}"#)]
    fn rejects_malformed_snapshot(#[case] content: &str) {
        assert!(matches!(
            JsonSnapshotLoader.parse(content),
            Err(SnapshotLoadError::Json(_))
        ));
    }

    #[rstest]
    fn missing_file_reports_path() {
        let err = JsonSnapshotLoader
            .load(Path::new("/nonexistent/trip.json"))
            .expect_err("missing file");

        assert!(err.to_string().contains("/nonexistent/trip.json"));
    }
}
