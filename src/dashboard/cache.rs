use std::path::{Path, PathBuf};
use tracing::warn;
use crate::errors::CampusGuardError;
use super::state::DashboardState;

/// Durable local cache: one JSON snapshot file per user under a fixed
/// directory. Scoping the file by user id keeps one identity's state from
/// leaking into another's session on a shared machine.
pub struct SnapshotCache {
    dir: PathBuf,
}

impl SnapshotCache {
    pub fn new(dir: &Path) -> Self {
        Self { dir: dir.to_path_buf() }
    }

    fn path_for(&self, user_id: &str) -> PathBuf {
        let safe: String = user_id
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
            .collect();
        self.dir.join(format!("dashboard_{}.json", safe))
    }

    /// Read a user's snapshot. Missing or corrupt files yield `None`; a
    /// fresh default state is used instead.
    pub fn load(&self, user_id: &str) -> Option<DashboardState> {
        let path = self.path_for(user_id);
        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(_) => return None,
        };
        match serde_json::from_str(&raw) {
            Ok(state) => Some(state),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Discarding corrupt dashboard snapshot");
                None
            }
        }
    }

    pub fn save(&self, user_id: &str, state: &DashboardState) -> Result<(), CampusGuardError> {
        std::fs::create_dir_all(&self.dir)?;
        let raw = serde_json::to_string(state)?;
        std::fs::write(self.path_for(user_id), raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let cache = SnapshotCache::new(dir.path());

        let mut state = DashboardState::default();
        state.scans_completed = 7;
        cache.save("user-a", &state).unwrap();

        let loaded = cache.load("user-a").unwrap();
        assert_eq!(loaded.scans_completed, 7);
    }

    #[test]
    fn test_missing_snapshot_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let cache = SnapshotCache::new(dir.path());
        assert!(cache.load("nobody").is_none());
    }

    #[test]
    fn test_corrupt_snapshot_is_discarded() {
        let dir = tempfile::tempdir().unwrap();
        let cache = SnapshotCache::new(dir.path());
        std::fs::write(dir.path().join("dashboard_user-a.json"), "{not json").unwrap();
        assert!(cache.load("user-a").is_none());
    }

    #[test]
    fn test_snapshots_scoped_per_user() {
        let dir = tempfile::tempdir().unwrap();
        let cache = SnapshotCache::new(dir.path());

        let mut state = DashboardState::default();
        state.threats_blocked = 3;
        cache.save("user-a", &state).unwrap();

        assert!(cache.load("user-b").is_none());
    }
}
