use std::sync::Mutex;
use chrono::Utc;
use tracing::{debug, warn};
use crate::db::Database;
use crate::errors::CampusGuardError;
use super::alerts::{AlertRecord, NewAlert};
use super::cache::SnapshotCache;
use super::state::DashboardState;

/// Per-user session store. Mutators are synchronous with respect to the
/// in-memory state; every mutation also writes a snapshot to the local
/// cache, with failures surfaced through `last_persist_error` rather than
/// aborting the mutation. Quest completion additionally upserts a row in
/// the backend database.
///
/// The store is an explicit context object handed to whichever surface
/// needs it (orchestrator, API routes, CLI); there is no global state.
pub struct DashboardStore {
    user_id: String,
    state: Mutex<DashboardState>,
    db: Database,
    cache: SnapshotCache,
    last_persist_error: Mutex<Option<String>>,
}

impl DashboardStore {
    /// Establish a session for an identity: rehydrate from the local cache
    /// snapshot, then overlay per-quest completion flags from the backend.
    pub fn open(user_id: &str, db: Database, cache: SnapshotCache) -> Self {
        let mut state = cache.load(user_id).unwrap_or_default();

        match db.load_quest_completions(user_id) {
            Ok(completions) => state.overlay_completions(&completions),
            Err(e) => warn!(user = user_id, error = %e, "Could not load quest completions from backend"),
        }

        Self {
            user_id: user_id.to_string(),
            state: Mutex::new(state),
            db,
            cache,
            last_persist_error: Mutex::new(None),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Mark a quest completed. Idempotent: re-verifying a completed quest
    /// leaves it completed and the derived score unchanged. Completion is
    /// one-way; nothing in the store ever resets it.
    pub fn verify_quest(&self, quest_id: i64) -> Result<(), CampusGuardError> {
        {
            let state = self.state.lock().unwrap();
            if !state.quests.iter().any(|q| q.id == quest_id) {
                return Err(CampusGuardError::UnknownQuest(quest_id));
            }
        }

        // Backend write first, mirroring the original flow; the in-memory
        // flag only flips once the row is in place.
        self.db.upsert_quest_completion(&self.user_id, quest_id)?;

        {
            let mut state = self.state.lock().unwrap();
            for quest in &mut state.quests {
                if quest.id == quest_id {
                    quest.completed = true;
                }
            }
        }
        debug!(user = %self.user_id, quest = quest_id, "Quest verified");
        self.persist();
        Ok(())
    }

    /// Append an alert, newest first, assigning a session-unique time-based id.
    pub fn add_alert(&self, alert: NewAlert) -> AlertRecord {
        let record = {
            let mut state = self.state.lock().unwrap();
            let mut id = Utc::now().timestamp_millis();
            // Time-based ids are unique enough with no concurrent writers,
            // but two alerts in the same millisecond must not collide.
            if let Some(last) = state.alerts.first() {
                if id <= last.id {
                    id = last.id + 1;
                }
            }
            let record = AlertRecord {
                id,
                alert_type: alert.alert_type,
                title: alert.title,
                description: alert.description,
                severity: alert.severity,
                time: alert.time,
            };
            state.alerts.insert(0, record.clone());
            record
        };
        self.persist();
        record
    }

    pub fn clear_alerts(&self) {
        self.state.lock().unwrap().alerts.clear();
        self.persist();
    }

    pub fn add_advisor_message(&self, message: &str) {
        self.state.lock().unwrap().advisor_messages.push(message.to_string());
        self.persist();
    }

    pub fn increment_scans(&self) {
        self.state.lock().unwrap().scans_completed += 1;
        self.persist();
    }

    pub fn increment_threats(&self) {
        self.state.lock().unwrap().threats_blocked += 1;
        self.persist();
    }

    pub fn safety_score(&self) -> u32 {
        self.state.lock().unwrap().safety_score()
    }

    /// Clone of the current state, for rendering or serialization.
    pub fn snapshot(&self) -> DashboardState {
        self.state.lock().unwrap().clone()
    }

    /// Last snapshot-write failure, if any. Cleared by the next successful
    /// mutation.
    pub fn last_persist_error(&self) -> Option<String> {
        self.last_persist_error.lock().unwrap().clone()
    }

    fn persist(&self) {
        let state = self.state.lock().unwrap().clone();
        let result = self.cache.save(&self.user_id, &state);
        let mut status = self.last_persist_error.lock().unwrap();
        match result {
            Ok(()) => *status = None,
            Err(e) => {
                warn!(user = %self.user_id, error = %e, "Failed to write dashboard snapshot");
                *status = Some(e.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::alerts::{AlertType, Severity};

    fn test_store() -> (DashboardStore, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let store = DashboardStore::open(
            "user-a",
            Database::in_memory().unwrap(),
            SnapshotCache::new(dir.path()),
        );
        (store, dir)
    }

    fn phishing_alert(description: &str) -> NewAlert {
        NewAlert {
            alert_type: AlertType::Phishing,
            title: "AI Detection Alert".into(),
            description: description.into(),
            severity: Severity::High,
            time: "Just now".into(),
        }
    }

    #[test]
    fn test_verify_quest_updates_score() {
        let (store, _dir) = test_store();
        store.verify_quest(1).unwrap();
        store.verify_quest(4).unwrap();
        assert_eq!(store.safety_score(), 40);
    }

    #[test]
    fn test_verify_quest_idempotent() {
        let (store, _dir) = test_store();
        store.verify_quest(2).unwrap();
        store.verify_quest(2).unwrap();
        assert_eq!(store.safety_score(), 20);
        let state = store.snapshot();
        assert_eq!(state.completed_quests(), 1);
    }

    #[test]
    fn test_verify_unknown_quest_rejected() {
        let (store, _dir) = test_store();
        assert!(matches!(
            store.verify_quest(42),
            Err(CampusGuardError::UnknownQuest(42))
        ));
        assert_eq!(store.safety_score(), 0);
    }

    #[test]
    fn test_alerts_newest_first_with_unique_ids() {
        let (store, _dir) = test_store();
        let first = store.add_alert(phishing_alert("one"));
        let second = store.add_alert(phishing_alert("two"));
        assert!(second.id > first.id);

        let state = store.snapshot();
        assert_eq!(state.alerts.len(), 2);
        assert_eq!(state.alerts[0].description, "two");
    }

    #[test]
    fn test_clear_alerts_empties_list() {
        let (store, _dir) = test_store();
        for i in 0..4 {
            store.add_alert(phishing_alert(&format!("alert {}", i)));
        }
        store.clear_alerts();
        assert!(store.snapshot().alerts.is_empty());
    }

    #[test]
    fn test_counters() {
        let (store, _dir) = test_store();
        store.increment_scans();
        store.increment_scans();
        store.increment_threats();
        let state = store.snapshot();
        assert_eq!(state.scans_completed, 2);
        assert_eq!(state.threats_blocked, 1);
    }

    #[test]
    fn test_reopen_rehydrates_from_cache_and_backend() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::in_memory().unwrap();

        {
            let store = DashboardStore::open("user-a", db.clone(), SnapshotCache::new(dir.path()));
            store.verify_quest(3).unwrap();
            store.increment_scans();
            store.add_advisor_message("hello");
        }

        let store = DashboardStore::open("user-a", db, SnapshotCache::new(dir.path()));
        let state = store.snapshot();
        assert_eq!(state.scans_completed, 1);
        assert_eq!(state.advisor_messages, vec!["hello".to_string()]);
        assert!(state.quests.iter().find(|q| q.id == 3).unwrap().completed);
    }

    #[test]
    fn test_backend_overlay_without_cache() {
        // Fresh device, existing account: only the backend has completions.
        let dir = tempfile::tempdir().unwrap();
        let db = Database::in_memory().unwrap();
        db.upsert_quest_completion("user-a", 5).unwrap();

        let store = DashboardStore::open("user-a", db, SnapshotCache::new(dir.path()));
        assert_eq!(store.safety_score(), 20);
    }

    #[test]
    fn test_persist_status_surfaced() {
        let (store, _dir) = test_store();
        store.increment_scans();
        assert!(store.last_persist_error().is_none());
    }

    #[test]
    fn test_persist_failure_surfaced() {
        // Cache "directory" is actually a file, so every snapshot write fails;
        // the mutation still applies and the failure lands in the status.
        let file = tempfile::NamedTempFile::new().unwrap();
        let store = DashboardStore::open(
            "user-a",
            Database::in_memory().unwrap(),
            SnapshotCache::new(file.path()),
        );

        store.increment_scans();
        assert_eq!(store.snapshot().scans_completed, 1);
        assert!(store.last_persist_error().is_some());
    }
}
