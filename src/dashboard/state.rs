use serde::{Deserialize, Serialize};
use super::alerts::AlertRecord;
use super::quests::{default_quests, QuestItem, QUEST_POINTS};

/// The UI-visible session state. This is exactly the subset that gets
/// snapshotted to the local cache; the safety score is derived on read and
/// never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardState {
    pub quests: Vec<QuestItem>,
    pub alerts: Vec<AlertRecord>,
    pub advisor_messages: Vec<String>,
    pub scans_completed: u64,
    pub threats_blocked: u64,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            quests: default_quests(),
            alerts: Vec::new(),
            advisor_messages: Vec::new(),
            scans_completed: 0,
            threats_blocked: 0,
        }
    }
}

impl DashboardState {
    pub fn completed_quests(&self) -> usize {
        self.quests.iter().filter(|q| q.completed).count()
    }

    /// Derived score: fixed points per completed quest.
    pub fn safety_score(&self) -> u32 {
        QUEST_POINTS * self.completed_quests() as u32
    }

    /// Overlay externally stored completion flags onto the local catalog,
    /// matched by quest id. Quests absent from the backend keep their
    /// current state.
    pub fn overlay_completions(&mut self, completions: &[(i64, bool)]) {
        for quest in &mut self.quests {
            if let Some((_, completed)) = completions.iter().find(|(id, _)| *id == quest.id) {
                quest.completed = *completed;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safety_score_tracks_completions() {
        let mut state = DashboardState::default();
        assert_eq!(state.safety_score(), 0);

        for n in 1..=5 {
            state.quests[n - 1].completed = true;
            assert_eq!(state.safety_score(), 20 * n as u32);
        }
    }

    #[test]
    fn test_overlay_matches_by_id() {
        let mut state = DashboardState::default();
        state.overlay_completions(&[(2, true), (5, true), (99, true)]);
        let completed: Vec<i64> = state.quests.iter()
            .filter(|q| q.completed)
            .map(|q| q.id)
            .collect();
        assert_eq!(completed, vec![2, 5]);
    }

    #[test]
    fn test_overlay_keeps_state_for_absent_quests() {
        let mut state = DashboardState::default();
        state.quests[0].completed = true;
        state.overlay_completions(&[(3, true)]);
        assert!(state.quests[0].completed);
        assert!(state.quests[2].completed);
    }
}
