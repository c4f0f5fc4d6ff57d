use serde::{Deserialize, Serialize};

/// Points awarded per completed quest; the safety score is derived from this.
pub const QUEST_POINTS: u32 = 20;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuestItem {
    pub id: i64,
    pub title: String,
    pub completed: bool,
    pub points: u32,
}

/// The fixed weekly checklist. Completion state is overlaid from the
/// backend per user; the catalog itself never changes at runtime.
pub fn default_quests() -> Vec<QuestItem> {
    [
        (1, "Enable Two-Factor Authentication"),
        (2, "Update your recovery email"),
        (3, "Review app permissions"),
        (4, "Complete security quiz"),
        (5, "Set up login alerts"),
    ]
    .iter()
    .map(|(id, title)| QuestItem {
        id: *id,
        title: title.to_string(),
        completed: false,
        points: QUEST_POINTS,
    })
    .collect()
}
