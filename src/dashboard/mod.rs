pub mod alerts;
pub mod cache;
pub mod quests;
pub mod state;
pub mod store;

pub use alerts::{AlertRecord, AlertType, NewAlert, Severity};
pub use cache::SnapshotCache;
pub use quests::{default_quests, QuestItem, QUEST_POINTS};
pub use state::DashboardState;
pub use store::DashboardStore;
