pub mod advisor;
pub mod alerts;
pub mod dashboard;
pub mod health;
pub mod quests;
pub mod scan;
