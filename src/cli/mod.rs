pub mod commands;
pub mod scan;
pub mod serve;
pub mod quests;
pub mod advisor;

pub use commands::{Cli, Commands};
