pub mod client;

pub use client::{ReputationClient, ReputationReport};
