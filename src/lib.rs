pub mod advisor;
pub mod api;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod db;
pub mod errors;
pub mod pipeline;
pub mod reputation;
