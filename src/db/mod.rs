pub mod connection;
pub mod schema;
pub mod quests;

pub use connection::Database;
