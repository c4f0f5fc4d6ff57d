pub mod types;

pub use types::CampusGuardError;
