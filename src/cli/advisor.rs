use std::path::Path;
use crate::advisor;
use crate::cli::commands::AdvisorArgs;
use crate::dashboard::{DashboardStore, SnapshotCache};
use crate::db::Database;
use crate::errors::CampusGuardError;

pub async fn handle_advisor(args: AdvisorArgs) -> Result<(), CampusGuardError> {
    let db = Database::new(&args.db)?;
    let store = DashboardStore::open(&args.user, db, SnapshotCache::new(Path::new(&args.cache_dir)));

    let reply = advisor::respond(&args.message);
    store.add_advisor_message(reply);
    println!("{}", reply);

    Ok(())
}
