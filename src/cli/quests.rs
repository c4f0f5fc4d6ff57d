use std::path::Path;
use console::style;
use crate::cli::commands::QuestsArgs;
use crate::dashboard::{DashboardStore, SnapshotCache};
use crate::db::Database;
use crate::errors::CampusGuardError;

pub async fn handle_quests(args: QuestsArgs) -> Result<(), CampusGuardError> {
    let db = Database::new(&args.db)?;
    let store = DashboardStore::open(&args.user, db, SnapshotCache::new(Path::new(&args.cache_dir)));

    if let Some(quest_id) = args.verify {
        store.verify_quest(quest_id)?;
        println!("Quest {} verified.", quest_id);
    }

    let snapshot = store.snapshot();
    println!("Weekly Quest — {}/{} completed", snapshot.completed_quests(), snapshot.quests.len());
    for quest in &snapshot.quests {
        let mark = if quest.completed {
            style("[x]").green()
        } else {
            style("[ ]").dim()
        };
        println!("  {} {}. {} ({} pts)", mark, quest.id, quest.title, quest.points);
    }
    println!("Safety score: {}", style(snapshot.safety_score()).bold());

    Ok(())
}
