use chrono::Utc;
use crate::errors::CampusGuardError;
use super::Database;

impl Database {
    /// Mark a quest completed for a user, upserting on the (user, quest)
    /// composite key. Completion is one-way; re-verifying refreshes the
    /// timestamp but never clears the flag.
    pub fn upsert_quest_completion(
        &self,
        user_id: &str,
        quest_id: i64,
    ) -> Result<(), CampusGuardError> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO user_quests (user_id, quest_id, completed, completed_at) VALUES (?1, ?2, 1, ?3)
             ON CONFLICT(user_id, quest_id) DO UPDATE SET completed = 1, completed_at = ?3",
            rusqlite::params![user_id, quest_id, Utc::now().to_rfc3339()],
        ).map_err(|e| CampusGuardError::Database(format!("Failed to upsert quest: {}", e)))?;
        Ok(())
    }

    /// Load per-quest completion flags for a user as (quest_id, completed)
    /// pairs. Quests with no row are simply absent.
    pub fn load_quest_completions(
        &self,
        user_id: &str,
    ) -> Result<Vec<(i64, bool)>, CampusGuardError> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT quest_id, completed FROM user_quests WHERE user_id = ?1"
        ).map_err(|e| CampusGuardError::Database(format!("Query failed: {}", e)))?;

        let rows = stmt.query_map(rusqlite::params![user_id], |row: &rusqlite::Row| {
            Ok((row.get::<_, i64>(0)?, row.get::<_, i64>(1)? != 0))
        }).map_err(|e| CampusGuardError::Database(format!("Query error: {}", e)))?;

        let mut completions = Vec::new();
        for row in rows {
            completions.push(row.map_err(|e| CampusGuardError::Database(format!("Row error: {}", e)))?);
        }
        Ok(completions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_and_load() {
        let db = Database::in_memory().unwrap();
        db.upsert_quest_completion("user-a", 1).unwrap();
        db.upsert_quest_completion("user-a", 3).unwrap();

        let completions = db.load_quest_completions("user-a").unwrap();
        assert_eq!(completions.len(), 2);
        assert!(completions.contains(&(1, true)));
        assert!(completions.contains(&(3, true)));
    }

    #[test]
    fn test_upsert_is_idempotent() {
        let db = Database::in_memory().unwrap();
        db.upsert_quest_completion("user-a", 2).unwrap();
        db.upsert_quest_completion("user-a", 2).unwrap();

        let completions = db.load_quest_completions("user-a").unwrap();
        assert_eq!(completions, vec![(2, true)]);
    }

    #[test]
    fn test_completions_scoped_per_user() {
        let db = Database::in_memory().unwrap();
        db.upsert_quest_completion("user-a", 1).unwrap();
        assert!(db.load_quest_completions("user-b").unwrap().is_empty());
    }
}
