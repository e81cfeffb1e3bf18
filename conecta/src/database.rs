//! SQLite session store
//!
//! On-device persistence for the signed-in profile and tutorial progress.
//! Uses r2d2 connection pooling to allow concurrent reads without mutex
//! blocking.

use crate::models::StoredProfile;
use chrono::{DateTime, TimeZone, Utc};
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::{params, OptionalExtension};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Connection pool error: {0}")]
    Pool(#[from] r2d2::Error),
}

pub type DatabaseResult<T> = Result<T, DatabaseError>;

/// Parse timestamp string from database to DateTime<Utc>
fn parse_db_timestamp(timestamp_str: &str) -> DateTime<Utc> {
    chrono::NaiveDateTime::parse_from_str(timestamp_str, "%Y-%m-%d %H:%M:%S%.f")
        .or_else(|_| chrono::NaiveDateTime::parse_from_str(timestamp_str, "%Y-%m-%d %H:%M:%S"))
        .map(|dt| Utc.from_utc_datetime(&dt))
        .unwrap_or_else(|_| Utc::now())
}

fn format_db_timestamp(unix: i64) -> String {
    let timestamp = DateTime::from_timestamp(unix, 0).unwrap_or_else(Utc::now);
    timestamp.format("%Y-%m-%d %H:%M:%S%.f").to_string()
}

/// Thread-safe session database using connection pooling
///
/// WAL mode enables readers to proceed without blocking each other.
pub struct SessionDatabase {
    pool: Pool<SqliteConnectionManager>,
}

impl SessionDatabase {
    /// Open or create a database at the given path with connection pooling
    pub fn open<P: AsRef<Path>>(path: P) -> DatabaseResult<Self> {
        let manager = SqliteConnectionManager::file(path).with_init(|conn| {
            conn.execute_batch(
                "
                    PRAGMA journal_mode=WAL;
                    PRAGMA synchronous=NORMAL;
                    PRAGMA foreign_keys=ON;
                ",
            )?;
            Ok(())
        });

        let pool = Pool::builder().max_size(4).build(manager)?;

        let db = Self { pool };
        db.setup_schema()?;
        Ok(db)
    }

    /// Open an in-memory database (for testing)
    #[cfg(test)]
    pub fn open_in_memory() -> DatabaseResult<Self> {
        let manager = SqliteConnectionManager::memory().with_init(|conn| {
            conn.execute_batch(
                "
                    PRAGMA journal_mode=WAL;
                    PRAGMA synchronous=NORMAL;
                    PRAGMA foreign_keys=ON;
                ",
            )?;
            Ok(())
        });

        // In-memory needs a single connection to maintain state
        let pool = Pool::builder().max_size(1).build(manager)?;

        let db = Self { pool };
        db.setup_schema()?;
        Ok(db)
    }

    /// Get a connection from the pool
    fn get_conn(&self) -> DatabaseResult<PooledConnection<SqliteConnectionManager>> {
        Ok(self.pool.get()?)
    }

    /// Set up the database schema
    fn setup_schema(&self) -> DatabaseResult<()> {
        let conn = self.get_conn()?;
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS profile (
                slot INTEGER PRIMARY KEY CHECK (slot = 0),
                userId INTEGER NOT NULL,
                name TEXT NOT NULL,
                email TEXT NOT NULL,
                role TEXT,
                savedAt TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS completed_tutorials (
                tutorialId INTEGER PRIMARY KEY,
                completedAt TEXT NOT NULL
            );
        "#,
        )?;
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Profile
    // ─────────────────────────────────────────────────────────────────────────────

    /// Persist the signed-in user, replacing any previous session
    pub fn save_profile(&self, profile: &StoredProfile) -> DatabaseResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            "INSERT OR REPLACE INTO profile (slot, userId, name, email, role, savedAt)
             VALUES (0, ?1, ?2, ?3, ?4, ?5)",
            params![
                profile.user_id,
                profile.name,
                profile.email,
                profile.role,
                format_db_timestamp(profile.saved_at_unix),
            ],
        )?;
        Ok(())
    }

    /// Load the persisted session, if any
    pub fn load_profile(&self) -> DatabaseResult<Option<StoredProfile>> {
        let conn = self.get_conn()?;
        let profile = conn
            .query_row(
                "SELECT userId, name, email, role, savedAt FROM profile WHERE slot = 0",
                [],
                |row| {
                    let saved_at: String = row.get(4)?;
                    Ok(StoredProfile {
                        user_id: row.get(0)?,
                        name: row.get(1)?,
                        email: row.get(2)?,
                        role: row.get(3)?,
                        saved_at_unix: parse_db_timestamp(&saved_at).timestamp(),
                    })
                },
            )
            .optional()?;
        Ok(profile)
    }

    /// Remove the persisted session (logout)
    pub fn clear_profile(&self) -> DatabaseResult<()> {
        let conn = self.get_conn()?;
        conn.execute("DELETE FROM profile", [])?;
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Tutorial progress
    // ─────────────────────────────────────────────────────────────────────────────

    /// Mark or unmark a tutorial as completed.
    /// Re-marking a completed tutorial keeps its original completion time.
    pub fn set_tutorial_completed(&self, tutorial_id: i64, completed: bool) -> DatabaseResult<()> {
        let conn = self.get_conn()?;
        if completed {
            conn.execute(
                "INSERT OR IGNORE INTO completed_tutorials (tutorialId, completedAt) VALUES (?1, ?2)",
                params![tutorial_id, format_db_timestamp(Utc::now().timestamp())],
            )?;
        } else {
            conn.execute(
                "DELETE FROM completed_tutorials WHERE tutorialId = ?1",
                params![tutorial_id],
            )?;
        }
        Ok(())
    }

    /// Ids of completed tutorials, oldest completion first
    pub fn completed_tutorial_ids(&self) -> DatabaseResult<Vec<i64>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            "SELECT tutorialId FROM completed_tutorials ORDER BY completedAt, tutorialId",
        )?;
        let ids = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<i64>, _>>()?;
        Ok(ids)
    }

    pub fn completed_count(&self) -> DatabaseResult<u64> {
        let conn = self.get_conn()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM completed_tutorials", [], |row| {
            row.get(0)
        })?;
        Ok(count as u64)
    }
}
