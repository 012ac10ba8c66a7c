//! SQLite database implementation for persistent storage

use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use tracing::{debug, info};

use crate::core::Settings;

/// Database wrapper for SQLite operations
pub struct Database {
    conn: Mutex<Connection>,
}

impl Database {
    /// Create a new database connection
    pub fn new() -> Result<Self> {
        let db_path = Self::get_database_path();

        // Ensure parent directory exists
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)
                .context(format!("Failed to create data directory {:?}", parent))?;
        }

        let conn = Connection::open(&db_path)
            .context(format!("Failed to open database at {:?}", db_path))?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;

        info!("Database opened at {:?}", db_path);
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open a throwaway in-memory database
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("Failed to open in-memory database")?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Get the database file path
    fn get_database_path() -> PathBuf {
        Settings::get_data_directory().join("cookbook.db")
    }

    /// Initialize database schema
    pub fn initialize(&self) -> Result<()> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| anyhow::anyhow!("Database lock poisoned: {}", e))?;
        conn.execute_batch(
            r#"
            -- Settings table
            CREATE TABLE IF NOT EXISTS settings (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );

            -- Recently opened datasets
            CREATE TABLE IF NOT EXISTS recent_datasets (
                idx INTEGER PRIMARY KEY,
                path TEXT NOT NULL
            );
            "#,
        )?;

        info!("Database schema initialized");
        Ok(())
    }

    // === Settings ===

    /// Load settings from database
    pub fn load_settings(&self) -> Result<Option<Settings>> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| anyhow::anyhow!("Database lock poisoned: {}", e))?;
        let mut stmt = conn.prepare("SELECT value FROM settings WHERE key = 'app_settings'")?;
        let result: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;

        match result {
            Some(json) => {
                let mut settings: Settings =
                    serde_json::from_str(&json).context("Failed to deserialize settings")?;
                settings.validate();
                Ok(Some(settings))
            }
            None => Ok(None),
        }
    }

    /// Save settings to database
    pub fn save_settings(&self, settings: &Settings) -> Result<()> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| anyhow::anyhow!("Database lock poisoned: {}", e))?;
        let json = serde_json::to_string(settings)?;
        conn.execute(
            "INSERT OR REPLACE INTO settings (key, value) VALUES ('app_settings', ?1)",
            params![json],
        )?;
        debug!("Settings saved");
        Ok(())
    }

    // === Recent Datasets ===

    /// Load recently opened datasets, most recent first
    pub fn load_recent_datasets(&self) -> Result<Vec<PathBuf>> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| anyhow::anyhow!("Database lock poisoned: {}", e))?;
        let mut stmt = conn.prepare("SELECT path FROM recent_datasets ORDER BY idx")?;
        let paths = stmt.query_map([], |row| {
            let path: String = row.get(0)?;
            Ok(PathBuf::from(path))
        })?;

        let mut result = Vec::new();
        for path in paths {
            result.push(path?);
        }

        Ok(result)
    }

    /// Save recently opened datasets
    pub fn save_recent_datasets(&self, paths: &[PathBuf]) -> Result<()> {
        let mut conn = self
            .conn
            .lock()
            .map_err(|e| anyhow::anyhow!("Database lock poisoned: {}", e))?;
        let tx = conn.transaction()?;
        tx.execute("DELETE FROM recent_datasets", [])?;

        for (idx, path) in paths.iter().enumerate() {
            tx.execute(
                "INSERT INTO recent_datasets (idx, path) VALUES (?1, ?2)",
                params![idx as i64, path.to_string_lossy().to_string()],
            )?;
        }
        tx.commit()?;

        debug!("Recent datasets saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::settings::Theme;
    use crate::core::Recipe;

    fn database() -> Database {
        let db = Database::open_in_memory().unwrap();
        db.initialize().unwrap();
        db
    }

    #[test]
    fn test_settings_absent_until_saved() {
        assert_eq!(database().load_settings().unwrap(), None);
    }

    #[test]
    fn test_settings_round_trip() {
        let db = database();
        let settings = Settings {
            theme: Theme::Light,
            last_recipe: Recipe::Wordcloud,
            random_seed: 99,
            dataset_path: Some(PathBuf::from("/data/strikes.csv")),
            ..Default::default()
        };
        db.save_settings(&settings).unwrap();
        assert_eq!(db.load_settings().unwrap(), Some(settings));
    }

    #[test]
    fn test_loaded_settings_are_validated() {
        let db = database();
        let settings = Settings {
            wordcloud_width: 1,
            ..Default::default()
        };
        db.save_settings(&settings).unwrap();
        assert_eq!(db.load_settings().unwrap().unwrap().wordcloud_width, 100);
    }

    #[test]
    fn test_recent_datasets_keep_order() {
        let db = database();
        let paths = vec![PathBuf::from("/b.csv"), PathBuf::from("/a.csv")];
        db.save_recent_datasets(&paths).unwrap();
        assert_eq!(db.load_recent_datasets().unwrap(), paths);

        db.save_recent_datasets(&paths[1..]).unwrap();
        assert_eq!(db.load_recent_datasets().unwrap(), vec![PathBuf::from("/a.csv")]);
    }
}
