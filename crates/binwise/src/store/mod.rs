//! Entry store for binwise.
//!
//! This module provides `SQLite`-based persistent storage for waste entries.
//! The store is append-only: entries are inserted and listed, never edited
//! or deleted. It is constructed once at startup and handed to consumers by
//! reference; there is no ambient global state.

pub mod migrations;
pub mod schema;
pub mod seed;

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use rand::Rng;
use rusqlite::{params, Connection};
use tracing::{debug, info, warn};

use crate::entry::{Category, WasteEntry};
use crate::error::{Error, Result};

/// Append-only storage for waste entries.
///
/// Listing is always newest-first: insertion order is recorded and a later
/// insert sorts before every prior entry.
#[derive(Debug)]
pub struct EntryStore {
    /// Path to the database file.
    path: PathBuf,
    /// Database connection.
    conn: Connection,
}

impl EntryStore {
    /// Open or create an entry store at the given path.
    ///
    /// Creates the parent directories and database file if they don't exist.
    /// Initializes the schema if this is a new database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or schema initialization fails.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        debug!("Opening database at {}", path.display());
        let conn = Connection::open(&path).map_err(|source| Error::DatabaseOpen {
            path: path.clone(),
            source,
        })?;

        // Enable WAL mode for better concurrent read performance
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL;")?;

        migrations::initialize_schema(&conn)?;

        info!("Database opened successfully at {}", path.display());
        Ok(Self { path, conn })
    }

    /// Create an in-memory store for testing.
    ///
    /// # Errors
    ///
    /// Returns an error if the in-memory database cannot be created.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|source| Error::DatabaseOpen {
            path: PathBuf::from(":memory:"),
            source,
        })?;

        migrations::initialize_schema(&conn)?;

        Ok(Self {
            path: PathBuf::from(":memory:"),
            conn,
        })
    }

    /// Get the path to the database file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Seed the store with synthetic history if it holds no entries.
    ///
    /// On a first run this generates and persists a 30-day logging history
    /// ending at `today` (see [`seed::generate_history`]). If the store
    /// already holds entries it is left exactly as found, no re-generation
    /// and no merge. Returns the number of entries seeded.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn initialize<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        today: NaiveDate,
        days: u32,
    ) -> Result<usize> {
        if self.count()? > 0 {
            debug!("Store already has entries, skipping seed");
            return Ok(0);
        }

        let entries = seed::generate_history(rng, today, days);

        let tx = self.conn.transaction()?;
        for entry in &entries {
            insert_entry(&tx, entry)?;
        }
        tx.commit()?;

        info!("Seeded store with {} entries over {} days", entries.len(), days);
        Ok(entries.len())
    }

    /// Append an entry to the store.
    ///
    /// The entry is accepted as constructed; the store performs no
    /// validation of its own.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn add(&self, entry: &WasteEntry) -> Result<()> {
        insert_entry(&self.conn, entry)?;
        debug!("Stored entry {} ({} kg {})", entry.id, entry.weight, entry.category);
        Ok(())
    }

    /// Get all entries, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn list(&self) -> Result<Vec<WasteEntry>> {
        let mut stmt = self.conn.prepare(
            r"
            SELECT id, date, category, item, weight, points
            FROM entries ORDER BY seq DESC
            ",
        )?;

        let entries = stmt
            .query_map([], row_to_entry)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(entries)
    }

    /// Get the most recent entries, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn recent(&self, limit: usize) -> Result<Vec<WasteEntry>> {
        let mut stmt = self.conn.prepare(
            r"
            SELECT id, date, category, item, weight, points
            FROM entries ORDER BY seq DESC LIMIT ?1
            ",
        )?;

        let limit_i64 = i64::try_from(limit).unwrap_or(i64::MAX);
        let entries = stmt
            .query_map([limit_i64], row_to_entry)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(entries)
    }

    /// Count total entries in the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn count(&self) -> Result<i64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM entries", [], |row| row.get(0))?;
        Ok(count)
    }
}

/// Insert a single entry via any connection-like handle.
fn insert_entry(conn: &Connection, entry: &WasteEntry) -> Result<()> {
    conn.execute(
        r"
        INSERT INTO entries (id, date, category, item, weight, points)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        ",
        params![
            entry.id,
            entry.date.to_string(),
            entry.category.to_string(),
            entry.item,
            entry.weight,
            entry.points,
        ],
    )?;
    Ok(())
}

/// Convert a database row to a `WasteEntry`.
fn row_to_entry(row: &rusqlite::Row) -> rusqlite::Result<WasteEntry> {
    let id: String = row.get(0)?;
    let date_str: String = row.get(1)?;
    let category_str: String = row.get(2)?;
    let item: String = row.get(3)?;
    let weight: f64 = row.get(4)?;
    let points: u32 = row.get(5)?;

    let date = date_str.parse().unwrap_or_else(|_| {
        warn!("Invalid date '{}', defaulting to epoch", date_str);
        NaiveDate::default()
    });

    let category = match category_str.as_str() {
        "recyclable" => Category::Recyclable,
        "compostable" => Category::Compostable,
        "landfill" => Category::Landfill,
        _ => {
            warn!("Unknown category: {}, defaulting to landfill", category_str);
            Category::Landfill
        }
    };

    Ok(WasteEntry {
        id,
        date,
        category,
        item,
        weight,
        points,
    })
}
