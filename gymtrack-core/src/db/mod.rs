pub mod models;
pub mod operations;
pub mod schema;

use crate::error::{Error, Result};
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::sql_types::Text;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use log::{debug, info};
use std::env;
use std::path::{Path, PathBuf};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("../migrations");

/// Where the app keeps its database, relative to the home directory.
pub const APP_DB_LOCATION: &str =
    "Library/Mobile Documents/iCloud~com~avanian~gymtrack/Documents/gymtrack.sqlite";

pub fn default_db_path() -> Option<PathBuf> {
    env::var_os("HOME").map(|home| PathBuf::from(home).join(APP_DB_LOCATION))
}

/// Picks the explicit path if given, otherwise the app's iCloud database.
/// Either way the file has to exist already.
pub fn discover_db(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(Error::not_found(format!(
                "Database not found: {}",
                path.display()
            )));
        }
        return Ok(path.to_path_buf());
    }

    match default_db_path() {
        Some(path) if path.exists() => Ok(path),
        Some(path) => Err(Error::not_found(format!(
            "Database not found at default location:\n  {}\nUse --db PATH to specify an explicit path.",
            path.display()
        ))),
        None => Err(Error::not_found(
            "HOME is not set; use --db PATH to specify an explicit path.",
        )),
    }
}

pub fn establish(path: &Path) -> Result<SqliteConnection> {
    let url = path.to_string_lossy();
    debug!("Opening database at {}", url);
    let mut conn = SqliteConnection::establish(&url)?;

    // DELETE journaling keeps the database a single file for iCloud sync
    conn.batch_execute("PRAGMA journal_mode = DELETE; PRAGMA foreign_keys = ON;")?;
    Ok(conn)
}

pub fn run_migrations(conn: &mut SqliteConnection) -> Result<()> {
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| Error::Migration(e.to_string()))?;
    for version in applied {
        info!("Migration {} applied successfully", version);
    }
    Ok(())
}

#[derive(QueryableByName)]
struct TableColumn {
    #[diesel(sql_type = Text)]
    name: String,
}

fn table_columns(conn: &mut SqliteConnection, table: &str) -> Result<Vec<String>> {
    let columns = diesel::sql_query(format!("PRAGMA table_info({table})"))
        .load::<TableColumn>(conn)?;
    Ok(columns.into_iter().map(|c| c.name).collect())
}

/// Older app databases predate the `isActive` flag. Returns whether the
/// column had to be added.
pub fn ensure_is_active_column(conn: &mut SqliteConnection) -> Result<bool> {
    let columns = table_columns(conn, "workoutExercise")?;
    if columns.is_empty() {
        return Err(Error::validation(
            "Database has no workoutExercise table; run `gymtrack init` or point --db at the app database.",
        ));
    }
    if columns.iter().any(|c| c == "isActive") {
        return Ok(false);
    }

    info!("Adding isActive column to workoutExercise");
    conn.batch_execute(
        "ALTER TABLE workoutExercise ADD COLUMN isActive BOOLEAN NOT NULL DEFAULT 1",
    )?;
    Ok(true)
}
