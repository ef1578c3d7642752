use crate::db;
use crate::error::Result;
use diesel::SqliteConnection;
use std::path::Path;

pub struct Program {
    pub(crate) conn: SqliteConnection,
}

impl Program {
    /// Opens an existing database, upgrading legacy tables in place.
    pub fn open(db_path: &Path) -> Result<Self> {
        let mut conn = db::establish(db_path)?;
        db::ensure_is_active_column(&mut conn)?;
        Ok(Self { conn })
    }

    /// Creates (or completes) a database with the full schema.
    pub fn create(db_path: &Path) -> Result<Self> {
        let mut conn = db::establish(db_path)?;
        db::run_migrations(&mut conn)?;
        Ok(Self { conn })
    }

    pub fn from_connection(conn: SqliteConnection) -> Self {
        Self { conn }
    }

    pub fn connection(&mut self) -> &mut SqliteConnection {
        &mut self.conn
    }
}
