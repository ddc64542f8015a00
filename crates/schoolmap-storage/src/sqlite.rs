//! SQLite implementation of [`SchoolStore`].
//!
//! [`SqliteStore`] persists schools in a SQLite database with WAL mode and
//! automatic schema migrations. All statements are parameterized.

use rusqlite::{params, Connection};

use schoolmap_core::{GeoPoint, NewSchool};

use crate::error::StorageError;
use crate::traits::SchoolStore;
use crate::types::{SchoolId, SchoolRecord};

/// SQLite-backed implementation of [`SchoolStore`].
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) a SQLite database at `path`.
    pub fn new(path: &str) -> Result<Self, StorageError> {
        let conn = crate::schema::open_database(path)?;
        Ok(SqliteStore { conn })
    }

    /// Opens an in-memory SQLite database (for testing).
    pub fn in_memory() -> Result<Self, StorageError> {
        let conn = crate::schema::open_in_memory()?;
        Ok(SqliteStore { conn })
    }
}

impl SchoolStore for SqliteStore {
    fn insert_school(&mut self, school: &NewSchool) -> Result<SchoolId, StorageError> {
        self.conn.execute(
            "INSERT INTO schools (name, address, latitude, longitude) VALUES (?1, ?2, ?3, ?4)",
            params![
                school.name,
                school.address,
                school.position.latitude,
                school.position.longitude
            ],
        )?;
        Ok(SchoolId(self.conn.last_insert_rowid()))
    }

    fn fetch_all_schools(&self) -> Result<Vec<SchoolRecord>, StorageError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, address, latitude, longitude FROM schools ORDER BY id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(SchoolRecord {
                id: SchoolId(row.get(0)?),
                name: row.get(1)?,
                address: row.get(2)?,
                // Rows were range-validated on write, so reconstruct directly.
                position: GeoPoint {
                    latitude: row.get(3)?,
                    longitude: row.get(4)?,
                },
            })
        })?;

        let mut schools = Vec::new();
        for row in rows {
            schools.push(row?);
        }
        Ok(schools)
    }
}
