//! In-memory implementation of [`SchoolStore`].
//!
//! [`InMemoryStore`] is a first-class backend for tests and anywhere
//! persistence isn't needed, with identical semantics to the SQLite
//! backend.

use schoolmap_core::NewSchool;

use crate::error::StorageError;
use crate::traits::SchoolStore;
use crate::types::{SchoolId, SchoolRecord};

/// In-memory backend: a Vec of records plus an id counter.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    schools: Vec<SchoolRecord>,
    next_id: i64,
}

impl InMemoryStore {
    /// Creates an empty store. Ids start at 1, matching SQLite rowids.
    pub fn new() -> Self {
        InMemoryStore {
            schools: Vec::new(),
            next_id: 0,
        }
    }
}

impl SchoolStore for InMemoryStore {
    fn insert_school(&mut self, school: &NewSchool) -> Result<SchoolId, StorageError> {
        self.next_id += 1;
        let id = SchoolId(self.next_id);
        self.schools.push(SchoolRecord {
            id,
            name: school.name.clone(),
            address: school.address.clone(),
            position: school.position,
        });
        Ok(id)
    }

    fn fetch_all_schools(&self) -> Result<Vec<SchoolRecord>, StorageError> {
        // Insertion order == id order; no sort needed.
        Ok(self.schools.clone())
    }
}

#[cfg(test)]
mod tests {
    use schoolmap_core::GeoPoint;

    use super::*;

    fn school(name: &str, latitude: f64, longitude: f64) -> NewSchool {
        NewSchool {
            name: name.to_string(),
            address: format!("{name} road 7"),
            position: GeoPoint::new(latitude, longitude).unwrap(),
        }
    }

    #[test]
    fn ids_start_at_one_and_increase() {
        let mut store = InMemoryStore::new();
        assert_eq!(store.insert_school(&school("A", 0.0, 0.0)).unwrap(), SchoolId(1));
        assert_eq!(store.insert_school(&school("B", 0.0, 1.0)).unwrap(), SchoolId(2));
    }

    #[test]
    fn fetch_preserves_insertion_order() {
        let mut store = InMemoryStore::new();
        store.insert_school(&school("B", 52.0, 13.0)).unwrap();
        store.insert_school(&school("A", 48.0, 2.0)).unwrap();

        let all = store.fetch_all_schools().unwrap();
        assert_eq!(all[0].name, "B");
        assert_eq!(all[1].name, "A");
    }

    #[test]
    fn fetch_on_empty_store_is_empty() {
        let store = InMemoryStore::new();
        assert!(store.fetch_all_schools().unwrap().is_empty());
    }
}
