//! Lookup store over the immutable star-system catalog.
//!
//! [`CatalogStore`] owns two indexes over the same snapshot: by dataset id
//! and by lowercased name. They are built together in one pass, so they can
//! never disagree about which systems exist. Lookups that miss return `None`;
//! an unknown system is a normal outcome, not an error.

use std::collections::HashMap;
use std::path::Path;

use tracing::info;

use crate::error::SonarResult;
use crate::store::SonarDb;

use super::{loader, StarSystem};

/// In-memory by-id and by-name indexes over the persisted catalog.
pub struct CatalogStore {
    by_id: HashMap<u64, StarSystem>,
    by_name: HashMap<String, u64>,
}

impl CatalogStore {
    /// Open the catalog, building it from `dataset` on first run.
    ///
    /// If the store's catalog partition is empty the CSV at `dataset` is
    /// parsed and persisted in one transaction (fatal on any parse or
    /// serialization error). The partition is then read back and indexed;
    /// on every later run the CSV is never touched.
    pub fn open(db: &SonarDb, dataset: &Path) -> SonarResult<Self> {
        if !db.catalog_is_built()? {
            info!(dataset = %dataset.display(), "catalog partition empty, building from dataset");
            let systems = loader::load_catalog(dataset)?;
            db.write_catalog(&systems)?;
        }
        Ok(Self::from_systems(db.read_catalog()?))
    }

    /// Build both indexes from a snapshot of systems.
    pub fn from_systems(systems: Vec<StarSystem>) -> Self {
        let mut by_id = HashMap::with_capacity(systems.len());
        let mut by_name = HashMap::with_capacity(systems.len());
        for system in systems {
            by_name.insert(system.name.to_lowercase(), system.id);
            by_id.insert(system.id, system);
        }
        Self { by_id, by_name }
    }

    /// Look up a system by dataset id.
    pub fn get_by_id(&self, id: u64) -> Option<&StarSystem> {
        self.by_id.get(&id)
    }

    /// Look up a system by name, case-insensitively. The empty string never
    /// matches.
    pub fn get_by_name(&self, name: &str) -> Option<&StarSystem> {
        if name.is_empty() {
            return None;
        }
        let id = self.by_name.get(&name.to_lowercase())?;
        self.by_id.get(id)
    }

    /// Iterate all systems, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &StarSystem> {
        self.by_id.values()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Coordinates;

    fn system(id: u64, name: &str) -> StarSystem {
        StarSystem {
            id,
            name: name.to_string(),
            coordinates: Coordinates::new(0.0, 0.0, id as f64),
            security: -0.4,
        }
    }

    fn store() -> CatalogStore {
        CatalogStore::from_systems(vec![
            system(30000142, "Jita"),
            system(30002537, "Amamake"),
            system(30002961, "Turnur"),
        ])
    }

    #[test]
    fn test_get_by_id() {
        let store = store();
        assert_eq!(store.get_by_id(30000142).unwrap().name, "Jita");
        assert!(store.get_by_id(1).is_none());
    }

    #[test]
    fn test_get_by_name_case_insensitive() {
        let store = store();
        assert_eq!(store.get_by_name("amamake").unwrap().id, 30002537);
        assert_eq!(store.get_by_name("AMAMAKE").unwrap().id, 30002537);
        assert_eq!(store.get_by_name("Amamake").unwrap().id, 30002537);
    }

    #[test]
    fn test_get_by_name_unknown_or_empty() {
        let store = store();
        assert!(store.get_by_name("Nowhere").is_none());
        assert!(store.get_by_name("").is_none());
    }

    #[test]
    fn test_indexes_hold_same_set() {
        let store = store();
        assert_eq!(store.len(), 3);
        for sys in store.iter() {
            assert_eq!(store.get_by_name(&sys.name).unwrap().id, sys.id);
        }
    }
}
