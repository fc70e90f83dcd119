//! Embedded persistence for the catalog and the staging registry.
//!
//! One redb database file with two tables:
//!
//! - `systems` — id → postcard-encoded [`StarSystem`]; written exactly once,
//!   on the first run that finds it absent, then read-only forever.
//! - `stagings` — system name → owner, plain UTF-8; replaced wholesale by
//!   [`SonarDb::replace_stagings`].
//!
//! [`SonarDb`] owns the single long-lived database handle; every operation
//! opens its own scoped read or write transaction, so file locks are released
//! on every exit path and a failed write leaves the previous state intact.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use redb::{Database, ReadableTable, ReadableTableMetadata, TableDefinition, TableError};
use tracing::{debug, info};

use crate::catalog::StarSystem;
use crate::error::{SonarError, SonarResult};

/// Catalog partition: system id → postcard-encoded [`StarSystem`].
const SYSTEMS: TableDefinition<u64, &[u8]> = TableDefinition::new("systems");

/// Registry partition: system name → owner name.
const STAGINGS: TableDefinition<&str, &str> = TableDefinition::new("stagings");

/// Long-lived handle to the sonar database file.
pub struct SonarDb {
    db: Database,
}

impl SonarDb {
    /// Open (or create) the database at `path`.
    ///
    /// Creates the parent directory if needed. Failure here is fatal to the
    /// caller: without the store there is neither catalog nor registry.
    pub fn open(path: &Path) -> SonarResult<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let db = Database::create(path).map_err(SonarError::store)?;
        info!(path = %path.display(), "opened sonar database");
        Ok(Self { db })
    }

    /// True once the catalog partition exists and holds at least one system.
    ///
    /// Guards the one-time catalog build: the CSV is only parsed when this
    /// returns false.
    pub fn catalog_is_built(&self) -> SonarResult<bool> {
        let read_txn = self.db.begin_read().map_err(SonarError::store)?;
        match read_txn.open_table(SYSTEMS) {
            Ok(table) => {
                let empty = table.is_empty().map_err(SonarError::store)?;
                Ok(!empty)
            }
            Err(TableError::TableDoesNotExist(_)) => Ok(false),
            Err(e) => Err(SonarError::store(e)),
        }
    }

    /// Persist the full catalog in one write transaction.
    ///
    /// Called exactly once per database lifetime. A serialization failure
    /// aborts the transaction and is fatal: an inconsistent catalog is
    /// unrecoverable.
    pub fn write_catalog(&self, systems: &HashMap<u64, StarSystem>) -> SonarResult<()> {
        let write_txn = self.db.begin_write().map_err(SonarError::store)?;
        {
            let mut table = write_txn.open_table(SYSTEMS).map_err(SonarError::store)?;
            for (id, system) in systems {
                let encoded =
                    postcard::to_allocvec(system).map_err(SonarError::serialization)?;
                table
                    .insert(*id, encoded.as_slice())
                    .map_err(SonarError::store)?;
            }
        }
        write_txn.commit().map_err(SonarError::store)?;
        info!(systems = systems.len(), "persisted catalog partition");
        Ok(())
    }

    /// Read every persisted system in one read transaction.
    pub fn read_catalog(&self) -> SonarResult<Vec<StarSystem>> {
        let read_txn = self.db.begin_read().map_err(SonarError::store)?;
        let table = match read_txn.open_table(SYSTEMS) {
            Ok(table) => table,
            Err(TableError::TableDoesNotExist(_)) => return Ok(Vec::new()),
            Err(e) => return Err(SonarError::store(e)),
        };

        let mut systems = Vec::new();
        for entry in table.iter().map_err(SonarError::store)? {
            let (_, value) = entry.map_err(SonarError::store)?;
            let system: StarSystem =
                postcard::from_bytes(value.value()).map_err(SonarError::serialization)?;
            systems.push(system);
        }
        debug!(systems = systems.len(), "read catalog partition");
        Ok(systems)
    }

    /// Read the full staging registry. A missing table is an empty registry,
    /// not an error.
    pub fn read_stagings(&self) -> SonarResult<BTreeMap<String, String>> {
        let read_txn = self.db.begin_read().map_err(SonarError::store)?;
        let table = match read_txn.open_table(STAGINGS) {
            Ok(table) => table,
            Err(TableError::TableDoesNotExist(_)) => return Ok(BTreeMap::new()),
            Err(e) => return Err(SonarError::store(e)),
        };

        let mut stagings = BTreeMap::new();
        for entry in table.iter().map_err(SonarError::store)? {
            let (name, owner) = entry.map_err(SonarError::store)?;
            stagings.insert(name.value().to_string(), owner.value().to_string());
        }
        Ok(stagings)
    }

    /// Atomically replace the staging registry with `entries`.
    ///
    /// Drops the table, recreates it, and bulk-inserts inside a single write
    /// transaction, so readers either see the complete old set or the
    /// complete new one. An empty map clears the registry.
    pub fn replace_stagings(&self, entries: &BTreeMap<String, String>) -> SonarResult<()> {
        let write_txn = self.db.begin_write().map_err(SonarError::store)?;
        write_txn.delete_table(STAGINGS).map_err(SonarError::store)?;
        {
            let mut table = write_txn.open_table(STAGINGS).map_err(SonarError::store)?;
            for (name, owner) in entries {
                table
                    .insert(name.as_str(), owner.as_str())
                    .map_err(SonarError::store)?;
            }
        }
        write_txn.commit().map_err(SonarError::store)?;
        debug!(entries = entries.len(), "replaced staging registry");
        Ok(())
    }
}
