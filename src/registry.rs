//! The staging registry: user-declared systems of interest and their owners.
//!
//! Lifecycle is independent of the catalog: the registry persists across runs
//! and changes only through a full replace. The editable on-screen form and
//! the import/export format are the same newline-separated `name:owner`
//! text, so [`import_from_text`](StagingRegistry::import_from_text) and
//! [`export_to_text`](StagingRegistry::export_to_text) round-trip.
//!
//! Import is tolerant per line, strict per batch: a malformed line or an
//! unknown system name drops that line only, never the whole input. What
//! survives validation replaces the previous registry atomically — including
//! the empty set, which clears it.

use std::collections::BTreeMap;

use tracing::debug;

use crate::catalog::CatalogStore;
use crate::error::SonarResult;
use crate::store::SonarDb;

/// Separator between system name and owner in the text format.
const ENTRY_SEPARATOR: char = ':';

/// Handle to the persisted staging registry.
pub struct StagingRegistry<'a> {
    db: &'a SonarDb,
}

impl<'a> StagingRegistry<'a> {
    pub fn new(db: &'a SonarDb) -> Self {
        Self { db }
    }

    /// Current entries, name → owner. Empty map if nothing is declared yet.
    pub fn get_all(&self) -> SonarResult<BTreeMap<String, String>> {
        self.db.read_stagings()
    }

    /// Atomically replace the full entry set. Accepts an empty map.
    pub fn replace_all(&self, entries: &BTreeMap<String, String>) -> SonarResult<()> {
        self.db.replace_stagings(entries)
    }

    /// Parse `name:owner` lines, validate names against the catalog, and
    /// replace the registry with the surviving entries.
    ///
    /// A line is kept only if splitting on `:` yields exactly two parts and
    /// the name resolves to a catalog system; entries are stored under the
    /// catalog's canonical spelling of the name. Returns the accepted set
    /// (which may be empty — that clears the registry).
    pub fn import_from_text(
        &self,
        text: &str,
        catalog: &CatalogStore,
    ) -> SonarResult<BTreeMap<String, String>> {
        let mut accepted = BTreeMap::new();
        let mut dropped = 0usize;

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let mut parts = line.splitn(3, ENTRY_SEPARATOR);
            match (parts.next(), parts.next(), parts.next()) {
                (Some(name), Some(owner), None) => match catalog.get_by_name(name.trim()) {
                    Some(system) => {
                        accepted.insert(system.name.clone(), owner.trim().to_string());
                    }
                    None => dropped += 1,
                },
                _ => dropped += 1,
            }
        }

        debug!(
            accepted = accepted.len(),
            dropped, "imported staging registry text"
        );
        self.replace_all(&accepted)?;
        Ok(accepted)
    }

    /// Render the registry as `name:owner` lines, one per entry.
    pub fn export_to_text(&self) -> SonarResult<String> {
        let mut out = String::new();
        for (name, owner) in self.get_all()? {
            out.push_str(&name);
            out.push(ENTRY_SEPARATOR);
            out.push_str(&owner);
            out.push('\n');
        }
        Ok(out)
    }
}
