//! The static star-system catalog: record type, CSV loader, lookup store.
//!
//! The catalog is reference data with a build-once lifecycle. On first run
//! the [`loader`] parses the source CSV and the result is persisted into the
//! embedded store; every later run reads the store and never touches the CSV
//! again. [`CatalogStore`](store::CatalogStore) then answers by-id and
//! by-name lookups from two indexes built together from one snapshot.

pub mod loader;
pub mod store;

use serde::{Deserialize, Serialize};

use crate::geometry::Coordinates;

pub use loader::load_catalog;
pub use store::CatalogStore;

/// Security rating above which a system counts as highsec, where cyno-based
/// range checking is meaningless.
pub const HIGHSEC_CUTOFF: f64 = 0.45;

/// One star system from the source dataset. Immutable once loaded; identity
/// is the dataset-assigned `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarSystem {
    /// Stable dataset identifier.
    pub id: u64,
    /// Display name, unique within the catalog when compared case-insensitively.
    pub name: String,
    /// Position in meters from the galactic origin.
    pub coordinates: Coordinates,
    /// Security rating; only used to gate whether range checking applies.
    pub security: f64,
}

impl StarSystem {
    /// True if nothing can open a cyno here, making range reports moot.
    pub fn is_highsec(&self) -> bool {
        self.security > HIGHSEC_CUTOFF
    }
}
