//! Star-system catalog and jump-range query engine for staging intel.
//!
//! Answers one question for a pilot: which of the staging systems you have
//! declared are within jump range of where you are now? The catalog of known
//! systems is built once from a CSV dataset and persisted into an embedded
//! redb store; the staging registry lives in the same store and is edited as
//! plain `name:owner` text; range queries scan the catalog with
//! cancellation-safe distance math at galactic magnitudes.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`catalog`] | [`StarSystem`](catalog::StarSystem) record, CSV [`loader`](catalog::loader), [`CatalogStore`](catalog::CatalogStore) indexes |
//! | [`geometry`] | [`Coordinates`](geometry::Coordinates), exact wide subtraction, 3D distance |
//! | [`query`] | [`RangeClass`](query::RangeClass), in-range scans, the per-class staging report |
//! | [`registry`] | [`StagingRegistry`](registry::StagingRegistry): text import/export, atomic full replace |
//! | [`store`] | [`SonarDb`](store::SonarDb): the embedded store with catalog and staging partitions |
//! | [`error`] | [`SonarError`](error::SonarError), [`SonarResult`](error::SonarResult) |
//!
//! # Quick Start
//!
//! ```no_run
//! use std::path::Path;
//! use staging_sonar::{CatalogStore, RangeClass, SonarDb, StagingRegistry};
//! use staging_sonar::query::report_by_range_class;
//!
//! # fn main() -> staging_sonar::SonarResult<()> {
//! let db = SonarDb::open(Path::new("sonar.redb"))?;
//! let catalog = CatalogStore::open(&db, Path::new("starmap.csv"))?;
//! let registry = StagingRegistry::new(&db);
//!
//! if let Some(here) = catalog.get_by_name("Turnur") {
//!     let report = report_by_range_class(&[RangeClass::Blops], here, &catalog, &registry)?;
//!     println!("{}", report);
//! }
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod error;
pub mod geometry;
pub mod query;
pub mod registry;
pub mod store;

pub use catalog::{CatalogStore, StarSystem};
pub use error::{SonarError, SonarResult};
pub use geometry::Coordinates;
pub use query::RangeClass;
pub use registry::StagingRegistry;
pub use store::SonarDb;
