//! Range queries over the catalog and the staging registry.
//!
//! - [`range`] — jump-range classes, in-range system scans, and the
//!   per-class staging report.

pub mod range;

pub use range::{
    report_by_range_class, stagings_within, systems_within, RangeClass,
};
