//! Jump-range classes and the staging range report.
//!
//! A [`RangeClass`] is a named jump capability bound to one fixed radius in
//! meters. The caller picks which classes are enabled per query; the report
//! always walks them in declared order so output is deterministic regardless
//! of how the enabled set was assembled.
//!
//! The scan itself is a full pass over the catalog: distances are cheap and
//! the catalog is a few thousand systems, so there is no spatial index. A
//! system whose coordinates equal the reference exactly is excluded — that
//! is self-exclusion by position, so co-located twins are both skipped.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use crate::catalog::{CatalogStore, StarSystem};
use crate::error::SonarResult;
use crate::geometry::Coordinates;
use crate::registry::StagingRegistry;

/// Jump range of a capital ship, in meters (~7.0 ly).
const CAPITAL_RANGE_M: f64 = 66_225_113_308_060_300.0;
/// Jump range of a supercapital, in meters (~6.0 ly).
const SUPER_RANGE_M: f64 = 56_764_382_835_480_260.0;
/// Jump range of an industry capital, in meters (~10.0 ly).
const INDUSTRY_RANGE_M: f64 = 94_607_304_725_800_420.0;
/// Jump range of a black-ops battleship, in meters (~8.0 ly).
const BLOPS_RANGE_M: f64 = 75_685_843_780_640_350.0;

/// A named jump-range category with a fixed radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeClass {
    Blops,
    Supers,
    Capitals,
    Industry,
}

impl RangeClass {
    /// Every class, in the fixed order reports are rendered in.
    pub const ALL: [RangeClass; 4] = [
        RangeClass::Blops,
        RangeClass::Supers,
        RangeClass::Capitals,
        RangeClass::Industry,
    ];

    /// The radius bound to this class, in meters.
    pub fn radius(&self) -> f64 {
        match self {
            RangeClass::Blops => BLOPS_RANGE_M,
            RangeClass::Supers => SUPER_RANGE_M,
            RangeClass::Capitals => CAPITAL_RANGE_M,
            RangeClass::Industry => INDUSTRY_RANGE_M,
        }
    }

    /// Short lowercase label used in report headers and CLI flags.
    pub fn label(&self) -> &'static str {
        match self {
            RangeClass::Blops => "blops",
            RangeClass::Supers => "super",
            RangeClass::Capitals => "capital",
            RangeClass::Industry => "industry",
        }
    }

    /// Parse a CLI label back into a class.
    pub fn from_label(label: &str) -> Option<RangeClass> {
        match label.trim().to_lowercase().as_str() {
            "blops" => Some(RangeClass::Blops),
            "super" | "supers" => Some(RangeClass::Supers),
            "capital" | "capitals" => Some(RangeClass::Capitals),
            "industry" => Some(RangeClass::Industry),
            _ => None,
        }
    }
}

impl fmt::Display for RangeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lowercased names of all catalog systems within `radius` of `reference`.
///
/// Excludes every system whose coordinates equal `reference` exactly; two
/// distinct systems sharing the reference position are both excluded.
pub fn systems_within(
    catalog: &CatalogStore,
    reference: Coordinates,
    radius: f64,
) -> HashSet<String> {
    let mut in_range = HashSet::new();
    for system in catalog.iter() {
        if system.coordinates == reference {
            continue;
        }
        if reference.distance(&system.coordinates) <= radius {
            in_range.insert(system.name.to_lowercase());
        }
    }
    in_range
}

/// Intersect registry entries against a lowercased in-range name set.
///
/// Matching is case-insensitive; results keep the registry's spelling.
pub fn stagings_within(
    entries: &BTreeMap<String, String>,
    in_range: &HashSet<String>,
) -> BTreeMap<String, String> {
    entries
        .iter()
        .filter(|(name, _)| in_range.contains(&name.to_lowercase()))
        .map(|(name, owner)| (name.clone(), owner.clone()))
        .collect()
}

/// Render the per-class staging report for `reference`.
///
/// For each enabled class, in [`RangeClass::ALL`] order: a section header,
/// then one `name: owner` line per in-range staging entry (name order), or
/// an explicit no-match line so an empty section is visible as such. Zero
/// enabled classes yields an empty report.
///
/// Taking `&StarSystem` (not a bare name or coordinates) is deliberate: an
/// unresolved current location must be handled by the caller, never queried
/// as if it sat at the origin.
pub fn report_by_range_class(
    enabled: &[RangeClass],
    reference: &StarSystem,
    catalog: &CatalogStore,
    registry: &StagingRegistry<'_>,
) -> SonarResult<String> {
    let entries = registry.get_all()?;
    let mut report = String::new();

    for class in RangeClass::ALL {
        if !enabled.contains(&class) {
            continue;
        }
        let in_range = systems_within(catalog, reference.coordinates, class.radius());
        let stagings = stagings_within(&entries, &in_range);

        report.push_str(&format!("Staging systems in {} range:\n", class));
        if stagings.is_empty() {
            report.push_str("  none in range\n");
        } else {
            for (name, owner) in &stagings {
                report.push_str(&format!("  {}: {}\n", name, owner));
            }
        }
        report.push('\n');
    }

    Ok(report)
}
