//! CSV ingestion for the star-system catalog.
//!
//! The source dataset is one header row plus one row per system:
//! `id,name,x,y,z,security`. Rows whose name matches the unstable-space
//! pattern (one letter followed by six digits — wormhole systems, which have
//! no fixed gate topology and no staging value) are dropped. Every other row
//! must parse completely: a bad numeric field is a fatal error, because a
//! partial catalog would silently produce wrong range answers forever.

use std::collections::HashMap;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::error::{SonarError, SonarResult};
use crate::geometry::Coordinates;

use super::StarSystem;

/// Unstable (wormhole) system designators, e.g. `J115405`.
static UNSTABLE_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][0-9]{6}$").expect("unstable-name pattern is valid"));

/// Parse the catalog dataset at `path` into a map keyed by system id.
///
/// Skips the header row and all unstable-space rows. Returns
/// [`SonarError::Dataset`] on any missing field or numeric parse failure —
/// the dataset is trusted static data, so a malformed row means the file
/// itself is bad.
pub fn load_catalog(path: &Path) -> SonarResult<HashMap<u64, StarSystem>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| SonarError::dataset(path, format!("cannot open dataset: {}", e)))?;

    let mut systems = HashMap::new();
    let mut skipped = 0usize;

    for row in reader.records() {
        let row = row.map_err(|e| SonarError::dataset(path, format!("bad row: {}", e)))?;

        let name = field(path, &row, 1, "name")?;
        if UNSTABLE_NAME.is_match(name) {
            skipped += 1;
            continue;
        }
        if name.is_empty() {
            return Err(SonarError::dataset(path, "row with empty system name"));
        }

        let id = parse_u64(path, &row, 0, "id", name)?;
        let coordinates = Coordinates::new(
            parse_f64(path, &row, 2, "x", name)?,
            parse_f64(path, &row, 3, "y", name)?,
            parse_f64(path, &row, 4, "z", name)?,
        );
        let security = parse_f64(path, &row, 5, "security", name)?;

        if !coordinates.is_finite() {
            return Err(SonarError::dataset(
                path,
                format!("non-finite coordinates for system {}", name),
            ));
        }

        systems.insert(
            id,
            StarSystem {
                id,
                name: name.to_string(),
                coordinates,
                security,
            },
        );
    }

    debug!(
        loaded = systems.len(),
        skipped_unstable = skipped,
        "parsed catalog dataset"
    );
    Ok(systems)
}

fn field<'r>(
    path: &Path,
    row: &'r csv::StringRecord,
    index: usize,
    label: &str,
) -> SonarResult<&'r str> {
    row.get(index)
        .map(str::trim)
        .ok_or_else(|| SonarError::dataset(path, format!("row missing {} column", label)))
}

fn parse_u64(
    path: &Path,
    row: &csv::StringRecord,
    index: usize,
    label: &str,
    name: &str,
) -> SonarResult<u64> {
    let raw = field(path, row, index, label)?;
    raw.parse::<u64>().map_err(|e| {
        SonarError::dataset(path, format!("system {}: bad {} '{}': {}", name, label, raw, e))
    })
}

fn parse_f64(
    path: &Path,
    row: &csv::StringRecord,
    index: usize,
    label: &str,
    name: &str,
) -> SonarResult<f64> {
    let raw = field(path, row, index, label)?;
    raw.parse::<f64>().map_err(|e| {
        SonarError::dataset(path, format!("system {}: bad {} '{}': {}", name, label, raw, e))
    })
}
