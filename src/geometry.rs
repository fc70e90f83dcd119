//! 3D Cartesian coordinates and wide-value distance math.
//!
//! Star-system positions in the source dataset are meters from the galactic
//! origin, with magnitudes around 1e16–1e17. Subtracting two nearby values of
//! that size is exactly the cancellation-prone case, so the component deltas
//! are computed in exact rational arithmetic and only then narrowed back to
//! `f64`. The deltas themselves (jump ranges top out near 1e17 but are small
//! relative to the operands' shared magnitude) survive the narrowing with all
//! meaningful bits intact, so the final square/sum/sqrt runs in plain `f64`.
//!
//! ```
//! use staging_sonar::geometry::Coordinates;
//!
//! let a = Coordinates::new(0.0, 0.0, 0.0);
//! let b = Coordinates::new(3.0, 4.0, 0.0);
//! assert_eq!(a.distance(&b), 5.0);
//! ```

use num_rational::BigRational;
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

/// A point in 3D space, in meters from the galactic origin.
///
/// Plain value type: replaced as a whole, never partially updated. Equality
/// is exact component-wise `f64` equality, which is what the range engine
/// uses for self-exclusion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Coordinates {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// True if all three components are finite. The catalog loader rejects
    /// anything else before it reaches the store.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Euclidean distance to `other`.
    ///
    /// Component deltas are computed exactly (see [`wide_sub`]) before the
    /// norm. Pure and deterministic: identical points yield exactly 0, and
    /// the result is symmetric in its arguments.
    pub fn distance(&self, other: &Coordinates) -> f64 {
        let dx = wide_sub(self.x, other.x);
        let dy = wide_sub(self.y, other.y);
        let dz = wide_sub(self.z, other.z);

        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// Subtract two wide `f64` values without intermediate rounding.
///
/// Both operands are lifted to exact rationals, subtracted with unbounded
/// precision, and the exact difference is rounded once on the way back to
/// `f64`. Non-finite inputs fall back to plain subtraction; the catalog
/// invariant keeps them out of real queries.
pub fn wide_sub(x: f64, y: f64) -> f64 {
    match (BigRational::from_float(x), BigRational::from_float(y)) {
        (Some(a), Some(b)) => (a - b).to_f64().unwrap_or(x - y),
        _ => x - y,
    }
}
