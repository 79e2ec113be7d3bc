//! Per-level element-count ceilings.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{WKBError, WKBResult};

/// The deepest nesting level a [`BoundsPolicy`] carries a limit for.
pub const MAX_LEVEL: usize = 3;

/// Default ceilings, indexed by nesting level.
///
/// - 0: unused, a fixed-size tuple has no count prefix
/// - 1: coordinates in one LineString, LinearRing or MultiPoint
/// - 2: LineStrings or LinearRings in one MultiLineString or Polygon
/// - 3: Polygons in one MultiPolygon
pub const DEFAULT_LIMITS: [u32; MAX_LEVEL + 1] = [0, 1 << 20, 1 << 15, 1 << 10];

/// The maximum number of elements that will be decoded at each nesting level.
///
/// A four byte count prefix can claim an arbitrarily large array. Every count is checked
/// against this table before anything is allocated for it, so a short crafted input cannot
/// commit unbounded memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundsPolicy {
    limits: [u32; MAX_LEVEL + 1],
}

impl BoundsPolicy {
    pub fn new(limits: [u32; MAX_LEVEL + 1]) -> Self {
        Self { limits }
    }

    /// Parse a policy from JSON of the form `{"limits": [0, 1048576, 32768, 1024]}`.
    pub fn from_json(s: &str) -> serde_json::Result<Self> {
        let policy: Self = serde_json::from_str(s)?;
        debug!("Loaded bounds policy: {:?}", policy.limits);
        Ok(policy)
    }

    /// The whole limit table
    pub fn limits(&self) -> [u32; MAX_LEVEL + 1] {
        self.limits
    }

    /// Replace the whole limit table
    pub fn set_limits(&mut self, limits: [u32; MAX_LEVEL + 1]) {
        self.limits = limits;
    }

    /// The ceiling for one level.
    ///
    /// Panics if `level > MAX_LEVEL`.
    pub fn limit(&self, level: usize) -> u32 {
        self.limits[level]
    }

    /// Fail with [`WKBError::GeometryTooLarge`] if `n` exceeds the ceiling for `level`.
    pub fn check(&self, level: usize, n: u32) -> WKBResult<()> {
        let limit = self.limit(level);
        if n > limit {
            debug!(
                "Rejecting element count {} at level {} (limit {})",
                n, level, limit
            );
            return Err(WKBError::GeometryTooLarge { level, n, limit });
        }
        Ok(())
    }
}

impl Default for BoundsPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_LIMITS)
    }
}
