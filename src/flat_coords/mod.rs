//! Reading and writing flat coordinate sequences at nesting levels 0 through 3.
//!
//! Levels map onto WKB bodies as follows:
//!
//! - 0: one coordinate tuple with no count prefix (a Point)
//! - 1: `u32` count followed by that many tuples (a LineString or LinearRing)
//! - 2: `u32` count followed by that many level 1 blocks (a Polygon)
//! - 3: `u32` count followed by that many level 2 blocks (a MultiPolygon)
//!
//! Decoded coordinates are always flattened into a single `Vec<f64>`. Sub-array boundaries are
//! returned as exclusive end offsets into that buffer.

mod reader;
mod size;
mod writer;

pub use size::{flat_coords_0_size, flat_coords_1_size, flat_coords_2_size, flat_coords_3_size};

use crate::bounds::{BoundsPolicy, MAX_LEVEL};
use crate::error::{WKBError, WKBResult};

/// Reads and writes flat coordinates, enforcing a [`BoundsPolicy`] on every count it decodes.
///
/// The codec holds no state between calls. Construct one per decode session (or share one) with
/// the limits appropriate for the input source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlatCoordsCodec {
    bounds: BoundsPolicy,
}

impl FlatCoordsCodec {
    pub fn new(bounds: BoundsPolicy) -> Self {
        Self { bounds }
    }

    /// The limits this codec enforces
    pub fn bounds(&self) -> BoundsPolicy {
        self.bounds
    }

    /// Replace the limits this codec enforces
    pub fn set_bounds(&mut self, bounds: BoundsPolicy) {
        self.bounds = bounds;
    }
}

/// Coordinates plus the boundaries of every nesting level above level 1.
///
/// `ends[0]` holds exclusive scalar offsets into `coords`, one per level 1 block. `ends[1]` holds
/// exclusive offsets into `ends[0]`, one per level 2 block.
#[derive(Debug, Default)]
pub(crate) struct NestedCoords {
    pub(crate) coords: Vec<f64>,
    pub(crate) ends: [Vec<usize>; MAX_LEVEL - 1],
}

impl NestedCoords {
    /// Split the level 1 ends by level 2 block, keeping offsets absolute.
    pub(crate) fn into_endss(self) -> (Vec<f64>, Vec<Vec<usize>>) {
        let [ring_ends, polygon_ends] = self.ends;
        let mut endss = Vec::with_capacity(polygon_ends.len());
        let mut start = 0;
        for end in polygon_ends {
            endss.push(ring_ends[start..end].to_vec());
            start = end;
        }
        (self.coords, endss)
    }
}

/// Borrowed counterpart of [`NestedCoords`] used when writing.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NestedCoordsRef<'a> {
    pub(crate) coords: &'a [f64],
    pub(crate) ends: [&'a [usize]; MAX_LEVEL - 1],
}

pub(crate) fn check_stride(stride: usize) -> WKBResult<()> {
    if stride == 0 {
        return Err(WKBError::InvalidStride(stride));
    }
    Ok(())
}
