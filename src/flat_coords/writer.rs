use std::io::Write;
use std::ops::Range;

use crate::endianness::Endianness;
use crate::error::{WKBError, WKBResult};
use crate::flat_coords::{check_stride, FlatCoordsCodec, NestedCoordsRef};

impl FlatCoordsCodec {
    /// Write a single coordinate with no count prefix.
    pub fn write_flat_coords_0<W: Write>(
        &self,
        mut writer: W,
        byte_order: Endianness,
        coord: &[f64],
    ) -> WKBResult<()> {
        byte_order.write_f64_slice(&mut writer, coord)
    }

    /// Write `coords` as a counted sequence of `stride`-sized tuples.
    ///
    /// `coords.len()` must be a multiple of `stride`.
    pub fn write_flat_coords_1<W: Write>(
        &self,
        mut writer: W,
        byte_order: Endianness,
        coords: &[f64],
        stride: usize,
    ) -> WKBResult<()> {
        check_stride(stride)?;
        let nested = NestedCoordsRef {
            coords,
            ends: [&[], &[]],
        };
        write_nested(&mut writer, byte_order, stride, 1, nested, 0..coords.len())
    }

    /// Write `flat_coords` as a counted sequence of sequences split at `ends`.
    pub fn write_flat_coords_2<W: Write>(
        &self,
        mut writer: W,
        byte_order: Endianness,
        flat_coords: &[f64],
        ends: &[usize],
        stride: usize,
    ) -> WKBResult<()> {
        check_stride(stride)?;
        let nested = NestedCoordsRef {
            coords: flat_coords,
            ends: [ends, &[]],
        };
        write_nested(&mut writer, byte_order, stride, 2, nested, 0..ends.len())
    }

    /// Write `flat_coords` as a counted sequence of level 2 blocks, one per entry of `endss`.
    ///
    /// Offsets in `endss` are absolute into `flat_coords`, as returned by
    /// [`FlatCoordsCodec::read_flat_coords_3`].
    pub fn write_flat_coords_3<W: Write>(
        &self,
        mut writer: W,
        byte_order: Endianness,
        flat_coords: &[f64],
        endss: &[Vec<usize>],
        stride: usize,
    ) -> WKBResult<()> {
        check_stride(stride)?;
        let ring_ends = endss.concat();
        let polygon_ends: Vec<usize> = endss
            .iter()
            .scan(0, |total, ends| {
                *total += ends.len();
                Some(*total)
            })
            .collect();
        let nested = NestedCoordsRef {
            coords: flat_coords,
            ends: [ring_ends.as_slice(), polygon_ends.as_slice()],
        };
        write_nested(
            &mut writer,
            byte_order,
            stride,
            3,
            nested,
            0..polygon_ends.len(),
        )
    }
}

/// Write the elements `range` of `level` (at least 1).
///
/// At level 1 `range` indexes scalars in `nested.coords`. Above that it indexes
/// `nested.ends[level - 2]`.
fn write_nested<W: Write>(
    writer: &mut W,
    byte_order: Endianness,
    stride: usize,
    level: usize,
    nested: NestedCoordsRef<'_>,
    range: Range<usize>,
) -> WKBResult<()> {
    if level == 1 {
        let coords = nested
            .coords
            .get(range.clone())
            .ok_or_else(|| out_of_range(range, nested.coords.len()))?;
        debug_assert_eq!(coords.len() % stride, 0);
        write_count(writer, byte_order, coords.len() / stride)?;
        return byte_order.write_f64_slice(writer, coords);
    }

    let level_ends = nested.ends[level - 2];
    let ends = level_ends
        .get(range.clone())
        .ok_or_else(|| out_of_range(range.clone(), level_ends.len()))?;
    write_count(writer, byte_order, ends.len())?;

    let mut offset = match range.start {
        0 => 0,
        start => level_ends[start - 1],
    };
    for &end in ends {
        write_nested(writer, byte_order, stride, level - 1, nested, offset..end)?;
        offset = end;
    }
    Ok(())
}

fn write_count<W: Write>(writer: &mut W, byte_order: Endianness, n: usize) -> WKBResult<()> {
    let n = u32::try_from(n).map_err(|_| WKBError::Overflow)?;
    byte_order.write_u32(writer, n)
}

fn out_of_range(range: Range<usize>, len: usize) -> WKBError {
    WKBError::General(format!(
        "ends range {}..{} out of bounds for length {}",
        range.start, range.end, len
    ))
}
