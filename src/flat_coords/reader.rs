use std::io::Read;

use log::trace;

use crate::endianness::Endianness;
use crate::error::{WKBError, WKBResult};
use crate::flat_coords::{check_stride, FlatCoordsCodec, NestedCoords};

impl FlatCoordsCodec {
    /// Read a single coordinate of `stride` scalars. There is no count prefix.
    pub fn read_flat_coords_0<R: Read>(
        &self,
        mut reader: R,
        byte_order: Endianness,
        stride: usize,
    ) -> WKBResult<Vec<f64>> {
        check_stride(stride)?;
        let mut coords = Vec::new();
        read_tuples(&mut reader, byte_order, stride, 1, &mut coords)?;
        Ok(coords)
    }

    /// Read a counted sequence of coordinates.
    pub fn read_flat_coords_1<R: Read>(
        &self,
        mut reader: R,
        byte_order: Endianness,
        stride: usize,
    ) -> WKBResult<Vec<f64>> {
        check_stride(stride)?;
        let mut nested = NestedCoords::default();
        self.read_nested(&mut reader, byte_order, stride, 1, &mut nested)?;
        Ok(nested.coords)
    }

    /// Read a counted sequence of coordinate sequences.
    ///
    /// Returns the concatenated coordinates and the exclusive end offset of each sequence.
    pub fn read_flat_coords_2<R: Read>(
        &self,
        mut reader: R,
        byte_order: Endianness,
        stride: usize,
    ) -> WKBResult<(Vec<f64>, Vec<usize>)> {
        check_stride(stride)?;
        let mut nested = NestedCoords::default();
        self.read_nested(&mut reader, byte_order, stride, 2, &mut nested)?;
        let [ends, _] = nested.ends;
        Ok((nested.coords, ends))
    }

    /// Read a counted sequence of level 2 blocks.
    ///
    /// Returns the concatenated coordinates and, for each level 2 block, its ends. All offsets
    /// index into the single returned coordinate buffer.
    pub fn read_flat_coords_3<R: Read>(
        &self,
        mut reader: R,
        byte_order: Endianness,
        stride: usize,
    ) -> WKBResult<(Vec<f64>, Vec<Vec<usize>>)> {
        check_stride(stride)?;
        let mut nested = NestedCoords::default();
        self.read_nested(&mut reader, byte_order, stride, 3, &mut nested)?;
        Ok(nested.into_endss())
    }

    /// Read one bounded sequence at `level` (at least 1), appending into `out`.
    ///
    /// The count is checked against the bounds policy before anything is reserved for it.
    fn read_nested<R: Read>(
        &self,
        reader: &mut R,
        byte_order: Endianness,
        stride: usize,
        level: usize,
        out: &mut NestedCoords,
    ) -> WKBResult<()> {
        let n = byte_order.read_u32(reader)?;
        self.bounds.check(level, n)?;
        trace!("Reading {} elements at level {}", n, level);

        let n = usize::try_from(n).map_err(|_| WKBError::Overflow)?;
        if level == 1 {
            return read_tuples(reader, byte_order, stride, n, &mut out.coords);
        }

        out.ends[level - 2].reserve(n);
        for _ in 0..n {
            self.read_nested(reader, byte_order, stride, level - 1, out)?;
            let end = if level == 2 {
                out.coords.len()
            } else {
                out.ends[level - 3].len()
            };
            out.ends[level - 2].push(end);
        }
        Ok(())
    }
}

/// Append `count` tuples of `stride` scalars to `coords`.
fn read_tuples<R: Read>(
    reader: &mut R,
    byte_order: Endianness,
    stride: usize,
    count: usize,
    coords: &mut Vec<f64>,
) -> WKBResult<()> {
    let start = coords.len();
    let end = count
        .checked_mul(stride)
        .and_then(|len| len.checked_add(start))
        .ok_or(WKBError::Overflow)?;
    coords.resize(end, 0.0);
    byte_order.read_f64_into(reader, &mut coords[start..])
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use super::*;
    use crate::bounds::BoundsPolicy;

    fn be_block(count: u32, scalars: &[f64]) -> Vec<u8> {
        let mut buf = count.to_be_bytes().to_vec();
        for x in scalars {
            buf.extend_from_slice(&x.to_be_bytes());
        }
        buf
    }

    #[test]
    fn read_point() {
        let mut buf: Vec<u8> = vec![];
        for x in [1.5f64, -2.5, 3.0] {
            buf.extend_from_slice(&x.to_le_bytes());
        }
        let coord = FlatCoordsCodec::default()
            .read_flat_coords_0(buf.as_slice(), Endianness::LittleEndian, 3)
            .unwrap();
        assert_eq!(coord, vec![1.5, -2.5, 3.0]);
    }

    #[test]
    fn read_line_string_big_endian() {
        let buf = be_block(2, &[1.0, 2.0, 3.0, 4.0]);
        let coords = FlatCoordsCodec::default()
            .read_flat_coords_1(buf.as_slice(), Endianness::BigEndian, 2)
            .unwrap();
        assert_eq!(coords, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn read_polygon() {
        let mut buf = 2u32.to_be_bytes().to_vec();
        buf.extend(be_block(3, &[0., 0., 1., 0., 1., 1.]));
        buf.extend(be_block(2, &[2., 2., 3., 2.]));

        let (coords, ends) = FlatCoordsCodec::default()
            .read_flat_coords_2(buf.as_slice(), Endianness::BigEndian, 2)
            .unwrap();
        assert_eq!(coords.len(), 10);
        assert_eq!(ends, vec![6, 10]);
    }

    #[test]
    fn read_multi_polygon() {
        let mut buf = 2u32.to_be_bytes().to_vec();
        // First polygon: one ring of two points
        buf.extend(1u32.to_be_bytes());
        buf.extend(be_block(2, &[0., 0., 1., 1.]));
        // Second polygon: two rings
        buf.extend(2u32.to_be_bytes());
        buf.extend(be_block(1, &[5., 5.]));
        buf.extend(be_block(2, &[6., 6., 7., 7.]));

        let (coords, endss) = FlatCoordsCodec::default()
            .read_flat_coords_3(buf.as_slice(), Endianness::BigEndian, 2)
            .unwrap();
        assert_eq!(coords, vec![0., 0., 1., 1., 5., 5., 6., 6., 7., 7.]);
        assert_eq!(endss, vec![vec![4], vec![6, 10]]);
    }

    #[test]
    fn too_large_at_level_1_stops_before_payload() {
        let buf = be_block(1_048_577, &[1.0, 2.0]);
        let mut reader = Cursor::new(buf.as_slice());
        let err = FlatCoordsCodec::default()
            .read_flat_coords_1(&mut reader, Endianness::BigEndian, 2)
            .unwrap_err();
        assert!(matches!(
            err,
            WKBError::GeometryTooLarge {
                level: 1,
                n: 1_048_577,
                limit: 1_048_576
            }
        ));
        assert_eq!(reader.position(), 4);
    }

    #[test]
    fn too_large_at_level_2_and_3() {
        let codec = FlatCoordsCodec::new(BoundsPolicy::new([0, 100, 1, 1]));

        let buf = 2u32.to_le_bytes();
        let err = codec
            .read_flat_coords_2(buf.as_slice(), Endianness::LittleEndian, 2)
            .unwrap_err();
        assert!(matches!(
            err,
            WKBError::GeometryTooLarge {
                level: 2,
                n: 2,
                limit: 1
            }
        ));

        let err = codec
            .read_flat_coords_3(buf.as_slice(), Endianness::LittleEndian, 2)
            .unwrap_err();
        assert!(matches!(err, WKBError::GeometryTooLarge { level: 3, .. }));
    }

    #[test]
    fn inner_limit_applies_inside_nested_read() {
        let codec = FlatCoordsCodec::new(BoundsPolicy::new([0, 2, 10, 10]));
        let mut buf = 2u32.to_be_bytes().to_vec();
        buf.extend(be_block(2, &[0., 0., 1., 1.]));
        buf.extend(be_block(3, &[0., 0., 1., 1., 2., 2.]));

        let err = codec
            .read_flat_coords_2(buf.as_slice(), Endianness::BigEndian, 2)
            .unwrap_err();
        assert!(matches!(
            err,
            WKBError::GeometryTooLarge {
                level: 1,
                n: 3,
                limit: 2
            }
        ));
    }

    #[test]
    fn truncated_input() {
        // Count claims two coordinates but only one is present
        let buf = be_block(2, &[1.0, 2.0]);
        let err = FlatCoordsCodec::default()
            .read_flat_coords_1(buf.as_slice(), Endianness::BigEndian, 2)
            .unwrap_err();
        assert!(matches!(err, WKBError::IOError(_)));

        // Second ring missing entirely
        let mut buf = 2u32.to_be_bytes().to_vec();
        buf.extend(be_block(1, &[1.0, 2.0]));
        let err = FlatCoordsCodec::default()
            .read_flat_coords_2(buf.as_slice(), Endianness::BigEndian, 2)
            .unwrap_err();
        assert!(matches!(err, WKBError::IOError(_)));
    }

    #[test]
    fn empty_sequences() {
        let buf = 0u32.to_be_bytes();
        let codec = FlatCoordsCodec::default();
        assert!(codec
            .read_flat_coords_1(buf.as_slice(), Endianness::BigEndian, 2)
            .unwrap()
            .is_empty());
        let (coords, ends) = codec
            .read_flat_coords_2(buf.as_slice(), Endianness::BigEndian, 2)
            .unwrap();
        assert!(coords.is_empty());
        assert!(ends.is_empty());
    }

    #[test]
    fn zero_stride_rejected() {
        let buf = be_block(1, &[1.0]);
        let err = FlatCoordsCodec::default()
            .read_flat_coords_1(buf.as_slice(), Endianness::BigEndian, 0)
            .unwrap_err();
        assert!(matches!(err, WKBError::InvalidStride(0)));
    }

    #[test]
    fn special_values_pass_through() {
        let nan = f64::from_bits(0x7ff8_0000_dead_beef);
        let buf = be_block(2, &[nan, -0.0, f64::INFINITY, f64::NEG_INFINITY]);
        let coords = FlatCoordsCodec::default()
            .read_flat_coords_1(buf.as_slice(), Endianness::BigEndian, 2)
            .unwrap();
        assert_eq!(coords[0].to_bits(), nan.to_bits());
        assert_eq!(coords[1].to_bits(), (-0.0f64).to_bits());
        assert_eq!(coords[2], f64::INFINITY);
        assert_eq!(coords[3], f64::NEG_INFINITY);
    }
}
