use std::io::{Read, Write};

use byteorder::{BigEndian, LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::error::{WKBError, WKBResult};

/// Byte order id for big-endian (XDR) encoding
pub const XDR_ID: u8 = 0;

/// Byte order id for little-endian (NDR) encoding
pub const NDR_ID: u8 = 1;

/// The byte order of a WKB buffer.
///
/// Resolved once per call from the leading byte-order byte and passed by value to every codec
/// operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endianness {
    BigEndian,
    LittleEndian,
}

impl Endianness {
    /// The byte order of the host platform
    pub fn native() -> Self {
        if cfg!(target_endian = "big") {
            Endianness::BigEndian
        } else {
            Endianness::LittleEndian
        }
    }

    pub(crate) fn read_u32(&self, reader: &mut impl Read) -> WKBResult<u32> {
        let value = match self {
            Endianness::BigEndian => reader.read_u32::<BigEndian>()?,
            Endianness::LittleEndian => reader.read_u32::<LittleEndian>()?,
        };
        Ok(value)
    }

    /// Fill `dst` with consecutive scalars.
    pub(crate) fn read_f64_into(&self, reader: &mut impl Read, dst: &mut [f64]) -> WKBResult<()> {
        match self {
            Endianness::BigEndian => reader.read_f64_into::<BigEndian>(dst)?,
            Endianness::LittleEndian => reader.read_f64_into::<LittleEndian>(dst)?,
        }
        Ok(())
    }

    pub(crate) fn write_u32(&self, writer: &mut impl Write, value: u32) -> WKBResult<()> {
        match self {
            Endianness::BigEndian => writer.write_u32::<BigEndian>(value)?,
            Endianness::LittleEndian => writer.write_u32::<LittleEndian>(value)?,
        }
        Ok(())
    }

    pub(crate) fn write_f64_slice(&self, writer: &mut impl Write, values: &[f64]) -> WKBResult<()> {
        for value in values {
            match self {
                Endianness::BigEndian => writer.write_f64::<BigEndian>(*value)?,
                Endianness::LittleEndian => writer.write_f64::<LittleEndian>(*value)?,
            }
        }
        Ok(())
    }
}

impl TryFrom<u8> for Endianness {
    type Error = WKBError;

    fn try_from(value: u8) -> WKBResult<Self> {
        match value {
            XDR_ID => Ok(Endianness::BigEndian),
            NDR_ID => Ok(Endianness::LittleEndian),
            other => Err(WKBError::UnknownByteOrder(other)),
        }
    }
}

impl From<Endianness> for u8 {
    fn from(value: Endianness) -> Self {
        match value {
            Endianness::BigEndian => XDR_ID,
            Endianness::LittleEndian => NDR_ID,
        }
    }
}
