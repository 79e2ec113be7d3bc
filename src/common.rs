use std::fmt::Display;

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::error::{WKBError, WKBResult};

/// The geometry type codes understood by WKB collaborators.
///
/// This crate only defines the codes; dispatching on them is up to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u32)]
pub enum WKBType {
    /// A WKB Point
    Point = 1,
    /// A WKB LineString
    LineString = 2,
    /// A WKB Polygon
    Polygon = 3,
    /// A WKB MultiPoint
    MultiPoint = 4,
    /// A WKB MultiLineString
    MultiLineString = 5,
    /// A WKB MultiPolygon
    MultiPolygon = 6,
    /// A WKB GeometryCollection
    GeometryCollection = 7,
    /// A WKB PolyhedralSurface
    PolyhedralSurface = 15,
    /// A WKB TIN
    TIN = 16,
    /// A WKB Triangle
    Triangle = 17,
}

impl WKBType {
    /// Look up a type code, failing with [`WKBError::UnknownType`] if it is not defined.
    pub fn from_code(code: u32) -> WKBResult<Self> {
        Self::try_from_primitive(code).map_err(|_| WKBError::UnknownType(code))
    }

    /// The numeric code written on the wire
    pub fn code(&self) -> u32 {
        (*self).into()
    }

    /// The flat coordinate nesting level used for this type's coordinates.
    ///
    /// `None` for [`WKBType::GeometryCollection`], whose members carry their own headers.
    pub fn nesting_level(&self) -> Option<usize> {
        use WKBType::*;
        match self {
            Point => Some(0),
            LineString | MultiPoint => Some(1),
            Polygon | MultiLineString | Triangle => Some(2),
            MultiPolygon | PolyhedralSurface | TIN => Some(3),
            GeometryCollection => None,
        }
    }
}

impl Display for WKBType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use WKBType::*;
        let name = match self {
            Point => "Point",
            LineString => "LineString",
            Polygon => "Polygon",
            MultiPoint => "MultiPoint",
            MultiLineString => "MultiLineString",
            MultiPolygon => "MultiPolygon",
            GeometryCollection => "GeometryCollection",
            PolyhedralSurface => "PolyhedralSurface",
            TIN => "TIN",
            Triangle => "Triangle",
        };
        f.write_str(name)
    }
}
