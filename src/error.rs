//! Defines [`WKBError`], representing all errors returned by this crate.

use std::fmt::Debug;

use thiserror::Error;

use crate::common::WKBType;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum WKBError {
    /// A byte order identifier other than `0` (XDR) or `1` (NDR).
    #[error("wkb: unknown byte order: {0:b}")]
    UnknownByteOrder(u8),

    /// A recognized byte order that this codec does not handle.
    #[error("wkb: unsupported byte order")]
    UnsupportedByteOrder,

    /// A geometry type code that does not exist.
    #[error("wkb: unknown type: {0}")]
    UnknownType(u32),

    /// A valid geometry type code that the caller cannot decode.
    #[error("wkb: unsupported type: {0}")]
    UnsupportedType(u32),

    /// A decoded geometry type did not match the expected one.
    #[error("wkb: got {got}, want {want}")]
    UnexpectedType {
        /// The type found in the input
        got: WKBType,
        /// The type the caller asked for
        want: WKBType,
    },

    /// An element count exceeded the ceiling configured for its nesting level.
    ///
    /// Raised before any payload for that level is allocated or read.
    #[error("wkb: number of elements at level {level} ({n}) exceeds {limit}")]
    GeometryTooLarge {
        /// Nesting level of the offending count (1, 2 or 3)
        level: usize,
        /// The count read from the input
        n: u32,
        /// The configured ceiling
        limit: u32,
    },

    /// Coordinates must have at least one component.
    #[error("wkb: invalid stride: {0}")]
    InvalidStride(usize),

    /// A count does not fit in a `u32` prefix, or a buffer size does not fit in `usize`.
    #[error("wkb: overflow")]
    Overflow,

    /// General error.
    #[error("wkb: {0}")]
    General(String),

    /// [std::io::Error]
    #[error(transparent)]
    IOError(#[from] std::io::Error),
}

/// Crate-specific result type.
pub type WKBResult<T> = std::result::Result<T, WKBError>;
