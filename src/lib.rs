//! Bounded binary codec for the flat coordinate bodies shared by WKB and EWKB geometries.
//!
//! Callers resolve the byte order and coordinate stride from a geometry header, then use a
//! [`FlatCoordsCodec`] to read or write the nested coordinate sequences that follow. Every
//! decoded count is checked against a [`BoundsPolicy`] before anything is allocated for it.
//!
//! ```
//! use geoarrow_wkb_common::{Endianness, FlatCoordsCodec};
//!
//! let codec = FlatCoordsCodec::default();
//! let mut buf: Vec<u8> = vec![];
//! codec
//!     .write_flat_coords_2(&mut buf, Endianness::BigEndian, &[0., 0., 1., 1., 2., 2.], &[4, 6], 2)
//!     .unwrap();
//!
//! let (coords, ends) = codec
//!     .read_flat_coords_2(buf.as_slice(), Endianness::BigEndian, 2)
//!     .unwrap();
//! assert_eq!(coords.len(), 6);
//! assert_eq!(ends, vec![4, 6]);
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub mod bounds;
pub mod common;
pub mod endianness;
pub mod error;
pub mod flat_coords;

pub use bounds::{BoundsPolicy, DEFAULT_LIMITS, MAX_LEVEL};
pub use common::WKBType;
pub use endianness::{Endianness, NDR_ID, XDR_ID};
pub use error::{WKBError, WKBResult};
pub use flat_coords::FlatCoordsCodec;
