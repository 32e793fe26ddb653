//! Read and write geometries as Well-Known Text (WKT) and PostGIS Extended WKT (EWKT).
//!
//! ```
//! use geowkt::io::wkt::{WktCodec, WktFormat};
//!
//! let codec = WktCodec::new();
//! let record = codec.decode("SRID=4326;LINESTRING (0 0, 1 1, 2 2)").unwrap();
//! assert_eq!(record.crs.srid(), Some(4326));
//! assert_eq!(
//!     codec.encode(&record, WktFormat::Wkt).unwrap(),
//!     "LINESTRING (0 0,1 1,2 2)"
//! );
//! ```

mod codec;
mod format;
mod options;
pub mod reader;
pub mod writer;

pub use codec::WktCodec;
pub use format::WktFormat;
pub use options::DecodeOptions;
pub use reader::{Lexer, Token, TokenKind, WktParser};
pub use writer::{encode, encode_geometry, encode_type};

use crate::error::{WktError, WktResult};
use crate::record::GeometryKind;

/// Fail for kinds that have no WKT body reader or writer.
pub(crate) fn ensure_supported(kind: GeometryKind) -> WktResult<()> {
    match kind {
        GeometryKind::Point
        | GeometryKind::LineString
        | GeometryKind::Polygon
        | GeometryKind::MultiPoint
        | GeometryKind::MultiLineString => Ok(()),
        GeometryKind::MultiPolygon | GeometryKind::GeometryCollection => {
            Err(WktError::UnsupportedGeometryType(kind))
        }
    }
}
