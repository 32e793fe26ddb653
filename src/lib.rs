//! Well-Known Text (WKT) and Extended WKT (EWKT) codec for vector geometries.
//!
//! Text is decoded into a normalized [GeometryRecord](record::GeometryRecord): a kind-tagged
//! coordinate structure plus CRS flags. Records are encoded back to text by the
//! [io::wkt] writer, and converted to and from domain geometries by the [normalize] module.
//! [GeometrySerializer] chains both steps.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use error::{WktError, WktResult};
pub use serializer::GeometrySerializer;

pub mod crs;
pub mod dimension;
pub mod error;
pub mod io;
pub mod normalize;
pub mod record;
mod serializer;
#[cfg(test)]
pub(crate) mod test;
