//! Reader and writer implementations of textual geometry formats.

pub mod wkt;
