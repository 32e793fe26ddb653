use std::str::FromStr;

use crate::error::WktResult;
use crate::io::wkt::reader::WktParser;
use crate::io::wkt::{writer, DecodeOptions, WktFormat};
use crate::record::GeometryRecord;

/// Encoder and decoder for WKT and EWKT.
///
/// The codec holds only options. Every [`decode`](Self::decode) call builds its own
/// [WktParser], so one codec can be shared freely between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct WktCodec {
    options: DecodeOptions,
}

impl WktCodec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: DecodeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Whether `format` names a format this codec can decode.
    pub fn supports_decoding(&self, format: &str) -> bool {
        WktFormat::from_str(format).is_ok()
    }

    /// Whether `format` names a format this codec can encode.
    pub fn supports_encoding(&self, format: &str) -> bool {
        self.supports_decoding(format)
    }

    /// Decode WKT or EWKT text. An SRID prefix is kept in the record for both formats.
    pub fn decode(&self, text: &str) -> WktResult<GeometryRecord> {
        log::debug!("decoding {} bytes of WKT", text.len());
        WktParser::with_options(text, self.options).decode_geometry()
    }

    pub fn encode(&self, record: &GeometryRecord, format: WktFormat) -> WktResult<String> {
        log::debug!("encoding {} record as {format}", record.kind());
        writer::encode(record, format)
    }
}
