use crate::error::WktResult;
use crate::io::wkt::writer::linestring::encode_line_string;
use crate::record::Position;

/// MultiPoint members are written bare, like the positions of a LineString.
pub(crate) fn encode_multi_point(points: &[Position], out: &mut String) -> WktResult<()> {
    encode_line_string(points, out)
}
