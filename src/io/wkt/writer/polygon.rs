use crate::error::{WktError, WktResult};
use crate::io::wkt::writer::linestring::encode_line_string;
use crate::record::PositionSeq;

/// Encode each ring as a parenthesized position sequence, rings separated by commas.
///
/// An empty ring has no WKT form, so it is rejected.
pub(crate) fn encode_polygon(rings: &[PositionSeq], out: &mut String) -> WktResult<()> {
    let num_rings = rings.len();
    for (idx, ring) in rings.iter().enumerate() {
        if ring.is_empty() {
            return Err(WktError::InvalidRecord(format!("empty ring at index {idx}")));
        }
        out.push('(');
        encode_line_string(ring, out)?;
        out.push(')');
        if idx < num_rings - 1 {
            out.push(',');
        }
    }
    Ok(())
}
