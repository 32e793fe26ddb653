use crate::error::WktResult;
use crate::io::wkt::writer::point::encode_point;
use crate::record::Position;

/// Encode a sequence of positions separated by commas, without a trailing comma.
pub(crate) fn encode_line_string(positions: &[Position], out: &mut String) -> WktResult<()> {
    let num_positions = positions.len();
    for (idx, position) in positions.iter().enumerate() {
        encode_point(position, out)?;
        if idx < num_positions - 1 {
            out.push(',');
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::WktError;

    #[test]
    fn encode_linestring() {
        let mut out = String::new();
        encode_line_string(&[vec![30., 10.], vec![10., 30.], vec![40., 40.]], &mut out).unwrap();
        assert_eq!(out, "30 10,10 30,40 40");
    }

    #[test]
    fn empty_member_position() {
        let mut out = String::new();
        let err = encode_line_string(&[vec![30., 10.], vec![]], &mut out).unwrap_err();
        assert!(matches!(err, WktError::InvalidRecord(_)));
    }
}
