use crate::error::WktResult;
use crate::io::wkt::writer::polygon::encode_polygon;
use crate::record::PositionSeq;

/// Each member LineString is parenthesized, the same way as polygon rings.
pub(crate) fn encode_multi_line_string(
    line_strings: &[PositionSeq],
    out: &mut String,
) -> WktResult<()> {
    encode_polygon(line_strings, out)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::WktError;

    #[test]
    fn encode_multilinestring() {
        let line_strings = vec![
            vec![vec![0., 0., 1.], vec![1., 1., 1.]],
            vec![vec![2., 2., 2.], vec![3., 3., 3.]],
        ];
        let mut out = String::new();
        encode_multi_line_string(&line_strings, &mut out).unwrap();
        assert_eq!(out, "(0 0 1,1 1 1),(2 2 2,3 3 3)");
    }

    #[test]
    fn empty_member() {
        let line_strings = vec![vec![vec![0., 0.], vec![1., 1.]], vec![]];
        let mut out = String::new();
        assert!(matches!(
            encode_multi_line_string(&line_strings, &mut out),
            Err(WktError::InvalidRecord(_))
        ));
    }
}
