//! Encode [GeometryRecord]s as WKT or EWKT text.

mod linestring;
mod multilinestring;
mod multipoint;
mod point;
mod polygon;

use crate::error::{WktError, WktResult};
use crate::io::wkt::{ensure_supported, WktFormat};
use crate::record::{Coordinates, GeometryRecord};

use linestring::encode_line_string;
use multilinestring::encode_multi_line_string;
use multipoint::encode_multi_point;
use point::encode_point;
use polygon::encode_polygon;

/// The type keyword and dimension marker, e.g. `"POINT ZM"` or `"LINESTRING"`.
pub fn encode_type(record: &GeometryRecord) -> String {
    let keyword = record.kind().wkt_keyword();
    let suffix = record.crs.dimension().wkt_suffix();
    if suffix.is_empty() {
        keyword.to_string()
    } else {
        format!("{keyword} {suffix}")
    }
}

/// The coordinates of a record without the surrounding parentheses, e.g. `"0 0,1 1"`.
///
/// Empty records encode as an empty string. Non-finite ordinates, empty rings and
/// positions without 2 to 4 ordinates fail with [WktError::InvalidRecord].
pub fn encode_geometry(record: &GeometryRecord) -> WktResult<String> {
    ensure_supported(record.kind())?;

    let mut out = String::new();
    if record.is_empty() {
        return Ok(out);
    }
    match &record.coordinates {
        Coordinates::Point(position) => encode_point(position, &mut out)?,
        Coordinates::LineString(positions) => encode_line_string(positions, &mut out)?,
        Coordinates::Polygon(rings) => encode_polygon(rings, &mut out)?,
        Coordinates::MultiPoint(points) => encode_multi_point(points, &mut out)?,
        Coordinates::MultiLineString(line_strings) => {
            encode_multi_line_string(line_strings, &mut out)?
        }
        Coordinates::MultiPolygon(_) | Coordinates::GeometryCollection(_) => {
            return Err(WktError::UnsupportedGeometryType(record.kind()))
        }
    }
    Ok(out)
}

/// Encode a full geometry.
///
/// Produces `<TYPE> (<coordinates>)`, or `<TYPE> EMPTY` for empty coordinates. With
/// [WktFormat::Ewkt] and a specified SRID the text is prefixed with `SRID=<srid>;`.
pub fn encode(record: &GeometryRecord, format: WktFormat) -> WktResult<String> {
    ensure_supported(record.kind())?;

    let mut wkt = if record.is_empty() {
        format!("{} EMPTY", encode_type(record))
    } else {
        format!("{} ({})", encode_type(record), encode_geometry(record)?)
    };

    if let (WktFormat::Ewkt, Some(srid)) = (format, record.crs.srid()) {
        wkt = format!("SRID={srid};{wkt}");
    }
    Ok(wkt)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::crs::Crs;
    use crate::record::GeometryKind;
    use crate::test::{linestring, multilinestring, multipoint, point, polygon};

    #[test]
    fn type_and_dimension() {
        assert_eq!(encode_type(&point::xy()), "POINT");
        assert_eq!(encode_type(&point::xyzm()), "POINT ZM");
        assert_eq!(encode_type(&point::xym()), "POINT M");
        assert_eq!(encode_type(&linestring::xyz()), "LINESTRING Z");
    }

    #[test]
    fn ewkt_prefix() {
        let record = point::xy_4326();
        assert_eq!(
            encode(&record, WktFormat::Ewkt).unwrap(),
            "SRID=4326;POINT (1 2)"
        );
        assert_eq!(encode(&record, WktFormat::Wkt).unwrap(), "POINT (1 2)");

        let record = point::xy();
        assert_eq!(encode(&record, WktFormat::Ewkt).unwrap(), "POINT (1 2)");
    }

    #[test]
    fn every_supported_kind() {
        assert_eq!(
            encode(&linestring::diagonal(), WktFormat::Wkt).unwrap(),
            "LINESTRING (0 0,1 1)"
        );
        assert_eq!(
            encode(&polygon::with_hole(), WktFormat::Wkt).unwrap(),
            "POLYGON ((0 0,10 0,10 10,0 10,0 0),(1 1,2 1,2 2,1 1))"
        );
        assert_eq!(
            encode(&multipoint::xy(), WktFormat::Wkt).unwrap(),
            "MULTIPOINT (1 2,3 4)"
        );
        assert_eq!(
            encode(&multilinestring::xyz(), WktFormat::Wkt).unwrap(),
            "MULTILINESTRING Z ((0 0 1,1 1 1),(2 2 2,3 3 3))"
        );
    }

    #[test]
    fn empty() {
        for kind in [
            GeometryKind::Point,
            GeometryKind::LineString,
            GeometryKind::Polygon,
            GeometryKind::MultiPoint,
            GeometryKind::MultiLineString,
        ] {
            let record = GeometryRecord::empty(kind, Crs::default());
            assert_eq!(
                encode(&record, WktFormat::Wkt).unwrap(),
                format!("{} EMPTY", kind.wkt_keyword())
            );
        }

        let record = GeometryRecord::empty(GeometryKind::Point, Crs::new(4326, true, false));
        assert_eq!(
            encode(&record, WktFormat::Ewkt).unwrap(),
            "SRID=4326;POINT Z EMPTY"
        );
    }

    #[test]
    fn non_finite_ordinates() {
        for value in [f64::INFINITY, f64::NAN] {
            let record =
                GeometryRecord::new(Coordinates::Point(vec![value, 1.]), Crs::default());
            assert!(matches!(
                encode(&record, WktFormat::Wkt),
                Err(WktError::InvalidRecord(_))
            ));
        }
    }

    #[test]
    fn empty_rings() {
        let record = GeometryRecord::new(Coordinates::Polygon(vec![vec![]]), Crs::default());
        assert!(matches!(
            encode(&record, WktFormat::Wkt),
            Err(WktError::InvalidRecord(_))
        ));

        let record = GeometryRecord::new(
            Coordinates::MultiLineString(vec![vec![vec![0., 0.], vec![1., 1.]], vec![]]),
            Crs::default(),
        );
        assert!(matches!(
            encode(&record, WktFormat::Wkt),
            Err(WktError::InvalidRecord(_))
        ));
    }

    #[test]
    fn unsupported() {
        let polygons = Coordinates::MultiPolygon(vec![vec![vec![
            vec![0., 0.],
            vec![1., 0.],
            vec![1., 1.],
            vec![0., 0.],
        ]]]);
        let record = GeometryRecord::new(polygons, Crs::default());
        assert!(matches!(
            encode_geometry(&record),
            Err(WktError::UnsupportedGeometryType(GeometryKind::MultiPolygon))
        ));
        assert!(matches!(
            encode(&record, WktFormat::Wkt),
            Err(WktError::UnsupportedGeometryType(GeometryKind::MultiPolygon))
        ));

        let record = GeometryRecord::empty(GeometryKind::GeometryCollection, Crs::default());
        assert!(matches!(
            encode(&record, WktFormat::Ewkt),
            Err(WktError::UnsupportedGeometryType(
                GeometryKind::GeometryCollection
            ))
        ));
    }
}
