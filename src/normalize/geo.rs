use geo_types::{
    Coord, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon,
    Point, Polygon,
};

use crate::error::{WktError, WktResult};
use crate::normalize::{GeometryFactory, Referenced};
use crate::record::{Coordinates, GeometryRecord, Position};

/// Builds [`geo_types`] geometries, keeping the record's SRID alongside.
///
/// geo-types coordinates are two-dimensional: Z and M ordinates are dropped. geo-types has no
/// empty point, so an empty Point record is rejected with [`WktError::InvalidRecord`].
#[derive(Debug, Clone, Copy, Default)]
pub struct GeoTypesFactory;

impl GeometryFactory for GeoTypesFactory {
    type Geometry = Referenced<Geometry<f64>>;

    fn create(&self, record: &GeometryRecord) -> WktResult<Self::Geometry> {
        let geometry = to_geometry(&record.coordinates)?;
        Ok(Referenced::new(geometry, record.crs.srid))
    }
}

fn to_coord(position: &Position) -> WktResult<Coord> {
    match position.as_slice() {
        [x, y, ..] => Ok(Coord { x: *x, y: *y }),
        _ => Err(WktError::InvalidRecord(format!(
            "position needs at least 2 ordinates, found {}",
            position.len()
        ))),
    }
}

fn to_point(position: &Position) -> WktResult<Point> {
    if position.is_empty() {
        return Err(WktError::InvalidRecord(
            "empty points are not representable".to_string(),
        ));
    }
    Ok(Point(to_coord(position)?))
}

fn to_line_string(positions: &[Position]) -> WktResult<LineString> {
    positions
        .iter()
        .map(to_coord)
        .collect::<WktResult<Vec<_>>>()
        .map(LineString::new)
}

fn to_polygon(rings: &[Vec<Position>]) -> WktResult<Polygon> {
    let Some((exterior, interiors)) = rings.split_first() else {
        return Ok(Polygon::new(LineString::new(vec![]), vec![]));
    };
    let interiors = interiors
        .iter()
        .map(|ring| to_line_string(ring))
        .collect::<WktResult<Vec<_>>>()?;
    Ok(Polygon::new(to_line_string(exterior)?, interiors))
}

fn to_geometry(coordinates: &Coordinates) -> WktResult<Geometry> {
    let geometry = match coordinates {
        Coordinates::Point(position) => Geometry::Point(to_point(position)?),
        Coordinates::LineString(positions) => Geometry::LineString(to_line_string(positions)?),
        Coordinates::Polygon(rings) => Geometry::Polygon(to_polygon(rings)?),
        Coordinates::MultiPoint(positions) => Geometry::MultiPoint(MultiPoint(
            positions.iter().map(to_point).collect::<WktResult<_>>()?,
        )),
        Coordinates::MultiLineString(line_strings) => {
            Geometry::MultiLineString(MultiLineString(
                line_strings
                    .iter()
                    .map(|positions| to_line_string(positions))
                    .collect::<WktResult<_>>()?,
            ))
        }
        Coordinates::MultiPolygon(polygons) => Geometry::MultiPolygon(MultiPolygon(
            polygons
                .iter()
                .map(|rings| to_polygon(rings))
                .collect::<WktResult<_>>()?,
        )),
        Coordinates::GeometryCollection(members) => {
            Geometry::GeometryCollection(GeometryCollection(
                members.iter().map(to_geometry).collect::<WktResult<_>>()?,
            ))
        }
    };
    Ok(geometry)
}
