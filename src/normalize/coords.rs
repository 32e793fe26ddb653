use geo_traits::{
    CoordTrait, GeometryCollectionTrait, GeometryTrait, GeometryType, LineStringTrait, LineTrait,
    MultiLineStringTrait, MultiPointTrait, MultiPolygonTrait, PointTrait, PolygonTrait, RectTrait,
    TriangleTrait,
};

use crate::record::{Coordinates, Position, PositionSeq};

fn coord_to_position(coord: &impl CoordTrait<T = f64>) -> Position {
    (0..coord.dim().size())
        .filter_map(|n| coord.nth(n))
        .collect()
}

/// An empty point normalizes to an empty position.
pub(crate) fn point_to_position(point: &impl PointTrait<T = f64>) -> Position {
    point
        .coord()
        .map(|coord| coord_to_position(&coord))
        .unwrap_or_default()
}

pub(crate) fn line_string_to_positions(line_string: &impl LineStringTrait<T = f64>) -> PositionSeq {
    line_string
        .coords()
        .map(|coord| coord_to_position(&coord))
        .collect()
}

/// A polygon without an exterior ring, or with an empty one, normalizes to no rings at all.
pub(crate) fn polygon_to_rings(polygon: &impl PolygonTrait<T = f64>) -> Vec<PositionSeq> {
    let Some(exterior) = polygon.exterior() else {
        return vec![];
    };
    if exterior.num_coords() == 0 {
        return vec![];
    }

    let mut rings = Vec::with_capacity(polygon.num_interiors() + 1);
    rings.push(line_string_to_positions(&exterior));
    rings.extend(
        polygon
            .interiors()
            .map(|interior| line_string_to_positions(&interior)),
    );
    rings
}

pub(crate) fn multi_point_to_positions(multi_point: &impl MultiPointTrait<T = f64>) -> PositionSeq {
    multi_point
        .points()
        .map(|point| point_to_position(&point))
        .collect()
}

pub(crate) fn multi_line_string_to_positions(
    multi_line_string: &impl MultiLineStringTrait<T = f64>,
) -> Vec<PositionSeq> {
    multi_line_string
        .line_strings()
        .map(|line_string| line_string_to_positions(&line_string))
        .collect()
}

pub(crate) fn multi_polygon_to_polygons(
    multi_polygon: &impl MultiPolygonTrait<T = f64>,
) -> Vec<Vec<PositionSeq>> {
    multi_polygon
        .polygons()
        .map(|polygon| polygon_to_rings(&polygon))
        .collect()
}

/// A Line normalizes to a two-position LineString.
fn line_to_positions(line: &impl LineTrait<T = f64>) -> PositionSeq {
    let [start, end] = line.coords();
    vec![coord_to_position(&start), coord_to_position(&end)]
}

/// A Triangle normalizes to a single closed ring.
fn triangle_to_rings(triangle: &impl TriangleTrait<T = f64>) -> Vec<PositionSeq> {
    let [first, second, third] = triangle.coords();
    vec![vec![
        coord_to_position(&first),
        coord_to_position(&second),
        coord_to_position(&third),
        coord_to_position(&first),
    ]]
}

/// A Rect normalizes to a single closed ring.
///
/// Only the first two dimensions will be kept.
fn rect_to_rings(rect: &impl RectTrait<T = f64>) -> Vec<PositionSeq> {
    let (min_x, min_y) = rect.min().x_y();
    let (max_x, max_y) = rect.max().x_y();
    vec![vec![
        vec![min_x, min_y],
        vec![max_x, min_y],
        vec![max_x, max_y],
        vec![min_x, max_y],
        vec![min_x, min_y],
    ]]
}

/// Convert any geometry into record coordinates.
///
/// Every kind normalizes, including the ones WKT cannot encode.
pub(crate) fn geometry_to_coordinates(geometry: &impl GeometryTrait<T = f64>) -> Coordinates {
    match geometry.as_type() {
        GeometryType::Point(g) => Coordinates::Point(point_to_position(g)),
        GeometryType::LineString(g) => Coordinates::LineString(line_string_to_positions(g)),
        GeometryType::Polygon(g) => Coordinates::Polygon(polygon_to_rings(g)),
        GeometryType::MultiPoint(g) => Coordinates::MultiPoint(multi_point_to_positions(g)),
        GeometryType::MultiLineString(g) => {
            Coordinates::MultiLineString(multi_line_string_to_positions(g))
        }
        GeometryType::MultiPolygon(g) => Coordinates::MultiPolygon(multi_polygon_to_polygons(g)),
        GeometryType::GeometryCollection(g) => Coordinates::GeometryCollection(
            g.geometries()
                .map(|member| geometry_to_coordinates(&member))
                .collect(),
        ),
        GeometryType::Rect(g) => Coordinates::Polygon(rect_to_rings(g)),
        GeometryType::Triangle(g) => Coordinates::Polygon(triangle_to_rings(g)),
        GeometryType::Line(g) => Coordinates::LineString(line_to_positions(g)),
    }
}
