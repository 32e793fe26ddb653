//! The normalized, type-tagged geometry record exchanged between the WKT codec and domain
//! geometry models.

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::crs::Crs;
use crate::error::{WktError, WktResult};

/// A single position: X, Y, then Z if present, then M if present.
pub type Position = Vec<f64>;

/// An ordered list of positions, as held by a LineString, a MultiPoint or a polygon ring.
pub type PositionSeq = Vec<Position>;

/// The closed set of geometry kinds a record can be tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeometryKind {
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
}

impl GeometryKind {
    /// All kinds, in WKT keyword order.
    pub const ALL: [GeometryKind; 7] = [
        GeometryKind::Point,
        GeometryKind::LineString,
        GeometryKind::Polygon,
        GeometryKind::MultiPoint,
        GeometryKind::MultiLineString,
        GeometryKind::MultiPolygon,
        GeometryKind::GeometryCollection,
    ];

    /// The canonical name, e.g. `"LineString"`.
    pub fn name(&self) -> &'static str {
        match self {
            GeometryKind::Point => "Point",
            GeometryKind::LineString => "LineString",
            GeometryKind::Polygon => "Polygon",
            GeometryKind::MultiPoint => "MultiPoint",
            GeometryKind::MultiLineString => "MultiLineString",
            GeometryKind::MultiPolygon => "MultiPolygon",
            GeometryKind::GeometryCollection => "GeometryCollection",
        }
    }

    /// The uppercase WKT keyword, e.g. `"LINESTRING"`.
    pub fn wkt_keyword(&self) -> &'static str {
        match self {
            GeometryKind::Point => "POINT",
            GeometryKind::LineString => "LINESTRING",
            GeometryKind::Polygon => "POLYGON",
            GeometryKind::MultiPoint => "MULTIPOINT",
            GeometryKind::MultiLineString => "MULTILINESTRING",
            GeometryKind::MultiPolygon => "MULTIPOLYGON",
            GeometryKind::GeometryCollection => "GEOMETRYCOLLECTION",
        }
    }
}

impl Display for GeometryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses a kind name case-insensitively, so both `"LineString"` and the WKT keyword
/// `"LINESTRING"` are accepted.
impl FromStr for GeometryKind {
    type Err = WktError;

    fn from_str(s: &str) -> WktResult<Self> {
        GeometryKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| WktError::IncorrectGeometryType(format!("Unknown geometry type {s}")))
    }
}

/// The coordinates of a geometry record, tagged by kind.
///
/// Each variant carries the nesting that its kind requires, so the `type` tag and the shape of
/// `coordinates` can never disagree. An empty geometry holds an empty outer container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum Coordinates {
    Point(Position),
    LineString(PositionSeq),
    Polygon(Vec<PositionSeq>),
    MultiPoint(PositionSeq),
    MultiLineString(Vec<PositionSeq>),
    MultiPolygon(Vec<Vec<PositionSeq>>),
    GeometryCollection(Vec<Coordinates>),
}

impl Coordinates {
    /// Empty coordinates of the given kind.
    pub fn empty(kind: GeometryKind) -> Self {
        match kind {
            GeometryKind::Point => Coordinates::Point(vec![]),
            GeometryKind::LineString => Coordinates::LineString(vec![]),
            GeometryKind::Polygon => Coordinates::Polygon(vec![]),
            GeometryKind::MultiPoint => Coordinates::MultiPoint(vec![]),
            GeometryKind::MultiLineString => Coordinates::MultiLineString(vec![]),
            GeometryKind::MultiPolygon => Coordinates::MultiPolygon(vec![]),
            GeometryKind::GeometryCollection => Coordinates::GeometryCollection(vec![]),
        }
    }

    pub fn kind(&self) -> GeometryKind {
        match self {
            Coordinates::Point(_) => GeometryKind::Point,
            Coordinates::LineString(_) => GeometryKind::LineString,
            Coordinates::Polygon(_) => GeometryKind::Polygon,
            Coordinates::MultiPoint(_) => GeometryKind::MultiPoint,
            Coordinates::MultiLineString(_) => GeometryKind::MultiLineString,
            Coordinates::MultiPolygon(_) => GeometryKind::MultiPolygon,
            Coordinates::GeometryCollection(_) => GeometryKind::GeometryCollection,
        }
    }

    /// Whether the outer container is empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Coordinates::Point(c) => c.is_empty(),
            Coordinates::LineString(c) | Coordinates::MultiPoint(c) => c.is_empty(),
            Coordinates::Polygon(c) | Coordinates::MultiLineString(c) => c.is_empty(),
            Coordinates::MultiPolygon(c) => c.is_empty(),
            Coordinates::GeometryCollection(c) => c.is_empty(),
        }
    }
}

/// A normalized geometry: a kind-tagged coordinate structure plus its CRS flags.
///
/// Serializes as `{"type": ..., "coordinates": ..., "crs": {"srid": ..., "3d": ..., "measured": ...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryRecord {
    #[serde(flatten)]
    pub coordinates: Coordinates,
    pub crs: Crs,
}

impl GeometryRecord {
    pub fn new(coordinates: Coordinates, crs: Crs) -> Self {
        Self { coordinates, crs }
    }

    /// An empty record of the given kind.
    pub fn empty(kind: GeometryKind, crs: Crs) -> Self {
        Self::new(Coordinates::empty(kind), crs)
    }

    pub fn kind(&self) -> GeometryKind {
        self.coordinates.kind()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// Serialize to the JSON record form.
    pub fn to_json(&self) -> WktResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse the JSON record form.
    pub fn from_json(s: &str) -> WktResult<Self> {
        Ok(serde_json::from_str(s)?)
    }
}
