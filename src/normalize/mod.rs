//! Convert between domain geometries and [GeometryRecord]s.
//!
//! Normalizing reads any geometry implementing [`geo_traits::GeometryTrait`], together with the
//! SRID supplied through [Georeferenced]. Denormalizing goes through a [GeometryFactory], which
//! the caller supplies explicitly.
//!
//! ```
//! use geo_types::point;
//! use geowkt::normalize::{GeometryNormalizer, Referenced};
//! use geowkt::record::Coordinates;
//!
//! let normalizer = GeometryNormalizer::new();
//! let record = normalizer
//!     .normalize(&Referenced::new(point!(x: 1., y: 2.), 4326))
//!     .unwrap();
//! assert_eq!(record.coordinates, Coordinates::Point(vec![1., 2.]));
//! assert_eq!(record.crs.srid(), Some(4326));
//! ```

mod coords;
mod geo;

pub use geo::GeoTypesFactory;

use std::fmt::Display;
use std::str::FromStr;

use geo_traits::GeometryTrait;

use crate::crs::{Crs, UNSPECIFIED_SRID};
use crate::dimension::Dimension;
use crate::error::{WktError, WktResult};
use crate::record::{GeometryKind, GeometryRecord};

/// A domain geometry that carries its own spatial reference.
pub trait Georeferenced {
    type Geometry: GeometryTrait<T = f64>;

    fn geometry(&self) -> &Self::Geometry;

    /// The SRID, [`UNSPECIFIED_SRID`] when the geometry is not referenced.
    fn srid(&self) -> i32 {
        UNSPECIFIED_SRID
    }

    /// CRS flags: the SRID plus the geometry's own dimension.
    fn crs(&self) -> WktResult<Crs> {
        let dimension = Dimension::try_from(self.geometry().dim())?;
        Ok(Crs::from_dimension(self.srid(), dimension))
    }
}

/// Any geometry paired with an SRID.
#[derive(Debug, Clone, PartialEq)]
pub struct Referenced<G> {
    pub geometry: G,
    pub srid: i32,
}

impl<G> Referenced<G> {
    pub fn new(geometry: G, srid: i32) -> Self {
        Self { geometry, srid }
    }

    /// Wrap a geometry without a spatial reference.
    pub fn unreferenced(geometry: G) -> Self {
        Self::new(geometry, UNSPECIFIED_SRID)
    }

    pub fn into_inner(self) -> G {
        self.geometry
    }
}

impl<G: GeometryTrait<T = f64>> Georeferenced for Referenced<G> {
    type Geometry = G;

    fn geometry(&self) -> &G {
        &self.geometry
    }

    fn srid(&self) -> i32 {
        self.srid
    }
}

macro_rules! impl_unreferenced {
    ($($geometry_type:ident),+) => {
        $(
            impl Georeferenced for geo_types::$geometry_type<f64> {
                type Geometry = Self;

                fn geometry(&self) -> &Self {
                    self
                }
            }
        )+
    };
}

impl_unreferenced!(
    Geometry,
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
    Rect,
    Triangle,
    Line
);

/// Builds domain geometries from records.
pub trait GeometryFactory {
    /// The domain geometry produced.
    type Geometry;

    fn create(&self, record: &GeometryRecord) -> WktResult<Self::Geometry>;
}

impl<F: GeometryFactory + ?Sized> GeometryFactory for &F {
    type Geometry = F::Geometry;

    fn create(&self, record: &GeometryRecord) -> WktResult<Self::Geometry> {
        (**self).create(record)
    }
}

/// What a record may be denormalized into: any geometry, or one specific kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetType {
    Geometry,
    Kind(GeometryKind),
}

impl TargetType {
    /// Whether a record of `kind` can be denormalized into this target.
    pub fn accepts(&self, kind: GeometryKind) -> bool {
        match self {
            TargetType::Geometry => true,
            TargetType::Kind(target) => *target == kind,
        }
    }
}

impl Display for TargetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TargetType::Geometry => f.write_str("Geometry"),
            TargetType::Kind(kind) => kind.fmt(f),
        }
    }
}

/// Parses `"Geometry"` or a geometry kind name, case-insensitively.
impl FromStr for TargetType {
    type Err = WktError;

    fn from_str(s: &str) -> WktResult<Self> {
        if s.eq_ignore_ascii_case("geometry") {
            return Ok(TargetType::Geometry);
        }
        s.parse()
            .map(TargetType::Kind)
            .map_err(|_| WktError::UnsupportedTarget(s.to_string()))
    }
}

/// Normalizes domain geometries into records and denormalizes records through a factory.
#[derive(Debug, Clone)]
pub struct GeometryNormalizer<F = GeoTypesFactory> {
    factory: Option<F>,
}

impl GeometryNormalizer {
    /// A normalizer without a factory. It can normalize, but every denormalization fails with
    /// [`WktError::MissingCollaborator`].
    pub fn new() -> Self {
        Self { factory: None }
    }
}

impl<F> Default for GeometryNormalizer<F> {
    fn default() -> Self {
        Self { factory: None }
    }
}

impl<F> GeometryNormalizer<F> {
    pub fn with_factory(factory: F) -> Self {
        Self {
            factory: Some(factory),
        }
    }

    pub fn factory(&self) -> Option<&F> {
        self.factory.as_ref()
    }

    /// Build a record from the geometry's kind, dimension and SRID.
    pub fn normalize<G: Georeferenced + ?Sized>(&self, geometry: &G) -> WktResult<GeometryRecord> {
        let crs = geometry.crs()?;
        let coordinates = coords::geometry_to_coordinates(geometry.geometry());
        log::debug!("normalized {} with srid {}", coordinates.kind(), crs.srid);
        Ok(GeometryRecord::new(coordinates, crs))
    }

    /// Whether `target` names a type records can be denormalized into.
    ///
    /// Agrees with [`denormalize`](Self::denormalize): every name accepted here is accepted
    /// there, given a factory and a record of a matching kind.
    pub fn supports_denormalization(&self, target: &str) -> bool {
        TargetType::from_str(target).is_ok()
    }
}

impl<F: GeometryFactory> GeometryNormalizer<F> {
    /// Build a domain geometry from `record` through the configured factory.
    pub fn denormalize(&self, record: &GeometryRecord, target: &str) -> WktResult<F::Geometry> {
        let factory = self.factory.as_ref().ok_or_else(|| {
            WktError::MissingCollaborator("a geometry factory is required to denormalize".into())
        })?;

        let target_type = TargetType::from_str(target)?;
        if !target_type.accepts(record.kind()) {
            return Err(WktError::IncorrectGeometryType(format!(
                "cannot denormalize a {} record into {target_type}",
                record.kind()
            )));
        }

        factory.create(record)
    }
}

#[cfg(test)]
mod test {
    use geo_types::{line_string, point, polygon, Geometry};

    use super::*;
    use crate::record::Coordinates;
    use crate::test::{domain, linestring, point as point_fixture};

    #[test]
    fn normalize_geo_types() {
        let normalizer = GeometryNormalizer::new();
        let record = normalizer
            .normalize(&Referenced::new(point!(x: 1., y: 2.), 4326))
            .unwrap();
        assert_eq!(record, point_fixture::xy_4326());

        let ls: Geometry = line_string![(x: 0., y: 0.), (x: 1., y: 1.)].into();
        let record = normalizer.normalize(&ls).unwrap();
        assert_eq!(record, linestring::diagonal());
    }

    #[test]
    fn normalize_reads_own_dimension() {
        let normalizer = GeometryNormalizer::new();

        let record = normalizer
            .normalize(&Referenced::new(domain::point_xyzm(1., 2., 3., 4.), 4326))
            .unwrap();
        assert_eq!(record.crs, Crs::new(4326, true, true));
        assert_eq!(record.coordinates, Coordinates::Point(vec![1., 2., 3., 4.]));

        let line = domain::line_string_xyz(&[[0., 0., 1.], [1., 1., 2.]]);
        let record = normalizer.normalize(&Referenced::unreferenced(line)).unwrap();
        assert_eq!(record.crs, Crs::new(-1, true, false));
        assert_eq!(
            record.coordinates,
            Coordinates::LineString(vec![vec![0., 0., 1.], vec![1., 1., 2.]])
        );
    }

    #[test]
    fn normalize_beyond_wkt() {
        let normalizer = GeometryNormalizer::new();
        let square = polygon![
            (x: 0., y: 0.),
            (x: 1., y: 0.),
            (x: 1., y: 1.),
            (x: 0., y: 0.),
        ];
        let mp = Referenced::new(geo_types::MultiPolygon::new(vec![square]), 4326);
        let record = normalizer.normalize(&mp).unwrap();
        assert_eq!(record.kind(), GeometryKind::MultiPolygon);
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            serde_json::json!({
                "type": "MultiPolygon",
                "coordinates": [[[[0., 0.], [1., 0.], [1., 1.], [0., 0.]]]],
                "crs": {"srid": 4326, "3d": false, "measured": false},
            })
        );
    }

    #[test]
    fn target_types() {
        assert_eq!(
            "Geometry".parse::<TargetType>().unwrap(),
            TargetType::Geometry
        );
        assert_eq!(
            "Polygon".parse::<TargetType>().unwrap(),
            TargetType::Kind(GeometryKind::Polygon)
        );
        assert!(matches!(
            "Feature".parse::<TargetType>(),
            Err(WktError::UnsupportedTarget(_))
        ));

        assert!(TargetType::Geometry.accepts(GeometryKind::MultiPoint));
        assert!(!TargetType::Kind(GeometryKind::Point).accepts(GeometryKind::MultiPoint));
    }

    #[test]
    fn missing_factory() {
        let normalizer = GeometryNormalizer::new();
        assert!(matches!(
            normalizer.denormalize(&point_fixture::xy(), "Geometry"),
            Err(WktError::MissingCollaborator(_))
        ));
        // Checked before the target.
        assert!(matches!(
            normalizer.denormalize(&point_fixture::xy(), "Feature"),
            Err(WktError::MissingCollaborator(_))
        ));
    }

    #[test]
    fn supports_agrees_with_denormalize() {
        let normalizer = GeometryNormalizer::with_factory(GeoTypesFactory);
        let record = point_fixture::xy();
        for target in ["Geometry", "geometry", "Point", "POINT", "Feature", "Curve", ""] {
            let supported = normalizer.supports_denormalization(target);
            let result = normalizer.denormalize(&record, target);
            assert_eq!(supported, result.is_ok(), "{target}");
            if !supported {
                assert!(matches!(result, Err(WktError::UnsupportedTarget(_))));
            }
        }
    }

    #[test]
    fn target_kind_mismatch() {
        let normalizer = GeometryNormalizer::with_factory(GeoTypesFactory);
        assert!(normalizer.supports_denormalization("LineString"));
        assert!(matches!(
            normalizer.denormalize(&point_fixture::xy(), "LineString"),
            Err(WktError::IncorrectGeometryType(_))
        ));
    }

    #[test]
    fn factory_by_reference() {
        let factory = GeoTypesFactory;
        let normalizer = GeometryNormalizer::with_factory(&factory);
        let geometry = normalizer
            .denormalize(&point_fixture::xy_4326(), "Point")
            .unwrap();
        assert_eq!(
            geometry,
            Referenced::new(Geometry::Point(point!(x: 1., y: 2.)), 4326)
        );
    }
}
