//! Serialize domain geometries to WKT/EWKT and back in one call.

use std::str::FromStr;

use crate::error::WktResult;
use crate::io::wkt::{WktCodec, WktFormat};
use crate::normalize::{GeoTypesFactory, GeometryFactory, GeometryNormalizer, Georeferenced};

/// Chains a [GeometryNormalizer] with a [WktCodec].
///
/// ```
/// use geo_types::{point, Geometry};
/// use geowkt::normalize::{GeoTypesFactory, Referenced};
/// use geowkt::GeometrySerializer;
///
/// let serializer = GeometrySerializer::with_factory(GeoTypesFactory);
/// let geometry = Referenced::new(Geometry::Point(point!(x: 1., y: 2.)), 4326);
///
/// let text = serializer.serialize(&geometry, "ewkt").unwrap();
/// assert_eq!(text, "SRID=4326;POINT (1 2)");
/// assert_eq!(serializer.deserialize(&text, "Geometry", "ewkt").unwrap(), geometry);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GeometrySerializer<F = GeoTypesFactory> {
    normalizer: GeometryNormalizer<F>,
    codec: WktCodec,
}

impl GeometrySerializer {
    /// A serializer without a factory. Deserializing fails with
    /// [`WktError::MissingCollaborator`](crate::error::WktError::MissingCollaborator).
    pub fn new() -> Self {
        Self::default()
    }
}

impl<F> GeometrySerializer<F> {
    pub fn with_factory(factory: F) -> Self {
        Self {
            normalizer: GeometryNormalizer::with_factory(factory),
            codec: WktCodec::new(),
        }
    }

    /// Replace the codec, e.g. with one that validates dimensions.
    pub fn with_codec(self, codec: WktCodec) -> Self {
        Self { codec, ..self }
    }

    pub fn normalizer(&self) -> &GeometryNormalizer<F> {
        &self.normalizer
    }

    pub fn codec(&self) -> &WktCodec {
        &self.codec
    }

    pub fn serialize<G: Georeferenced + ?Sized>(
        &self,
        geometry: &G,
        format: &str,
    ) -> WktResult<String> {
        let format = WktFormat::from_str(format)?;
        let record = self.normalizer.normalize(geometry)?;
        self.codec.encode(&record, format)
    }
}

impl<F: GeometryFactory> GeometrySerializer<F> {
    /// Decode `text`, then build a geometry of `target` through the factory.
    ///
    /// `format` must still name a supported format. Decoding accepts an SRID prefix under
    /// either name.
    pub fn deserialize(&self, text: &str, target: &str, format: &str) -> WktResult<F::Geometry> {
        WktFormat::from_str(format)?;
        let record = self.codec.decode(text)?;
        self.normalizer.denormalize(&record, target)
    }
}
