use std::fmt::Display;

use crate::error::{WktError, WktResult};

/// The dimension of a geometry record.
///
/// Ordinates within a position are always ordered X, Y, then Z if present, then M if present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dimension {
    /// Two-dimensional.
    #[default]
    XY,

    /// Three-dimensional.
    XYZ,

    /// XYM (2D with measure).
    XYM,

    /// XYZM (3D with measure).
    XYZM,
}

impl Dimension {
    /// Build from the `3d` and `measured` CRS flags.
    pub fn from_flags(is_3d: bool, is_measured: bool) -> Self {
        match (is_3d, is_measured) {
            (false, false) => Dimension::XY,
            (true, false) => Dimension::XYZ,
            (false, true) => Dimension::XYM,
            (true, true) => Dimension::XYZM,
        }
    }

    /// Whether positions carry a Z ordinate.
    pub fn has_z(&self) -> bool {
        matches!(self, Dimension::XYZ | Dimension::XYZM)
    }

    /// Whether positions carry an M ordinate.
    pub fn has_m(&self) -> bool {
        matches!(self, Dimension::XYM | Dimension::XYZM)
    }

    /// Returns the number of dimensions.
    pub fn size(&self) -> usize {
        match self {
            Dimension::XY => 2,
            Dimension::XYZ => 3,
            Dimension::XYM => 3,
            Dimension::XYZM => 4,
        }
    }

    /// The dimension marker written after the type keyword in WKT.
    pub fn wkt_suffix(&self) -> &'static str {
        match self {
            Dimension::XY => "",
            Dimension::XYZ => "Z",
            Dimension::XYM => "M",
            Dimension::XYZM => "ZM",
        }
    }
}

impl From<Dimension> for geo_traits::Dimensions {
    fn from(value: Dimension) -> Self {
        match value {
            Dimension::XY => geo_traits::Dimensions::Xy,
            Dimension::XYZ => geo_traits::Dimensions::Xyz,
            Dimension::XYM => geo_traits::Dimensions::Xym,
            Dimension::XYZM => geo_traits::Dimensions::Xyzm,
        }
    }
}

impl TryFrom<geo_traits::Dimensions> for Dimension {
    type Error = WktError;

    fn try_from(value: geo_traits::Dimensions) -> WktResult<Self> {
        match value {
            geo_traits::Dimensions::Xy | geo_traits::Dimensions::Unknown(2) => Ok(Dimension::XY),
            geo_traits::Dimensions::Xyz | geo_traits::Dimensions::Unknown(3) => Ok(Dimension::XYZ),
            geo_traits::Dimensions::Xym => Ok(Dimension::XYM),
            geo_traits::Dimensions::Xyzm | geo_traits::Dimensions::Unknown(4) => {
                Ok(Dimension::XYZM)
            }
            _ => Err(WktError::InvalidRecord(format!(
                "unsupported coordinate dimension {value:?}"
            ))),
        }
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Dimension::XY => "XY",
            Dimension::XYZ => "XYZ",
            Dimension::XYM => "XYM",
            Dimension::XYZM => "XYZM",
        };
        f.write_str(name)
    }
}
