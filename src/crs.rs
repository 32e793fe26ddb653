use serde::{Deserialize, Serialize};

use crate::dimension::Dimension;

/// Sentinel SRID meaning "no spatial reference". Never a real reference code.
pub const UNSPECIFIED_SRID: i32 = -1;

/// Coordinate reference flags carried alongside a geometry record.
///
/// Serializes as `{"srid": <int>, "3d": <bool>, "measured": <bool>}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Crs {
    /// Spatial reference identifier, [`UNSPECIFIED_SRID`] when absent.
    pub srid: i32,

    /// Whether positions carry a Z ordinate.
    #[serde(rename = "3d")]
    pub is_3d: bool,

    /// Whether positions carry an M ordinate.
    #[serde(rename = "measured")]
    pub is_measured: bool,
}

impl Crs {
    pub fn new(srid: i32, is_3d: bool, is_measured: bool) -> Self {
        Self {
            srid,
            is_3d,
            is_measured,
        }
    }

    /// Construct from an SRID and a [Dimension].
    pub fn from_dimension(srid: i32, dimension: Dimension) -> Self {
        Self::new(srid, dimension.has_z(), dimension.has_m())
    }

    /// The SRID, or `None` when unspecified.
    pub fn srid(&self) -> Option<i32> {
        (self.srid != UNSPECIFIED_SRID).then_some(self.srid)
    }

    /// Replace the SRID, keeping the dimension flags.
    pub fn with_srid(self, srid: i32) -> Self {
        Self { srid, ..self }
    }

    pub fn dimension(&self) -> Dimension {
        Dimension::from_flags(self.is_3d, self.is_measured)
    }
}

impl Default for Crs {
    fn default() -> Self {
        Self::new(UNSPECIFIED_SRID, false, false)
    }
}
