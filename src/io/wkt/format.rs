use std::fmt::Display;
use std::str::FromStr;

use crate::error::{WktError, WktResult};

/// The textual formats handled by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WktFormat {
    /// Plain WKT. An SRID prefix is accepted on input but never written.
    #[default]
    Wkt,

    /// PostGIS Extended WKT. `SRID=<srid>;` is written whenever the SRID is specified.
    Ewkt,
}

impl WktFormat {
    pub const ALL: [WktFormat; 2] = [WktFormat::Wkt, WktFormat::Ewkt];

    /// The format name, `"wkt"` or `"ewkt"`.
    pub fn name(&self) -> &'static str {
        match self {
            WktFormat::Wkt => "wkt",
            WktFormat::Ewkt => "ewkt",
        }
    }
}

impl Display for WktFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Format names are matched exactly.
impl FromStr for WktFormat {
    type Err = WktError;

    fn from_str(s: &str) -> WktResult<Self> {
        WktFormat::ALL
            .into_iter()
            .find(|format| format.name() == s)
            .ok_or_else(|| WktError::UnsupportedFormat(s.to_string()))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse() {
        assert_eq!("wkt".parse::<WktFormat>().unwrap(), WktFormat::Wkt);
        assert_eq!("ewkt".parse::<WktFormat>().unwrap(), WktFormat::Ewkt);
        assert!(matches!(
            "WKT".parse::<WktFormat>(),
            Err(WktError::UnsupportedFormat(_))
        ));
        assert!("wkb".parse::<WktFormat>().is_err());
    }

    #[test]
    fn display() {
        for format in WktFormat::ALL {
            assert_eq!(format.to_string().parse::<WktFormat>().unwrap(), format);
        }
    }
}
