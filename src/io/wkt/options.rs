/// Options for decoding WKT.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Require every position to carry exactly the ordinates announced by the dimension marker
    /// (two, plus one for `Z`, plus one for `M`).
    ///
    /// Off by default: a coordinate consumes every consecutive number, so `POINT Z (1 2)`
    /// decodes with two ordinates.
    pub validate_dimensions: bool,
}

impl DecodeOptions {
    pub fn new(validate_dimensions: bool) -> Self {
        Self {
            validate_dimensions,
        }
    }
}
