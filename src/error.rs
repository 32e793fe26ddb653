//! Defines [`WktError`], representing all errors returned by this crate.

use thiserror::Error;

use crate::dimension::Dimension;
use crate::io::wkt::TokenKind;
use crate::record::GeometryKind;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum WktError {
    /// The next token did not have the kind the grammar requires.
    #[error(
        "Syntax error at position {position}: expected {expected}, found {}",
        .found.as_deref().unwrap_or("end of input")
    )]
    Syntax {
        /// Token kind required by the grammar.
        expected: TokenKind,
        /// Literal text of the lookahead token, `None` at end of input.
        found: Option<String>,
        /// Byte offset of the lookahead token.
        position: usize,
    },

    /// Tokens remain after a complete geometry.
    #[error("Unexpected trailing input {literal:?} at position {position}")]
    TrailingInput {
        /// Literal text of the first unconsumed token.
        literal: String,
        /// Byte offset of the first unconsumed token.
        position: usize,
    },

    /// A numeric token could not be converted.
    #[error("Invalid number {literal:?} at position {position}")]
    InvalidNumber {
        /// Literal text of the numeric token.
        literal: String,
        /// Byte offset of the numeric token.
        position: usize,
    },

    /// The geometry kind has no WKT body codec or domain mapping.
    #[error("Unsupported geometry type: {0}")]
    UnsupportedGeometryType(GeometryKind),

    /// A decoded position does not match the declared dimension.
    ///
    /// Only raised when dimension validation is enabled.
    #[error("Coordinate with {found} ordinates in a geometry declared as {dimension}")]
    DimensionMismatch {
        /// Dimension declared by the geometry header.
        dimension: Dimension,
        /// Number of ordinates found in the position.
        found: usize,
    },

    /// A required collaborator was not supplied.
    #[error("Missing collaborator: {0}")]
    MissingCollaborator(String),

    /// The textual format name is not handled by this crate.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The requested denormalization target is not applicable.
    #[error("Cannot denormalize into {0}")]
    UnsupportedTarget(String),

    /// Incorrect geometry type for operation
    #[error("Incorrect geometry type for operation: {0}")]
    IncorrectGeometryType(String),

    /// A record that cannot be encoded or turned into a domain geometry, or a domain geometry
    /// with a coordinate layout no record can hold.
    #[error("Invalid geometry record: {0}")]
    InvalidRecord(String),

    /// [serde_json::Error]
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Crate-specific result type.
pub type WktResult<T> = std::result::Result<T, WktError>;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn syntax_error_message() {
        let err = WktError::Syntax {
            expected: TokenKind::CloseParen,
            found: Some(",".to_string()),
            position: 8,
        };
        assert_eq!(
            err.to_string(),
            "Syntax error at position 8: expected CLOSE_PAREN, found ,"
        );

        let err = WktError::Syntax {
            expected: TokenKind::GeometryType,
            found: None,
            position: 0,
        };
        assert_eq!(
            err.to_string(),
            "Syntax error at position 0: expected GEOMETRY_TYPE, found end of input"
        );
    }

    #[test]
    fn unsupported_message() {
        let err = WktError::UnsupportedGeometryType(GeometryKind::MultiPolygon);
        assert_eq!(err.to_string(), "Unsupported geometry type: MultiPolygon");
    }
}
