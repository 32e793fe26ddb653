use crate::crs::{Crs, UNSPECIFIED_SRID};
use crate::dimension::Dimension;
use crate::error::{WktError, WktResult};
use crate::io::wkt::reader::lexer::{Lexer, Token, TokenKind};
use crate::io::wkt::{ensure_supported, DecodeOptions};
use crate::record::{Coordinates, GeometryKind, GeometryRecord, Position, PositionSeq};

/// Recursive-descent WKT/EWKT parser over a [Lexer].
///
/// The grammar accepted is
///
/// ```text
/// geometry     := [ "SRID" "=" NUMERIC ";" ] TYPE [ "Z" | "M" | "ZM" ] ( "EMPTY" | body(TYPE) )
/// coord_seq    := coordinate ( "," coordinate )*
/// coordinate   := NUMERIC NUMERIC [ NUMERIC [ NUMERIC ] ]
/// ring         := "(" coord_seq ")"
/// ```
///
/// with a body for Point, LineString, Polygon, MultiPoint and MultiLineString.
#[derive(Debug, Clone)]
pub struct WktParser<'a> {
    lexer: Lexer<'a>,
    options: DecodeOptions,
}

impl<'a> WktParser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_options(input, Default::default())
    }

    pub fn with_options(input: &'a str, options: DecodeOptions) -> Self {
        Self {
            lexer: Lexer::new(input),
            options,
        }
    }

    /// Decode one geometry from the whole input.
    ///
    /// The lexer is rewound afterwards whether decoding succeeded or not, so the same parser
    /// can decode its input again.
    pub fn decode_geometry(&mut self) -> WktResult<GeometryRecord> {
        self.lexer.advance();
        let result = self.parse_geometry();
        self.lexer.reset();
        result
    }

    /// Consume the lookahead if it has the `expected` kind.
    ///
    /// On a mismatch nothing is consumed and a [WktError::Syntax] describing the lookahead is
    /// returned.
    pub fn match_token(&mut self, expected: TokenKind) -> WktResult<Token<'a>> {
        match self.lexer.lookahead().copied() {
            Some(token) if token.kind == expected => {
                self.lexer.advance();
                Ok(token)
            }
            found => Err(WktError::Syntax {
                expected,
                found: found.map(|token| token.literal.to_string()),
                position: self.lexer.lookahead_position(),
            }),
        }
    }

    fn parse_geometry(&mut self) -> WktResult<GeometryRecord> {
        let srid = self.parse_srid()?;
        let kind = self.parse_geometry_kind()?;
        ensure_supported(kind)?;
        let dimension = self.parse_dimension()?;

        let coordinates = if self.lexer.peek_is(TokenKind::Empty) {
            self.match_token(TokenKind::Empty)?;
            Coordinates::empty(kind)
        } else {
            self.parse_body(kind)?
        };

        if let Some(token) = self.lexer.lookahead() {
            return Err(WktError::TrailingInput {
                literal: token.literal.to_string(),
                position: token.position,
            });
        }

        if self.options.validate_dimensions {
            validate_dimensions(&coordinates, dimension)?;
        }

        Ok(GeometryRecord::new(
            coordinates,
            Crs::from_dimension(srid, dimension),
        ))
    }

    fn parse_srid(&mut self) -> WktResult<i32> {
        if !self.lexer.peek_is(TokenKind::Srid) {
            return Ok(UNSPECIFIED_SRID);
        }
        self.match_token(TokenKind::Srid)?;
        self.match_token(TokenKind::Equals)?;
        let token = self.match_token(TokenKind::Numeric)?;
        let srid = parse_number::<i32>(&token)?;
        self.match_token(TokenKind::Semicolon)?;
        Ok(srid)
    }

    fn parse_geometry_kind(&mut self) -> WktResult<GeometryKind> {
        let token = self.match_token(TokenKind::GeometryType)?;
        token.literal.parse()
    }

    fn parse_dimension(&mut self) -> WktResult<Dimension> {
        if !self.lexer.peek_is(TokenKind::Dimension) {
            return Ok(Dimension::XY);
        }
        let token = self.match_token(TokenKind::Dimension)?;
        let marker = token.literal.to_ascii_lowercase();
        Ok(Dimension::from_flags(
            marker.contains('z'),
            marker.contains('m'),
        ))
    }

    fn parse_body(&mut self, kind: GeometryKind) -> WktResult<Coordinates> {
        let coordinates = match kind {
            GeometryKind::Point => Coordinates::Point(self.parse_point()?),
            GeometryKind::LineString => Coordinates::LineString(self.parse_line_string()?),
            GeometryKind::Polygon => Coordinates::Polygon(self.parse_polygon()?),
            GeometryKind::MultiPoint => Coordinates::MultiPoint(self.parse_multi_point()?),
            GeometryKind::MultiLineString => {
                Coordinates::MultiLineString(self.parse_multi_line_string()?)
            }
            GeometryKind::MultiPolygon | GeometryKind::GeometryCollection => {
                return Err(WktError::UnsupportedGeometryType(kind))
            }
        };
        Ok(coordinates)
    }

    fn parse_point(&mut self) -> WktResult<Position> {
        self.match_token(TokenKind::OpenParen)?;
        let coordinate = self.parse_coordinate()?;
        self.match_token(TokenKind::CloseParen)?;
        Ok(coordinate)
    }

    fn parse_line_string(&mut self) -> WktResult<PositionSeq> {
        self.parse_ring()
    }

    fn parse_polygon(&mut self) -> WktResult<Vec<PositionSeq>> {
        self.parse_ring_seq()
    }

    fn parse_multi_point(&mut self) -> WktResult<PositionSeq> {
        self.match_token(TokenKind::OpenParen)?;
        let mut points = vec![self.parse_multi_point_member()?];
        while self.lexer.peek_is(TokenKind::Comma) {
            self.match_token(TokenKind::Comma)?;
            points.push(self.parse_multi_point_member()?);
        }
        self.match_token(TokenKind::CloseParen)?;
        Ok(points)
    }

    /// A MultiPoint member, either bare (`1 2`) or parenthesized (`(1 2)`).
    fn parse_multi_point_member(&mut self) -> WktResult<Position> {
        if self.lexer.peek_is(TokenKind::OpenParen) {
            self.parse_point()
        } else {
            self.parse_coordinate()
        }
    }

    fn parse_multi_line_string(&mut self) -> WktResult<Vec<PositionSeq>> {
        self.parse_ring_seq()
    }

    fn parse_ring_seq(&mut self) -> WktResult<Vec<PositionSeq>> {
        self.match_token(TokenKind::OpenParen)?;
        let mut rings = vec![self.parse_ring()?];
        while self.lexer.peek_is(TokenKind::Comma) {
            self.match_token(TokenKind::Comma)?;
            rings.push(self.parse_ring()?);
        }
        self.match_token(TokenKind::CloseParen)?;
        Ok(rings)
    }

    fn parse_ring(&mut self) -> WktResult<PositionSeq> {
        self.match_token(TokenKind::OpenParen)?;
        let coordinates = self.parse_coordinate_seq()?;
        self.match_token(TokenKind::CloseParen)?;
        Ok(coordinates)
    }

    fn parse_coordinate_seq(&mut self) -> WktResult<PositionSeq> {
        let mut coordinates = vec![self.parse_coordinate()?];
        while self.lexer.peek_is(TokenKind::Comma) {
            self.match_token(TokenKind::Comma)?;
            coordinates.push(self.parse_coordinate()?);
        }
        Ok(coordinates)
    }

    /// Two to four NUMERIC tokens, regardless of the declared dimension.
    ///
    /// A fifth ordinate is left for the caller, which then fails on the missing `)` or `,`.
    fn parse_coordinate(&mut self) -> WktResult<Position> {
        let mut ordinates = Vec::with_capacity(4);
        while ordinates.len() < 2 || (ordinates.len() < 4 && self.lexer.peek_is(TokenKind::Numeric))
        {
            let token = self.match_token(TokenKind::Numeric)?;
            ordinates.push(parse_ordinate(&token)?);
        }
        Ok(ordinates)
    }
}

/// Ordinates overflowing to infinity are rejected like malformed literals.
fn parse_ordinate(token: &Token) -> WktResult<f64> {
    let ordinate = parse_number::<f64>(token)?;
    if ordinate.is_finite() {
        Ok(ordinate)
    } else {
        Err(WktError::InvalidNumber {
            literal: token.literal.to_string(),
            position: token.position,
        })
    }
}

fn parse_number<N: lexical_core::FromLexical>(token: &Token) -> WktResult<N> {
    lexical_core::parse(token.literal.as_bytes()).map_err(|_| WktError::InvalidNumber {
        literal: token.literal.to_string(),
        position: token.position,
    })
}

fn validate_dimensions(coordinates: &Coordinates, dimension: Dimension) -> WktResult<()> {
    let check = |position: &Position| {
        if position.len() == dimension.size() {
            Ok(())
        } else {
            Err(WktError::DimensionMismatch {
                dimension,
                found: position.len(),
            })
        }
    };

    match coordinates {
        Coordinates::Point(position) if position.is_empty() => Ok(()),
        Coordinates::Point(position) => check(position),
        Coordinates::LineString(positions) | Coordinates::MultiPoint(positions) => {
            positions.iter().try_for_each(check)
        }
        Coordinates::Polygon(rings) | Coordinates::MultiLineString(rings) => {
            rings.iter().flatten().try_for_each(check)
        }
        Coordinates::MultiPolygon(polygons) => {
            polygons.iter().flatten().flatten().try_for_each(check)
        }
        Coordinates::GeometryCollection(members) => members
            .iter()
            .try_for_each(|member| validate_dimensions(member, dimension)),
    }
}
