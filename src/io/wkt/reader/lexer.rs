use std::fmt::Display;

use once_cell::sync::Lazy;
use regex::Regex;

/// Token patterns in precedence order. The first alternative that matches at the current
/// offset wins, so keywords shadow the dimension markers and the fallback comes last.
static TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        // Keywords fold case over ASCII only.
        r"(?x)\A(?:
            (?P<whitespace>\s+)
          | (?P<geometry_type>(?i-u:geometrycollection|multilinestring|multipolygon|multipoint|linestring|polygon|point))
          | (?P<empty>(?i-u:empty))
          | (?P<dimension>(?i-u:zm|z|m)\b)
          | (?P<srid>(?i-u:srid))
          | (?P<equals>=)
          | (?P<open_paren>\()
          | (?P<close_paren>\))
          | (?P<semicolon>;)
          | (?P<comma>,)
          | (?P<numeric>[+-]?[0-9]+(?:\.[0-9]+)?(?i-u:e[+-]?[0-9]+)?)
          | (?P<unknown>\w+|\S)
        )",
    )
    .expect("token pattern is valid")
});

const GROUPS: [(&str, TokenKind); 11] = [
    ("geometry_type", TokenKind::GeometryType),
    ("empty", TokenKind::Empty),
    ("dimension", TokenKind::Dimension),
    ("srid", TokenKind::Srid),
    ("equals", TokenKind::Equals),
    ("open_paren", TokenKind::OpenParen),
    ("close_paren", TokenKind::CloseParen),
    ("semicolon", TokenKind::Semicolon),
    ("comma", TokenKind::Comma),
    ("numeric", TokenKind::Numeric),
    ("unknown", TokenKind::Unknown),
];

/// The kind of a WKT token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Numeric,
    Comma,
    OpenParen,
    CloseParen,
    GeometryType,
    Srid,
    Empty,
    Dimension,
    Equals,
    Semicolon,
    /// Text matching none of the other patterns.
    Unknown,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::Numeric => "NUMERIC",
            TokenKind::Comma => "COMMA",
            TokenKind::OpenParen => "OPEN_PAREN",
            TokenKind::CloseParen => "CLOSE_PAREN",
            TokenKind::GeometryType => "GEOMETRY_TYPE",
            TokenKind::Srid => "SRID",
            TokenKind::Empty => "EMPTY",
            TokenKind::Dimension => "DIMENSION",
            TokenKind::Equals => "EQUALS",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Unknown => "NONE",
        };
        f.write_str(name)
    }
}

/// A token borrowed from the lexer input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    /// The matched text, in its original case.
    pub literal: &'a str,
    /// Byte offset of the token in the input.
    pub position: usize,
}

/// Scans WKT text into tokens on demand, keeping the last consumed token and one token of
/// lookahead.
///
/// A lexer holds mutable scan state and is meant to be owned by a single decode call.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: &'a str,
    offset: usize,
    token: Option<Token<'a>>,
    lookahead: Option<Token<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            offset: 0,
            token: None,
            lookahead: None,
        }
    }

    pub fn input(&self) -> &'a str {
        self.input
    }

    /// Move to the next token: the current lookahead becomes the consumed token and a new
    /// lookahead is scanned.
    ///
    /// Returns `true` while a lookahead token remains.
    pub fn advance(&mut self) -> bool {
        self.token = self.lookahead.take();
        self.lookahead = self.scan();
        self.lookahead.is_some()
    }

    /// The most recently consumed token.
    pub fn token(&self) -> Option<&Token<'a>> {
        self.token.as_ref()
    }

    /// The next token, not yet consumed.
    pub fn lookahead(&self) -> Option<&Token<'a>> {
        self.lookahead.as_ref()
    }

    /// Whether the lookahead has the given kind.
    pub fn peek_is(&self, kind: TokenKind) -> bool {
        self.lookahead.is_some_and(|token| token.kind == kind)
    }

    /// Byte offset of the lookahead, or the input length once the input is exhausted.
    pub fn lookahead_position(&self) -> usize {
        self.lookahead
            .map(|token| token.position)
            .unwrap_or(self.input.len())
    }

    /// Rewind to the start of the input, dropping the consumed token and the lookahead.
    pub fn reset(&mut self) {
        self.offset = 0;
        self.token = None;
        self.lookahead = None;
    }

    fn scan(&mut self) -> Option<Token<'a>> {
        loop {
            let rest = &self.input[self.offset..];
            let captures = TOKEN_RE.captures(rest)?;
            let start = self.offset;
            let matched = captures.get(0)?;
            self.offset += matched.end();

            if captures.name("whitespace").is_some() {
                continue;
            }

            let kind = GROUPS
                .iter()
                .find(|(name, _)| captures.name(name).is_some())
                .map(|(_, kind)| *kind)
                .unwrap_or(TokenKind::Unknown);
            let token = Token {
                kind,
                literal: matched.as_str(),
                position: start,
            };
            log::trace!("wkt token {} {:?} at {}", token.kind, token.literal, start);
            return Some(token);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn tokens(input: &str) -> Vec<(TokenKind, &str)> {
        let mut lexer = Lexer::new(input);
        let mut out = vec![];
        while lexer.advance() {
            let token = lexer.lookahead().unwrap();
            out.push((token.kind, token.literal));
        }
        out
    }

    #[test]
    fn point() {
        use TokenKind::*;
        assert_eq!(
            tokens("POINT (1 2)"),
            vec![
                (GeometryType, "POINT"),
                (OpenParen, "("),
                (Numeric, "1"),
                (Numeric, "2"),
                (CloseParen, ")"),
            ]
        );
    }

    #[test]
    fn ewkt_prefix() {
        use TokenKind::*;
        assert_eq!(
            tokens("SRID=4326;linestring zm EMPTY"),
            vec![
                (Srid, "SRID"),
                (Equals, "="),
                (Numeric, "4326"),
                (Semicolon, ";"),
                (GeometryType, "linestring"),
                (Dimension, "zm"),
                (Empty, "EMPTY"),
            ]
        );
    }

    #[test]
    fn keywords_are_case_insensitive() {
        for input in ["multipolygon", "MultiPolygon", "MULTIPOLYGON"] {
            assert_eq!(tokens(input), vec![(TokenKind::GeometryType, input)]);
        }
        assert_eq!(tokens("Zm"), vec![(TokenKind::Dimension, "Zm")]);
    }

    #[test]
    fn case_folding_is_ascii_only() {
        use TokenKind::*;
        // U+017F folds to `s` under Unicode rules.
        assert_eq!(tokens("\u{17f}RID"), vec![(Unknown, "\u{17f}RID")]);
        assert_eq!(
            tokens("POINT \u{17f}"),
            vec![(GeometryType, "POINT"), (Unknown, "\u{17f}")]
        );
    }

    #[test]
    fn keyword_precedence() {
        use TokenKind::*;
        // The geometry keywords win over the `m` dimension marker.
        assert_eq!(tokens("MULTIPOINT M"), vec![(GeometryType, "MULTIPOINT"), (Dimension, "M")]);
        assert_eq!(tokens("POINTZ"), vec![(GeometryType, "POINT"), (Dimension, "Z")]);
        assert_eq!(tokens("zoo"), vec![(Unknown, "zoo")]);
    }

    #[test]
    fn numbers() {
        use TokenKind::*;
        assert_eq!(
            tokens("-1 +2.5 3e10 4.5E-3"),
            vec![(Numeric, "-1"), (Numeric, "+2.5"), (Numeric, "3e10"), (Numeric, "4.5E-3")]
        );
        // A dangling exponent is not part of the number.
        assert_eq!(tokens("1.5e"), vec![(Numeric, "1.5"), (Unknown, "e")]);
        assert_eq!(tokens(".5"), vec![(Unknown, "."), (Numeric, "5")]);
    }

    #[test]
    fn unknown() {
        use TokenKind::*;
        assert_eq!(
            tokens("POINT # (1 2)"),
            vec![
                (GeometryType, "POINT"),
                (Unknown, "#"),
                (OpenParen, "("),
                (Numeric, "1"),
                (Numeric, "2"),
                (CloseParen, ")"),
            ]
        );
    }

    #[test]
    fn positions() {
        let mut lexer = Lexer::new("  POINT\t(1 2)");
        lexer.advance();
        assert_eq!(lexer.lookahead().unwrap().position, 2);
        lexer.advance();
        assert_eq!(lexer.token().unwrap().literal, "POINT");
        assert_eq!(lexer.lookahead().unwrap().position, 8);
    }

    #[test]
    fn peek_and_exhaustion() {
        let mut lexer = Lexer::new("POINT");
        assert!(!lexer.peek_is(TokenKind::GeometryType));
        assert!(lexer.advance());
        assert!(lexer.peek_is(TokenKind::GeometryType));
        assert!(lexer.token().is_none());

        assert!(!lexer.advance());
        assert_eq!(lexer.token().unwrap().literal, "POINT");
        assert!(lexer.lookahead().is_none());
        assert_eq!(lexer.lookahead_position(), 5);
    }

    #[test]
    fn reset() {
        let mut lexer = Lexer::new("POINT EMPTY");
        lexer.advance();
        lexer.advance();
        assert!(lexer.peek_is(TokenKind::Empty));

        lexer.reset();
        assert!(lexer.token().is_none());
        assert!(lexer.lookahead().is_none());

        lexer.advance();
        assert!(lexer.peek_is(TokenKind::GeometryType));
        assert_eq!(lexer.lookahead_position(), 0);
    }

    #[test]
    fn whitespace_only() {
        let mut lexer = Lexer::new(" \n\t ");
        assert!(!lexer.advance());
        assert_eq!(lexer.lookahead_position(), 4);
    }
}
