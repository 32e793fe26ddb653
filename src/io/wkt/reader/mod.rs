//! Decode WKT and EWKT text into [GeometryRecord][crate::record::GeometryRecord]s.

mod lexer;
mod parser;

pub use lexer::{Lexer, Token, TokenKind};
pub use parser::WktParser;
