//! Token model and the base scanner
//!
//! Character-level scanning is delegated to `sqlparser`'s tokenizer; this
//! module converts its output into [`Token`]s carrying byte offsets so that
//! later stages can slice the original statement text.

use serde::Serialize;
use sqlparser::dialect::{Dialect as ScanDialect, GenericDialect, SnowflakeDialect};
use sqlparser::tokenizer::{Location, Token as RawToken, Tokenizer};

/// Lexical category of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Identifier,
    QuotedIdentifier,
    Number,
    String,
    DollarString,
    /// `$name`, `$1` or a bare `$` introducing `${name}`
    Parameter,
    Comma,
    Dot,
    Colon,
    DoubleColon,
    Semicolon,
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Star,
    /// `->`
    Arrow,
    /// `=>`
    FatArrow,
    Operator,
    /// Spaces, newlines and comments
    Whitespace,
    GroupBy,
    OrderBy,
    PartitionBy,
    WithinGroup,
    /// `CREATE OR REPLACE PROCEDURE`
    Procedure,
    /// `VAR <name> = <value>`
    Var,
    /// A type keyword that maps onto the generic text type
    Text,
}

impl TokenKind {
    /// Statement-leading kinds whose statement is carried through verbatim
    pub fn is_command(self) -> bool {
        matches!(self, TokenKind::Procedure | TokenKind::Var)
    }
}

/// Position of a token in the statement text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Span {
    /// Byte offset of the first character
    pub start: usize,
    pub line: usize,
    pub column: usize,
}

/// A scanned token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    /// Unquoted identifier, unescaped string value, or the literal source text
    pub text: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    /// Case-insensitive keyword comparison for unquoted words
    pub fn is_word(&self, keyword: &str) -> bool {
        self.kind == TokenKind::Identifier && self.text.eq_ignore_ascii_case(keyword)
    }

    pub fn is_whitespace(&self) -> bool {
        self.kind == TokenKind::Whitespace
    }
}

/// Lexical rules used by the base scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanRules {
    /// `--`, `//` and `/* */` comments, `"` identifiers, `$$` strings
    Snowflake,
    Generic,
}

/// Failure reported by the base scanner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanError {
    pub message: String,
    /// Byte offset of the failure
    pub offset: usize,
}

/// Scan `sql` into tokens, whitespace and comments included
pub fn scan(sql: &str, rules: ScanRules) -> Result<Vec<Token>, ScanError> {
    match rules {
        ScanRules::Snowflake => scan_with(&SnowflakeDialect {}, sql),
        ScanRules::Generic => scan_with(&GenericDialect {}, sql),
    }
}

fn scan_with(dialect: &dyn ScanDialect, sql: &str) -> Result<Vec<Token>, ScanError> {
    let index = LineIndex::new(sql);
    let raw = Tokenizer::new(dialect, sql)
        .tokenize_with_location()
        .map_err(|e| ScanError {
            message: e.message.clone(),
            offset: index.offset(e.location),
        })?;

    let mut tokens = Vec::with_capacity(raw.len());
    for with_span in raw {
        let location = with_span.span.start;
        let span = Span {
            start: index.offset(location),
            line: location.line as usize,
            column: location.column as usize,
        };
        if let Some((kind, text)) = convert(with_span.token) {
            tokens.push(Token::new(kind, text, span));
        }
    }
    Ok(tokens)
}

fn convert(token: RawToken) -> Option<(TokenKind, String)> {
    let converted = match token {
        RawToken::EOF => return None,
        RawToken::Word(word) => match word.quote_style {
            Some(_) => (TokenKind::QuotedIdentifier, word.value),
            None => (TokenKind::Identifier, word.value),
        },
        RawToken::Number(value, _) => (TokenKind::Number, value),
        RawToken::SingleQuotedString(value) | RawToken::NationalStringLiteral(value) => {
            (TokenKind::String, value)
        }
        RawToken::Placeholder(value) => (TokenKind::Parameter, value),
        RawToken::Whitespace(ws) => (TokenKind::Whitespace, ws.to_string()),
        RawToken::Comma => (TokenKind::Comma, ",".to_string()),
        RawToken::Period => (TokenKind::Dot, ".".to_string()),
        RawToken::Colon => (TokenKind::Colon, ":".to_string()),
        RawToken::DoubleColon => (TokenKind::DoubleColon, "::".to_string()),
        RawToken::SemiColon => (TokenKind::Semicolon, ";".to_string()),
        RawToken::LParen => (TokenKind::LParen, "(".to_string()),
        RawToken::RParen => (TokenKind::RParen, ")".to_string()),
        RawToken::LBracket => (TokenKind::LBracket, "[".to_string()),
        RawToken::RBracket => (TokenKind::RBracket, "]".to_string()),
        RawToken::LBrace => (TokenKind::LBrace, "{".to_string()),
        RawToken::RBrace => (TokenKind::RBrace, "}".to_string()),
        RawToken::Mul => (TokenKind::Star, "*".to_string()),
        RawToken::Arrow => (TokenKind::Arrow, "->".to_string()),
        RawToken::RArrow => (TokenKind::FatArrow, "=>".to_string()),
        dollar @ RawToken::DollarQuotedString(_) => (TokenKind::DollarString, dollar.to_string()),
        other => (TokenKind::Operator, other.to_string()),
    };
    Some(converted)
}

/// Maps 1-based line/column locations to byte offsets
struct LineIndex<'a> {
    sql: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    fn new(sql: &'a str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(sql.match_indices('\n').map(|(i, _)| i + 1));
        Self { sql, line_starts }
    }

    fn offset(&self, location: Location) -> usize {
        let line = (location.line as usize).max(1);
        let Some(&line_start) = self.line_starts.get(line - 1) else {
            return self.sql.len();
        };
        let column = (location.column as usize).max(1) - 1;
        self.sql[line_start..]
            .char_indices()
            .nth(column)
            .map(|(i, _)| line_start + i)
            .unwrap_or(self.sql.len())
    }
}

/// Slice `sql` between two byte offsets, clamped to character boundaries
pub(crate) fn slice(sql: &str, start: usize, end: usize) -> &str {
    let mut start = start.min(sql.len());
    let mut end = end.min(sql.len()).max(start);
    while !sql.is_char_boundary(start) {
        start -= 1;
    }
    while !sql.is_char_boundary(end) {
        end += 1;
    }
    &sql[start..end]
}

#[cfg(test)]
#[path = "tokens_test.rs"]
mod tests;
