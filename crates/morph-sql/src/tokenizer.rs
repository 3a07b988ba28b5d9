//! Dialect-aware tokenizer
//!
//! Wraps the base scanner with keyword fusion. Multi-word keywords from the
//! dialect's static table, together with phrases discovered in the statement
//! text by the dialect's patterns, are collapsed into single tokens.

use std::collections::HashMap;

use crate::dialect::Dialect;
use crate::error::{SqlError, SqlResult};
use crate::tokens::{scan, slice, ScanError, Token, TokenKind};
use crate::trie::{new_trie, Trie, TrieResult};

/// Characters of context shown on each side of a lexical error
const ERROR_CONTEXT: usize = 50;

pub struct Tokenizer<'d> {
    dialect: &'d Dialect,
}

impl<'d> Tokenizer<'d> {
    pub fn new(dialect: &'d Dialect) -> Self {
        Self { dialect }
    }

    /// Tokenize `sql`, whitespace and comments included
    pub fn tokenize(&self, sql: &str) -> SqlResult<Vec<Token>> {
        let discovered = self.discover(sql);
        let keywords = if discovered.is_empty() {
            self.dialect.keyword_trie().clone()
        } else {
            log::debug!(
                "{}: discovered keywords {:?}",
                self.dialect.name(),
                discovered.keys().collect::<Vec<_>>()
            );
            self.dialect.keyword_trie().merge(&new_trie(discovered))
        };

        let raw = scan(sql, self.dialect.scan_rules()).map_err(|e| lexical(sql, e))?;
        Ok(fuse(sql, raw, &keywords))
    }

    /// Keywords matched by the dialect's discovery patterns that are not
    /// already static keywords
    fn discover(&self, sql: &str) -> HashMap<String, TokenKind> {
        let mut found = HashMap::new();
        for (pattern, kind) in self.dialect.discovery_patterns() {
            for m in pattern.find_iter(sql) {
                let key = normalize_keyword(m.as_str());
                if self.dialect.keyword_lookup(&key).is_none() {
                    found.entry(key).or_insert(*kind);
                }
            }
        }
        found
    }
}

/// Collapse whitespace runs to single spaces and upper-case
pub fn normalize_keyword(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}

fn lexical(sql: &str, error: ScanError) -> SqlError {
    let context = slice(
        sql,
        error.offset.saturating_sub(ERROR_CONTEXT),
        error.offset + ERROR_CONTEXT,
    );
    SqlError::Lexical {
        message: error.message,
        offset: error.offset,
        context: context.to_string(),
    }
}

fn fusable(kind: TokenKind) -> bool {
    !matches!(
        kind,
        TokenKind::String
            | TokenKind::QuotedIdentifier
            | TokenKind::DollarString
            | TokenKind::Parameter
    )
}

/// Replace every longest keyword match by a single token of the keyword's kind
fn fuse(sql: &str, tokens: Vec<Token>, keywords: &Trie<TokenKind>) -> Vec<Token> {
    if keywords.is_empty() {
        return tokens;
    }

    let mut out = Vec::with_capacity(tokens.len());
    let mut i = 0;
    while i < tokens.len() {
        match longest_match(&tokens, i, keywords) {
            Some((last, kind)) => {
                let start = tokens[i].span.start;
                let end = tokens
                    .get(last + 1)
                    .map(|t| t.span.start)
                    .unwrap_or(sql.len());
                out.push(Token::new(kind, slice(sql, start, end), tokens[i].span));
                i = last + 1;
            }
            None => {
                out.push(tokens[i].clone());
                i += 1;
            }
        }
    }
    out
}

/// Index of the last token and the kind of the longest keyword starting at `start`
fn longest_match(
    tokens: &[Token],
    start: usize,
    keywords: &Trie<TokenKind>,
) -> Option<(usize, TokenKind)> {
    if tokens[start].kind != TokenKind::Identifier {
        return None;
    }

    let mut key = String::new();
    let mut best = None;
    let mut pending_space = false;
    for (j, token) in tokens.iter().enumerate().skip(start) {
        if token.is_whitespace() {
            pending_space = true;
            continue;
        }
        if !fusable(token.kind) {
            break;
        }
        if pending_space {
            key.push(' ');
            pending_space = false;
        }
        key.push_str(&token.text.to_uppercase());
        match keywords.in_trie(&key) {
            TrieResult::Failed => break,
            TrieResult::Prefix => {}
            TrieResult::Exists => {
                if let Some(kind) = keywords.get(&key) {
                    best = Some((j, *kind));
                }
            }
        }
    }
    best
}

#[cfg(test)]
#[path = "tokenizer_test.rs"]
mod tests;
