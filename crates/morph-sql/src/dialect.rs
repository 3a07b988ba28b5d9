//! Dialect values
//!
//! A [`Dialect`] bundles the three tables that specialize the shared
//! tokenizer, parser and generator: keywords (with discovery patterns),
//! function builders, and renderers. Every dialect is built by cloning the
//! base dialect and overlaying its own entries, so dialect entries win.
//! Built dialects are process-wide statics and never change afterwards.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::ast::{Expr, NodeKind};
use crate::dialects;
use crate::error::{SqlError, SqlResult};
use crate::generator::RenderFn;
use crate::tokens::{ScanRules, TokenKind};
use crate::tokenizer::normalize_keyword;
use crate::trie::Trie;

/// Builds a node from the parsed arguments of a function call
pub type FunctionBuilder = fn(Vec<Expr>) -> SqlResult<Expr>;

#[derive(Clone)]
pub struct Dialect {
    name: &'static str,
    scan_rules: ScanRules,
    identifier_quote: char,
    keywords: HashMap<String, TokenKind>,
    keyword_trie: Trie<TokenKind>,
    discovery: Vec<(Regex, TokenKind)>,
    functions: HashMap<&'static str, FunctionBuilder>,
    renderers: HashMap<NodeKind, RenderFn>,
}

impl fmt::Debug for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dialect")
            .field("name", &self.name)
            .field("keywords", &self.keyword_trie.keys())
            .field("functions", &self.functions.len())
            .field("renderers", &self.renderers.len())
            .finish()
    }
}

impl Dialect {
    /// An empty dialect, the root of every overlay chain
    pub(crate) fn empty(name: &'static str) -> Self {
        Self {
            name,
            scan_rules: ScanRules::Generic,
            identifier_quote: '"',
            keywords: HashMap::new(),
            keyword_trie: Trie::new(),
            discovery: Vec::new(),
            functions: HashMap::new(),
            renderers: HashMap::new(),
        }
    }

    /// Start an overlay on a clone of `base`
    pub(crate) fn extend(base: &Dialect, name: &'static str) -> Self {
        Self {
            name,
            ..base.clone()
        }
    }

    pub(crate) fn with_scan_rules(mut self, rules: ScanRules) -> Self {
        self.scan_rules = rules;
        self
    }

    pub(crate) fn with_identifier_quote(mut self, quote: char) -> Self {
        self.identifier_quote = quote;
        self
    }

    pub(crate) fn keyword(mut self, phrase: &str, kind: TokenKind) -> Self {
        let key = normalize_keyword(phrase);
        self.keyword_trie.insert(&key, kind);
        self.keywords.insert(key, kind);
        self
    }

    /// Register a pattern whose matches become keywords of `kind` for one call
    pub(crate) fn discover(mut self, pattern: &str, kind: TokenKind) -> Self {
        let regex = Regex::new(pattern).expect("valid keyword pattern");
        self.discovery.push((regex, kind));
        self
    }

    pub(crate) fn function(mut self, name: &'static str, builder: FunctionBuilder) -> Self {
        self.functions.insert(name, builder);
        self
    }

    pub(crate) fn renderer(mut self, kind: NodeKind, render: RenderFn) -> Self {
        self.renderers.insert(kind, render);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn scan_rules(&self) -> ScanRules {
        self.scan_rules
    }

    pub fn identifier_quote(&self) -> char {
        self.identifier_quote
    }

    pub(crate) fn keyword_trie(&self) -> &Trie<TokenKind> {
        &self.keyword_trie
    }

    pub(crate) fn keyword_lookup(&self, key: &str) -> Option<TokenKind> {
        self.keywords.get(key).copied()
    }

    pub(crate) fn discovery_patterns(&self) -> &[(Regex, TokenKind)] {
        &self.discovery
    }

    /// Builder registered for an upper-case function name
    pub fn function_builder(&self, name: &str) -> Option<FunctionBuilder> {
        self.functions.get(name).copied()
    }

    pub fn renderer_for(&self, kind: NodeKind) -> Option<RenderFn> {
        self.renderers.get(&kind).copied()
    }
}

/// Shared baseline every dialect overlays
pub fn base() -> &'static Dialect {
    static BASE: OnceLock<Dialect> = OnceLock::new();
    BASE.get_or_init(dialects::base)
}

pub fn snowflake() -> &'static Dialect {
    static SNOWFLAKE: OnceLock<Dialect> = OnceLock::new();
    SNOWFLAKE.get_or_init(|| dialects::snowflake::dialect(base()))
}

pub fn presto() -> &'static Dialect {
    static PRESTO: OnceLock<Dialect> = OnceLock::new();
    PRESTO.get_or_init(|| dialects::presto::dialect(base()))
}

pub fn databricks() -> &'static Dialect {
    static DATABRICKS: OnceLock<Dialect> = OnceLock::new();
    DATABRICKS.get_or_init(|| dialects::databricks::dialect(base()))
}

/// Look a dialect up by name (case-insensitive)
pub fn get(name: &str) -> SqlResult<&'static Dialect> {
    match name.to_lowercase().as_str() {
        "generic" | "ansi" => Ok(base()),
        "snowflake" => Ok(snowflake()),
        "presto" | "trino" => Ok(presto()),
        "databricks" | "spark" => Ok(databricks()),
        _ => Err(SqlError::UnknownDialect(name.to_string())),
    }
}

#[cfg(test)]
#[path = "dialect_test.rs"]
mod tests;
