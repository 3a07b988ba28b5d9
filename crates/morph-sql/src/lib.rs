//! morph-sql - SQL dialect layer for sqlmorph
//!
//! Tokenizes and parses Snowflake or Presto statements into a shared AST and
//! renders them for Databricks. Dialects are table-driven: a keyword table,
//! a function-builder table and a renderer table layered over a base.

pub mod ast;
pub mod diagnostics;
pub mod dialect;
mod dialects;
pub mod error;
pub mod generator;
pub mod parser;
pub mod tokenizer;
pub mod tokens;
pub mod transpile;
pub mod trie;

pub use diagnostics::{Diagnostics, Warning};
pub use dialect::Dialect;
pub use error::{SqlError, SqlResult};
pub use generator::{Generator, Node};
pub use parser::{parse_sql, Parser};
pub use tokenizer::Tokenizer;
pub use tokens::{Token, TokenKind};
pub use transpile::{Transpiled, Transpiler};
