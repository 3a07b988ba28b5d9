//! Source-to-target statement rewriting

use serde::Serialize;

use crate::ast::Statement;
use crate::diagnostics::{Diagnostics, Warning};
use crate::dialect::{self, Dialect};
use crate::error::{SqlError, SqlResult};
use crate::generator::Generator;
use crate::parser::parse_sql;
use crate::tokenizer::Tokenizer;
use crate::tokens::Token;

/// Rendered statements of one batch plus the warnings raised rendering them
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transpiled {
    pub statements: Vec<String>,
    pub warnings: Vec<Warning>,
}

/// Parses with one dialect and renders with another.
///
/// Dialects are immutable, so a transpiler can be shared across threads.
#[derive(Debug, Clone, Copy)]
pub struct Transpiler {
    source: &'static Dialect,
    target: &'static Dialect,
}

impl Transpiler {
    pub fn new(source: &'static Dialect, target: &'static Dialect) -> Self {
        Self { source, target }
    }

    /// Look both dialects up by name, e.g. `("snowflake", "databricks")`
    pub fn from_dialect_names(source: &str, target: &str) -> SqlResult<Self> {
        Ok(Self::new(dialect::get(source)?, dialect::get(target)?))
    }

    pub fn source(&self) -> &'static Dialect {
        self.source
    }

    pub fn target(&self) -> &'static Dialect {
        self.target
    }

    pub fn tokenize(&self, sql: &str) -> SqlResult<Vec<Token>> {
        Tokenizer::new(self.source).tokenize(sql)
    }

    pub fn parse(&self, sql: &str) -> SqlResult<Vec<Statement>> {
        if sql.trim().is_empty() {
            return Err(SqlError::EmptySql);
        }
        parse_sql(self.source, sql)
    }

    /// Rewrite every statement of `sql`; the first failure aborts the batch
    pub fn transpile(&self, sql: &str) -> SqlResult<Transpiled> {
        let statements = self.parse(sql)?;
        log::debug!(
            "{} -> {}: parsed {} statement(s)",
            self.source.name(),
            self.target.name(),
            statements.len()
        );

        let diagnostics = Diagnostics::new();
        let generator = Generator::new(self.target, &diagnostics);
        let rendered = statements
            .iter()
            .map(|s| generator.generate(s))
            .collect::<SqlResult<Vec<_>>>()?;
        if !diagnostics.is_empty() {
            log::debug!("{} warning(s) raised", diagnostics.len());
        }

        Ok(Transpiled {
            statements: rendered,
            warnings: diagnostics.into_warnings(),
        })
    }

    /// Rewrite a single statement, dropping warnings
    pub fn transpile_one(&self, sql: &str) -> SqlResult<String> {
        let mut transpiled = self.transpile(sql)?;
        if transpiled.statements.len() != 1 {
            return Err(SqlError::ParseError {
                message: format!(
                    "Expected a single statement, found {}",
                    transpiled.statements.len()
                ),
                line: 1,
                column: 1,
            });
        }
        Ok(transpiled.statements.remove(0))
    }
}

#[cfg(test)]
#[path = "transpile_test.rs"]
mod tests;
