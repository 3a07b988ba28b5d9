//! Presto as a source dialect

use crate::ast::Expr;
use crate::dialect::Dialect;
use crate::error::{SqlError, SqlResult};
use crate::tokens::TokenKind;

use super::{build_any_keys_match, build_approx_percentile, check_arity};

pub(crate) fn dialect(base: &Dialect) -> Dialect {
    Dialect::extend(base, "presto")
        .keyword("JSON", TokenKind::Text)
        .function("APPROX_PERCENTILE", build_approx_percentile)
        .function("STRPOS", build_strpos)
        .function("ANY_KEYS_MATCH", build_any_keys_match)
}

/// `STRPOS(string, substring)`
fn build_strpos(args: Vec<Expr>) -> SqlResult<Expr> {
    check_arity("STRPOS", &args, 2, 2)?;
    let mut args = args.into_iter().map(Box::new);
    match (args.next(), args.next()) {
        (Some(this), Some(substr)) => Ok(Expr::StrPosition { this, substr }),
        _ => Err(SqlError::argument("STRPOS", "expected 2 arguments")),
    }
}
