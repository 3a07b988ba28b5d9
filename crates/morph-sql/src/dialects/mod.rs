//! Dialect table definitions
//!
//! [`base`] holds the entries shared by every dialect; each submodule
//! overlays its own keywords, function builders and renderers on a clone.

pub(crate) mod databricks;
pub(crate) mod presto;
pub(crate) mod snowflake;

use crate::ast::{DialectExpr, Expr, Literal};
use crate::dialect::Dialect;
use crate::error::{SqlError, SqlResult};
use crate::tokens::TokenKind;

pub(crate) fn base() -> Dialect {
    Dialect::empty("generic")
        .keyword("GROUP BY", TokenKind::GroupBy)
        .keyword("ORDER BY", TokenKind::OrderBy)
        .keyword("PARTITION BY", TokenKind::PartitionBy)
        .keyword("WITHIN GROUP", TokenKind::WithinGroup)
        .function("ARRAY_AGG", build_array_agg)
        .function("APPROX_QUANTILE", build_approx_quantile)
        .function("EXPLODE", |args| Ok(Expr::Explode(args)))
        .function("CURRENT_TIMESTAMP", |args| {
            no_args("CURRENT_TIMESTAMP", args, Expr::CurrentTimestamp)
        })
        .function("CURRENT_TIME", |args| {
            no_args("CURRENT_TIME", args, Expr::CurrentTime)
        })
        .function("CURRENT_DATE", |args| {
            no_args("CURRENT_DATE", args, Expr::CurrentDate)
        })
}

/// Fail unless `min <= args.len() <= max`
pub(crate) fn check_arity(function: &str, args: &[Expr], min: usize, max: usize) -> SqlResult<()> {
    let n = args.len();
    if (min..=max).contains(&n) {
        return Ok(());
    }
    let expected = if min == max {
        format!("{min}")
    } else {
        format!("between {min} and {max}")
    };
    Err(SqlError::argument(
        function,
        format!("expected {expected} arguments, got {n}"),
    ))
}

fn no_args(function: &str, args: Vec<Expr>, expr: Expr) -> SqlResult<Expr> {
    check_arity(function, &args, 0, 0)?;
    Ok(expr)
}

fn build_array_agg(args: Vec<Expr>) -> SqlResult<Expr> {
    check_arity("ARRAY_AGG", &args, 1, 1)?;
    let mut args = args.into_iter();
    match args.next() {
        Some(arg) => Ok(Expr::ArrayAgg(Box::new(arg))),
        None => Err(SqlError::argument("ARRAY_AGG", "missing argument")),
    }
}

/// Positional `(this, quantile, accuracy, weight)`
pub(crate) fn build_approx_quantile(args: Vec<Expr>) -> SqlResult<Expr> {
    check_arity("APPROX_QUANTILE", &args, 1, 4)?;
    let mut args = args.into_iter().map(Box::new);
    let this = args
        .next()
        .ok_or_else(|| SqlError::argument("APPROX_QUANTILE", "missing argument"))?;
    Ok(Expr::ApproxQuantile {
        this,
        quantile: args.next(),
        accuracy: args.next(),
        weight: args.next(),
    })
}

/// `(value, [weight,] quantile, accuracy)` with the accuracy fraction
/// converted into the target's inverse accuracy: `round(1 / fraction)`
pub(crate) fn build_approx_percentile(args: Vec<Expr>) -> SqlResult<Expr> {
    if !(3..=4).contains(&args.len()) {
        return build_approx_quantile(args);
    }
    let position = args.len();
    let mut args = args.into_iter();
    let this = args.next().map(Box::new);
    let weight = if position == 4 {
        args.next().map(Box::new)
    } else {
        None
    };
    let quantile = args.next().map(Box::new);
    let fraction = args.next();
    let accuracy = accuracy_from_fraction(fraction.as_ref(), position)?;

    let this = this.ok_or_else(|| SqlError::argument("APPROX_PERCENTILE", "missing argument"))?;
    Ok(Expr::ApproxQuantile {
        this,
        quantile,
        accuracy: Some(Box::new(accuracy)),
        weight,
    })
}

fn accuracy_from_fraction(arg: Option<&Expr>, position: usize) -> SqlResult<Expr> {
    let invalid = || {
        SqlError::argument(
            "APPROX_PERCENTILE",
            format!(
                "expected a number for argument {position}, got '{}'",
                arg.map(Expr::name)
                    .filter(|name| !name.is_empty())
                    .unwrap_or("expression")
            ),
        )
    };
    let text = match arg {
        Some(Expr::Literal(Literal::Number(n))) | Some(Expr::Literal(Literal::String(n))) => n,
        _ => return Err(invalid()),
    };
    let fraction: f64 = text.trim().parse().map_err(|_| invalid())?;
    if fraction <= 0.0 || !fraction.is_finite() {
        return Err(invalid());
    }
    Ok(Expr::number(format!("{}", (1.0 / fraction).round() as i64)))
}

/// `ANY_KEYS_MATCH(map, predicate)` as an existence test over the map's keys
pub(crate) fn build_any_keys_match(args: Vec<Expr>) -> SqlResult<Expr> {
    check_arity("ANY_KEYS_MATCH", &args, 2, 2)?;
    let mut args = args.into_iter();
    match (args.next(), args.next()) {
        (Some(map), Some(predicate)) => Ok(DialectExpr::ArrayExists {
            this: DialectExpr::MapKeys { this: map }.into(),
            predicate,
        }
        .into()),
        _ => Err(SqlError::argument("ANY_KEYS_MATCH", "expected 2 arguments")),
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
