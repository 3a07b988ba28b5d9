//! Snowflake as a source dialect

use crate::ast::{DialectExpr, Expr, NodeKind};
use crate::dialect::Dialect;
use crate::error::{SqlError, SqlResult};
use crate::generator::{parameter_sql, Generator, Node};
use crate::tokens::{ScanRules, TokenKind};

use super::{build_any_keys_match, build_approx_percentile, check_arity};

pub(crate) fn dialect(base: &Dialect) -> Dialect {
    Dialect::extend(base, "snowflake")
        .with_scan_rules(ScanRules::Snowflake)
        .discover(r"(?i)CREATE\s+OR\s+REPLACE\s+PROCEDURE", TokenKind::Procedure)
        .discover(r"(?i)\bvar\s+\w+\s*=\s*\w+", TokenKind::Var)
        .function("STRTOK_TO_ARRAY", build_split)
        .function("DATE_FROM_PARTS", build_make_date)
        .function("CONVERT_TIMEZONE", build_convert_timezone)
        .function("TRY_TO_DATE", build_try_to_date)
        .function("STRTOK", build_split_part)
        .function("SPLIT_PART", build_split_part)
        .function("TIMESTAMPADD", build_date_add)
        .function("DATEADD", build_date_add)
        .function("TRY_TO_DECIMAL", build_try_to_number)
        .function("TRY_TO_NUMBER", build_try_to_number)
        .function("TRY_TO_NUMERIC", build_try_to_number)
        .function("FLATTEN", |args| Ok(Expr::Explode(args)))
        .function("APPROX_PERCENTILE", build_approx_percentile)
        .function("ANY_KEYS_MATCH", build_any_keys_match)
        .renderer(NodeKind::Parameter, render_parameter)
}

fn render_parameter(_: &Generator<'_>, node: Node<'_>) -> SqlResult<String> {
    match node.expr()?.as_dialect() {
        Some(DialectExpr::Parameter {
            name,
            wrapped,
            suffix,
        }) => Ok(parameter_sql('$', name, *wrapped, suffix.as_deref())),
        _ => Err(SqlError::Internal("expected a parameter".to_string())),
    }
}

/// `STRTOK_TO_ARRAY(value[, delimiters])`
fn build_split(args: Vec<Expr>) -> SqlResult<Expr> {
    check_arity("STRTOK_TO_ARRAY", &args, 1, 2)?;
    let mut args = args.into_iter();
    let value = required(&mut args, "STRTOK_TO_ARRAY")?;
    Ok(DialectExpr::Split {
        value,
        delimiter: args.next(),
    }
    .into())
}

/// `STRTOK(value[, delimiter[, part]])` and `SPLIT_PART`
fn build_split_part(args: Vec<Expr>) -> SqlResult<Expr> {
    check_arity("SPLIT_PART", &args, 1, 3)?;
    let mut args = args.into_iter();
    let value = required(&mut args, "SPLIT_PART")?;
    Ok(DialectExpr::SplitPart {
        value,
        delimiter: args.next(),
        part: args.next(),
    }
    .into())
}

fn build_make_date(args: Vec<Expr>) -> SqlResult<Expr> {
    check_arity("DATE_FROM_PARTS", &args, 3, 3)?;
    let mut args = args.into_iter();
    Ok(DialectExpr::MakeDate {
        year: required(&mut args, "DATE_FROM_PARTS")?,
        month: required(&mut args, "DATE_FROM_PARTS")?,
        day: required(&mut args, "DATE_FROM_PARTS")?,
    }
    .into())
}

/// `CONVERT_TIMEZONE(target, value)` or `CONVERT_TIMEZONE(source, target, value)`
fn build_convert_timezone(args: Vec<Expr>) -> SqlResult<Expr> {
    check_arity("CONVERT_TIMEZONE", &args, 2, 3)?;
    let with_source = args.len() == 3;
    let mut args = args.into_iter();
    let source_tz = if with_source { args.next() } else { None };
    Ok(DialectExpr::ConvertTimeZone {
        source_tz,
        target_tz: required(&mut args, "CONVERT_TIMEZONE")?,
        value: required(&mut args, "CONVERT_TIMEZONE")?,
    }
    .into())
}

fn build_try_to_date(args: Vec<Expr>) -> SqlResult<Expr> {
    check_arity("TRY_TO_DATE", &args, 1, 2)?;
    let mut args = args.into_iter();
    Ok(DialectExpr::TryToDate {
        value: required(&mut args, "TRY_TO_DATE")?,
        format: args.next(),
    }
    .into())
}

/// `DATEADD(unit, amount, date)`
fn build_date_add(args: Vec<Expr>) -> SqlResult<Expr> {
    check_arity("DATEADD", &args, 3, 3)?;
    let mut args = args.into_iter().map(Box::new);
    let missing = || SqlError::argument("DATEADD", "missing argument");
    let unit = args.next().ok_or_else(missing)?;
    let amount = args.next().ok_or_else(missing)?;
    let this = args.next().ok_or_else(missing)?;
    Ok(Expr::DateAdd { this, amount, unit })
}

/// `TRY_TO_NUMBER(value, format[, precision, scale])`
fn build_try_to_number(args: Vec<Expr>) -> SqlResult<Expr> {
    if args.len() == 1 || args.len() == 3 {
        return Err(SqlError::argument(
            "TRY_TO_NUMBER",
            "`format` is required; `precision` and `scale` must be both present or both absent",
        ));
    }
    check_arity("TRY_TO_NUMBER", &args, 2, 4)?;
    let mut args = args.into_iter();
    Ok(DialectExpr::TryToNumber {
        value: required(&mut args, "TRY_TO_NUMBER")?,
        format: args.next(),
        precision: args.next(),
        scale: args.next(),
    }
    .into())
}

fn required(args: &mut impl Iterator<Item = Expr>, function: &str) -> SqlResult<Expr> {
    args.next()
        .ok_or_else(|| SqlError::argument(function, "missing argument"))
}

#[cfg(test)]
#[path = "snowflake_test.rs"]
mod tests;
