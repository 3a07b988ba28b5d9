//! Databricks as a target dialect
//!
//! Only the renderer table differs from the base; Databricks is never parsed.

use crate::ast::*;
use crate::dialect::{self, Dialect};
use crate::error::{SqlError, SqlResult};
use crate::generator::{parameter_sql, quote_string, Generator, Node};

/// Leading type words accepted in a Databricks column definition
const COLUMN_TYPES: &[&str] = &[
    "BIGINT",
    "BINARY",
    "BOOLEAN",
    "DATE",
    "DECIMAL",
    "DOUBLE",
    "FLOAT",
    "INT",
    "INTERVAL",
    "VOID",
    "SMALLINT",
    "STRING",
    "TIMESTAMP",
    "TINYINT",
    "ARRAY",
    "MAP",
    "STRUCT",
];

const STRING_TYPES: &[TypeKind] = &[
    TypeKind::Varchar,
    TypeKind::NVarchar,
    TypeKind::Char,
    TypeKind::Text,
    TypeKind::Variant,
];

const TYPE_MAPPING: &[(TypeKind, &str)] = &[
    (TypeKind::TinyInt, "TINYINT"),
    (TypeKind::SmallInt, "SMALLINT"),
    (TypeKind::BigInt, "BIGINT"),
    (TypeKind::DateTime, "TIMESTAMP"),
    (TypeKind::Float, "DOUBLE"),
    (TypeKind::TimestampLtz, "TIMESTAMP_LTZ"),
];

const DEFAULT_DELIMITER: &str = " ";
const DEFAULT_DATE_FORMAT: &str = "'yyyy-MM-dd'";
const DEFAULT_PRECISION: &str = "38";
const DEFAULT_SCALE: &str = "0";

pub(crate) fn dialect(base: &Dialect) -> Dialect {
    Dialect::extend(base, "databricks")
        .with_identifier_quote('`')
        .renderer(NodeKind::CreateTable, render_create)
        .renderer(NodeKind::ColumnDef, render_column_def)
        .renderer(NodeKind::Delete, render_delete)
        .renderer(NodeKind::Join, render_join)
        .renderer(NodeKind::Lateral, render_lateral)
        .renderer(NodeKind::DataType, render_data_type)
        .renderer(NodeKind::Parameter, render_custom)
        .renderer(NodeKind::Bracket, render_custom)
        .renderer(NodeKind::Split, render_custom)
        .renderer(NodeKind::SplitPart, render_custom)
        .renderer(NodeKind::ConvertTimeZone, render_custom)
        .renderer(NodeKind::MakeDate, render_custom)
        .renderer(NodeKind::TryToDate, render_custom)
        .renderer(NodeKind::TryToNumber, render_custom)
        .renderer(NodeKind::ArrayExists, render_custom)
        .renderer(NodeKind::MapKeys, render_custom)
        .renderer(NodeKind::ArrayAgg, render_array_agg)
        .renderer(NodeKind::ApproxQuantile, render_approx_quantile)
        .renderer(NodeKind::DateAdd, render_date_add)
        .renderer(NodeKind::StrPosition, render_str_position)
        .renderer(NodeKind::CurrentTimestamp, render_current_timestamp)
        .renderer(NodeKind::CurrentTime, render_current_time)
}

// ---- statements ----

fn render_create(g: &Generator<'_>, node: Node<'_>) -> SqlResult<String> {
    let Statement::CreateTable(create) = node.statement()? else {
        return Err(SqlError::Internal("expected CREATE".to_string()));
    };
    let minimal = CreateTable {
        or_replace: false,
        temporary: false,
        transient: false,
        external: false,
        unique: false,
        materialized: false,
        if_not_exists: false,
        properties: Vec::new(),
        ..create.as_ref().clone()
    };
    g.create_sql(&minimal)
}

fn render_column_def(g: &Generator<'_>, node: Node<'_>) -> SqlResult<String> {
    let def = node.column_def()?;
    let data_type = g.data_type(&def.data_type)?;
    let leading: String = data_type
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .collect();
    if !COLUMN_TYPES.contains(&leading.to_uppercase().as_str()) {
        let construct = if leading.is_empty() { data_type } else { leading };
        return Err(SqlError::unsupported(
            construct.clone(),
            format!("{construct} is not a known Databricks type"),
        ));
    }

    let mut parts = vec![g.ident(&def.name), data_type];
    for constraint in &def.constraints {
        if let ColumnConstraint::Comment(_) = constraint {
            parts.push(g.constraint_sql(constraint)?);
        }
    }
    Ok(parts.join(" "))
}

/// A DELETE with a USING list becomes a MERGE
fn render_delete(g: &Generator<'_>, node: Node<'_>) -> SqlResult<String> {
    let Statement::Delete(delete) = node.statement()? else {
        return Err(SqlError::Internal("expected DELETE".to_string()));
    };
    let this = g.relation_sql(&delete.this)?;

    if delete.using.is_empty() {
        let mut sql = String::from("DELETE");
        if !delete.tables.is_empty() {
            let tables: Vec<String> = delete.tables.iter().map(|t| g.object_name(t)).collect();
            sql.push(' ');
            sql.push_str(&tables.join(", "));
        }
        sql.push_str(&format!(" FROM {this}"));
        sql.push_str(&g.delete_tail(delete)?);
        return Ok(sql);
    }

    if !delete.returning.is_empty() || delete.limit.is_some() {
        g.warn(format!(
            "RETURNING and LIMIT are dropped when rewriting DELETE on {this} as MERGE"
        ));
    }
    let using = delete
        .using
        .iter()
        .map(|r| g.relation_sql(r))
        .collect::<SqlResult<Vec<_>>>()?
        .join(", ");
    let on = match &delete.selection {
        Some(selection) => format!(" ON {}", g.sql(selection)?),
        None => String::new(),
    };
    Ok(format!(
        "MERGE INTO {this} USING {using}{on} WHEN MATCHED THEN DELETE;"
    ))
}

// ---- relations ----

fn render_join(g: &Generator<'_>, node: Node<'_>) -> SqlResult<String> {
    let join = node.join()?;
    if let Relation::Lateral(lateral) = &join.relation {
        if g.join_op(join).is_empty() {
            return Ok(format!("\n {}", g.render(Node::Lateral(lateral.as_ref()))?));
        }
    }
    g.join_sql(join)
}

/// `LATERAL FLATTEN(INPUT => ..)` as `LATERAL VIEW [OUTER] EXPLODE(..)`
fn render_lateral(g: &Generator<'_>, node: Node<'_>) -> SqlResult<String> {
    let lateral = node.lateral()?;
    let explode = lateral
        .this
        .bfs(|_| false)
        .find_map(|e| match e {
            Expr::Explode(args) => Some(args),
            _ => None,
        });
    let Some(args) = explode else {
        return g.lateral_sql(lateral);
    };

    let mut input = None;
    let mut path = None;
    let mut outer = false;
    for (i, arg) in args.iter().enumerate() {
        match arg {
            Expr::Kwarg { name, value } => match name.value.to_uppercase().as_str() {
                "INPUT" => input = Some(value.as_ref()),
                "PATH" => path = Some(value.as_ref()),
                "OUTER" => {
                    outer = matches!(value.as_ref(), Expr::Literal(Literal::Boolean(true)))
                }
                _ => {}
            },
            positional if i == 0 => input = Some(positional),
            _ => {}
        }
    }
    let input = input.ok_or_else(|| {
        SqlError::unsupported("LATERAL FLATTEN", "an INPUT argument is required")
    })?;

    let base = g.with_dialect(dialect::base());
    let mut input_sql = base.sql(input)?.replace('@', "$");
    if input_sql.contains("PARSE_JSON") {
        g.warn(format!(
            "you need to explicitly specify `SCHEMA` for column(s) in `{input_sql}`"
        ));
        input_sql = input_sql.replace("PARSE_JSON", "FROM_JSON");
    }
    let path_sql = match path {
        Some(path) => format!(".{}", g.sql(path)?.replace('\'', "").replace('"', "`")),
        None => String::new(),
    };
    let view = if outer {
        "LATERAL VIEW OUTER"
    } else {
        "LATERAL VIEW"
    };
    let alias = match &lateral.alias {
        Some(alias) => format!(" AS {}", g.ident(&alias.name)),
        None => String::new(),
    };
    Ok(format!("{view} EXPLODE({input_sql}{path_sql}){alias}"))
}

// ---- types ----

fn render_data_type(g: &Generator<'_>, node: Node<'_>) -> SqlResult<String> {
    let data_type = node.data_type()?;
    let Some(kind) = data_type.kind else {
        return Ok(g.data_type_sql(data_type));
    };
    if STRING_TYPES.contains(&kind) {
        return Ok("STRING".to_string());
    }
    match TYPE_MAPPING.iter().find(|(k, _)| *k == kind) {
        Some((_, name)) => Ok(name.to_string()),
        None => Ok(g.data_type_sql(data_type)),
    }
}

// ---- expressions ----

fn render_current_timestamp(_: &Generator<'_>, _: Node<'_>) -> SqlResult<String> {
    Ok("CURRENT_TIMESTAMP()".to_string())
}

fn render_current_time(_: &Generator<'_>, _: Node<'_>) -> SqlResult<String> {
    Ok("date_format(current_timestamp(), 'HH:mm:ss')".to_string())
}

fn render_array_agg(g: &Generator<'_>, node: Node<'_>) -> SqlResult<String> {
    let Expr::ArrayAgg(inner) = node.expr()? else {
        return Err(SqlError::Internal("expected ARRAY_AGG".to_string()));
    };
    let inner = match inner.as_ref() {
        Expr::Order { this, .. } => this.as_ref(),
        other => other,
    };
    g.func("ARRAY_AGG", [inner])
}

fn render_approx_quantile(g: &Generator<'_>, node: Node<'_>) -> SqlResult<String> {
    let Expr::ApproxQuantile {
        this,
        quantile,
        accuracy,
        weight,
    } = node.expr()?
    else {
        return Err(SqlError::Internal("expected APPROX_PERCENTILE".to_string()));
    };
    if weight.is_some() {
        g.warn("APPROX_PERCENTILE does not accept a weight in Databricks; the weight was dropped");
    }
    let args = std::iter::once(this.as_ref())
        .chain(quantile.as_deref())
        .chain(accuracy.as_deref());
    g.func("APPROX_PERCENTILE", args)
}

fn render_date_add(g: &Generator<'_>, node: Node<'_>) -> SqlResult<String> {
    let Expr::DateAdd { this, amount, unit } = node.expr()? else {
        return Err(SqlError::Internal("expected DATEADD".to_string()));
    };
    g.func("DATEADD", [unit.as_ref(), amount.as_ref(), this.as_ref()])
}

fn render_str_position(g: &Generator<'_>, node: Node<'_>) -> SqlResult<String> {
    let Expr::StrPosition { this, substr } = node.expr()? else {
        return Err(SqlError::Internal("expected STRPOS".to_string()));
    };
    g.func("LOCATE", [substr.as_ref(), this.as_ref()])
}

fn render_custom(g: &Generator<'_>, node: Node<'_>) -> SqlResult<String> {
    let expr = node.expr()?;
    let custom = expr
        .as_dialect()
        .ok_or_else(|| SqlError::Internal(format!("{:?} is not a dialect node", expr.kind())))?;

    match custom {
        DialectExpr::Parameter {
            name,
            wrapped,
            suffix,
        } => Ok(parameter_sql('$', name, *wrapped, suffix.as_deref())),
        DialectExpr::Bracket { this, path } => {
            let path = path
                .iter()
                .map(|p| path_segment(g, p))
                .collect::<SqlResult<Vec<_>>>()?;
            Ok(format!("{}.{}", g.sql(this)?, path.join(", ")))
        }
        DialectExpr::Split { value, delimiter } => {
            let value = match value {
                Expr::Literal(Literal::String(s)) => quote_string(s),
                other => g.sql(other)?,
            };
            let delimiter = delimiter.as_ref().map_or(DEFAULT_DELIMITER, Expr::name);
            Ok(format!("SPLIT({value},'[{delimiter}]')"))
        }
        DialectExpr::SplitPart {
            value,
            delimiter,
            part,
        } => {
            let delimiter = delimiter.as_ref().map_or(DEFAULT_DELIMITER, Expr::name);
            let part = match part {
                Some(part) => g.sql(part)?,
                None => "1".to_string(),
            };
            Ok(format!(
                "SPLIT_PART({}, {}, {part})",
                g.sql(value)?,
                quote_string(delimiter)
            ))
        }
        DialectExpr::ConvertTimeZone {
            source_tz,
            target_tz,
            value,
        } => {
            let value = match value {
                Expr::Cast { expr, .. } if expr.is_string_literal() => quote_string(expr.name()),
                other => g.sql(other)?,
            };
            let mut args = Vec::with_capacity(3);
            if let Some(source_tz) = source_tz {
                args.push(g.sql(source_tz)?);
            }
            args.push(g.sql(target_tz)?);
            args.push(value);
            Ok(format!("CONVERT_TIMEZONE({})", args.join(", ")))
        }
        DialectExpr::MakeDate { year, month, day } => g.func("MAKE_DATE", [year, month, day]),
        DialectExpr::TryToDate { value, format } => {
            let format = match format {
                Some(format) => g.sql(format)?,
                None => DEFAULT_DATE_FORMAT.to_string(),
            };
            Ok(format!(
                "CAST(TRY_TO_TIMESTAMP({}, {format}) AS DATE)",
                g.sql(value)?
            ))
        }
        DialectExpr::TryToNumber {
            value,
            format,
            precision,
            scale,
        } => {
            let inner = g.func("TRY_TO_NUMBER", std::iter::once(value).chain(format))?;
            let precision = match precision {
                Some(p) => g.sql(p)?,
                None => DEFAULT_PRECISION.to_string(),
            };
            let scale = match scale {
                Some(s) => g.sql(s)?,
                None => DEFAULT_SCALE.to_string(),
            };
            Ok(format!("CAST({inner} AS DECIMAL({precision}, {scale}))"))
        }
        DialectExpr::ArrayExists { this, predicate } => g.func("EXISTS", [this, predicate]),
        DialectExpr::MapKeys { this } => g.func("MAP_KEYS", [this]),
    }
}

/// Path segment with its quotes removed
fn path_segment(g: &Generator<'_>, segment: &Expr) -> SqlResult<String> {
    match segment {
        Expr::Literal(Literal::String(s)) | Expr::Literal(Literal::Number(s)) => {
            Ok(s.replace(['\'', '"'], ""))
        }
        other => Ok(g.sql(other)?.replace(['\'', '"'], "")),
    }
}

#[cfg(test)]
#[path = "databricks_test.rs"]
mod tests;
