//! SQL text generation
//!
//! [`Generator::render`] looks the node kind up in the target dialect's
//! renderer table and falls back to the base rendering below. Overlay
//! renderers call the `*_sql` methods directly when they need the base form
//! of the same node kind.

use crate::ast::*;
use crate::diagnostics::Diagnostics;
use crate::dialect::Dialect;
use crate::error::{SqlError, SqlResult};

/// Overlay renderer registered in a dialect's renderer table
pub type RenderFn = fn(&Generator<'_>, Node<'_>) -> SqlResult<String>;

/// Borrowed view of anything that can be rendered
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Statement(&'a Statement),
    Query(&'a Query),
    Expr(&'a Expr),
    ColumnDef(&'a ColumnDef),
    Join(&'a Join),
    Lateral(&'a Lateral),
    DataType(&'a DataType),
}

impl<'a> Node<'a> {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Statement(s) => s.kind(),
            Node::Query(_) => NodeKind::Query,
            Node::Expr(e) => e.kind(),
            Node::ColumnDef(_) => NodeKind::ColumnDef,
            Node::Join(_) => NodeKind::Join,
            Node::Lateral(_) => NodeKind::Lateral,
            Node::DataType(_) => NodeKind::DataType,
        }
    }

    fn mismatch(&self, expected: &str) -> SqlError {
        SqlError::Internal(format!(
            "{expected} renderer called on {:?} node",
            self.kind()
        ))
    }

    pub fn expr(self) -> SqlResult<&'a Expr> {
        match self {
            Node::Expr(e) => Ok(e),
            other => Err(other.mismatch("expression")),
        }
    }

    pub fn statement(self) -> SqlResult<&'a Statement> {
        match self {
            Node::Statement(s) => Ok(s),
            other => Err(other.mismatch("statement")),
        }
    }

    pub fn column_def(self) -> SqlResult<&'a ColumnDef> {
        match self {
            Node::ColumnDef(c) => Ok(c),
            other => Err(other.mismatch("column definition")),
        }
    }

    pub fn join(self) -> SqlResult<&'a Join> {
        match self {
            Node::Join(j) => Ok(j),
            other => Err(other.mismatch("join")),
        }
    }

    pub fn lateral(self) -> SqlResult<&'a Lateral> {
        match self {
            Node::Lateral(l) => Ok(l),
            other => Err(other.mismatch("lateral")),
        }
    }

    pub fn data_type(self) -> SqlResult<&'a DataType> {
        match self {
            Node::DataType(d) => Ok(d),
            other => Err(other.mismatch("data type")),
        }
    }
}

pub struct Generator<'a> {
    dialect: &'a Dialect,
    diagnostics: &'a Diagnostics,
}

impl<'a> Generator<'a> {
    pub fn new(dialect: &'a Dialect, diagnostics: &'a Diagnostics) -> Self {
        Self {
            dialect,
            diagnostics,
        }
    }

    pub fn dialect(&self) -> &'a Dialect {
        self.dialect
    }

    /// A generator for another dialect reporting into the same diagnostics
    pub fn with_dialect<'b>(&self, dialect: &'b Dialect) -> Generator<'b>
    where
        'a: 'b,
    {
        Generator {
            dialect,
            diagnostics: self.diagnostics,
        }
    }

    pub fn warn(&self, message: impl Into<String>) {
        self.diagnostics.warn(message);
    }

    pub fn generate(&self, statement: &Statement) -> SqlResult<String> {
        self.render(Node::Statement(statement))
    }

    pub fn render(&self, node: Node<'_>) -> SqlResult<String> {
        match self.dialect.renderer_for(node.kind()) {
            Some(render) => render(self, node),
            None => self.render_base(node),
        }
    }

    pub fn render_base(&self, node: Node<'_>) -> SqlResult<String> {
        match node {
            Node::Statement(statement) => self.statement_sql(statement),
            Node::Query(query) => self.query_sql(query),
            Node::Expr(expr) => self.expr_sql(expr),
            Node::ColumnDef(def) => self.column_def_sql(def),
            Node::Join(join) => self.join_sql(join),
            Node::Lateral(lateral) => self.lateral_sql(lateral),
            Node::DataType(data_type) => Ok(self.data_type_sql(data_type)),
        }
    }

    // ---- shared helpers ----

    pub fn sql(&self, expr: &Expr) -> SqlResult<String> {
        self.render(Node::Expr(expr))
    }

    pub fn sql_list(&self, exprs: &[Expr]) -> SqlResult<String> {
        Ok(exprs
            .iter()
            .map(|e| self.sql(e))
            .collect::<SqlResult<Vec<_>>>()?
            .join(", "))
    }

    /// `NAME(arg, ...)`
    pub fn func<'e>(&self, name: &str, args: impl IntoIterator<Item = &'e Expr>) -> SqlResult<String> {
        let args = args
            .into_iter()
            .map(|e| self.sql(e))
            .collect::<SqlResult<Vec<_>>>()?;
        Ok(format!("{name}({})", args.join(", ")))
    }

    pub fn ident(&self, ident: &Ident) -> String {
        if !ident.quoted {
            return ident.value.clone();
        }
        let quote = self.dialect.identifier_quote();
        let escaped = ident
            .value
            .replace(quote, &format!("{quote}{quote}"));
        format!("{quote}{escaped}{quote}")
    }

    pub fn object_name(&self, name: &ObjectName) -> String {
        name.0
            .iter()
            .map(|p| self.ident(p))
            .collect::<Vec<_>>()
            .join(".")
    }

    pub fn data_type(&self, data_type: &DataType) -> SqlResult<String> {
        self.render(Node::DataType(data_type))
    }

    fn order_by_sql(&self, order_by: &[OrderByExpr]) -> SqlResult<String> {
        let mut items = Vec::with_capacity(order_by.len());
        for item in order_by {
            let mut sql = self.sql(&item.expr)?;
            match item.asc {
                Some(true) => sql.push_str(" ASC"),
                Some(false) => sql.push_str(" DESC"),
                None => {}
            }
            match item.nulls_first {
                Some(true) => sql.push_str(" NULLS FIRST"),
                Some(false) => sql.push_str(" NULLS LAST"),
                None => {}
            }
            items.push(sql);
        }
        Ok(items.join(", "))
    }

    // ---- statements ----

    fn statement_sql(&self, statement: &Statement) -> SqlResult<String> {
        match statement {
            Statement::Query(query) => self.render(Node::Query(query)),
            Statement::CreateTable(create) => self.create_sql(create),
            Statement::Delete(delete) => self.delete_sql(delete),
            Statement::Insert(insert) => self.insert_sql(insert),
            Statement::Command { body, .. } => Ok(body.clone()),
        }
    }

    pub fn create_sql(&self, create: &CreateTable) -> SqlResult<String> {
        let mut sql = String::from("CREATE ");
        for (set, word) in [
            (create.or_replace, "OR REPLACE "),
            (create.temporary, "TEMPORARY "),
            (create.transient, "TRANSIENT "),
            (create.external, "EXTERNAL "),
            (create.unique, "UNIQUE "),
            (create.materialized, "MATERIALIZED "),
        ] {
            if set {
                sql.push_str(word);
            }
        }
        sql.push_str(match create.kind {
            CreateKind::Table => "TABLE ",
            CreateKind::View => "VIEW ",
        });
        if create.if_not_exists {
            sql.push_str("IF NOT EXISTS ");
        }
        sql.push_str(&self.object_name(&create.name));

        if !create.columns.is_empty() {
            let columns = create
                .columns
                .iter()
                .map(|c| self.render(Node::ColumnDef(c)))
                .collect::<SqlResult<Vec<_>>>()?;
            sql.push_str(&format!(" ({})", columns.join(", ")));
        }
        for property in &create.properties {
            sql.push(' ');
            sql.push_str(&self.property_sql(property)?);
        }
        if let Some(query) = &create.query {
            sql.push_str(" AS ");
            sql.push_str(&self.render(Node::Query(query))?);
        }
        Ok(sql)
    }

    fn property_sql(&self, property: &Property) -> SqlResult<String> {
        match &property.value {
            None => Ok(property.key.clone()),
            Some(value @ Expr::Function(f)) if f.name.is_empty() => {
                Ok(format!("{} {}", property.key, self.sql(value)?))
            }
            Some(value) => Ok(format!("{}={}", property.key, self.sql(value)?)),
        }
    }

    pub fn column_def_sql(&self, def: &ColumnDef) -> SqlResult<String> {
        let mut parts = vec![self.ident(&def.name), self.data_type(&def.data_type)?];
        for constraint in &def.constraints {
            parts.push(self.constraint_sql(constraint)?);
        }
        Ok(parts.join(" "))
    }

    pub fn constraint_sql(&self, constraint: &ColumnConstraint) -> SqlResult<String> {
        Ok(match constraint {
            ColumnConstraint::NotNull => "NOT NULL".to_string(),
            ColumnConstraint::Null => "NULL".to_string(),
            ColumnConstraint::PrimaryKey => "PRIMARY KEY".to_string(),
            ColumnConstraint::Unique => "UNIQUE".to_string(),
            ColumnConstraint::Default(expr) => format!("DEFAULT {}", self.sql(expr)?),
            ColumnConstraint::Comment(text) => format!("COMMENT {}", quote_string(text)),
            ColumnConstraint::Collate(text) => format!("COLLATE {}", quote_string(text)),
            ColumnConstraint::Identity(None) => "AUTOINCREMENT".to_string(),
            ColumnConstraint::Identity(Some((start, step))) => {
                format!("AUTOINCREMENT({start}, {step})")
            }
        })
    }

    pub fn delete_sql(&self, delete: &Delete) -> SqlResult<String> {
        let mut sql = String::from("DELETE");
        if !delete.tables.is_empty() {
            let tables: Vec<String> = delete.tables.iter().map(|t| self.object_name(t)).collect();
            sql.push(' ');
            sql.push_str(&tables.join(", "));
        }
        sql.push_str(" FROM ");
        sql.push_str(&self.relation_sql(&delete.this)?);
        if !delete.using.is_empty() {
            sql.push_str(" USING ");
            sql.push_str(&self.relation_list(&delete.using)?);
        }
        sql.push_str(&self.delete_tail(delete)?);
        Ok(sql)
    }

    /// `[ WHERE ..][ RETURNING ..][ LIMIT ..]`
    pub fn delete_tail(&self, delete: &Delete) -> SqlResult<String> {
        let mut sql = String::new();
        if let Some(selection) = &delete.selection {
            sql.push_str(&format!(" WHERE {}", self.sql(selection)?));
        }
        if !delete.returning.is_empty() {
            sql.push_str(&format!(" RETURNING {}", self.sql_list(&delete.returning)?));
        }
        if let Some(limit) = &delete.limit {
            sql.push_str(&format!(" LIMIT {}", self.sql(limit)?));
        }
        Ok(sql)
    }

    fn insert_sql(&self, insert: &Insert) -> SqlResult<String> {
        let mut sql = if insert.overwrite {
            String::from("INSERT OVERWRITE TABLE ")
        } else {
            String::from("INSERT INTO ")
        };
        sql.push_str(&self.object_name(&insert.table));
        if !insert.columns.is_empty() {
            let columns: Vec<String> = insert.columns.iter().map(|c| self.ident(c)).collect();
            sql.push_str(&format!(" ({})", columns.join(", ")));
        }
        match &insert.source {
            InsertSource::Values(rows) => {
                let rows = rows
                    .iter()
                    .map(|row| Ok(format!("({})", self.sql_list(row)?)))
                    .collect::<SqlResult<Vec<_>>>()?;
                sql.push_str(&format!(" VALUES {}", rows.join(", ")));
            }
            InsertSource::Query(query) => {
                sql.push(' ');
                sql.push_str(&self.render(Node::Query(query))?);
            }
        }
        Ok(sql)
    }

    // ---- queries ----

    pub fn query_sql(&self, query: &Query) -> SqlResult<String> {
        let mut sql = String::new();
        if !query.with.is_empty() {
            let ctes = query
                .with
                .iter()
                .map(|cte| {
                    Ok(format!(
                        "{} AS ({})",
                        self.ident(&cte.name),
                        self.render(Node::Query(&cte.query))?
                    ))
                })
                .collect::<SqlResult<Vec<_>>>()?;
            sql.push_str(&format!("WITH {} ", ctes.join(", ")));
        }
        sql.push_str(&self.set_expr_sql(&query.body)?);
        if !query.order_by.is_empty() {
            sql.push_str(&format!(" ORDER BY {}", self.order_by_sql(&query.order_by)?));
        }
        if let Some(limit) = &query.limit {
            sql.push_str(&format!(" LIMIT {}", self.sql(limit)?));
        }
        if let Some(offset) = &query.offset {
            sql.push_str(&format!(" OFFSET {}", self.sql(offset)?));
        }
        Ok(sql)
    }

    fn set_expr_sql(&self, body: &SetExpr) -> SqlResult<String> {
        match body {
            SetExpr::Select(select) => self.select_sql(select),
            SetExpr::Query(query) => Ok(format!("({})", self.render(Node::Query(query))?)),
            SetExpr::SetOperation {
                op,
                all,
                left,
                right,
            } => {
                let op = match op {
                    SetOperator::Union => "UNION",
                    SetOperator::Except => "EXCEPT",
                    SetOperator::Intersect => "INTERSECT",
                };
                let all = if *all { " ALL" } else { "" };
                Ok(format!(
                    "{} {op}{all} {}",
                    self.set_expr_sql(left)?,
                    self.set_expr_sql(right)?
                ))
            }
        }
    }

    fn select_sql(&self, select: &Select) -> SqlResult<String> {
        let mut sql = String::from("SELECT ");
        if select.distinct {
            sql.push_str("DISTINCT ");
        }
        sql.push_str(&self.sql_list(&select.projection)?);
        if let Some(from) = &select.from {
            sql.push_str(" FROM ");
            sql.push_str(&self.relation_sql(from)?);
            for join in &select.joins {
                sql.push_str(&self.render(Node::Join(join))?);
            }
        }
        if let Some(selection) = &select.selection {
            sql.push_str(&format!(" WHERE {}", self.sql(selection)?));
        }
        if !select.group_by.is_empty() {
            sql.push_str(&format!(" GROUP BY {}", self.sql_list(&select.group_by)?));
        }
        if let Some(having) = &select.having {
            sql.push_str(&format!(" HAVING {}", self.sql(having)?));
        }
        if let Some(qualify) = &select.qualify {
            sql.push_str(&format!(" QUALIFY {}", self.sql(qualify)?));
        }
        Ok(sql)
    }

    pub fn table_alias_sql(&self, alias: &Option<TableAlias>) -> String {
        let Some(alias) = alias else {
            return String::new();
        };
        let mut sql = format!(" AS {}", self.ident(&alias.name));
        if !alias.columns.is_empty() {
            let columns: Vec<String> = alias.columns.iter().map(|c| self.ident(c)).collect();
            sql.push_str(&format!("({})", columns.join(", ")));
        }
        sql
    }

    pub fn relation_sql(&self, relation: &Relation) -> SqlResult<String> {
        match relation {
            Relation::Table { name, alias } => Ok(format!(
                "{}{}",
                self.object_name(name),
                self.table_alias_sql(alias)
            )),
            Relation::Derived { query, alias } => Ok(format!(
                "({}){}",
                self.render(Node::Query(query))?,
                self.table_alias_sql(alias)
            )),
            Relation::TableFunction { expr, alias } => Ok(format!(
                "TABLE({}){}",
                self.sql(expr)?,
                self.table_alias_sql(alias)
            )),
            Relation::Lateral(lateral) => self.render(Node::Lateral(lateral)),
        }
    }

    fn relation_list(&self, relations: &[Relation]) -> SqlResult<String> {
        Ok(relations
            .iter()
            .map(|r| self.relation_sql(r))
            .collect::<SqlResult<Vec<_>>>()?
            .join(", "))
    }

    /// Join operator words, e.g. `NATURAL LEFT OUTER`
    pub fn join_op(&self, join: &Join) -> String {
        let mut words = Vec::new();
        if join.natural {
            words.push("NATURAL");
        }
        if let Some(side) = join.side {
            words.push(side.as_str());
        }
        if let Some(kind) = join.kind {
            words.push(kind.as_str());
        }
        words.join(" ")
    }

    pub fn join_sql(&self, join: &Join) -> SqlResult<String> {
        let op = self.join_op(join);
        let right = self.relation_sql(&join.relation)?;
        let condition = match &join.constraint {
            JoinConstraint::On(expr) => format!(" ON {}", self.sql(expr)?),
            JoinConstraint::Using(columns) => {
                let columns: Vec<String> = columns.iter().map(|c| self.ident(c)).collect();
                format!(" USING ({})", columns.join(", "))
            }
            JoinConstraint::None => String::new(),
        };
        if op.is_empty() && condition.is_empty() {
            return Ok(format!(", {right}"));
        }
        let op = if op.is_empty() {
            "JOIN".to_string()
        } else {
            format!("{op} JOIN")
        };
        Ok(format!(" {op} {right}{condition}"))
    }

    pub fn lateral_sql(&self, lateral: &Lateral) -> SqlResult<String> {
        Ok(format!(
            "LATERAL {}{}",
            self.sql(&lateral.this)?,
            self.table_alias_sql(&lateral.alias)
        ))
    }

    pub fn data_type_sql(&self, data_type: &DataType) -> String {
        let name = match data_type.kind {
            Some(kind) => type_name(kind).to_string(),
            None => data_type.name.clone(),
        };
        if data_type.params.is_empty() {
            name
        } else {
            format!("{name}({})", data_type.params.join(", "))
        }
    }

    // ---- expressions ----

    pub fn expr_sql(&self, expr: &Expr) -> SqlResult<String> {
        Ok(match expr {
            Expr::Literal(literal) => literal_sql(literal),
            Expr::Column(column) => column
                .parts
                .iter()
                .map(|p| self.ident(p))
                .collect::<Vec<_>>()
                .join("."),
            Expr::Star(None) => "*".to_string(),
            Expr::Star(Some(qualifier)) => {
                format!("{}.*", self.sql(&Expr::Column(qualifier.clone()))?)
            }
            Expr::Function(f) => self.func(&f.name.to_uppercase(), &f.args)?,
            Expr::Window {
                this,
                partition_by,
                order_by,
                frame,
            } => {
                let mut window = Vec::new();
                if !partition_by.is_empty() {
                    window.push(format!("PARTITION BY {}", self.sql_list(partition_by)?));
                }
                if !order_by.is_empty() {
                    window.push(format!("ORDER BY {}", self.order_by_sql(order_by)?));
                }
                if let Some(frame) = frame {
                    window.push(frame.clone());
                }
                format!("{} OVER ({})", self.sql(this)?, window.join(" "))
            }
            Expr::WithinGroup { this, order_by } => format!(
                "{} WITHIN GROUP (ORDER BY {})",
                self.sql(this)?,
                self.order_by_sql(order_by)?
            ),
            Expr::Order { this, order_by } => {
                format!("{} ORDER BY {}", self.sql(this)?, self.order_by_sql(order_by)?)
            }
            Expr::Distinct(exprs) => format!("DISTINCT {}", self.sql_list(exprs)?),
            Expr::Kwarg { name, value } => format!("{} => {}", self.ident(name), self.sql(value)?),
            Expr::Lambda { params, body } => {
                let params: Vec<String> = params.iter().map(|p| self.ident(p)).collect();
                let params = match params.as_slice() {
                    [single] => single.clone(),
                    many => format!("({})", many.join(", ")),
                };
                format!("{params} -> {}", self.sql(body)?)
            }
            Expr::Cast {
                expr,
                data_type,
                style,
            } => {
                let function = match style {
                    CastStyle::TryCast => "TRY_CAST",
                    CastStyle::Cast | CastStyle::DoubleColon => "CAST",
                };
                format!("{function}({} AS {})", self.sql(expr)?, self.data_type(data_type)?)
            }
            Expr::Binary { left, op, right } => {
                format!("{} {} {}", self.sql(left)?, op.as_str(), self.sql(right)?)
            }
            Expr::Unary { op, expr } => match op {
                UnaryOp::Not => format!("NOT {}", self.sql(expr)?),
                UnaryOp::Minus => format!("-{}", self.sql(expr)?),
                UnaryOp::Plus => format!("+{}", self.sql(expr)?),
            },
            Expr::Paren(inner) => format!("({})", self.sql(inner)?),
            Expr::Case {
                operand,
                whens,
                else_result,
            } => {
                let mut sql = String::from("CASE");
                if let Some(operand) = operand {
                    sql.push_str(&format!(" {}", self.sql(operand)?));
                }
                for when in whens {
                    sql.push_str(&format!(
                        " WHEN {} THEN {}",
                        self.sql(&when.condition)?,
                        self.sql(&when.result)?
                    ));
                }
                if let Some(else_result) = else_result {
                    sql.push_str(&format!(" ELSE {}", self.sql(else_result)?));
                }
                sql.push_str(" END");
                sql
            }
            Expr::InList {
                expr,
                list,
                negated,
            } => format!(
                "{} {}IN ({})",
                self.sql(expr)?,
                not(*negated),
                self.sql_list(list)?
            ),
            Expr::InSubquery {
                expr,
                query,
                negated,
            } => format!(
                "{} {}IN ({})",
                self.sql(expr)?,
                not(*negated),
                self.render(Node::Query(query))?
            ),
            Expr::Between {
                expr,
                low,
                high,
                negated,
            } => format!(
                "{} {}BETWEEN {} AND {}",
                self.sql(expr)?,
                not(*negated),
                self.sql(low)?,
                self.sql(high)?
            ),
            Expr::IsNull { expr, negated } => {
                format!("{} IS {}NULL", self.sql(expr)?, not(*negated))
            }
            Expr::Exists(query) => format!("EXISTS({})", self.render(Node::Query(query))?),
            Expr::Subquery(query) => format!("({})", self.render(Node::Query(query))?),
            Expr::Alias { expr, alias } => format!("{} AS {}", self.sql(expr)?, self.ident(alias)),
            Expr::Subscript { this, index } => {
                format!("{}[{}]", self.sql(this)?, self.sql_list(index)?)
            }
            Expr::Dot { this, field } => format!("{}.{}", self.sql(this)?, self.ident(field)),
            Expr::Explode(args) => self.func("EXPLODE", args)?,
            Expr::ArrayAgg(inner) => self.func("ARRAY_AGG", [inner.as_ref()])?,
            Expr::ApproxQuantile {
                this,
                quantile,
                accuracy,
                weight,
            } => {
                let args = std::iter::once(this.as_ref())
                    .chain(quantile.as_deref())
                    .chain(accuracy.as_deref())
                    .chain(weight.as_deref());
                self.func("APPROX_QUANTILE", args)?
            }
            Expr::DateAdd { this, amount, unit } => {
                self.func("DATE_ADD", [this.as_ref(), amount.as_ref(), unit.as_ref()])?
            }
            Expr::StrPosition { this, substr } => {
                self.func("STRPOS", [this.as_ref(), substr.as_ref()])?
            }
            Expr::CurrentTimestamp => "CURRENT_TIMESTAMP".to_string(),
            Expr::CurrentTime => "CURRENT_TIME".to_string(),
            Expr::CurrentDate => "CURRENT_DATE".to_string(),
            Expr::Dialect(custom) => self.dialect_expr_sql(custom)?,
        })
    }

    fn dialect_expr_sql(&self, expr: &DialectExpr) -> SqlResult<String> {
        match expr {
            DialectExpr::Parameter {
                name,
                wrapped,
                suffix,
            } => Ok(parameter_sql('@', name, *wrapped, suffix.as_deref())),
            DialectExpr::Bracket { this, path } => {
                Ok(format!("{}[{}]", self.sql(this)?, self.sql_list(path)?))
            }
            DialectExpr::Split { value, delimiter } => {
                self.func("SPLIT", std::iter::once(value).chain(delimiter))
            }
            DialectExpr::SplitPart {
                value,
                delimiter,
                part,
            } => self.func(
                "SPLIT_PART",
                std::iter::once(value).chain(delimiter).chain(part),
            ),
            DialectExpr::ConvertTimeZone {
                source_tz,
                target_tz,
                value,
            } => self.func(
                "CONVERT_TIMEZONE",
                source_tz.iter().chain([target_tz, value]),
            ),
            DialectExpr::MakeDate { year, month, day } => {
                self.func("DATE_FROM_PARTS", [year, month, day])
            }
            DialectExpr::TryToDate { value, format } => {
                self.func("TRY_TO_DATE", std::iter::once(value).chain(format))
            }
            DialectExpr::TryToNumber {
                value,
                format,
                precision,
                scale,
            } => self.func(
                "TRY_TO_NUMBER",
                std::iter::once(value)
                    .chain(format)
                    .chain(precision)
                    .chain(scale),
            ),
            DialectExpr::ArrayExists { this, predicate } => {
                self.func("ARRAY_EXISTS", [this, predicate])
            }
            DialectExpr::MapKeys { this } => self.func("MAP_KEYS", [this]),
        }
    }
}

/// `<sigil>name`, `<sigil>{name}`, followed by the suffix
pub fn parameter_sql(sigil: char, name: &str, wrapped: bool, suffix: Option<&str>) -> String {
    let name = if wrapped {
        format!("{{{name}}}")
    } else {
        name.to_string()
    };
    format!("{sigil}{name}{}", suffix.unwrap_or(""))
}

pub fn quote_string(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

fn literal_sql(literal: &Literal) -> String {
    match literal {
        Literal::Number(n) => n.clone(),
        Literal::String(s) => quote_string(s),
        Literal::Boolean(true) => "TRUE".to_string(),
        Literal::Boolean(false) => "FALSE".to_string(),
        Literal::Null => "NULL".to_string(),
    }
}

fn not(negated: bool) -> &'static str {
    if negated {
        "NOT "
    } else {
        ""
    }
}

pub fn type_name(kind: TypeKind) -> &'static str {
    match kind {
        TypeKind::Varchar => "VARCHAR",
        TypeKind::NVarchar => "NVARCHAR",
        TypeKind::Char => "CHAR",
        TypeKind::Text => "TEXT",
        TypeKind::Variant => "VARIANT",
        TypeKind::Object => "OBJECT",
        TypeKind::Array => "ARRAY",
        TypeKind::Map => "MAP",
        TypeKind::Struct => "STRUCT",
        TypeKind::Binary => "BINARY",
        TypeKind::Boolean => "BOOLEAN",
        TypeKind::TinyInt => "TINYINT",
        TypeKind::SmallInt => "SMALLINT",
        TypeKind::Int => "INT",
        TypeKind::BigInt => "BIGINT",
        TypeKind::Decimal => "DECIMAL",
        TypeKind::Float => "FLOAT",
        TypeKind::Double => "DOUBLE",
        TypeKind::Date => "DATE",
        TypeKind::Time => "TIME",
        TypeKind::DateTime => "DATETIME",
        TypeKind::Timestamp => "TIMESTAMP",
        TypeKind::TimestampNtz => "TIMESTAMP_NTZ",
        TypeKind::TimestampLtz => "TIMESTAMP_LTZ",
        TypeKind::TimestampTz => "TIMESTAMP_TZ",
        TypeKind::Interval => "INTERVAL",
    }
}

#[cfg(test)]
#[path = "generator_test.rs"]
mod tests;
