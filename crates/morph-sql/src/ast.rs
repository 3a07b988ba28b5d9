//! Abstract syntax tree
//!
//! [`Expr`] is the generic expression set shared by every dialect.
//! Constructs that only exist in a source dialect live in the closed
//! [`DialectExpr`] set, reachable through [`Expr::Dialect`].

use std::collections::VecDeque;

/// An identifier, possibly quoted in the source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub value: String,
    pub quoted: bool,
}

impl Ident {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            quoted: false,
        }
    }

    pub fn quoted(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            quoted: true,
        }
    }
}

/// Dotted name of a table or other schema object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectName(pub Vec<Ident>);

impl ObjectName {
    pub fn new(name: &str) -> Self {
        Self(name.split('.').map(Ident::new).collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    Number(String),
    String(String),
    Boolean(bool),
    Null,
}

/// Column reference; the last part is the column name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub parts: Vec<Ident>,
}

impl Column {
    pub fn name(&self) -> &str {
        self.parts.last().map(|p| p.value.as_str()).unwrap_or("")
    }

    /// Table qualifier, or `""` when unqualified
    pub fn table(&self) -> &str {
        match self.parts.len() {
            0 | 1 => "",
            n => &self.parts[n - 2].value,
        }
    }

    /// The column reference that names this column's table
    pub fn qualifier(&self) -> Option<Column> {
        if self.parts.len() < 2 {
            return None;
        }
        Some(Column {
            parts: self.parts[..self.parts.len() - 1].to_vec(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    /// Name as written in the source
    pub name: String,
    pub args: Vec<Expr>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Varchar,
    NVarchar,
    Char,
    Text,
    Variant,
    Object,
    Array,
    Map,
    Struct,
    Binary,
    Boolean,
    TinyInt,
    SmallInt,
    Int,
    BigInt,
    Decimal,
    Float,
    Double,
    Date,
    Time,
    DateTime,
    Timestamp,
    TimestampNtz,
    TimestampLtz,
    TimestampTz,
    Interval,
}

/// A type name; `Other` keeps unrecognized names verbatim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataType {
    pub kind: Option<TypeKind>,
    pub name: String,
    pub params: Vec<String>,
}

impl DataType {
    pub fn new(kind: TypeKind) -> Self {
        Self {
            kind: Some(kind),
            name: String::new(),
            params: Vec::new(),
        }
    }

    pub fn with_params(mut self, params: &[&str]) -> Self {
        self.params = params.iter().map(|p| p.to_string()).collect();
        self
    }

    pub fn other(name: impl Into<String>) -> Self {
        Self {
            kind: None,
            name: name.into(),
            params: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastStyle {
    Cast,
    TryCast,
    /// `expr::type`
    DoubleColon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Or,
    And,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Like,
    NotLike,
    ILike,
    NotILike,
    Plus,
    Minus,
    Multiply,
    Divide,
    Modulo,
    Concat,
}

impl BinaryOp {
    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOp::Or => "OR",
            BinaryOp::And => "AND",
            BinaryOp::Eq => "=",
            BinaryOp::NotEq => "<>",
            BinaryOp::Lt => "<",
            BinaryOp::LtEq => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::GtEq => ">=",
            BinaryOp::Like => "LIKE",
            BinaryOp::NotLike => "NOT LIKE",
            BinaryOp::ILike => "ILIKE",
            BinaryOp::NotILike => "NOT ILIKE",
            BinaryOp::Plus => "+",
            BinaryOp::Minus => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
            BinaryOp::Modulo => "%",
            BinaryOp::Concat => "||",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Not,
    Minus,
    Plus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderByExpr {
    pub expr: Expr,
    pub asc: Option<bool>,
    pub nulls_first: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhenThen {
    pub condition: Expr,
    pub result: Expr,
}

/// Generic expression node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Literal(Literal),
    Column(Column),
    /// `*` or `t.*`
    Star(Option<Column>),
    Function(Function),
    Window {
        this: Box<Expr>,
        partition_by: Vec<Expr>,
        order_by: Vec<OrderByExpr>,
        /// Frame clause kept as written
        frame: Option<String>,
    },
    WithinGroup {
        this: Box<Expr>,
        order_by: Vec<OrderByExpr>,
    },
    /// Argument carrying an `ORDER BY` inside a call, e.g. `ARRAY_AGG(x ORDER BY y)`
    Order {
        this: Box<Expr>,
        order_by: Vec<OrderByExpr>,
    },
    /// `DISTINCT a, b` inside a call
    Distinct(Vec<Expr>),
    /// `name => value`
    Kwarg {
        name: Ident,
        value: Box<Expr>,
    },
    Lambda {
        params: Vec<Ident>,
        body: Box<Expr>,
    },
    Cast {
        expr: Box<Expr>,
        data_type: DataType,
        style: CastStyle,
    },
    Binary {
        left: Box<Expr>,
        op: BinaryOp,
        right: Box<Expr>,
    },
    Unary {
        op: UnaryOp,
        expr: Box<Expr>,
    },
    Paren(Box<Expr>),
    Case {
        operand: Option<Box<Expr>>,
        whens: Vec<WhenThen>,
        else_result: Option<Box<Expr>>,
    },
    InList {
        expr: Box<Expr>,
        list: Vec<Expr>,
        negated: bool,
    },
    InSubquery {
        expr: Box<Expr>,
        query: Box<Query>,
        negated: bool,
    },
    Between {
        expr: Box<Expr>,
        low: Box<Expr>,
        high: Box<Expr>,
        negated: bool,
    },
    IsNull {
        expr: Box<Expr>,
        negated: bool,
    },
    Exists(Box<Query>),
    Subquery(Box<Query>),
    Alias {
        expr: Box<Expr>,
        alias: Ident,
    },
    /// Generic subscript `this[index]`
    Subscript {
        this: Box<Expr>,
        index: Vec<Expr>,
    },
    /// Field access on a non-column expression
    Dot {
        this: Box<Expr>,
        field: Ident,
    },
    /// Row-expanding table function; arguments are usually keyword arguments
    Explode(Vec<Expr>),
    ArrayAgg(Box<Expr>),
    ApproxQuantile {
        this: Box<Expr>,
        quantile: Option<Box<Expr>>,
        accuracy: Option<Box<Expr>>,
        weight: Option<Box<Expr>>,
    },
    DateAdd {
        this: Box<Expr>,
        amount: Box<Expr>,
        unit: Box<Expr>,
    },
    StrPosition {
        this: Box<Expr>,
        substr: Box<Expr>,
    },
    CurrentTimestamp,
    CurrentTime,
    CurrentDate,
    Dialect(Box<DialectExpr>),
}

/// Source-dialect constructs with no generic counterpart
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialectExpr {
    /// `$name` or `${name}` binding, with an optional adjacent suffix
    Parameter {
        name: String,
        wrapped: bool,
        suffix: Option<String>,
    },
    /// Path access rendered as a dotted path
    Bracket { this: Expr, path: Vec<Expr> },
    Split {
        value: Expr,
        delimiter: Option<Expr>,
    },
    SplitPart {
        value: Expr,
        delimiter: Option<Expr>,
        part: Option<Expr>,
    },
    ConvertTimeZone {
        source_tz: Option<Expr>,
        target_tz: Expr,
        value: Expr,
    },
    MakeDate {
        year: Expr,
        month: Expr,
        day: Expr,
    },
    TryToDate {
        value: Expr,
        format: Option<Expr>,
    },
    TryToNumber {
        value: Expr,
        format: Option<Expr>,
        precision: Option<Expr>,
        scale: Option<Expr>,
    },
    /// Existence predicate over an array
    ArrayExists { this: Expr, predicate: Expr },
    MapKeys { this: Expr },
}

impl From<DialectExpr> for Expr {
    fn from(expr: DialectExpr) -> Self {
        Expr::Dialect(Box::new(expr))
    }
}

impl Expr {
    pub fn column(parts: &[&str]) -> Self {
        Expr::Column(Column {
            parts: parts.iter().map(|p| Ident::new(*p)).collect(),
        })
    }

    pub fn string(value: impl Into<String>) -> Self {
        Expr::Literal(Literal::String(value.into()))
    }

    pub fn number(value: impl Into<String>) -> Self {
        Expr::Literal(Literal::Number(value.into()))
    }

    pub fn function(name: &str, args: Vec<Expr>) -> Self {
        Expr::Function(Function {
            name: name.to_string(),
            args,
        })
    }

    /// The node's name: a column's name, a literal's value, a path's base name
    pub fn name(&self) -> &str {
        match self {
            Expr::Column(column) => column.name(),
            Expr::Literal(Literal::String(s)) | Expr::Literal(Literal::Number(s)) => s,
            Expr::Alias { alias, .. } => &alias.value,
            Expr::Dialect(d) => match d.as_ref() {
                DialectExpr::Bracket { this, .. } => this.name(),
                DialectExpr::Parameter { name, .. } => name,
                _ => "",
            },
            _ => "",
        }
    }

    /// A column's table qualifier, or `""`
    pub fn table(&self) -> &str {
        match self {
            Expr::Column(column) => column.table(),
            _ => "",
        }
    }

    pub fn is_string_literal(&self) -> bool {
        matches!(self, Expr::Literal(Literal::String(_)))
    }

    pub fn as_dialect(&self) -> Option<&DialectExpr> {
        match self {
            Expr::Dialect(d) => Some(d),
            _ => None,
        }
    }

    /// Direct child expressions, in source order. Subqueries are not entered.
    pub fn children(&self) -> Vec<&Expr> {
        fn order(order_by: &[OrderByExpr]) -> impl Iterator<Item = &Expr> {
            order_by.iter().map(|o| &o.expr)
        }
        match self {
            Expr::Literal(_)
            | Expr::Column(_)
            | Expr::Star(_)
            | Expr::Exists(_)
            | Expr::Subquery(_)
            | Expr::CurrentTimestamp
            | Expr::CurrentTime
            | Expr::CurrentDate => vec![],
            Expr::Function(f) => f.args.iter().collect(),
            Expr::Window {
                this,
                partition_by,
                order_by,
                ..
            } => std::iter::once(this.as_ref())
                .chain(partition_by)
                .chain(order(order_by))
                .collect(),
            Expr::WithinGroup { this, order_by } | Expr::Order { this, order_by } => {
                std::iter::once(this.as_ref()).chain(order(order_by)).collect()
            }
            Expr::Distinct(exprs) | Expr::Explode(exprs) => exprs.iter().collect(),
            Expr::Kwarg { value, .. } => vec![value],
            Expr::Lambda { body, .. } => vec![body],
            Expr::Cast { expr, .. }
            | Expr::Unary { expr, .. }
            | Expr::IsNull { expr, .. }
            | Expr::InSubquery { expr, .. }
            | Expr::Alias { expr, .. } => vec![expr],
            Expr::Paren(inner) | Expr::ArrayAgg(inner) => vec![inner],
            Expr::Binary { left, right, .. } => vec![left, right],
            Expr::Case {
                operand,
                whens,
                else_result,
            } => operand
                .iter()
                .map(|o| o.as_ref())
                .chain(whens.iter().flat_map(|w| [&w.condition, &w.result]))
                .chain(else_result.iter().map(|e| e.as_ref()))
                .collect(),
            Expr::InList { expr, list, .. } => {
                std::iter::once(expr.as_ref()).chain(list).collect()
            }
            Expr::Between {
                expr, low, high, ..
            } => vec![expr, low, high],
            Expr::Subscript { this, index } => {
                std::iter::once(this.as_ref()).chain(index).collect()
            }
            Expr::Dot { this, .. } => vec![this],
            Expr::ApproxQuantile {
                this,
                quantile,
                accuracy,
                weight,
            } => std::iter::once(this.as_ref())
                .chain(weight.iter().map(|e| e.as_ref()))
                .chain(quantile.iter().map(|e| e.as_ref()))
                .chain(accuracy.iter().map(|e| e.as_ref()))
                .collect(),
            Expr::DateAdd { this, amount, unit } => vec![unit, amount, this],
            Expr::StrPosition { this, substr } => vec![this, substr],
            Expr::Dialect(d) => d.children(),
        }
    }

    /// Breadth-first walk starting at `self`.
    ///
    /// Nodes for which `prune` returns true are yielded but their children
    /// are not visited.
    pub fn bfs<F>(&self, prune: F) -> Bfs<'_, F>
    where
        F: Fn(&Expr) -> bool,
    {
        Bfs {
            queue: VecDeque::from([self]),
            prune,
        }
    }
}

impl DialectExpr {
    pub fn children(&self) -> Vec<&Expr> {
        match self {
            DialectExpr::Parameter { .. } => vec![],
            DialectExpr::Bracket { this, path } => std::iter::once(this).chain(path).collect(),
            DialectExpr::Split { value, delimiter } => {
                std::iter::once(value).chain(delimiter).collect()
            }
            DialectExpr::SplitPart {
                value,
                delimiter,
                part,
            } => std::iter::once(value).chain(delimiter).chain(part).collect(),
            DialectExpr::ConvertTimeZone {
                source_tz,
                target_tz,
                value,
            } => source_tz.iter().chain([target_tz, value]).collect(),
            DialectExpr::MakeDate { year, month, day } => vec![year, month, day],
            DialectExpr::TryToDate { value, format } => {
                std::iter::once(value).chain(format).collect()
            }
            DialectExpr::TryToNumber {
                value,
                format,
                precision,
                scale,
            } => std::iter::once(value)
                .chain(format)
                .chain(precision)
                .chain(scale)
                .collect(),
            DialectExpr::ArrayExists { this, predicate } => vec![this, predicate],
            DialectExpr::MapKeys { this } => vec![this],
        }
    }
}

/// Breadth-first iterator returned by [`Expr::bfs`]
pub struct Bfs<'a, F> {
    queue: VecDeque<&'a Expr>,
    prune: F,
}

impl<'a, F> Iterator for Bfs<'a, F>
where
    F: Fn(&Expr) -> bool,
{
    type Item = &'a Expr;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        if !(self.prune)(node) {
            self.queue.extend(node.children());
        }
        Some(node)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableAlias {
    pub name: Ident,
    pub columns: Vec<Ident>,
}

/// `LATERAL <table function> [alias]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lateral {
    pub this: Expr,
    pub alias: Option<TableAlias>,
}

/// An item of a FROM clause
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Relation {
    Table {
        name: ObjectName,
        alias: Option<TableAlias>,
    },
    Derived {
        query: Box<Query>,
        alias: Option<TableAlias>,
    },
    /// `TABLE(<function>)`
    TableFunction {
        expr: Expr,
        alias: Option<TableAlias>,
    },
    Lateral(Box<Lateral>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinSide {
    Left,
    Right,
    Full,
}

impl JoinSide {
    pub fn as_str(self) -> &'static str {
        match self {
            JoinSide::Left => "LEFT",
            JoinSide::Right => "RIGHT",
            JoinSide::Full => "FULL",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    Inner,
    Outer,
    Cross,
    Semi,
    Anti,
}

impl JoinKind {
    pub fn as_str(self) -> &'static str {
        match self {
            JoinKind::Inner => "INNER",
            JoinKind::Outer => "OUTER",
            JoinKind::Cross => "CROSS",
            JoinKind::Semi => "SEMI",
            JoinKind::Anti => "ANTI",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinConstraint {
    On(Expr),
    Using(Vec<Ident>),
    None,
}

/// A joined relation; a join with no operator and no constraint is a comma join
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Join {
    pub relation: Relation,
    pub natural: bool,
    pub side: Option<JoinSide>,
    pub kind: Option<JoinKind>,
    pub constraint: JoinConstraint,
}

impl Join {
    pub fn comma(relation: Relation) -> Self {
        Self {
            relation,
            natural: false,
            side: None,
            kind: None,
            constraint: JoinConstraint::None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Select {
    pub distinct: bool,
    pub projection: Vec<Expr>,
    pub from: Option<Relation>,
    pub joins: Vec<Join>,
    pub selection: Option<Expr>,
    pub group_by: Vec<Expr>,
    pub having: Option<Expr>,
    pub qualify: Option<Expr>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOperator {
    Union,
    Except,
    Intersect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetExpr {
    Select(Box<Select>),
    Query(Box<Query>),
    SetOperation {
        op: SetOperator,
        all: bool,
        left: Box<SetExpr>,
        right: Box<SetExpr>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cte {
    pub name: Ident,
    pub query: Query,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub with: Vec<Cte>,
    pub body: SetExpr,
    pub order_by: Vec<OrderByExpr>,
    pub limit: Option<Expr>,
    pub offset: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnConstraint {
    NotNull,
    Null,
    PrimaryKey,
    Unique,
    Default(Expr),
    Comment(String),
    Collate(String),
    /// `AUTOINCREMENT` / `IDENTITY`, with optional `(start, step)`
    Identity(Option<(String, String)>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: Ident,
    pub data_type: DataType,
    pub constraints: Vec<ColumnConstraint>,
}

/// Table option such as `COMMENT = '...'` or `CLUSTER BY (a)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub key: String,
    pub value: Option<Expr>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateKind {
    Table,
    View,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTable {
    pub kind: CreateKind,
    pub or_replace: bool,
    pub temporary: bool,
    pub transient: bool,
    pub external: bool,
    pub unique: bool,
    pub materialized: bool,
    pub if_not_exists: bool,
    pub name: ObjectName,
    pub columns: Vec<ColumnDef>,
    pub properties: Vec<Property>,
    pub query: Option<Box<Query>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delete {
    /// Explicit target list of multi-table deletes
    pub tables: Vec<ObjectName>,
    pub this: Relation,
    pub using: Vec<Relation>,
    pub selection: Option<Expr>,
    pub returning: Vec<Expr>,
    pub limit: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertSource {
    Values(Vec<Vec<Expr>>),
    Query(Box<Query>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insert {
    pub overwrite: bool,
    pub table: ObjectName,
    pub columns: Vec<Ident>,
    pub source: InsertSource,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Query(Box<Query>),
    CreateTable(Box<CreateTable>),
    Delete(Box<Delete>),
    Insert(Box<Insert>),
    /// Statement carried through verbatim
    Command { keyword: String, body: String },
}

/// Node kind used to key renderer tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Query,
    CreateTable,
    ColumnDef,
    Delete,
    Insert,
    Command,
    Join,
    Lateral,
    DataType,
    Literal,
    Column,
    Star,
    Function,
    Window,
    WithinGroup,
    Order,
    Distinct,
    Kwarg,
    Lambda,
    Cast,
    Binary,
    Unary,
    Paren,
    Case,
    InList,
    InSubquery,
    Between,
    IsNull,
    Exists,
    Subquery,
    Alias,
    Subscript,
    Dot,
    Explode,
    ArrayAgg,
    ApproxQuantile,
    DateAdd,
    StrPosition,
    CurrentTimestamp,
    CurrentTime,
    CurrentDate,
    Parameter,
    Bracket,
    Split,
    SplitPart,
    ConvertTimeZone,
    MakeDate,
    TryToDate,
    TryToNumber,
    ArrayExists,
    MapKeys,
}

impl Expr {
    pub fn kind(&self) -> NodeKind {
        match self {
            Expr::Literal(_) => NodeKind::Literal,
            Expr::Column(_) => NodeKind::Column,
            Expr::Star(_) => NodeKind::Star,
            Expr::Function(_) => NodeKind::Function,
            Expr::Window { .. } => NodeKind::Window,
            Expr::WithinGroup { .. } => NodeKind::WithinGroup,
            Expr::Order { .. } => NodeKind::Order,
            Expr::Distinct(_) => NodeKind::Distinct,
            Expr::Kwarg { .. } => NodeKind::Kwarg,
            Expr::Lambda { .. } => NodeKind::Lambda,
            Expr::Cast { .. } => NodeKind::Cast,
            Expr::Binary { .. } => NodeKind::Binary,
            Expr::Unary { .. } => NodeKind::Unary,
            Expr::Paren(_) => NodeKind::Paren,
            Expr::Case { .. } => NodeKind::Case,
            Expr::InList { .. } => NodeKind::InList,
            Expr::InSubquery { .. } => NodeKind::InSubquery,
            Expr::Between { .. } => NodeKind::Between,
            Expr::IsNull { .. } => NodeKind::IsNull,
            Expr::Exists(_) => NodeKind::Exists,
            Expr::Subquery(_) => NodeKind::Subquery,
            Expr::Alias { .. } => NodeKind::Alias,
            Expr::Subscript { .. } => NodeKind::Subscript,
            Expr::Dot { .. } => NodeKind::Dot,
            Expr::Explode(_) => NodeKind::Explode,
            Expr::ArrayAgg(_) => NodeKind::ArrayAgg,
            Expr::ApproxQuantile { .. } => NodeKind::ApproxQuantile,
            Expr::DateAdd { .. } => NodeKind::DateAdd,
            Expr::StrPosition { .. } => NodeKind::StrPosition,
            Expr::CurrentTimestamp => NodeKind::CurrentTimestamp,
            Expr::CurrentTime => NodeKind::CurrentTime,
            Expr::CurrentDate => NodeKind::CurrentDate,
            Expr::Dialect(d) => d.kind(),
        }
    }
}

impl DialectExpr {
    pub fn kind(&self) -> NodeKind {
        match self {
            DialectExpr::Parameter { .. } => NodeKind::Parameter,
            DialectExpr::Bracket { .. } => NodeKind::Bracket,
            DialectExpr::Split { .. } => NodeKind::Split,
            DialectExpr::SplitPart { .. } => NodeKind::SplitPart,
            DialectExpr::ConvertTimeZone { .. } => NodeKind::ConvertTimeZone,
            DialectExpr::MakeDate { .. } => NodeKind::MakeDate,
            DialectExpr::TryToDate { .. } => NodeKind::TryToDate,
            DialectExpr::TryToNumber { .. } => NodeKind::TryToNumber,
            DialectExpr::ArrayExists { .. } => NodeKind::ArrayExists,
            DialectExpr::MapKeys { .. } => NodeKind::MapKeys,
        }
    }
}

impl Statement {
    pub fn kind(&self) -> NodeKind {
        match self {
            Statement::Query(_) => NodeKind::Query,
            Statement::CreateTable(_) => NodeKind::CreateTable,
            Statement::Delete(_) => NodeKind::Delete,
            Statement::Insert(_) => NodeKind::Insert,
            Statement::Command { .. } => NodeKind::Command,
        }
    }
}

#[cfg(test)]
#[path = "ast_test.rs"]
mod tests;
