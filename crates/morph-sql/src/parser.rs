//! Recursive-descent parser producing [`Statement`]s
//!
//! The grammar is the shared baseline; dialects hook in through their
//! function table. The parser position is a plain index into the token
//! sequence, so lookahead copies the index instead of the parser.

use crate::ast::*;
use crate::dialect::Dialect;
use crate::error::{SqlError, SqlResult};
use crate::tokenizer::{normalize_keyword, Tokenizer};
use crate::tokens::{slice, Token, TokenKind};

/// Column name of the per-row binder produced by FLATTEN
pub const ROW_BINDER: &str = "VALUE";

/// Words that end an expression and can never be an implicit alias
const RESERVED: &[&str] = &[
    "ALL", "AND", "ANTI", "AS", "ASC", "BETWEEN", "CLUSTER", "COMMENT", "COPY", "CROSS", "DESC",
    "ELSE", "END", "EXCEPT", "FETCH", "FROM", "FULL", "GROUP", "HAVING", "ILIKE", "IN", "INNER",
    "INTERSECT", "IS", "JOIN", "LATERAL", "LEFT", "LIKE", "LIMIT", "MINUS", "NATURAL", "NOT",
    "NULLS", "OFFSET", "ON", "OR", "ORDER", "OUTER", "QUALIFY", "RETURNING", "RIGHT", "RLIKE",
    "SELECT", "SEMI", "SET", "THEN", "UNION", "USING", "VALUES", "WHEN", "WHERE", "WINDOW", "WITH",
];

pub struct Parser<'a> {
    sql: &'a str,
    dialect: &'a Dialect,
    tokens: Vec<Token>,
    /// Whether whitespace precedes the token at the same index
    spaced: Vec<bool>,
    index: usize,
}

/// Tokenize and parse every statement of `sql`
pub fn parse_sql(dialect: &Dialect, sql: &str) -> SqlResult<Vec<Statement>> {
    let tokens = Tokenizer::new(dialect).tokenize(sql)?;
    Parser::new(sql, tokens, dialect).parse_statements()
}

impl<'a> Parser<'a> {
    pub fn new(sql: &'a str, raw: Vec<Token>, dialect: &'a Dialect) -> Self {
        let mut tokens = Vec::with_capacity(raw.len());
        let mut spaced = Vec::with_capacity(raw.len());
        let mut pending_space = false;
        for token in raw {
            if token.is_whitespace() {
                pending_space = true;
                continue;
            }
            spaced.push(pending_space);
            tokens.push(token);
            pending_space = false;
        }
        Self {
            sql,
            dialect,
            tokens,
            spaced,
            index: 0,
        }
    }

    /// Parse statements separated by `;`
    pub fn parse_statements(&mut self) -> SqlResult<Vec<Statement>> {
        let mut statements = Vec::new();
        loop {
            while self.eat(TokenKind::Semicolon) {}
            if self.peek().is_none() {
                break;
            }
            statements.push(self.parse_statement()?);
            if self.peek().is_some() && !self.eat(TokenKind::Semicolon) {
                return Err(self.unexpected("end of statement"));
            }
        }
        if statements.is_empty() {
            return Err(SqlError::EmptySql);
        }
        Ok(statements)
    }

    pub fn parse_statement(&mut self) -> SqlResult<Statement> {
        let Some(first) = self.peek() else {
            return Err(SqlError::EmptySql);
        };
        if first.kind.is_command() {
            return Ok(self.parse_command());
        }
        if first.kind == TokenKind::LParen || self.is_kw("SELECT") || self.is_kw("WITH") {
            return Ok(Statement::Query(Box::new(self.parse_query()?)));
        }
        if self.is_kw("CREATE") {
            return self.parse_create();
        }
        if self.is_kw("DELETE") {
            return self.parse_delete();
        }
        if self.is_kw("INSERT") {
            return self.parse_insert();
        }
        Ok(self.parse_command())
    }

    // ---- cursor ----

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.index)
    }

    fn peek_nth(&self, n: usize) -> Option<&Token> {
        self.tokens.get(self.index + n)
    }

    fn peek_kind(&self) -> Option<TokenKind> {
        self.peek().map(|t| t.kind)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.index).cloned();
        if token.is_some() {
            self.index += 1;
        }
        token
    }

    fn is_kw(&self, keyword: &str) -> bool {
        self.peek().is_some_and(|t| t.is_word(keyword))
    }

    fn is_nth_kw(&self, n: usize, keyword: &str) -> bool {
        self.peek_nth(n).is_some_and(|t| t.is_word(keyword))
    }

    fn eat_kw(&mut self, keyword: &str) -> bool {
        if self.is_kw(keyword) {
            self.index += 1;
            true
        } else {
            false
        }
    }

    fn expect_kw(&mut self, keyword: &str) -> SqlResult<()> {
        if self.eat_kw(keyword) {
            Ok(())
        } else {
            Err(self.unexpected(keyword))
        }
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.peek_kind() == Some(kind) {
            self.index += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: TokenKind, expected: &str) -> SqlResult<Token> {
        if self.peek_kind() == Some(kind) {
            if let Some(token) = self.advance() {
                return Ok(token);
            }
        }
        Err(self.unexpected(expected))
    }

    fn eat_operator(&mut self, op: &str) -> bool {
        let matched = self
            .peek()
            .is_some_and(|t| t.kind == TokenKind::Operator && t.text == op);
        if matched {
            self.index += 1;
        }
        matched
    }

    fn error(&self, message: impl Into<String>) -> SqlError {
        let span = self
            .peek()
            .or_else(|| self.tokens.last())
            .map(|t| t.span)
            .unwrap_or_default();
        SqlError::ParseError {
            message: message.into(),
            line: span.line,
            column: span.column,
        }
    }

    fn unexpected(&self, expected: &str) -> SqlError {
        match self.peek() {
            Some(t) => self.error(format!("Expected {expected}, found '{}'", t.text)),
            None => self.error(format!("Expected {expected}, found end of input")),
        }
    }

    // ---- statements ----

    /// Carry the statement through verbatim up to the next top-level `;`
    fn parse_command(&mut self) -> Statement {
        let start = self.peek().map(|t| t.span.start).unwrap_or(self.sql.len());
        let keyword = self
            .peek()
            .map(|t| normalize_keyword(&t.text))
            .unwrap_or_default();
        let mut depth = 0usize;
        while let Some(token) = self.peek() {
            match token.kind {
                TokenKind::Semicolon if depth == 0 => break,
                TokenKind::LParen => depth += 1,
                TokenKind::RParen => depth = depth.saturating_sub(1),
                _ => {}
            }
            self.index += 1;
        }
        let end = self.peek().map(|t| t.span.start).unwrap_or(self.sql.len());
        Statement::Command {
            keyword,
            body: slice(self.sql, start, end).trim_end().to_string(),
        }
    }

    fn parse_create(&mut self) -> SqlResult<Statement> {
        let checkpoint = self.index;
        self.expect_kw("CREATE")?;
        let or_replace = self.eat_kw("OR") && {
            self.expect_kw("REPLACE")?;
            true
        };
        let mut create = CreateTable {
            kind: CreateKind::Table,
            or_replace,
            temporary: false,
            transient: false,
            external: false,
            unique: false,
            materialized: false,
            if_not_exists: false,
            name: ObjectName(vec![]),
            columns: vec![],
            properties: vec![],
            query: None,
        };
        loop {
            if self.eat_kw("LOCAL") || self.eat_kw("GLOBAL") {
                continue;
            }
            if self.eat_kw("TEMPORARY") || self.eat_kw("TEMP") || self.eat_kw("VOLATILE") {
                create.temporary = true;
            } else if self.eat_kw("TRANSIENT") {
                create.transient = true;
            } else if self.eat_kw("EXTERNAL") {
                create.external = true;
            } else if self.eat_kw("UNIQUE") {
                create.unique = true;
            } else if self.eat_kw("MATERIALIZED") {
                create.materialized = true;
            } else {
                break;
            }
        }
        if self.eat_kw("TABLE") {
            create.kind = CreateKind::Table;
        } else if self.eat_kw("VIEW") {
            create.kind = CreateKind::View;
        } else {
            self.index = checkpoint;
            return Ok(self.parse_command());
        }
        if self.eat_kw("IF") {
            self.expect_kw("NOT")?;
            self.expect_kw("EXISTS")?;
            create.if_not_exists = true;
        }
        create.name = self.parse_object_name()?;

        if self.eat(TokenKind::LParen) {
            loop {
                create.columns.push(self.parse_column_def()?);
                if !self.eat(TokenKind::Comma) {
                    break;
                }
            }
            self.expect(TokenKind::RParen, "')'")?;
        }
        create.properties = self.parse_properties()?;
        if self.eat_kw("AS") {
            create.query = Some(Box::new(self.parse_query()?));
        }
        Ok(Statement::CreateTable(Box::new(create)))
    }

    fn parse_properties(&mut self) -> SqlResult<Vec<Property>> {
        let mut properties = Vec::new();
        loop {
            if self.peek().is_none()
                || self.is_kw("AS")
                || self.peek_kind() == Some(TokenKind::Semicolon)
            {
                break;
            }
            if self.eat_kw("CLUSTER") {
                self.expect_kw("BY")?;
                self.expect(TokenKind::LParen, "'('")?;
                let exprs = self.parse_expr_list()?;
                self.expect(TokenKind::RParen, "')'")?;
                properties.push(Property {
                    key: "CLUSTER BY".to_string(),
                    value: Some(Expr::function("", exprs)),
                });
            } else if self.is_kw("COPY") && self.is_nth_kw(1, "GRANTS") {
                self.index += 2;
                properties.push(Property {
                    key: "COPY GRANTS".to_string(),
                    value: None,
                });
            } else if self.peek_kind() == Some(TokenKind::Identifier)
                && self
                    .peek_nth(1)
                    .is_some_and(|t| t.kind == TokenKind::Operator && t.text == "=")
            {
                let key = self.parse_ident()?.value.to_uppercase();
                self.index += 1;
                let value = self.parse_primary()?;
                properties.push(Property {
                    key,
                    value: Some(value),
                });
            } else {
                return Err(self.unexpected("table property"));
            }
            self.eat(TokenKind::Comma);
        }
        Ok(properties)
    }

    fn parse_column_def(&mut self) -> SqlResult<ColumnDef> {
        let name = self.parse_ident()?;
        let data_type = self.parse_data_type()?;
        let mut constraints = Vec::new();
        loop {
            if self.eat_kw("NOT") {
                self.expect_kw("NULL")?;
                constraints.push(ColumnConstraint::NotNull);
            } else if self.eat_kw("NULL") {
                constraints.push(ColumnConstraint::Null);
            } else if self.eat_kw("PRIMARY") {
                self.expect_kw("KEY")?;
                constraints.push(ColumnConstraint::PrimaryKey);
            } else if self.eat_kw("UNIQUE") {
                constraints.push(ColumnConstraint::Unique);
            } else if self.eat_kw("DEFAULT") {
                constraints.push(ColumnConstraint::Default(self.parse_unary()?));
            } else if self.eat_kw("COMMENT") {
                let text = self.expect(TokenKind::String, "comment string")?.text;
                constraints.push(ColumnConstraint::Comment(text));
            } else if self.eat_kw("COLLATE") {
                let text = self.expect(TokenKind::String, "collation string")?.text;
                constraints.push(ColumnConstraint::Collate(text));
            } else if self.eat_kw("AUTOINCREMENT") || self.eat_kw("IDENTITY") {
                constraints.push(ColumnConstraint::Identity(self.parse_identity_args()?));
            } else {
                break;
            }
        }
        Ok(ColumnDef {
            name,
            data_type,
            constraints,
        })
    }

    fn parse_identity_args(&mut self) -> SqlResult<Option<(String, String)>> {
        if self.eat(TokenKind::LParen) {
            let start = self.expect(TokenKind::Number, "identity start")?.text;
            self.expect(TokenKind::Comma, "','")?;
            let step = self.expect(TokenKind::Number, "identity step")?.text;
            self.expect(TokenKind::RParen, "')'")?;
            return Ok(Some((start, step)));
        }
        if self.eat_kw("START") {
            let start = self.expect(TokenKind::Number, "identity start")?.text;
            self.expect_kw("INCREMENT")?;
            let step = self.expect(TokenKind::Number, "identity step")?.text;
            return Ok(Some((start, step)));
        }
        Ok(None)
    }

    fn parse_delete(&mut self) -> SqlResult<Statement> {
        self.expect_kw("DELETE")?;
        let mut tables = Vec::new();
        if !self.is_kw("FROM") {
            loop {
                tables.push(self.parse_object_name()?);
                if !self.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect_kw("FROM")?;
        let this = self.parse_relation()?;
        let mut using = Vec::new();
        if self.eat_kw("USING") {
            loop {
                using.push(self.parse_relation()?);
                if !self.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        let selection = if self.eat_kw("WHERE") {
            Some(self.parse_expr()?)
        } else {
            None
        };
        let returning = if self.eat_kw("RETURNING") {
            self.parse_expr_list()?
        } else {
            vec![]
        };
        let limit = if self.eat_kw("LIMIT") {
            Some(self.parse_expr()?)
        } else {
            None
        };
        Ok(Statement::Delete(Box::new(Delete {
            tables,
            this,
            using,
            selection,
            returning,
            limit,
        })))
    }

    fn parse_insert(&mut self) -> SqlResult<Statement> {
        self.expect_kw("INSERT")?;
        let overwrite = self.eat_kw("OVERWRITE");
        if !self.eat_kw("INTO") && !overwrite {
            return Err(self.unexpected("INTO"));
        }
        self.eat_kw("TABLE");
        let table = self.parse_object_name()?;
        let mut columns = Vec::new();
        if self.peek_kind() == Some(TokenKind::LParen)
            && !self.is_nth_kw(1, "SELECT")
            && !self.is_nth_kw(1, "WITH")
        {
            self.index += 1;
            columns = self.parse_ident_list()?;
            self.expect(TokenKind::RParen, "')'")?;
        }
        let source = if self.eat_kw("VALUES") {
            let mut rows = Vec::new();
            loop {
                self.expect(TokenKind::LParen, "'('")?;
                rows.push(self.parse_expr_list()?);
                self.expect(TokenKind::RParen, "')'")?;
                if !self.eat(TokenKind::Comma) {
                    break;
                }
            }
            InsertSource::Values(rows)
        } else {
            InsertSource::Query(Box::new(self.parse_query()?))
        };
        Ok(Statement::Insert(Box::new(Insert {
            overwrite,
            table,
            columns,
            source,
        })))
    }

    // ---- queries ----

    pub fn parse_query(&mut self) -> SqlResult<Query> {
        let mut with = Vec::new();
        if self.eat_kw("WITH") {
            self.eat_kw("RECURSIVE");
            loop {
                let name = self.parse_ident()?;
                self.expect_kw("AS")?;
                self.expect(TokenKind::LParen, "'('")?;
                let query = self.parse_query()?;
                self.expect(TokenKind::RParen, "')'")?;
                with.push(Cte { name, query });
                if !self.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        let body = self.parse_set_expr()?;
        let order_by = if self.eat(TokenKind::OrderBy) {
            self.parse_order_by_list()?
        } else {
            vec![]
        };
        let limit = if self.eat_kw("LIMIT") {
            Some(self.parse_expr()?)
        } else {
            None
        };
        let offset = if self.eat_kw("OFFSET") {
            Some(self.parse_expr()?)
        } else {
            None
        };
        Ok(Query {
            with,
            body,
            order_by,
            limit,
            offset,
        })
    }

    fn parse_set_expr(&mut self) -> SqlResult<SetExpr> {
        let mut left = self.parse_set_operand()?;
        loop {
            let op = if self.eat_kw("UNION") {
                SetOperator::Union
            } else if self.eat_kw("EXCEPT") || self.eat_kw("MINUS") {
                SetOperator::Except
            } else if self.eat_kw("INTERSECT") {
                SetOperator::Intersect
            } else {
                break;
            };
            let all = self.eat_kw("ALL");
            if !all {
                self.eat_kw("DISTINCT");
            }
            let right = self.parse_set_operand()?;
            left = SetExpr::SetOperation {
                op,
                all,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn parse_set_operand(&mut self) -> SqlResult<SetExpr> {
        if self.eat(TokenKind::LParen) {
            let query = self.parse_query()?;
            self.expect(TokenKind::RParen, "')'")?;
            return Ok(SetExpr::Query(Box::new(query)));
        }
        Ok(SetExpr::Select(Box::new(self.parse_select()?)))
    }

    fn parse_select(&mut self) -> SqlResult<Select> {
        self.expect_kw("SELECT")?;
        let distinct = self.eat_kw("DISTINCT");
        if !distinct {
            self.eat_kw("ALL");
        }
        let mut projection = Vec::new();
        loop {
            projection.push(self.parse_select_item()?);
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }

        let mut from = None;
        let mut joins = Vec::new();
        if self.eat_kw("FROM") {
            from = Some(self.parse_relation()?);
            joins = self.parse_joins()?;
        }
        let selection = if self.eat_kw("WHERE") {
            Some(self.parse_expr()?)
        } else {
            None
        };
        let group_by = if self.eat(TokenKind::GroupBy) {
            self.parse_expr_list()?
        } else {
            vec![]
        };
        let having = if self.eat_kw("HAVING") {
            Some(self.parse_expr()?)
        } else {
            None
        };
        let qualify = if self.eat_kw("QUALIFY") {
            Some(self.parse_expr()?)
        } else {
            None
        };
        Ok(Select {
            distinct,
            projection,
            from,
            joins,
            selection,
            group_by,
            having,
            qualify,
        })
    }

    fn parse_select_item(&mut self) -> SqlResult<Expr> {
        let expr = self.parse_expr()?;
        match self.parse_optional_alias()? {
            Some(alias) => Ok(Expr::Alias {
                expr: Box::new(expr),
                alias,
            }),
            None => Ok(expr),
        }
    }

    fn parse_optional_alias(&mut self) -> SqlResult<Option<Ident>> {
        if self.eat_kw("AS") {
            return self.parse_ident().map(Some);
        }
        match self.peek() {
            Some(t) if t.kind == TokenKind::QuotedIdentifier => self.parse_ident().map(Some),
            Some(t)
                if t.kind == TokenKind::Identifier
                    && !RESERVED.iter().any(|kw| t.text.eq_ignore_ascii_case(kw)) =>
            {
                self.parse_ident().map(Some)
            }
            _ => Ok(None),
        }
    }

    fn parse_table_alias(&mut self) -> SqlResult<Option<TableAlias>> {
        let Some(name) = self.parse_optional_alias()? else {
            return Ok(None);
        };
        let mut columns = Vec::new();
        if self.eat(TokenKind::LParen) {
            columns = self.parse_ident_list()?;
            self.expect(TokenKind::RParen, "')'")?;
        }
        Ok(Some(TableAlias { name, columns }))
    }

    fn parse_relation(&mut self) -> SqlResult<Relation> {
        if self.eat_kw("LATERAL") {
            let this = if self.peek_kind() == Some(TokenKind::LParen) {
                self.parse_primary()?
            } else {
                self.parse_function_call()?
            };
            let alias = self.parse_table_alias()?;
            return Ok(Relation::Lateral(Box::new(Lateral { this, alias })));
        }
        if self.is_kw("TABLE") && self.peek_nth(1).is_some_and(|t| t.kind == TokenKind::LParen) {
            self.index += 2;
            let expr = self.parse_expr()?;
            self.expect(TokenKind::RParen, "')'")?;
            let alias = self.parse_table_alias()?;
            return Ok(Relation::TableFunction { expr, alias });
        }
        if self.eat(TokenKind::LParen) {
            let query = self.parse_query()?;
            self.expect(TokenKind::RParen, "')'")?;
            let alias = self.parse_table_alias()?;
            return Ok(Relation::Derived {
                query: Box::new(query),
                alias,
            });
        }
        let name = self.parse_object_name()?;
        let alias = self.parse_table_alias()?;
        Ok(Relation::Table { name, alias })
    }

    fn parse_joins(&mut self) -> SqlResult<Vec<Join>> {
        let mut joins = Vec::new();
        loop {
            if self.eat(TokenKind::Comma) {
                joins.push(Join::comma(self.parse_relation()?));
                continue;
            }
            let checkpoint = self.index;
            let natural = self.eat_kw("NATURAL");
            let side = if self.eat_kw("LEFT") {
                Some(JoinSide::Left)
            } else if self.eat_kw("RIGHT") {
                Some(JoinSide::Right)
            } else if self.eat_kw("FULL") {
                Some(JoinSide::Full)
            } else {
                None
            };
            let kind = if self.eat_kw("INNER") {
                Some(JoinKind::Inner)
            } else if self.eat_kw("OUTER") {
                Some(JoinKind::Outer)
            } else if self.eat_kw("CROSS") {
                Some(JoinKind::Cross)
            } else if self.eat_kw("SEMI") {
                Some(JoinKind::Semi)
            } else if self.eat_kw("ANTI") {
                Some(JoinKind::Anti)
            } else {
                None
            };
            if !self.eat_kw("JOIN") {
                if self.index != checkpoint {
                    return Err(self.unexpected("JOIN"));
                }
                break;
            }
            let relation = self.parse_relation()?;
            let constraint = if self.eat_kw("ON") {
                JoinConstraint::On(self.parse_expr()?)
            } else if self.eat_kw("USING") {
                self.expect(TokenKind::LParen, "'('")?;
                let columns = self.parse_ident_list()?;
                self.expect(TokenKind::RParen, "')'")?;
                JoinConstraint::Using(columns)
            } else {
                JoinConstraint::None
            };
            joins.push(Join {
                relation,
                natural,
                side,
                kind,
                constraint,
            });
        }
        Ok(joins)
    }

    fn parse_order_by_list(&mut self) -> SqlResult<Vec<OrderByExpr>> {
        let mut items = Vec::new();
        loop {
            let expr = self.parse_expr()?;
            let asc = if self.eat_kw("ASC") {
                Some(true)
            } else if self.eat_kw("DESC") {
                Some(false)
            } else {
                None
            };
            let nulls_first = if self.eat_kw("NULLS") {
                if self.eat_kw("FIRST") {
                    Some(true)
                } else {
                    self.expect_kw("LAST")?;
                    Some(false)
                }
            } else {
                None
            };
            items.push(OrderByExpr {
                expr,
                asc,
                nulls_first,
            });
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        Ok(items)
    }

    // ---- names ----

    fn parse_ident(&mut self) -> SqlResult<Ident> {
        match self.peek_kind() {
            Some(TokenKind::Identifier) | Some(TokenKind::Text) => {
                let token = self.advance().ok_or_else(|| self.unexpected("identifier"))?;
                Ok(Ident::new(token.text))
            }
            Some(TokenKind::QuotedIdentifier) => {
                let token = self.advance().ok_or_else(|| self.unexpected("identifier"))?;
                Ok(Ident::quoted(token.text))
            }
            _ => Err(self.unexpected("identifier")),
        }
    }

    fn parse_ident_list(&mut self) -> SqlResult<Vec<Ident>> {
        let mut idents = vec![self.parse_ident()?];
        while self.eat(TokenKind::Comma) {
            idents.push(self.parse_ident()?);
        }
        Ok(idents)
    }

    fn parse_object_name(&mut self) -> SqlResult<ObjectName> {
        let mut parts = vec![self.parse_ident()?];
        while self.eat(TokenKind::Dot) {
            parts.push(self.parse_ident()?);
        }
        Ok(ObjectName(parts))
    }

    // ---- data types ----

    fn parse_data_type(&mut self) -> SqlResult<DataType> {
        let token = self
            .advance()
            .ok_or_else(|| self.error("Expected data type, found end of input"))?;
        if token.kind == TokenKind::Text {
            return Ok(DataType::new(TypeKind::Text));
        }
        if token.kind != TokenKind::Identifier {
            return Err(self.error(format!("Expected data type, found '{}'", token.text)));
        }

        let upper = token.text.to_uppercase();
        let kind = match upper.as_str() {
            "DOUBLE" => {
                self.eat_kw("PRECISION");
                Some(TypeKind::Double)
            }
            "CHARACTER" if self.eat_kw("VARYING") => Some(TypeKind::Varchar),
            "TIMESTAMP" if self.is_kw("WITH") || self.is_kw("WITHOUT") => {
                let with = self.eat_kw("WITH");
                if !with {
                    self.expect_kw("WITHOUT")?;
                }
                let local = self.eat_kw("LOCAL");
                self.expect_kw("TIME")?;
                self.expect_kw("ZONE")?;
                Some(match (with, local) {
                    (false, _) => TypeKind::Timestamp,
                    (true, true) => TypeKind::TimestampLtz,
                    (true, false) => TypeKind::TimestampTz,
                })
            }
            other => type_kind(other),
        };

        let mut data_type = match kind {
            Some(kind) => DataType::new(kind),
            None => DataType::other(token.text),
        };
        if self.eat(TokenKind::LParen) {
            data_type.params = self.parse_type_params()?;
        }
        Ok(data_type)
    }

    /// Raw comma separated parameters up to the matching `)`
    fn parse_type_params(&mut self) -> SqlResult<Vec<String>> {
        let mut params = Vec::new();
        let mut start = self.peek().map(|t| t.span.start);
        let mut depth = 0usize;
        loop {
            let token = self
                .advance()
                .ok_or_else(|| self.error("Unterminated type parameters"))?;
            match token.kind {
                TokenKind::LParen => depth += 1,
                TokenKind::RParen if depth > 0 => depth -= 1,
                TokenKind::RParen | TokenKind::Comma if depth == 0 => {
                    if let Some(from) = start {
                        let text = slice(self.sql, from, token.span.start).trim();
                        if !text.is_empty() {
                            params.push(text.to_string());
                        }
                    }
                    if token.kind == TokenKind::RParen {
                        return Ok(params);
                    }
                    start = self.peek().map(|t| t.span.start);
                }
                _ => {}
            }
        }
    }

    // ---- expressions ----

    pub fn parse_expr(&mut self) -> SqlResult<Expr> {
        self.parse_or()
    }

    fn parse_expr_list(&mut self) -> SqlResult<Vec<Expr>> {
        let mut exprs = vec![self.parse_expr()?];
        while self.eat(TokenKind::Comma) {
            exprs.push(self.parse_expr()?);
        }
        Ok(exprs)
    }

    fn parse_or(&mut self) -> SqlResult<Expr> {
        let mut left = self.parse_and()?;
        while self.eat_kw("OR") {
            let right = self.parse_and()?;
            left = binary(left, BinaryOp::Or, right);
        }
        Ok(left)
    }

    fn parse_and(&mut self) -> SqlResult<Expr> {
        let mut left = self.parse_not()?;
        while self.eat_kw("AND") {
            let right = self.parse_not()?;
            left = binary(left, BinaryOp::And, right);
        }
        Ok(left)
    }

    fn parse_not(&mut self) -> SqlResult<Expr> {
        if self.eat_kw("NOT") {
            let expr = self.parse_not()?;
            return Ok(Expr::Unary {
                op: UnaryOp::Not,
                expr: Box::new(expr),
            });
        }
        self.parse_comparison()
    }

    fn parse_comparison(&mut self) -> SqlResult<Expr> {
        let mut left = self.parse_additive()?;
        loop {
            if let Some(op) = self.comparison_op() {
                let right = self.parse_additive()?;
                left = binary(left, op, right);
                continue;
            }
            if self.eat_kw("IS") {
                let negated = self.eat_kw("NOT");
                self.expect_kw("NULL")?;
                left = Expr::IsNull {
                    expr: Box::new(left),
                    negated,
                };
                continue;
            }
            let negated = self.is_kw("NOT")
                && ["IN", "BETWEEN", "LIKE", "ILIKE"]
                    .iter()
                    .any(|kw| self.is_nth_kw(1, kw));
            if negated {
                self.index += 1;
            }
            if self.eat_kw("IN") {
                left = self.parse_in(left, negated)?;
            } else if self.eat_kw("BETWEEN") {
                let low = self.parse_additive()?;
                self.expect_kw("AND")?;
                let high = self.parse_additive()?;
                left = Expr::Between {
                    expr: Box::new(left),
                    low: Box::new(low),
                    high: Box::new(high),
                    negated,
                };
            } else if self.eat_kw("LIKE") {
                let op = if negated { BinaryOp::NotLike } else { BinaryOp::Like };
                let right = self.parse_additive()?;
                left = binary(left, op, right);
            } else if self.eat_kw("ILIKE") {
                let op = if negated { BinaryOp::NotILike } else { BinaryOp::ILike };
                let right = self.parse_additive()?;
                left = binary(left, op, right);
            } else {
                break;
            }
        }
        Ok(left)
    }

    fn comparison_op(&mut self) -> Option<BinaryOp> {
        let op = match self.peek() {
            Some(t) if t.kind == TokenKind::Operator => match t.text.as_str() {
                "=" | "==" => BinaryOp::Eq,
                "<>" | "!=" => BinaryOp::NotEq,
                "<" => BinaryOp::Lt,
                "<=" => BinaryOp::LtEq,
                ">" => BinaryOp::Gt,
                ">=" => BinaryOp::GtEq,
                _ => return None,
            },
            _ => return None,
        };
        self.index += 1;
        Some(op)
    }

    fn parse_in(&mut self, expr: Expr, negated: bool) -> SqlResult<Expr> {
        self.expect(TokenKind::LParen, "'('")?;
        if self.is_kw("SELECT") || self.is_kw("WITH") {
            let query = self.parse_query()?;
            self.expect(TokenKind::RParen, "')'")?;
            return Ok(Expr::InSubquery {
                expr: Box::new(expr),
                query: Box::new(query),
                negated,
            });
        }
        let list = self.parse_expr_list()?;
        self.expect(TokenKind::RParen, "')'")?;
        Ok(Expr::InList {
            expr: Box::new(expr),
            list,
            negated,
        })
    }

    fn parse_additive(&mut self) -> SqlResult<Expr> {
        let mut left = self.parse_multiplicative()?;
        loop {
            let op = if self.eat_operator("+") {
                BinaryOp::Plus
            } else if self.eat_operator("-") {
                BinaryOp::Minus
            } else if self.eat_operator("||") {
                BinaryOp::Concat
            } else {
                break;
            };
            let right = self.parse_multiplicative()?;
            left = binary(left, op, right);
        }
        Ok(left)
    }

    fn parse_multiplicative(&mut self) -> SqlResult<Expr> {
        let mut left = self.parse_unary()?;
        loop {
            let op = if self.eat(TokenKind::Star) {
                BinaryOp::Multiply
            } else if self.eat_operator("/") {
                BinaryOp::Divide
            } else if self.eat_operator("%") {
                BinaryOp::Modulo
            } else {
                break;
            };
            let right = self.parse_unary()?;
            left = binary(left, op, right);
        }
        Ok(left)
    }

    fn parse_unary(&mut self) -> SqlResult<Expr> {
        let op = if self.eat_operator("-") {
            UnaryOp::Minus
        } else if self.eat_operator("+") {
            UnaryOp::Plus
        } else {
            return self.parse_postfix();
        };
        let expr = self.parse_unary()?;
        Ok(Expr::Unary {
            op,
            expr: Box::new(expr),
        })
    }

    /// Primary expression followed by `::`, `:`, `[..]` and `.field` operators
    fn parse_postfix(&mut self) -> SqlResult<Expr> {
        let mut expr = self.parse_primary()?;
        loop {
            match self.peek_kind() {
                Some(TokenKind::DoubleColon) => {
                    self.index += 1;
                    let data_type = self.parse_data_type()?;
                    expr = Expr::Cast {
                        expr: Box::new(expr),
                        data_type,
                        style: CastStyle::DoubleColon,
                    };
                }
                Some(TokenKind::Colon) => {
                    self.index += 1;
                    let path = self.parse_path_segment()?;
                    expr = self.resolve_colon_path(expr, path);
                }
                Some(TokenKind::LBracket) => {
                    self.index += 1;
                    let index = self.parse_expr_list()?;
                    self.expect(TokenKind::RBracket, "']'")?;
                    expr = Expr::Subscript {
                        this: Box::new(expr),
                        index,
                    };
                }
                Some(TokenKind::Dot) => {
                    self.index += 1;
                    let field = self.parse_ident()?;
                    expr = Expr::Dot {
                        this: Box::new(expr),
                        field,
                    };
                }
                _ => break,
            }
        }
        Ok(expr)
    }

    fn parse_path_segment(&mut self) -> SqlResult<Expr> {
        let token = self
            .advance()
            .ok_or_else(|| self.error("Expected path after ':', found end of input"))?;
        match token.kind {
            TokenKind::Number => Ok(Expr::number(token.text)),
            TokenKind::Identifier
            | TokenKind::QuotedIdentifier
            | TokenKind::String
            | TokenKind::Text => Ok(Expr::string(token.text)),
            _ => Err(self.error(format!("Expected path after ':', found '{}'", token.text))),
        }
    }

    /// Text of the table alias following the next `FROM` of the current
    /// statement, found on a copy of the cursor
    fn table_alias_ahead(&self) -> Option<&str> {
        let mut cursor = self.index;
        while cursor < self.tokens.len() {
            if self.tokens[cursor].kind == TokenKind::Semicolon {
                return None;
            }
            if self.tokens[cursor].is_word("FROM") {
                let alias = self.tokens.get(cursor + 2)?;
                if alias.kind == TokenKind::Dot {
                    return self.tokens.get(cursor + 4).map(|t| t.text.as_str());
                }
                return Some(alias.text.as_str());
            }
            cursor += 1;
        }
        None
    }

    /// Decide how `base:path` renders, depending on whether the row binder
    /// of a lateral FLATTEN is involved
    fn resolve_colon_path(&self, base: Expr, path: Expr) -> Expr {
        let alias = self.table_alias_ahead();
        let base_is_path = matches!(base, Expr::Subscript { .. })
            || matches!(base.as_dialect(), Some(DialectExpr::Bracket { .. }));

        if !base_is_path && base.name().eq_ignore_ascii_case(ROW_BINDER) {
            if let Expr::Column(column) = &base {
                if let Some(qualifier) = column.qualifier() {
                    if Some(column.table()) != alias {
                        return DialectExpr::Bracket {
                            this: Expr::Column(qualifier),
                            path: vec![path],
                        }
                        .into();
                    }
                }
            }
            // A binder qualified with the FROM alias keeps its base. So does a
            // bare `value:x`, which has no table to promote; it renders `value.x`.
            return DialectExpr::Bracket {
                this: base,
                path: vec![path],
            }
            .into();
        }

        let path_is_binder =
            matches!(path, Expr::Literal(_)) && path.name().eq_ignore_ascii_case(ROW_BINDER);
        let bracket_on_binder = match base.as_dialect() {
            Some(DialectExpr::Bracket { this, .. }) => {
                base.name().eq_ignore_ascii_case(ROW_BINDER)
                    || alias.is_some_and(|a| this.table().eq_ignore_ascii_case(a))
            }
            _ => false,
        };
        if path_is_binder || bracket_on_binder {
            return DialectExpr::Bracket {
                this: base,
                path: vec![path],
            }
            .into();
        }
        Expr::Subscript {
            this: Box::new(base),
            index: vec![path],
        }
    }

    fn parse_primary(&mut self) -> SqlResult<Expr> {
        let Some(token) = self.peek().cloned() else {
            return Err(self.error("Expected expression, found end of input"));
        };
        match token.kind {
            TokenKind::Number => {
                self.index += 1;
                Ok(Expr::number(token.text))
            }
            TokenKind::String => {
                self.index += 1;
                Ok(Expr::string(token.text))
            }
            TokenKind::DollarString => {
                self.index += 1;
                let inner = token
                    .text
                    .strip_prefix("$$")
                    .and_then(|t| t.strip_suffix("$$"))
                    .unwrap_or(&token.text);
                Ok(Expr::string(inner))
            }
            TokenKind::Parameter => self.parse_parameter(),
            TokenKind::Star => {
                self.index += 1;
                Ok(Expr::Star(None))
            }
            TokenKind::LParen => self.parse_parenthesized(),
            TokenKind::QuotedIdentifier | TokenKind::Text => self.parse_column(),
            TokenKind::Identifier => self.parse_word(&token),
            _ => Err(self.error(format!("Unexpected token '{}'", token.text))),
        }
    }

    fn parse_parenthesized(&mut self) -> SqlResult<Expr> {
        if self.is_lambda_params() {
            self.index += 1;
            let params = self.parse_ident_list()?;
            self.expect(TokenKind::RParen, "')'")?;
            self.expect(TokenKind::Arrow, "'->'")?;
            let body = self.parse_expr()?;
            return Ok(Expr::Lambda {
                params,
                body: Box::new(body),
            });
        }
        self.expect(TokenKind::LParen, "'('")?;
        if self.is_kw("SELECT") || self.is_kw("WITH") {
            let query = self.parse_query()?;
            self.expect(TokenKind::RParen, "')'")?;
            return Ok(Expr::Subquery(Box::new(query)));
        }
        let expr = self.parse_expr()?;
        self.expect(TokenKind::RParen, "')'")?;
        Ok(Expr::Paren(Box::new(expr)))
    }

    /// `(a, b) ->` ahead of the cursor
    fn is_lambda_params(&self) -> bool {
        let mut cursor = self.index + 1;
        loop {
            match self.tokens.get(cursor).map(|t| t.kind) {
                Some(TokenKind::Identifier) | Some(TokenKind::QuotedIdentifier) => cursor += 1,
                _ => return false,
            }
            match self.tokens.get(cursor).map(|t| t.kind) {
                Some(TokenKind::Comma) => cursor += 1,
                Some(TokenKind::RParen) => {
                    return self.tokens.get(cursor + 1).map(|t| t.kind) == Some(TokenKind::Arrow)
                }
                _ => return false,
            }
        }
    }

    fn parse_word(&mut self, token: &Token) -> SqlResult<Expr> {
        let next = self.peek_nth(1).map(|t| t.kind);
        let upper = token.text.to_uppercase();
        match upper.as_str() {
            "NULL" => {
                self.index += 1;
                return Ok(Expr::Literal(Literal::Null));
            }
            "TRUE" | "FALSE" => {
                self.index += 1;
                return Ok(Expr::Literal(Literal::Boolean(upper == "TRUE")));
            }
            "CASE" => return self.parse_case(),
            "CAST" | "TRY_CAST" if next == Some(TokenKind::LParen) => return self.parse_cast(),
            "EXISTS" if next == Some(TokenKind::LParen) => {
                self.index += 2;
                let query = self.parse_query()?;
                self.expect(TokenKind::RParen, "')'")?;
                return Ok(Expr::Exists(Box::new(query)));
            }
            "CURRENT_TIMESTAMP" | "CURRENT_TIME" | "CURRENT_DATE"
                if next != Some(TokenKind::LParen) =>
            {
                self.index += 1;
                return Ok(match upper.as_str() {
                    "CURRENT_TIMESTAMP" => Expr::CurrentTimestamp,
                    "CURRENT_TIME" => Expr::CurrentTime,
                    _ => Expr::CurrentDate,
                });
            }
            _ => {}
        }
        match next {
            Some(TokenKind::LParen) => self.parse_function_call(),
            Some(TokenKind::Arrow) => {
                let param = self.parse_ident()?;
                self.index += 1;
                let body = self.parse_expr()?;
                Ok(Expr::Lambda {
                    params: vec![param],
                    body: Box::new(body),
                })
            }
            _ => self.parse_column(),
        }
    }

    fn parse_column(&mut self) -> SqlResult<Expr> {
        let mut parts = vec![self.parse_ident()?];
        while self.peek_kind() == Some(TokenKind::Dot) {
            match self.peek_nth(1).map(|t| t.kind) {
                Some(TokenKind::Star) => {
                    self.index += 2;
                    return Ok(Expr::Star(Some(Column { parts })));
                }
                Some(TokenKind::Identifier)
                | Some(TokenKind::QuotedIdentifier)
                | Some(TokenKind::Text) => {
                    self.index += 1;
                    parts.push(self.parse_ident()?);
                }
                _ => break,
            }
        }
        Ok(Expr::Column(Column { parts }))
    }

    fn parse_case(&mut self) -> SqlResult<Expr> {
        self.expect_kw("CASE")?;
        let operand = if self.is_kw("WHEN") {
            None
        } else {
            Some(Box::new(self.parse_expr()?))
        };
        let mut whens = Vec::new();
        while self.eat_kw("WHEN") {
            let condition = self.parse_expr()?;
            self.expect_kw("THEN")?;
            let result = self.parse_expr()?;
            whens.push(WhenThen { condition, result });
        }
        if whens.is_empty() {
            return Err(self.unexpected("WHEN"));
        }
        let else_result = if self.eat_kw("ELSE") {
            Some(Box::new(self.parse_expr()?))
        } else {
            None
        };
        self.expect_kw("END")?;
        Ok(Expr::Case {
            operand,
            whens,
            else_result,
        })
    }

    fn parse_cast(&mut self) -> SqlResult<Expr> {
        let style = if self.eat_kw("TRY_CAST") {
            CastStyle::TryCast
        } else {
            self.expect_kw("CAST")?;
            CastStyle::Cast
        };
        self.expect(TokenKind::LParen, "'('")?;
        let expr = self.parse_expr()?;
        self.expect_kw("AS")?;
        let data_type = self.parse_data_type()?;
        self.expect(TokenKind::RParen, "')'")?;
        Ok(Expr::Cast {
            expr: Box::new(expr),
            data_type,
            style,
        })
    }

    /// `$name` or `${name}`, with a suffix when nothing separates it
    fn parse_parameter(&mut self) -> SqlResult<Expr> {
        let token = self.expect(TokenKind::Parameter, "parameter")?;
        let bare = token.text.strip_prefix('$').unwrap_or(&token.text).to_string();
        let (name, wrapped) = if bare.is_empty() && self.eat(TokenKind::LBrace) {
            let name = self
                .advance()
                .ok_or_else(|| self.unexpected("parameter name"))?
                .text;
            self.expect(TokenKind::RBrace, "'}'")?;
            (name, true)
        } else {
            (bare, false)
        };

        let mut suffix = None;
        if !self.spaced.get(self.index).copied().unwrap_or(true) {
            match self.peek_kind() {
                Some(TokenKind::Dot)
                    if self.peek_nth(1).is_some_and(|t| t.kind == TokenKind::Identifier) =>
                {
                    self.index += 1;
                    suffix = self.advance().map(|t| format!(".{}", t.text));
                }
                Some(TokenKind::Identifier) | Some(TokenKind::Number) => {
                    suffix = self.advance().map(|t| t.text);
                }
                _ => {}
            }
        }
        Ok(DialectExpr::Parameter {
            name,
            wrapped,
            suffix,
        }
        .into())
    }

    fn parse_function_call(&mut self) -> SqlResult<Expr> {
        let name = self.parse_ident()?.value;
        self.expect(TokenKind::LParen, "'('")?;
        let mut args = Vec::new();
        if !self.eat(TokenKind::RParen) {
            if self.eat_kw("DISTINCT") {
                args.push(Expr::Distinct(self.parse_call_args()?));
            } else {
                args = self.parse_call_args()?;
            }
            if self.eat(TokenKind::OrderBy) {
                let order_by = self.parse_order_by_list()?;
                let last = args.pop().ok_or_else(|| self.error("ORDER BY without argument"))?;
                args.push(Expr::Order {
                    this: Box::new(last),
                    order_by,
                });
            }
            self.expect(TokenKind::RParen, "')'")?;
        }

        let upper = name.to_uppercase();
        let mut expr = match self.dialect.function_builder(&upper) {
            Some(build) => build(args)?,
            None => Expr::Function(Function { name, args }),
        };

        if self.eat(TokenKind::WithinGroup) {
            self.expect(TokenKind::LParen, "'('")?;
            if !self.eat(TokenKind::OrderBy) {
                return Err(self.unexpected("ORDER BY"));
            }
            let order_by = self.parse_order_by_list()?;
            self.expect(TokenKind::RParen, "')'")?;
            expr = Expr::WithinGroup {
                this: Box::new(expr),
                order_by,
            };
        }
        if self.eat_kw("OVER") {
            expr = self.parse_window(expr)?;
        }
        Ok(expr)
    }

    fn parse_call_args(&mut self) -> SqlResult<Vec<Expr>> {
        let mut args = Vec::new();
        loop {
            let is_kwarg = matches!(
                self.peek_kind(),
                Some(TokenKind::Identifier) | Some(TokenKind::QuotedIdentifier)
            ) && self.peek_nth(1).map(|t| t.kind) == Some(TokenKind::FatArrow);
            if is_kwarg {
                let name = self.parse_ident()?;
                self.index += 1;
                let value = self.parse_expr()?;
                args.push(Expr::Kwarg {
                    name,
                    value: Box::new(value),
                });
            } else {
                args.push(self.parse_expr()?);
            }
            if !self.eat(TokenKind::Comma) {
                return Ok(args);
            }
        }
    }

    fn parse_window(&mut self, this: Expr) -> SqlResult<Expr> {
        self.expect(TokenKind::LParen, "'('")?;
        let partition_by = if self.eat(TokenKind::PartitionBy) {
            self.parse_expr_list()?
        } else {
            vec![]
        };
        let order_by = if self.eat(TokenKind::OrderBy) {
            self.parse_order_by_list()?
        } else {
            vec![]
        };
        let mut frame = None;
        if self.is_kw("ROWS") || self.is_kw("RANGE") {
            let start = self.peek().map(|t| t.span.start).unwrap_or(self.sql.len());
            let mut depth = 0usize;
            while let Some(token) = self.peek() {
                match token.kind {
                    TokenKind::RParen if depth == 0 => break,
                    TokenKind::RParen => depth -= 1,
                    TokenKind::LParen => depth += 1,
                    _ => {}
                }
                self.index += 1;
            }
            let end = self.peek().map(|t| t.span.start).unwrap_or(self.sql.len());
            frame = Some(slice(self.sql, start, end).trim().to_string());
        }
        self.expect(TokenKind::RParen, "')'")?;
        Ok(Expr::Window {
            this: Box::new(this),
            partition_by,
            order_by,
            frame,
        })
    }
}

fn binary(left: Expr, op: BinaryOp, right: Expr) -> Expr {
    Expr::Binary {
        left: Box::new(left),
        op,
        right: Box::new(right),
    }
}

/// Canonical kind of a single-word type name
fn type_kind(name: &str) -> Option<TypeKind> {
    let kind = match name {
        "VARCHAR" | "STRING" | "VARCHAR2" => TypeKind::Varchar,
        "NVARCHAR" | "NVARCHAR2" => TypeKind::NVarchar,
        "CHAR" | "CHARACTER" | "NCHAR" => TypeKind::Char,
        "TEXT" => TypeKind::Text,
        "VARIANT" => TypeKind::Variant,
        "OBJECT" => TypeKind::Object,
        "ARRAY" => TypeKind::Array,
        "MAP" => TypeKind::Map,
        "STRUCT" => TypeKind::Struct,
        "BINARY" | "VARBINARY" => TypeKind::Binary,
        "BOOLEAN" | "BOOL" => TypeKind::Boolean,
        "TINYINT" | "BYTEINT" => TypeKind::TinyInt,
        "SMALLINT" => TypeKind::SmallInt,
        "INT" | "INTEGER" => TypeKind::Int,
        "BIGINT" => TypeKind::BigInt,
        "NUMBER" | "NUMERIC" | "DECIMAL" => TypeKind::Decimal,
        "FLOAT" | "FLOAT4" | "FLOAT8" | "REAL" => TypeKind::Float,
        "DOUBLE" => TypeKind::Double,
        "DATE" => TypeKind::Date,
        "TIME" => TypeKind::Time,
        "DATETIME" => TypeKind::DateTime,
        "TIMESTAMP" => TypeKind::Timestamp,
        "TIMESTAMP_NTZ" => TypeKind::TimestampNtz,
        "TIMESTAMP_LTZ" => TypeKind::TimestampLtz,
        "TIMESTAMP_TZ" => TypeKind::TimestampTz,
        "INTERVAL" => TypeKind::Interval,
        _ => return None,
    };
    Some(kind)
}

#[cfg(test)]
#[path = "parser_test.rs"]
mod tests;
