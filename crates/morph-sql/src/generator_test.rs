use super::*;
use crate::dialect::{base, databricks, snowflake};
use crate::parser::parse_sql;

/// Parse one Snowflake statement and render it for `target`
fn render(target: &Dialect, sql: &str) -> String {
    let statements = parse_sql(snowflake(), sql).unwrap();
    let diagnostics = Diagnostics::new();
    Generator::new(target, &diagnostics)
        .generate(&statements[0])
        .unwrap()
}

#[test]
fn test_select_round_trip() {
    assert_eq!(
        render(base(), "SELECT a b, count(*) FROM t x WHERE a > 1 GROUP BY a"),
        "SELECT a AS b, COUNT(*) FROM t AS x WHERE a > 1 GROUP BY a"
    );
}

#[test]
fn test_query_clauses() {
    assert_eq!(
        render(
            base(),
            "WITH c AS (SELECT 1 AS x) SELECT DISTINCT x FROM c ORDER BY x DESC LIMIT 10 OFFSET 5"
        ),
        "WITH c AS (SELECT 1 AS x) SELECT DISTINCT x FROM c ORDER BY x DESC LIMIT 10 OFFSET 5"
    );
    assert_eq!(
        render(base(), "SELECT a FROM t UNION ALL SELECT a FROM u"),
        "SELECT a FROM t UNION ALL SELECT a FROM u"
    );
}

#[test]
fn test_predicates() {
    assert_eq!(
        render(
            base(),
            "SELECT * FROM t WHERE a NOT IN (1, 2) AND b BETWEEN 1 AND 3 OR c IS NOT NULL"
        ),
        "SELECT * FROM t WHERE a NOT IN (1, 2) AND b BETWEEN 1 AND 3 OR c IS NOT NULL"
    );
    assert_eq!(
        render(base(), "SELECT CASE WHEN a = 1 THEN 'x' ELSE 'it''s' END"),
        "SELECT CASE WHEN a = 1 THEN 'x' ELSE 'it''s' END"
    );
}

#[test]
fn test_double_colon_cast_renders_as_cast() {
    assert_eq!(
        render(base(), "SELECT a::VARCHAR(10)"),
        "SELECT CAST(a AS VARCHAR(10))"
    );
}

#[test]
fn test_window_and_within_group() {
    assert_eq!(
        render(base(), "SELECT SUM(a) OVER (PARTITION BY b ORDER BY c)"),
        "SELECT SUM(a) OVER (PARTITION BY b ORDER BY c)"
    );
    assert_eq!(
        render(base(), "SELECT LISTAGG(a, ',') WITHIN GROUP (ORDER BY a)"),
        "SELECT LISTAGG(a, ',') WITHIN GROUP (ORDER BY a)"
    );
}

#[test]
fn test_joins() {
    assert_eq!(
        render(base(), "SELECT * FROM a LEFT JOIN b ON a.id = b.id, c JOIN d USING (id)"),
        "SELECT * FROM a LEFT JOIN b ON a.id = b.id, c JOIN d USING (id)"
    );
}

#[test]
fn test_base_lateral() {
    assert_eq!(
        render(base(), "SELECT * FROM t, LATERAL FLATTEN(input => t.v) f"),
        "SELECT * FROM t, LATERAL EXPLODE(input => t.v) AS f"
    );
}

#[test]
fn test_quoted_identifiers_follow_target() {
    assert_eq!(render(base(), r#"SELECT "My Col" FROM t"#), r#"SELECT "My Col" FROM t"#);
    assert_eq!(render(databricks(), r#"SELECT "My Col" FROM t"#), "SELECT `My Col` FROM t");
}

#[test]
fn test_parameter_sigil_follows_target() {
    assert_eq!(render(base(), "SELECT $foo"), "SELECT @foo");
    assert_eq!(render(snowflake(), "SELECT $foo"), "SELECT $foo");
    assert_eq!(render(snowflake(), "SELECT ${env}_db"), "SELECT ${env}_db");
}

#[test]
fn test_create_round_trip() {
    assert_eq!(
        render(
            base(),
            "CREATE OR REPLACE TABLE IF NOT EXISTS t (a INT NOT NULL, b VARCHAR COMMENT 'x') CLUSTER BY (a)"
        ),
        "CREATE OR REPLACE TABLE IF NOT EXISTS t (a INT NOT NULL, b VARCHAR COMMENT 'x') CLUSTER BY (a)"
    );
}

#[test]
fn test_base_delete_keeps_using() {
    assert_eq!(
        render(base(), "DELETE FROM t USING s WHERE t.id = s.id"),
        "DELETE FROM t USING s WHERE t.id = s.id"
    );
}

#[test]
fn test_insert() {
    assert_eq!(
        render(base(), "INSERT INTO t (a, b) VALUES (1, 'x')"),
        "INSERT INTO t (a, b) VALUES (1, 'x')"
    );
    assert_eq!(
        render(base(), "INSERT OVERWRITE INTO t SELECT * FROM u"),
        "INSERT OVERWRITE TABLE t SELECT * FROM u"
    );
}

#[test]
fn test_command_is_verbatim() {
    assert_eq!(render(databricks(), "USE WAREHOUSE wh"), "USE WAREHOUSE wh");
}

#[test]
fn test_custom_nodes_have_a_generic_form() {
    assert_eq!(
        render(base(), "SELECT DATE_FROM_PARTS(2024, 1, 2)"),
        "SELECT DATE_FROM_PARTS(2024, 1, 2)"
    );
    assert_eq!(render(base(), "SELECT value:a FROM t"), "SELECT value['a'] FROM t");
}

#[test]
fn test_node_accessor_mismatch_is_internal_error() {
    let expr = Expr::number("1");
    let err = Node::Expr(&expr).join().unwrap_err();
    assert!(matches!(err, SqlError::Internal(_)));
    assert_eq!(Node::Expr(&expr).kind(), NodeKind::Literal);
}

#[test]
fn test_warnings_are_collected() {
    let diagnostics = Diagnostics::new();
    assert!(diagnostics.is_empty());
    let generator = Generator::new(databricks(), &diagnostics);
    generator.warn("first");
    generator.with_dialect(base()).warn("second");
    assert_eq!(diagnostics.len(), 2);
    let messages: Vec<String> = diagnostics
        .into_warnings()
        .into_iter()
        .map(|w| w.message)
        .collect();
    assert_eq!(messages, vec!["first", "second"]);
}

#[test]
fn test_type_names() {
    assert_eq!(type_name(TypeKind::TimestampNtz), "TIMESTAMP_NTZ");
    let diagnostics = Diagnostics::new();
    let generator = Generator::new(base(), &diagnostics);
    assert_eq!(
        generator.data_type_sql(&DataType::new(TypeKind::Decimal).with_params(&["10", "2"])),
        "DECIMAL(10, 2)"
    );
    assert_eq!(generator.data_type_sql(&DataType::other("GEOGRAPHY")), "GEOGRAPHY");
}
