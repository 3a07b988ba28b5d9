use super::*;

fn snowflake_to_databricks() -> Transpiler {
    Transpiler::from_dialect_names("snowflake", "databricks").unwrap()
}

#[test]
fn test_from_dialect_names() {
    let transpiler = snowflake_to_databricks();
    assert_eq!(transpiler.source().name(), "snowflake");
    assert_eq!(transpiler.target().name(), "databricks");

    let err = Transpiler::from_dialect_names("snowflake", "oracle").unwrap_err();
    assert!(matches!(err, SqlError::UnknownDialect(ref name) if name == "oracle"));
}

#[test]
fn test_blank_input_is_rejected() {
    let transpiler = snowflake_to_databricks();
    assert!(matches!(transpiler.transpile(""), Err(SqlError::EmptySql)));
    assert!(matches!(transpiler.transpile("  \n\t"), Err(SqlError::EmptySql)));
}

#[test]
fn test_batch_keeps_statement_order() {
    let out = snowflake_to_databricks()
        .transpile("SELECT 1; SELECT CURRENT_TIMESTAMP;")
        .unwrap();
    assert_eq!(out.statements, vec!["SELECT 1", "SELECT CURRENT_TIMESTAMP()"]);
    assert!(out.warnings.is_empty());
}

#[test]
fn test_first_failure_aborts_batch() {
    let err = snowflake_to_databricks()
        .transpile("SELECT 1; CREATE TABLE t (a FOOBAR)")
        .unwrap_err();
    assert!(matches!(err, SqlError::Unsupported { .. }));
}

#[test]
fn test_transpile_one() {
    let transpiler = snowflake_to_databricks();
    assert_eq!(
        transpiler.transpile_one("SELECT a::VARCHAR FROM t").unwrap(),
        "SELECT CAST(a AS STRING) FROM t"
    );

    let err = transpiler.transpile_one("SELECT 1; SELECT 2").unwrap_err();
    assert!(err.to_string().contains("Expected a single statement, found 2"));
}

#[test]
fn test_warnings_are_returned_with_the_batch() {
    let out = snowflake_to_databricks()
        .transpile("SELECT APPROX_PERCENTILE(x, w, 0.5, 0.01) FROM t")
        .unwrap();
    assert_eq!(out.statements.len(), 1);
    assert_eq!(out.warnings.len(), 1);
}

#[test]
fn test_tokenize_uses_source_dialect() {
    let transpiler = Transpiler::from_dialect_names("presto", "databricks").unwrap();
    let tokens = transpiler.tokenize("CAST(a AS JSON)").unwrap();
    assert!(tokens.iter().any(|t| t.kind == crate::tokens::TokenKind::Text));
}

#[test]
fn test_transpiler_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Transpiler>();
}

#[test]
fn test_transpiled_serializes() {
    let out = snowflake_to_databricks()
        .transpile("SELECT APPROX_PERCENTILE(x, w, 0.5, 0.01) FROM t")
        .unwrap();
    let json = serde_json::to_value(&out).unwrap();
    assert_eq!(json["statements"][0], "SELECT APPROX_PERCENTILE(x, 0.5, 100) FROM t");
    assert!(json["warnings"][0]["message"].as_str().unwrap().contains("weight"));
}
