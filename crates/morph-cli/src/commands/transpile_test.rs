use super::*;

#[test]
fn test_format_statements_terminates_each() {
    let statements = vec![
        "SELECT 1".to_string(),
        "MERGE INTO t USING s ON t.id = s.id WHEN MATCHED THEN DELETE;".to_string(),
    ];
    assert_eq!(
        format_statements(&statements),
        "SELECT 1;\n\nMERGE INTO t USING s ON t.id = s.id WHEN MATCHED THEN DELETE;\n"
    );
    assert_eq!(format_statements(&[]), "");
}

#[test]
fn test_transpile_file_reports_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.sql");
    std::fs::write(&path, "CREATE TABLE t (a FOOBAR)").unwrap();
    let file = SqlFile {
        path,
        relative: PathBuf::from("bad.sql"),
    };

    let transpiler = Transpiler::from_dialect_names("snowflake", "databricks").unwrap();
    let report = transpile_file(&transpiler, &file).unwrap();
    assert!(report.statements.is_empty());
    assert!(report.error.unwrap().contains("FOOBAR"));
}

#[test]
fn test_transpile_file_collects_warnings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("q.sql");
    std::fs::write(&path, "SELECT APPROX_PERCENTILE(x, w, 0.5, 0.01) FROM t;").unwrap();
    let file = SqlFile {
        path,
        relative: PathBuf::from("q.sql"),
    };

    let transpiler = Transpiler::from_dialect_names("snowflake", "databricks").unwrap();
    let report = transpile_file(&transpiler, &file).unwrap();
    assert_eq!(report.statements, vec!["SELECT APPROX_PERCENTILE(x, 0.5, 100) FROM t"]);
    assert_eq!(report.warnings.len(), 1);
    assert!(report.error.is_none());
}
