//! Integration tests for the morph binary

use std::path::Path;
use std::process::Command;

/// Path to the compiled morph binary
fn morph_bin() -> String {
    env!("CARGO_BIN_EXE_morph").to_string()
}

/// Run a `morph` CLI command and return (stdout, stderr, success).
fn run_morph(args: &[&str]) -> (String, String, bool) {
    let output = Command::new(morph_bin())
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("Failed to execute morph with args {:?}: {}", args, e));
    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.success(),
    )
}

fn write_sql(dir: &Path, name: &str, sql: &str) -> String {
    let path = dir.join(name);
    std::fs::write(&path, sql).unwrap();
    path.display().to_string()
}

// ── Project runs ────────────────────────────────────────────────────────

#[test]
fn test_transpile_sample_project_to_output_dir() {
    let out = tempfile::tempdir().unwrap();
    let out_dir = out.path().display().to_string();
    let (_, stderr, success) = run_morph(&[
        "-p",
        "tests/fixtures/sample_project",
        "transpile",
        "-o",
        &out_dir,
    ]);
    assert!(success, "transpile failed: {stderr}");
    assert!(stderr.contains("Transpiled 2 file(s), 0 failed"), "{stderr}");

    let orders = std::fs::read_to_string(out.path().join("orders.sql")).unwrap();
    assert_eq!(
        orders,
        "CREATE TABLE orders (id BIGINT, customer STRING COMMENT 'customer name', placed_at TIMESTAMP_NTZ);\n\
         \n\
         SELECT o.id, f.sku FROM orders AS o\n LATERAL VIEW EXPLODE(o.lines) AS f;\n"
    );

    let delete = std::fs::read_to_string(out.path().join("cleanup/delete_stale.sql")).unwrap();
    assert_eq!(
        delete,
        "MERGE INTO orders USING stale ON orders.id = stale.id WHEN MATCHED THEN DELETE;\n"
    );
}

#[test]
fn test_transpile_single_file_to_stdout() {
    let (stdout, stderr, success) = run_morph(&[
        "transpile",
        "tests/fixtures/sample_project/sql/cleanup/delete_stale.sql",
    ]);
    assert!(success, "transpile failed: {stderr}");
    assert_eq!(
        stdout,
        "MERGE INTO orders USING stale ON orders.id = stale.id WHEN MATCHED THEN DELETE;\n"
    );
}

#[test]
fn test_presto_source_flag() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_sql(dir.path(), "q.sql", "SELECT STRPOS(name, 'x') FROM t");
    let (stdout, stderr, success) = run_morph(&["transpile", &file, "--source", "presto"]);
    assert!(success, "transpile failed: {stderr}");
    assert_eq!(stdout, "SELECT LOCATE('x', name) FROM t;\n");
}

// ── Failures and warnings ───────────────────────────────────────────────

#[test]
fn test_failed_file_sets_exit_code() {
    let dir = tempfile::tempdir().unwrap();
    write_sql(dir.path(), "a_bad.sql", "CREATE TABLE t (a FOOBAR)");
    write_sql(dir.path(), "b_good.sql", "SELECT 1");
    let input = dir.path().display().to_string();

    let (stdout, stderr, success) = run_morph(&["transpile", &input]);
    assert!(!success);
    assert!(stderr.contains("[S004]"), "{stderr}");
    assert!(stderr.contains("FOOBAR"), "{stderr}");
    assert!(stderr.contains("Transpiled 1 file(s), 1 failed"), "{stderr}");
    assert!(stdout.contains("SELECT 1;"), "{stdout}");
}

#[test]
fn test_fail_fast_stops_at_first_failure() {
    let dir = tempfile::tempdir().unwrap();
    write_sql(dir.path(), "a_bad.sql", "SELECT TRY_TO_NUMBER('1.5')");
    write_sql(dir.path(), "b_good.sql", "SELECT 1");
    let input = dir.path().display().to_string();

    let (stdout, stderr, success) = run_morph(&["transpile", &input, "--fail-fast"]);
    assert!(!success);
    assert!(stderr.contains("format"), "{stderr}");
    assert!(!stdout.contains("SELECT 1"), "{stdout}");
}

#[test]
fn test_warnings_go_to_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_sql(
        dir.path(),
        "q.sql",
        "SELECT APPROX_PERCENTILE(x, w, 0.5, 0.01) FROM t",
    );
    let (stdout, stderr, success) = run_morph(&["transpile", &file]);
    assert!(success, "transpile failed: {stderr}");
    assert!(stderr.contains("warning:"), "{stderr}");
    assert!(stderr.contains("weight"), "{stderr}");
    assert_eq!(stdout, "SELECT APPROX_PERCENTILE(x, 0.5, 100) FROM t;\n");
}

#[test]
fn test_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_sql(dir.path(), "q.sql", "SELECT CURRENT_TIMESTAMP; SELECT 2");
    let (stdout, stderr, success) = run_morph(&["transpile", &file, "--output", "json"]);
    assert!(success, "transpile failed: {stderr}");

    let reports: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(reports[0]["statements"][0], "SELECT CURRENT_TIMESTAMP()");
    assert_eq!(reports[0]["statements"][1], "SELECT 2");
    assert!(reports[0].get("error").is_none());
}

#[test]
fn test_unknown_dialect_flag() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_sql(dir.path(), "q.sql", "SELECT 1");
    let (_, stderr, success) = run_morph(&["transpile", &file, "--target", "oracle"]);
    assert!(!success);
    assert!(stderr.contains("--target"), "{stderr}");
}

#[test]
fn test_missing_input_path() {
    let (_, stderr, success) = run_morph(&["transpile", "does/not/exist.sql"]);
    assert!(!success);
    assert!(stderr.contains("Input path not found"), "{stderr}");
}

// ── Tokens ──────────────────────────────────────────────────────────────

#[test]
fn test_tokens_command() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_sql(dir.path(), "q.sql", "SELECT a FROM t GROUP BY a");
    let (stdout, stderr, success) = run_morph(&["tokens", &file]);
    assert!(success, "tokens failed: {stderr}");

    let tokens: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let kinds: Vec<&str> = tokens
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["kind"].as_str().unwrap())
        .collect();
    assert!(kinds.contains(&"group_by"), "{kinds:?}");
    assert!(!kinds.contains(&"whitespace"), "{kinds:?}");
}
