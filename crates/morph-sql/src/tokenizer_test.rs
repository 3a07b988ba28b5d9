use super::*;
use crate::dialect::{presto, snowflake};

fn significant(dialect: &Dialect, sql: &str) -> Vec<(TokenKind, String)> {
    Tokenizer::new(dialect)
        .tokenize(sql)
        .unwrap()
        .into_iter()
        .filter(|t| !t.is_whitespace())
        .map(|t| (t.kind, t.text))
        .collect()
}

#[test]
fn test_normalize_keyword() {
    assert_eq!(normalize_keyword("group   by"), "GROUP BY");
    assert_eq!(normalize_keyword("\tWithin\n group "), "WITHIN GROUP");
}

#[test]
fn test_static_keywords_fuse() {
    let tokens = significant(snowflake(), "SELECT a FROM t GROUP  BY a ORDER BY a");
    let kinds: Vec<TokenKind> = tokens.iter().map(|(k, _)| *k).collect();
    assert!(kinds.contains(&TokenKind::GroupBy));
    assert!(kinds.contains(&TokenKind::OrderBy));
    assert!(!tokens.iter().any(|(_, text)| text.eq_ignore_ascii_case("BY")));
}

#[test]
fn test_fused_token_keeps_source_text() {
    let tokens = Tokenizer::new(snowflake())
        .tokenize("SELECT a FROM t group by a")
        .unwrap();
    let fused = tokens.iter().find(|t| t.kind == TokenKind::GroupBy).unwrap();
    assert!(fused.text.starts_with("group by"));
}

#[test]
fn test_string_contents_never_fuse() {
    let tokens = significant(snowflake(), "SELECT 'group by' FROM t");
    assert!(tokens.contains(&(TokenKind::String, "group by".to_string())));
    assert!(!tokens.iter().any(|(k, _)| *k == TokenKind::GroupBy));
}

#[test]
fn test_procedure_is_discovered() {
    let tokens = significant(
        snowflake(),
        "create or replace procedure p() returns string language sql as $$ select 1 $$",
    );
    assert_eq!(tokens[0].0, TokenKind::Procedure);
}

#[test]
fn test_var_assignment_is_discovered() {
    let tokens = significant(snowflake(), "var x = y");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].0, TokenKind::Var);
}

#[test]
fn test_discovery_is_per_call() {
    let tokenizer = Tokenizer::new(snowflake());
    tokenizer.tokenize("var x = y").unwrap();

    // a later statement does not see the keyword discovered above
    let tokens = tokenizer.tokenize("SELECT var, x, y FROM t").unwrap();
    assert!(!tokens.iter().any(|t| t.kind == TokenKind::Var));
}

#[test]
fn test_presto_json_is_text() {
    let tokens = significant(presto(), "SELECT CAST(x AS JSON)");
    assert!(tokens.contains(&(TokenKind::Text, "JSON".to_string())));
}

#[test]
fn test_lexical_error_carries_context() {
    let err = Tokenizer::new(snowflake())
        .tokenize("SELECT 'unterminated")
        .unwrap_err();
    match err {
        SqlError::Lexical { context, .. } => assert!(context.contains("SELECT")),
        other => panic!("expected lexical error, got {other:?}"),
    }
}
