use super::*;

fn kinds(sql: &str) -> Vec<TokenKind> {
    scan(sql, ScanRules::Snowflake)
        .unwrap()
        .into_iter()
        .filter(|t| !t.is_whitespace())
        .map(|t| t.kind)
        .collect()
}

#[test]
fn test_scan_simple_select() {
    assert_eq!(
        kinds("SELECT a, 'x' FROM t"),
        vec![
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::Comma,
            TokenKind::String,
            TokenKind::Identifier,
            TokenKind::Identifier,
        ]
    );
}

#[test]
fn test_scan_colon_path_and_cast() {
    assert_eq!(
        kinds("src:name::string"),
        vec![
            TokenKind::Identifier,
            TokenKind::Colon,
            TokenKind::Identifier,
            TokenKind::DoubleColon,
            TokenKind::Identifier,
        ]
    );
}

#[test]
fn test_scan_keyword_argument_arrow() {
    let k = kinds("FLATTEN(INPUT => x)");
    assert!(k.contains(&TokenKind::FatArrow));
}

#[test]
fn test_scan_parameter() {
    let tokens = scan("SELECT $env", ScanRules::Snowflake).unwrap();
    let param = tokens.iter().find(|t| t.kind == TokenKind::Parameter).unwrap();
    assert_eq!(param.text, "$env");
}

#[test]
fn test_scan_quoted_identifier_is_unquoted() {
    let tokens = scan("SELECT \"My Col\" FROM t", ScanRules::Snowflake).unwrap();
    let quoted = tokens
        .iter()
        .find(|t| t.kind == TokenKind::QuotedIdentifier)
        .unwrap();
    assert_eq!(quoted.text, "My Col");
}

#[test]
fn test_span_offsets_are_byte_offsets() {
    let sql = "SELECT a\nFROM t";
    let tokens = scan(sql, ScanRules::Snowflake).unwrap();
    let from = tokens.iter().find(|t| t.is_word("FROM")).unwrap();
    assert_eq!(from.span.line, 2);
    assert_eq!(from.span.column, 1);
    assert_eq!(&sql[from.span.start..from.span.start + 4], "FROM");
}

#[test]
fn test_scan_double_slash_comment_is_whitespace() {
    let tokens = scan("SELECT 1 // trailing note\n", ScanRules::Snowflake).unwrap();
    assert!(tokens
        .iter()
        .any(|t| t.is_whitespace() && t.text.contains("trailing note")));
}

#[test]
fn test_scan_unterminated_string_reports_offset() {
    let err = scan("SELECT 'abc", ScanRules::Snowflake).unwrap_err();
    assert!(err.offset <= "SELECT 'abc".len());
    assert!(!err.message.is_empty());
}

#[test]
fn test_slice_clamps_to_bounds() {
    assert_eq!(slice("abc", 1, 10), "bc");
    assert_eq!(slice("abc", 5, 2), "");
}
