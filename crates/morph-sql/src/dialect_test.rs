use super::*;

#[test]
fn test_get_by_name() {
    assert_eq!(get("snowflake").unwrap().name(), "snowflake");
    assert_eq!(get("Databricks").unwrap().name(), "databricks");
    assert_eq!(get("trino").unwrap().name(), "presto");
    assert_eq!(get("ansi").unwrap().name(), "generic");
}

#[test]
fn test_get_unknown() {
    let err = get("oracle").unwrap_err();
    assert_eq!(err, SqlError::UnknownDialect("oracle".to_string()));
    assert!(err.to_string().contains("[S006]"));
}

#[test]
fn test_overlay_inherits_base_entries() {
    for dialect in [snowflake(), presto(), databricks()] {
        assert_eq!(
            dialect.keyword_lookup(&normalize_keyword("group by")),
            Some(TokenKind::GroupBy)
        );
        assert!(dialect.function_builder("ARRAY_AGG").is_some());
    }
}

#[test]
fn test_overlay_does_not_leak_into_base() {
    assert!(snowflake().function_builder("TRY_TO_NUMBER").is_some());
    assert!(base().function_builder("TRY_TO_NUMBER").is_none());
    assert!(databricks().renderer_for(NodeKind::Delete).is_some());
    assert!(base().renderer_for(NodeKind::Delete).is_none());
}

#[test]
fn test_identifier_quotes() {
    assert_eq!(base().identifier_quote(), '"');
    assert_eq!(databricks().identifier_quote(), '`');
}

#[test]
fn test_scan_rules() {
    assert_eq!(snowflake().scan_rules(), ScanRules::Snowflake);
    assert_eq!(presto().scan_rules(), ScanRules::Generic);
}

#[test]
fn test_presto_keywords() {
    assert_eq!(presto().keyword_lookup("JSON"), Some(TokenKind::Text));
    assert_eq!(snowflake().keyword_lookup("JSON"), None);
}

#[test]
fn test_dialects_are_shared() {
    assert!(std::ptr::eq(snowflake(), get("snowflake").unwrap()));
}
