use super::*;

#[test]
fn test_parse_empty_config_uses_defaults() {
    let config: Config = serde_yaml::from_str("{}").unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.source, DialectName::Snowflake);
    assert_eq!(config.target, DialectName::Databricks);
    assert_eq!(config.input_paths, vec!["sql"]);
    assert!(config.output_dir.is_none());
    assert!(!config.fail_fast);
}

#[test]
fn test_parse_full_config() {
    let yaml = r#"
source: presto
target: databricks
input_paths:
  - queries
  - views/reporting.sql
output_dir: out
fail_fast: true
"#;
    let config: Config = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(config.source, DialectName::Presto);
    assert!(config.fail_fast);

    let root = PathBuf::from("/tmp/project");
    assert_eq!(
        config.input_paths_absolute(&root),
        vec![root.join("queries"), root.join("views/reporting.sql")]
    );
    assert_eq!(config.output_dir_absolute(&root), Some(root.join("out")));
}

#[test]
fn test_unknown_fields_rejected() {
    let result: Result<Config, _> = serde_yaml::from_str("bogus_field: true");
    assert!(result.is_err(), "Unknown fields should be rejected");
}

#[test]
fn test_unknown_dialect_rejected() {
    let result: Result<Config, _> = serde_yaml::from_str("source: oracle");
    assert!(result.is_err());
}

#[test]
fn test_validate() {
    let mut config = Config::default();
    assert!(config.validate().is_ok());

    config.input_paths.clear();
    assert!(matches!(config.validate(), Err(CoreError::ConfigInvalid { .. })));

    let config = Config {
        output_dir: Some(" ".to_string()),
        ..Config::default()
    };
    assert!(config.validate().is_err());

    let config = Config {
        source: DialectName::Databricks,
        ..Config::default()
    };
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("target-only"));
}

#[test]
fn test_dialect_name_from_str() {
    assert_eq!("Snowflake".parse::<DialectName>().unwrap(), DialectName::Snowflake);
    assert_eq!("trino".parse::<DialectName>().unwrap(), DialectName::Presto);
    assert_eq!("spark".parse::<DialectName>().unwrap(), DialectName::Databricks);
    let err = "oracle".parse::<DialectName>().unwrap_err();
    assert!(err.to_string().contains("[C003]"));
    assert_eq!(DialectName::Presto.to_string(), "presto");
}

#[test]
fn test_load_missing_file() {
    let err = Config::load(Path::new("/nonexistent/morph.yml")).unwrap_err();
    assert!(matches!(err, CoreError::ConfigNotFound { .. }));
    assert!(err.to_string().starts_with("[C001]"));
}

#[test]
fn test_load_from_dir() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("morph.yaml"), "fail_fast: true\n").unwrap();
    let config = Config::load_from_dir(dir.path()).unwrap();
    assert!(config.fail_fast);
}

#[test]
fn test_load_from_dir_prefers_yml() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("morph.yml"), "source: presto\n").unwrap();
    std::fs::write(dir.path().join("morph.yaml"), "source: snowflake\n").unwrap();
    let config = Config::load_from_dir(dir.path()).unwrap();
    assert_eq!(config.source, DialectName::Presto);
}

#[test]
fn test_load_from_empty_dir() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load_from_dir(dir.path()).unwrap_err();
    assert!(err.to_string().contains("morph.yml"));
}

#[test]
fn test_load_malformed_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("morph.yml");
    std::fs::write(&path, "input_paths: [unterminated\n").unwrap();
    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, CoreError::ConfigParseError { .. }));
}

#[test]
fn test_load_runs_validation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("morph.yml");
    std::fs::write(&path, "input_paths: []\n").unwrap();
    let err = Config::load(&path).unwrap_err();
    assert!(err.to_string().starts_with("[C003]"));
}
