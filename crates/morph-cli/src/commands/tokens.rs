//! Tokens command implementation

use anyhow::{Context, Result};
use morph_sql::TokenKind;
use std::fs;

use crate::cli::{GlobalArgs, TokensArgs};
use crate::commands::common::{load_config, parse_dialect, transpiler_for};

/// Execute the tokens command
pub(crate) fn execute(args: &TokensArgs, global: &GlobalArgs) -> Result<()> {
    let config = load_config(global)?;
    let source = match &args.source {
        Some(source) => parse_dialect("source", source)?,
        None => config.source,
    };

    let sql = fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read {}", args.file))?;
    let transpiler = transpiler_for(source, config.target)?;
    let mut tokens = transpiler
        .tokenize(&sql)
        .with_context(|| format!("Failed to tokenize {}", args.file))?;
    if !args.all {
        tokens.retain(|t| t.kind != TokenKind::Whitespace);
    }

    if global.verbose {
        eprintln!("[verbose] {} token(s) in {}", tokens.len(), args.file);
    }

    let json = serde_json::to_string_pretty(&tokens).context("Failed to serialize to JSON")?;
    println!("{json}");
    Ok(())
}
