//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};

/// sqlmorph - rewrite Snowflake and Presto SQL for Databricks
#[derive(Parser, Debug)]
#[command(name = "morph")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to project directory
    #[arg(short = 'p', long, global = true, default_value = ".")]
    pub project_dir: String,

    /// Override config file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rewrite SQL files from the source dialect to the target dialect
    Transpile(TranspileArgs),

    /// Dump the token stream of a SQL file as JSON
    Tokens(TokensArgs),
}

/// Arguments for the transpile command
#[derive(Args, Debug)]
pub struct TranspileArgs {
    /// SQL files or directories (default: input_paths from morph.yml)
    pub paths: Vec<String>,

    /// Dialect the input is written in
    #[arg(short, long)]
    pub source: Option<String>,

    /// Dialect to render
    #[arg(short, long)]
    pub target: Option<String>,

    /// Write rewritten files here instead of stdout
    #[arg(short, long)]
    pub output_dir: Option<String>,

    /// Stop at the first file that fails
    #[arg(long)]
    pub fail_fast: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub output: TranspileOutput,
}

/// Transpile output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranspileOutput {
    /// Rewritten SQL
    Text,
    /// Per-file statements and warnings as JSON
    Json,
}

/// Arguments for the tokens command
#[derive(Args, Debug)]
pub struct TokensArgs {
    /// SQL file to tokenize
    pub file: String,

    /// Dialect the file is written in
    #[arg(short, long)]
    pub source: Option<String>,

    /// Keep whitespace and comment tokens
    #[arg(long)]
    pub all: bool,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
