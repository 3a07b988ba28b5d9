//! sqlmorph CLI - rewrite Snowflake and Presto SQL files for Databricks

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::Cli;
use commands::common::ExitCode;
use commands::{tokens, transpile};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let result = match &cli.command {
        cli::Commands::Transpile(args) => transpile::execute(args, &cli.global),
        cli::Commands::Tokens(args) => tokens::execute(args, &cli.global),
    };

    match result {
        Err(err) => match err.downcast_ref::<ExitCode>() {
            Some(code) => std::process::exit(code.0),
            None => Err(err),
        },
        ok => ok,
    }
}
