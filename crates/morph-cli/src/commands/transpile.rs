//! Transpile command implementation

use anyhow::{Context, Result};
use morph_sql::{Transpiler, Warning};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::{GlobalArgs, TranspileArgs, TranspileOutput};
use crate::commands::common::{
    discover_sql_files, load_config, parse_dialect, transpiler_for, ExitCode, SqlFile,
};

/// Outcome of one input file, as printed by `--output json`
#[derive(Debug, Serialize)]
struct FileReport {
    file: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    statements: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    warnings: Vec<Warning>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Execute the transpile command
pub(crate) fn execute(args: &TranspileArgs, global: &GlobalArgs) -> Result<()> {
    let mut config = load_config(global)?;
    if let Some(source) = &args.source {
        config.source = parse_dialect("source", source)?;
    }
    if let Some(target) = &args.target {
        config.target = parse_dialect("target", target)?;
    }
    if args.fail_fast {
        config.fail_fast = true;
    }
    config.validate().context("Invalid settings")?;

    let root = Path::new(&global.project_dir);
    let (files, output_dir) = if args.paths.is_empty() {
        (
            discover_sql_files(&config.input_paths, root)?,
            config.output_dir_absolute(root),
        )
    } else {
        (
            discover_sql_files(&args.paths, Path::new("."))?,
            config.output_dir_absolute(Path::new(".")),
        )
    };
    let output_dir = args.output_dir.as_ref().map(PathBuf::from).or(output_dir);

    if files.is_empty() {
        println!("No SQL files found");
        return Ok(());
    }

    let transpiler = transpiler_for(config.source, config.target)?;
    if global.verbose {
        eprintln!(
            "[verbose] Transpiling {} file(s) from {} to {}",
            files.len(),
            config.source,
            config.target
        );
    }

    let mut reports = Vec::with_capacity(files.len());
    let mut failures = 0;
    for file in &files {
        let report = transpile_file(&transpiler, file)?;
        for warning in &report.warnings {
            eprintln!("warning: {}: {}", report.file, warning);
        }

        match &report.error {
            Some(err) => {
                eprintln!("error: {}: {}", report.file, err);
                failures += 1;
            }
            None if args.output == TranspileOutput::Text => {
                emit(file, &report.statements, output_dir.as_deref(), files.len(), global)?;
            }
            None => {}
        }

        reports.push(report);
        if failures > 0 && config.fail_fast {
            break;
        }
    }

    if args.output == TranspileOutput::Json {
        let json =
            serde_json::to_string_pretty(&reports).context("Failed to serialize to JSON")?;
        println!("{json}");
    }

    let succeeded = reports.len() - failures;
    eprintln!("Transpiled {succeeded} file(s), {failures} failed");

    if failures > 0 {
        return Err(ExitCode(1).into());
    }
    Ok(())
}

fn transpile_file(transpiler: &Transpiler, file: &SqlFile) -> Result<FileReport> {
    log::debug!("Transpiling {}", file.path.display());
    let sql = fs::read_to_string(&file.path)
        .with_context(|| format!("Failed to read {}", file.path.display()))?;

    let name = file.path.display().to_string();
    Ok(match transpiler.transpile(&sql) {
        Ok(out) => FileReport {
            file: name,
            statements: out.statements,
            warnings: out.warnings,
            error: None,
        },
        Err(err) => FileReport {
            file: name,
            statements: Vec::new(),
            warnings: Vec::new(),
            error: Some(err.to_string()),
        },
    })
}

/// Write the rewritten file under `output_dir`, or print it
fn emit(
    file: &SqlFile,
    statements: &[String],
    output_dir: Option<&Path>,
    file_count: usize,
    global: &GlobalArgs,
) -> Result<()> {
    let text = format_statements(statements);
    let Some(dir) = output_dir else {
        if file_count > 1 {
            println!("-- {}", file.relative.display());
        }
        print!("{text}");
        return Ok(());
    };

    let output_path = dir.join(&file.relative);
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(&output_path, text)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;
    if global.verbose {
        eprintln!(
            "[verbose] Wrote {} -> {}",
            file.path.display(),
            output_path.display()
        );
    }
    Ok(())
}

/// One statement per paragraph, each terminated by `;`
fn format_statements(statements: &[String]) -> String {
    let mut out = String::new();
    for (i, statement) in statements.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let statement = statement.trim_end();
        out.push_str(statement);
        if !statement.ends_with(';') {
            out.push(';');
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
#[path = "transpile_test.rs"]
mod tests;
