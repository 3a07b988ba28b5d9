//! Shared utilities for CLI commands

use anyhow::{Context, Result};
use morph_core::{Config, DialectName};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::cli::GlobalArgs;

/// Error type representing a non-zero process exit code.
///
/// Return `Err(ExitCode(N).into())` instead of calling `std::process::exit(N)`
/// so destructors run before the process ends.
#[derive(Debug)]
pub(crate) struct ExitCode(pub(crate) i32);

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Control flow only; nothing user-facing to print.
        write!(f, "")
    }
}

impl std::error::Error for ExitCode {}

/// Load morph.yml from `--config`, else from the project directory.
///
/// A project without a config file runs on defaults.
pub(crate) fn load_config(global: &GlobalArgs) -> Result<Config> {
    if let Some(path) = &global.config {
        return Config::load(Path::new(path))
            .with_context(|| format!("Failed to load config from {path}"));
    }

    let root = Path::new(&global.project_dir);
    if morph_core::CONFIG_FILE_NAMES
        .iter()
        .any(|name| root.join(name).exists())
    {
        return Config::load_from_dir(root).context("Failed to load project config");
    }

    if global.verbose {
        eprintln!("[verbose] No morph.yml in {}, using defaults", root.display());
    }
    Ok(Config::default())
}

/// Parse a `--source`/`--target` flag value
pub(crate) fn parse_dialect(flag: &str, value: &str) -> Result<DialectName> {
    value
        .parse()
        .with_context(|| format!("Invalid --{flag} value"))
}

/// Build the transpiler for a configured source/target pair
pub(crate) fn transpiler_for(
    source: DialectName,
    target: DialectName,
) -> Result<morph_sql::Transpiler> {
    morph_sql::Transpiler::from_dialect_names(source.as_str(), target.as_str())
        .context("Failed to set up dialects")
}

/// A `.sql` file to process and its path relative to the input it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SqlFile {
    pub(crate) path: PathBuf,
    pub(crate) relative: PathBuf,
}

/// Expand files and directories into `.sql` files.
///
/// Directories are searched recursively and their files sorted; explicit
/// files are taken as given. Relative inputs resolve against `root`.
pub(crate) fn discover_sql_files(inputs: &[String], root: &Path) -> Result<Vec<SqlFile>> {
    let mut files = Vec::new();
    for input in inputs {
        let path = root.join(input);
        if path.is_file() {
            let relative = path
                .file_name()
                .map(PathBuf::from)
                .unwrap_or_else(|| path.clone());
            files.push(SqlFile { path, relative });
        } else if path.is_dir() {
            files.extend(sql_files_in(&path)?);
        } else {
            anyhow::bail!("Input path not found: {}", path.display());
        }
    }
    Ok(files)
}

fn sql_files_in(dir: &Path) -> Result<Vec<SqlFile>> {
    let pattern = dir.join("**").join("*.sql");
    let pattern = pattern.to_string_lossy();
    let mut paths = glob::glob(&pattern)
        .with_context(|| format!("Invalid glob pattern: {pattern}"))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .with_context(|| format!("Failed to read {}", dir.display()))?;
    paths.sort();

    Ok(paths
        .into_iter()
        .map(|path| {
            let relative = path.strip_prefix(dir).unwrap_or(&path).to_path_buf();
            SqlFile { path, relative }
        })
        .collect())
}

#[cfg(test)]
#[path = "common_test.rs"]
mod tests;
