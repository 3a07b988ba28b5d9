//! Configuration types and parsing for morph.yml

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// File names searched, in order, by [`Config::load_from_dir`]
pub const CONFIG_FILE_NAMES: &[&str] = &["morph.yml", "morph.yaml"];

/// Project configuration from morph.yml
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Dialect the input files are written in
    #[serde(default = "default_source")]
    pub source: DialectName,

    /// Dialect to render
    #[serde(default = "default_target")]
    pub target: DialectName,

    /// Files or directories holding `.sql` input
    #[serde(default = "default_input_paths")]
    pub input_paths: Vec<String>,

    /// Where rewritten files are written; stdout when absent
    #[serde(default)]
    pub output_dir: Option<String>,

    /// Stop at the first file that fails to transpile
    #[serde(default)]
    pub fail_fast: bool,
}

/// SQL dialects known to the transpiler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialectName {
    Snowflake,
    Presto,
    Databricks,
}

fn default_source() -> DialectName {
    DialectName::Snowflake
}

fn default_target() -> DialectName {
    DialectName::Databricks
}

fn default_input_paths() -> Vec<String> {
    vec!["sql".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: default_source(),
            target: default_target(),
            input_paths: default_input_paths(),
            output_dir: None,
            fail_fast: false,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a project directory.
    /// Looks for morph.yml or morph.yaml
    pub fn load_from_dir(dir: &Path) -> CoreResult<Self> {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
            .map(|path| Self::load(&path))
            .unwrap_or_else(|| {
                Err(CoreError::ConfigNotFound {
                    path: dir.join(CONFIG_FILE_NAMES[0]).display().to_string(),
                })
            })
    }

    /// Validate the configuration
    pub fn validate(&self) -> CoreResult<()> {
        if self.input_paths.is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "At least one input_paths entry must be specified".to_string(),
            });
        }
        if let Some(path) = self.input_paths.iter().find(|p| p.trim().is_empty()) {
            return Err(CoreError::ConfigInvalid {
                message: format!("input_paths entry '{path}' is blank"),
            });
        }
        if self.output_dir.as_deref().is_some_and(|d| d.trim().is_empty()) {
            return Err(CoreError::ConfigInvalid {
                message: "output_dir cannot be blank".to_string(),
            });
        }
        if self.source == DialectName::Databricks {
            return Err(CoreError::ConfigInvalid {
                message: "databricks is a target-only dialect".to_string(),
            });
        }
        Ok(())
    }

    /// Get absolute input paths relative to a project root
    pub fn input_paths_absolute(&self, root: &Path) -> Vec<PathBuf> {
        self.input_paths.iter().map(|p| root.join(p)).collect()
    }

    /// Get the absolute output directory relative to a project root
    pub fn output_dir_absolute(&self, root: &Path) -> Option<PathBuf> {
        self.output_dir.as_ref().map(|d| root.join(d))
    }
}

impl DialectName {
    pub fn as_str(&self) -> &'static str {
        match self {
            DialectName::Snowflake => "snowflake",
            DialectName::Presto => "presto",
            DialectName::Databricks => "databricks",
        }
    }
}

impl std::fmt::Display for DialectName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DialectName {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "snowflake" => Ok(DialectName::Snowflake),
            "presto" | "trino" => Ok(DialectName::Presto),
            "databricks" | "spark" => Ok(DialectName::Databricks),
            other => Err(CoreError::ConfigInvalid {
                message: format!(
                    "unknown dialect '{other}', expected one of snowflake, presto, databricks"
                ),
            }),
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
