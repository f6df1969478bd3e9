use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use recipebook_bench::{BenchConfig, DEFAULT_TEST_COUNT};
use recipebook_store::DEFAULT_RECIPES_FILE;
use serde::{Deserialize, Serialize};

use crate::cli::Cli;

/// Application settings.
///
/// Built from defaults, then an optional TOML file, then command-line
/// flags, each overriding the last.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Backing recipe file.
    pub recipes_path: PathBuf,
    /// Test count used when the user does not give one.
    pub default_test_count: usize,
    /// Timing parameters for benchmark runs.
    pub bench: BenchConfig,
    /// Longest bar in the benchmark chart, in characters.
    pub chart_width: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            recipes_path: PathBuf::from(DEFAULT_RECIPES_FILE),
            default_test_count: DEFAULT_TEST_COUNT,
            bench: BenchConfig::default(),
            chart_width: 40,
        }
    }
}

impl AppConfig {
    /// Read a TOML configuration file. Missing keys take their defaults.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing config file {}", path.display()))
    }

    /// Resolve the configuration for a parsed command line.
    pub fn resolve(cli: &Cli) -> anyhow::Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        if let Some(file) = &cli.file {
            config.recipes_path = file.clone();
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn default_config() {
        let c = AppConfig::default();
        assert_eq!(c.recipes_path, PathBuf::from("recipes.json"));
        assert_eq!(c.default_test_count, 1000);
        assert_eq!(c.bench, BenchConfig::default());
        assert_eq!(c.chart_width, 40);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recipebook.toml");
        fs::write(&path, "default_test_count = 50\n\n[bench]\nrepeat = 2\n").unwrap();

        let c = AppConfig::from_file(&path).unwrap();
        assert_eq!(c.default_test_count, 50);
        assert_eq!(c.bench, BenchConfig { repeat: 2, number: 10 });
        assert_eq!(c.recipes_path, PathBuf::from("recipes.json"));
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recipebook.toml");
        fs::write(&path, "default_test_count = \"lots\"").unwrap();
        assert!(AppConfig::from_file(&path).is_err());
    }

    #[test]
    fn file_flag_overrides_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recipebook.toml");
        fs::write(&path, "recipes_path = \"from-config.json\"\n").unwrap();

        let cli = Cli::try_parse_from([
            "recipebook",
            "list",
            "--config",
            path.to_str().unwrap(),
            "--file",
            "from-flag.json",
        ])
        .unwrap();
        let c = AppConfig::resolve(&cli).unwrap();
        assert_eq!(c.recipes_path, PathBuf::from("from-flag.json"));
    }
}
