//! Benchmark configuration

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading '{path:?}': {error}")]
    Io {
        error: std::io::Error,
        path: Option<PathBuf>,
    },
    #[error("Parse error in '{path:?}': {error}")]
    Parse {
        error: toml::de::Error,
        path: Option<PathBuf>,
    },
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Load and deserialize a TOML file
pub fn load_toml<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        error: e,
        path: Some(path.to_path_buf()),
    })?;
    toml::from_str(&content).map_err(|e| ConfigError::Parse {
        error: e,
        path: Some(path.to_path_buf()),
    })
}

/// Deserialize a TOML string
pub fn parse_toml<T: DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::Parse { error: e, path: None })
}

/// Settings for the hook benchmark
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Iterations per benchmarked operation
    #[serde(default = "default_iterations")]
    pub iterations: u32,
    /// Pause after the store benchmarks, in milliseconds
    #[serde(default = "default_pause_ms")]
    pub pause_ms: u64,
    /// Heal amount fed to the heal hook on every iteration
    #[serde(default = "default_heal_amount")]
    pub heal_amount: f64,
    /// Initial value of the subject's DexBonus
    #[serde(default = "default_dex_bonus")]
    pub dex_bonus: i32,
    /// tracing filter used when RUST_LOG is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            iterations: default_iterations(),
            pause_ms: default_pause_ms(),
            heal_amount: default_heal_amount(),
            dex_bonus: default_dex_bonus(),
            log_filter: default_log_filter(),
        }
    }
}

fn default_iterations() -> u32 {
    100_000
}
fn default_pause_ms() -> u64 {
    1_000
}
fn default_heal_amount() -> f64 {
    10.0
}
fn default_dex_bonus() -> i32 {
    5
}
fn default_log_filter() -> String {
    "info".to_string()
}

impl BenchConfig {
    /// Load and validate a config file
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let config: BenchConfig = load_toml(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a config string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: BenchConfig = parse_toml(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.iterations == 0 {
            return Err(ConfigError::Validation("iterations must be > 0".to_string()));
        }
        if !self.heal_amount.is_finite() {
            return Err(ConfigError::Validation(format!(
                "heal_amount must be finite, got {}",
                self.heal_amount
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = BenchConfig::parse("").unwrap();
        assert_eq!(config, BenchConfig::default());
        assert_eq!(config.iterations, 100_000);
        assert!((config.heal_amount - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_overrides() {
        let config = BenchConfig::parse(
            r#"
iterations = 500
pause_ms = 0
dex_bonus = 12
log_filter = "enchant_core=trace"
"#,
        )
        .unwrap();
        assert_eq!(config.iterations, 500);
        assert_eq!(config.pause_ms, 0);
        assert_eq!(config.dex_bonus, 12);
        assert_eq!(config.log_filter, "enchant_core=trace");
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let result = BenchConfig::parse("iterations = 0");
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_non_finite_heal_amount_rejected() {
        let result = BenchConfig::parse("heal_amount = nan");
        assert!(matches!(result, Err(ConfigError::Validation(msg)) if msg.contains("heal_amount")));

        let result = BenchConfig::parse("heal_amount = inf");
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_parse_error() {
        let result = BenchConfig::parse("iterations = \"many\"");
        assert!(matches!(result, Err(ConfigError::Parse { path: None, .. })));
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bench.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"iterations = 42\nheal_amount = 3.5\n").unwrap();

        let config = BenchConfig::load_from_path(&path).unwrap();
        assert_eq!(config.iterations, 42);
        assert!((config.heal_amount - 3.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = BenchConfig::load_from_path(&dir.path().join("nope.toml"));
        assert!(matches!(result, Err(ConfigError::Io { path: Some(_), .. })));
    }
}
