use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::shared::constants;

/// Settings read from `griddiff.config`.
///
/// The file is a list of `key = value` lines; `#` starts a comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub error_log: PathBuf,
    pub debug_log: PathBuf,
    /// Default JSON report path for `compare`.
    pub report: Option<PathBuf>,
    /// Default array name for `embed`.
    pub symbol: String,
    /// Keys that were present but not understood.
    pub unknown_keys: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            error_log: PathBuf::from(constants::ERROR_LOG_FILE),
            debug_log: PathBuf::from(constants::DEBUG_LOG_FILE),
            report: None,
            symbol: constants::DEFAULT_EMBED_SYMBOL.to_string(),
            unknown_keys: Vec::new(),
        }
    }
}

impl Config {
    /// Load `path`, or the default config file when `path` is `None`.
    ///
    /// A missing default file yields defaults; an explicitly named file must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from(constants::GRIDDIFF_CONFIG_FILE), false),
        };

        if !required && !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let mut config = Self::default();

        for (idx, line) in content.lines().enumerate() {
            let trimmed = line.split('#').next().unwrap_or("").trim();
            if trimmed.is_empty() {
                continue;
            }

            let Some((key, value)) = trimmed.split_once('=') else {
                anyhow::bail!("line {}: expected `key = value`, got {:?}", idx + 1, trimmed);
            };
            let key = key.trim();
            let value = value.trim();
            if value.is_empty() {
                anyhow::bail!("line {}: `{}` has no value", idx + 1, key);
            }

            match key {
                "error-log" => config.error_log = PathBuf::from(value),
                "debug-log" => config.debug_log = PathBuf::from(value),
                "report" => config.report = Some(PathBuf::from(value)),
                "symbol" => config.symbol = value.to_string(),
                other => config.unknown_keys.push(other.to_string()),
            }
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_gives_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.symbol, "LINKER_SCRIPT");
    }

    #[test]
    fn test_parse_known_and_unknown_keys() {
        let config = Config::parse(
            "# griddiff settings\n\
             error-log = logs/err.log\n\
             debug-log=logs/dbg.log   # trailing comment\n\
             report = tally.json\n\
             symbol = EMBEDDED\n\
             font-size = 2.5\n",
        )
        .unwrap();

        assert_eq!(config.error_log, PathBuf::from("logs/err.log"));
        assert_eq!(config.debug_log, PathBuf::from("logs/dbg.log"));
        assert_eq!(config.report, Some(PathBuf::from("tally.json")));
        assert_eq!(config.symbol, "EMBEDDED");
        assert_eq!(config.unknown_keys, vec!["font-size".to_string()]);
    }

    #[test]
    fn test_parse_rejects_line_without_value() {
        assert!(Config::parse("report\n").is_err());
        assert!(Config::parse("report =\n").is_err());
    }

    #[test]
    fn test_load_explicit_missing_file_fails() {
        let path = std::env::temp_dir().join("griddiff_test_missing.config");
        let _ = fs::remove_file(&path);
        assert!(Config::load(Some(&path)).is_err());
    }
}
