//! Runtime configuration from environment variables
//!
//! | Variable               | Default          |
//! |------------------------|------------------|
//! | `FOOD_DATA_DIR`        | `food_data`      |
//! | `FOOD_MATCH_THRESHOLD` | `90`             |
//! | `FOOD_NAMESPACE`       | `farmersdelight` |
//! | `FOOD_LANG`            | `zh`             |

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::catalogue::DEFAULT_NAMESPACE;
use crate::language::Language;
use crate::matcher::DEFAULT_MATCH_THRESHOLD;

pub const DEFAULT_DATA_DIR: &str = "food_data";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupConfig {
    pub data_dir: PathBuf,
    pub threshold: u8,
    pub namespace: String,
    pub language: Language,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            threshold: DEFAULT_MATCH_THRESHOLD,
            namespace: DEFAULT_NAMESPACE.to_string(),
            language: Language::Chinese,
        }
    }
}

impl LookupConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable source; unset or blank variables take defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(dir) = var("FOOD_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }

        if let Some(raw) = var("FOOD_MATCH_THRESHOLD") {
            let threshold: u8 = raw
                .trim()
                .parse()
                .with_context(|| format!("FOOD_MATCH_THRESHOLD must be an integer, got '{}'", raw))?;
            if threshold > 100 {
                anyhow::bail!("FOOD_MATCH_THRESHOLD must be within 0..=100, got {}", threshold);
            }
            config.threshold = threshold;
        }

        if let Some(namespace) = var("FOOD_NAMESPACE") {
            config.namespace = namespace.trim().to_string();
        }

        if let Some(lang) = var("FOOD_LANG") {
            config.language = lang.parse::<Language>().context("Invalid FOOD_LANG")?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<LookupConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        LookupConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, LookupConfig::default());
        assert_eq!(config.threshold, 90);
        assert_eq!(config.namespace, "farmersdelight");
        assert_eq!(config.data_dir, PathBuf::from("food_data"));
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("FOOD_DATA_DIR", "/opt/food"),
            ("FOOD_MATCH_THRESHOLD", " 75 "),
            ("FOOD_NAMESPACE", "othermod"),
            ("FOOD_LANG", "en"),
        ])
        .unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/opt/food"));
        assert_eq!(config.threshold, 75);
        assert_eq!(config.namespace, "othermod");
        assert_eq!(config.language, Language::English);
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let config = config_from(&[("FOOD_MATCH_THRESHOLD", ""), ("FOOD_LANG", "  ")]).unwrap();
        assert_eq!(config.threshold, 90);
        assert_eq!(config.language, Language::Chinese);
    }

    #[test]
    fn test_invalid_values_are_errors() {
        assert!(config_from(&[("FOOD_MATCH_THRESHOLD", "101")]).is_err());
        assert!(config_from(&[("FOOD_MATCH_THRESHOLD", "high")]).is_err());
        assert!(config_from(&[("FOOD_MATCH_THRESHOLD", "-1")]).is_err());
        assert!(config_from(&[("FOOD_LANG", "fr")]).is_err());
    }
}
