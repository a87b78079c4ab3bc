use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::network::EdgePolicy;
use crate::parse::CostAlphabet;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct RoadConfig {
    #[serde(default)]
    pub policy: EdgePolicy,
    #[serde(default = "default_early_stop")]
    pub early_stop: bool,
    #[serde(default)]
    pub alphabet: CostAlphabet,
}

impl Default for RoadConfig {
    fn default() -> Self {
        Self {
            policy: EdgePolicy::default(),
            early_stop: default_early_stop(),
            alphabet: CostAlphabet::default(),
        }
    }
}

impl RoadConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

fn default_early_stop() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let config = RoadConfig::load_from_file("does/not/exist/roadnet.toml").unwrap();
        assert_eq!(config, RoadConfig::default());
    }

    #[test]
    fn empty_document_gives_defaults() {
        let config = RoadConfig::from_toml_str("").unwrap();
        assert_eq!(config.policy, EdgePolicy::AllPairs);
        assert!(config.early_stop);
        assert_eq!(config.alphabet, CostAlphabet::ZERO_BASED);
    }

    #[test]
    fn reads_every_field() {
        let config = RoadConfig::from_toml_str(
            r#"
            policy = "bridging"
            early_stop = false

            [alphabet]
            upper_base = 1
            lower_base = 27
            "#,
        )
        .unwrap();
        assert_eq!(config.policy, EdgePolicy::ComponentBridging);
        assert!(!config.early_stop);
        assert_eq!(config.alphabet, CostAlphabet::ONE_BASED);
    }

    #[test]
    fn unknown_policy_is_an_error() {
        assert!(RoadConfig::from_toml_str(r#"policy = "greedy""#).is_err());
    }

    #[test]
    fn partial_alphabet_keeps_other_base() {
        let config = RoadConfig::from_toml_str(
            r#"
            [alphabet]
            upper_base = 1
            "#,
        )
        .unwrap();
        assert_eq!(config.alphabet.upper_base, 1);
        assert_eq!(config.alphabet.lower_base, 26);
    }
}
