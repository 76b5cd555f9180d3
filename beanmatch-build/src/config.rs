//! `beanmatch.toml` project configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::emitter::DEFAULT_RUNTIME_CRATE;
use crate::naming::MethodNaming;
use crate::provenance::DEFAULT_GENERATOR_NAME;

/// File name looked up in the project root.
pub const CONFIG_FILE: &str = "beanmatch.toml";

/// Configuration stored in `beanmatch.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BeanmatchConfig {
    #[serde(default)]
    pub generator: GeneratorSettings,
    #[serde(default)]
    pub scan: ScanSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorSettings {
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default = "default_runtime_crate")]
    pub runtime_crate: String,
    #[serde(default)]
    pub naming: MethodNaming,
    #[serde(default = "default_generator_name")]
    pub generator_name: String,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            runtime_crate: default_runtime_crate(),
            naming: MethodNaming::default(),
            generator_name: default_generator_name(),
        }
    }
}

fn default_output_dir() -> String {
    "src/generated".to_string()
}

fn default_runtime_crate() -> String {
    DEFAULT_RUNTIME_CRATE.to_string()
}

fn default_generator_name() -> String {
    DEFAULT_GENERATOR_NAME.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanSettings {
    #[serde(default = "default_source_dirs")]
    pub source_dirs: Vec<String>,
    /// Module roots to generate matchers for, e.g. `crate::models`.
    #[serde(default = "default_packages")]
    pub packages: Vec<String>,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            source_dirs: default_source_dirs(),
            packages: default_packages(),
        }
    }
}

fn default_source_dirs() -> Vec<String> {
    vec!["src".to_string()]
}

fn default_packages() -> Vec<String> {
    vec!["crate".to_string()]
}

impl BeanmatchConfig {
    /// Parse a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Load `beanmatch.toml` from `project_root`, falling back to defaults when absent.
    pub fn load_or_default(project_root: &Path) -> Result<Self> {
        let path = project_root.join(CONFIG_FILE);
        if path.exists() { Self::load(&path) } else { Ok(Self::default()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BeanmatchConfig::default();
        assert_eq!(config.generator.output_dir, "src/generated");
        assert_eq!(config.generator.runtime_crate, "::beanmatch");
        assert_eq!(config.generator.naming, MethodNaming::Snake);
        assert_eq!(config.generator.generator_name, "beanmatch-build");
        assert_eq!(config.scan.source_dirs, vec!["src"]);
        assert_eq!(config.scan.packages, vec!["crate"]);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: BeanmatchConfig = toml::from_str(
            r#"
            [generator]
            naming = "camel"

            [scan]
            packages = ["crate::models", "crate::api"]
            "#,
        )
        .unwrap();
        assert_eq!(config.generator.naming, MethodNaming::Camel);
        assert_eq!(config.generator.output_dir, "src/generated");
        assert_eq!(config.scan.packages, vec!["crate::models", "crate::api"]);
        assert_eq!(config.scan.source_dirs, vec!["src"]);
    }

    #[test]
    fn test_config_serialization() {
        let config = BeanmatchConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("output_dir"));
        assert!(toml_str.contains("naming = \"snake\""));
        assert_eq!(toml::from_str::<BeanmatchConfig>(&toml_str).unwrap(), config);
    }

    #[test]
    fn test_load_or_default() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(BeanmatchConfig::load_or_default(dir.path()).unwrap(), BeanmatchConfig::default());

        std::fs::write(dir.path().join(CONFIG_FILE), "[generator]\noutput_dir = \"tests/generated\"\n").unwrap();
        let config = BeanmatchConfig::load_or_default(dir.path()).unwrap();
        assert_eq!(config.generator.output_dir, "tests/generated");

        std::fs::write(dir.path().join(CONFIG_FILE), "[generator\n").unwrap();
        assert!(BeanmatchConfig::load_or_default(dir.path()).is_err());
    }
}
