use std::{fmt, path::Path};

use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parsing(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parsing(e) => write!(f, "TOML parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Parsing(value)
    }
}

#[derive(Deserialize, Serialize, Debug, Default)]
pub struct Config {
    pub build: Option<BuildConfig>,
}

impl Config {
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&data)?;

        Ok(config)
    }
}

/// Where the site's inputs live and where the output goes. All paths are
/// relative to the working directory unless absolute.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct BuildConfig {
    pub content: String,
    pub assets: String,
    pub template: String,
    pub output: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            content: "./content".to_string(),
            assets: "./static".to_string(),
            template: "./template.html".to_string(),
            output: "./public".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.build.is_none());

        let build = BuildConfig::default();
        assert_eq!(build.content, "./content");
        assert_eq!(build.assets, "./static");
        assert_eq!(build.template, "./template.html");
        assert_eq!(build.output, "./public");
    }

    #[test]
    fn partial_build_section_keeps_other_defaults() {
        let config: Config = toml::from_str("[build]\noutput = \"./dist\"\n").unwrap();
        let build = config.build.unwrap();
        assert_eq!(build.output, "./dist");
        assert_eq!(build.content, "./content");
    }
}
