use std::path::Path;

use anyhow::Result;
use clap::ArgMatches;
use clap::parser::ValueSource;
use config::{Config as ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};

/// Complete configuration for a build, merged from every source.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct PressConfig {
    pub build: press_core::config::BuildConfig,
}

impl PressConfig {
    /// Load configuration with cascading precedence:
    /// 1. CLI arguments (highest priority)
    /// 2. Environment variables (PRESS_*)
    /// 3. Configuration file
    /// 4. Defaults (lowest priority)
    pub fn load(args: &ArgMatches) -> Result<Self> {
        let config_file = args
            .get_one::<String>("config")
            .cloned()
            .unwrap_or_else(|| "./press.toml".to_string());

        let mut builder = ConfigBuilder::builder();

        // 1. Start with defaults
        builder = builder.add_source(config::Config::try_from(&Self::default())?);

        // 2. Add the configuration file if it exists
        if Path::new(&config_file).exists() {
            builder = builder.add_source(File::with_name(&config_file.replace(".toml", "")));
        }

        // 3. Add environment variables with PRESS_ prefix
        builder = builder.add_source(
            Environment::with_prefix("PRESS")
                .prefix_separator("_")
                .separator("__"),
        );

        // 4. Override with CLI arguments the user actually passed; clap
        // defaults would otherwise shadow the file and environment.
        let mut cli_overrides = std::collections::HashMap::new();
        for key in ["content", "assets", "template", "output"] {
            if args.value_source(key) != Some(ValueSource::CommandLine) {
                continue;
            }
            if let Some(value) = args.get_one::<String>(key) {
                cli_overrides.insert(format!("build.{}", key), value.clone());
            }
        }
        if !cli_overrides.is_empty() {
            builder = builder.add_source(config::Config::try_from(&cli_overrides)?);
        }

        let merged = builder.build()?;
        Ok(merged.try_deserialize()?)
    }

    pub fn build_config(&self) -> &press_core::config::BuildConfig {
        &self.build
    }
}

/// Load configuration specifically for build commands
pub fn load_build_config(args: &ArgMatches) -> Result<PressConfig> {
    PressConfig::load(args)
}
