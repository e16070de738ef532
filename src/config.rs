//! Configuration file support for file-roundtrip.
//!
//! Provides YAML-based configuration through `file-roundtrip.config.yml` files:
//! an optional replacement scenario and the cleanup-on-failure switch.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::file_lifecycle::domain::{Scenario, Step, TextFile};
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "file-roundtrip.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub cleanup_on_failure: Option<bool>,
    #[serde(default, with = "serde_yaml_ng::with::singleton_map_recursive")]
    pub steps: Option<Vec<StepConfig>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// One scenario step as written in YAML, e.g. `- read_and_print: { path: a.txt }`.
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StepConfig {
    CreateAndWrite {
        path: PathBuf,
        #[serde(default)]
        fragments: Vec<String>,
    },
    ReadAndPrint {
        path: PathBuf,
    },
    Cleanup {
        paths: Vec<PathBuf>,
    },
}

impl ConfigFile {
    /// Builds the configured scenario, or `None` when the file keeps the default one.
    pub fn scenario(&self) -> Result<Option<Scenario>> {
        let Some(step_configs) = self.steps.as_ref() else {
            return Ok(None);
        };

        let steps = step_configs
            .iter()
            .map(|step| -> Result<Step> {
                Ok(match step {
                    StepConfig::CreateAndWrite { path, fragments } => {
                        Step::CreateAndWrite(TextFile::new(path.clone(), fragments.clone())?)
                    }
                    StepConfig::ReadAndPrint { path } => Step::ReadAndPrint(path.clone()),
                    StepConfig::Cleanup { paths } => Step::Cleanup(paths.clone()),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let scenario = Scenario::new(steps).context(
            "Invalid config: steps do not form a valid scenario\n\n\
             💡 Hint: Each file must be cleaned up before it is written again, and cleanup steps need at least one path.",
        )?;
        Ok(Some(scenario))
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
