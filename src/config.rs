use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::scan::ScanOptions;

const CONFIG_DIR: &str = ".license-digest";
const CONFIG_FILE: &str = "config.toml";

/// Root configuration structure, deserialized from `.license-digest/config.toml`.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub report: ReportConfig,
    pub scan: ScanConfig,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReportConfig {
    /// Heading of the text and HTML documents.
    pub title: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: "Open source licenses".to_string(),
        }
    }
}

/// Walker settings. The set of skipped content types is fixed and not
/// configurable.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScanConfig {
    pub follow_links: bool,
    pub qualify_paths: bool,
}

impl ScanConfig {
    pub fn to_options(&self) -> ScanOptions {
        ScanOptions {
            follow_links: self.follow_links,
            qualify_paths: self.qualify_paths,
        }
    }
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `<first root>/.license-digest/config.toml`
/// 3. `~/.config/license-digest/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(first_root: Option<&Path>, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    if let Some(root) = first_root {
        let project_config = root.join(CONFIG_DIR).join(CONFIG_FILE);
        if project_config.exists() {
            return read_config(&project_config);
        }
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home.join(".config").join("license-digest").join(CONFIG_FILE);
        if home_config.exists() {
            return read_config(&home_config);
        }
    }

    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("Invalid config {}", path.display()))
}
