//! Configuration for a patch run

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Frontend directory the category pages live in
pub const DEFAULT_BASE_DIR: &str = "/workspace/tiqtaqo-fullstack/frontend";

/// Category pages carrying the old product-loading script, in processing order
pub const DEFAULT_FILES: &[&str] = &[
    "packs-homme.html",
    "glasses-homme.html",
    "glasses-femme.html",
    "wallets-homme.html",
    "wallets-femme.html",
    "accessoires-homme.html",
    "accessoires-femme.html",
];

/// Where to look and which files to patch
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PatchConfig {
    /// Directory every file name is joined onto
    #[serde(default = "default_base_dir")]
    pub base_dir: PathBuf,

    /// File names relative to `base_dir`, processed in this order
    #[serde(default = "default_files")]
    pub files: Vec<String>,
}

fn default_base_dir() -> PathBuf {
    PathBuf::from(DEFAULT_BASE_DIR)
}

fn default_files() -> Vec<String> {
    DEFAULT_FILES.iter().map(|f| f.to_string()).collect()
}

impl Default for PatchConfig {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
            files: default_files(),
        }
    }
}

impl PatchConfig {
    /// Same file list, different base directory
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    /// Full path of a listed file
    pub fn path_for(&self, file: &str) -> PathBuf {
        self.base_dir.join(file)
    }
}

/// Load patch config from a TOML file
///
/// Falls back to defaults if the file doesn't exist or the [patch] section is missing.
pub fn load_config(config_path: &Path) -> Result<PatchConfig> {
    if !config_path.exists() {
        log::debug!("No config found at {}, using default patch config", config_path.display());
        return Ok(PatchConfig::default());
    }

    let config_str = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read {}", config_path.display()))?;

    let toml_value: toml::Value = toml::from_str(&config_str)
        .with_context(|| format!("Failed to parse {}", config_path.display()))?;

    if let Some(patch_table) = toml_value.get("patch") {
        let config: PatchConfig = patch_table.clone().try_into()
            .context("Failed to parse [patch] section")?;
        Ok(config)
    } else {
        log::debug!("No [patch] section in {}, using defaults", config_path.display());
        Ok(PatchConfig::default())
    }
}
