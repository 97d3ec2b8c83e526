//! CLI argument parsing and the patch command handler

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::config::{self, PatchConfig};
use crate::output;
use crate::patcher::Patcher;

/// pagefix: rewrite the category page product-loading script
#[derive(Parser, Debug)]
#[command(
    name = "pagefix",
    version,
    about = "Rewrite the category page product-loading script",
    long_about = "Finds the old DOMContentLoaded loadCategoryProducts(category, gender) block \
                  in each category page and replaces it with a module-based loader that \
                  initializes Firebase first.\n\n\
                  Run 'pagefix' with no arguments to patch the built-in page list in place."
)]
pub struct Cli {
    /// Enable verbose logging (can be repeated for more verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Directory containing the pages (overrides the config file)
    #[arg(short, long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// TOML file with a [patch] section (base_dir, files)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Execute the patch run
    pub fn execute(self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .init();

        let config = resolve_config(self.config, self.root)?;
        handle_patch(&config)
    }
}

/// Build the effective config: defaults, then config file, then --root
fn resolve_config(config_path: Option<PathBuf>, root: Option<PathBuf>) -> Result<PatchConfig> {
    let mut config = match config_path {
        Some(path) => {
            if !path.exists() {
                output::warn(&format!(
                    "Config file {} not found, using built-in page list.",
                    path.display()
                ));
            }
            config::load_config(&path)?
        }
        None => PatchConfig::default(),
    };

    if let Some(root) = root {
        log::debug!("Overriding base directory with {}", root.display());
        config = config.with_base_dir(root);
    }

    Ok(config)
}

/// Handle the patch run
fn handle_patch(config: &PatchConfig) -> Result<()> {
    let patcher = Patcher::new()?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    patcher.run(config, &mut out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_no_arguments() {
        let cli = Cli::try_parse_from(["pagefix"]).unwrap();
        assert_eq!(cli.verbose, 0);
        assert!(cli.root.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from(["pagefix", "-vv", "--root", "/srv/site", "-c", "fix.toml"])
            .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.root, Some(PathBuf::from("/srv/site")));
        assert_eq!(cli.config, Some(PathBuf::from("fix.toml")));
    }

    #[test]
    fn test_resolve_defaults() {
        let config = resolve_config(None, None).unwrap();
        assert_eq!(config, PatchConfig::default());
    }

    #[test]
    fn test_root_overrides_config_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("fix.toml");
        std::fs::write(
            &path,
            "[patch]\nbase_dir = \"/from/config\"\nfiles = [\"one.html\"]\n",
        )
        .unwrap();

        let config = resolve_config(Some(path), Some(PathBuf::from("/from/flag"))).unwrap();
        assert_eq!(config.base_dir, PathBuf::from("/from/flag"));
        assert_eq!(config.files, vec!["one.html"]);
    }
}
