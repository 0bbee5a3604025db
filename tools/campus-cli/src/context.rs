//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use campus_commerce::cart::CartEngine;
use campus_commerce::catalog::Catalog;
use campus_commerce::Currency;
use campus_store::FileStore;

use crate::config::CliConfig;
use crate::output::Output;

/// Config file names searched for, in order, in each directory.
pub const CONFIG_NAMES: [&str; 3] = ["campus.toml", ".campus.toml", "campus.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration, with the profile applied.
    pub config: CliConfig,
    /// Config file the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(
        config_path: Option<&str>,
        profile: Option<&str>,
        currency: Option<Currency>,
        output: Output,
    ) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (CliConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        let mut config = match profile {
            Some(profile) => config.for_profile(profile),
            None => config,
        };
        if let Some(currency) = currency {
            config.engine = config.engine.with_currency(currency);
        }

        tracing::debug!(
            config = ?config_path,
            storage_key = %config.engine.storage_key,
            currency = %config.engine.currency.code(),
            "context loaded"
        );

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(CliConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    match CliConfig::load(config_path.to_str()?) {
                        Ok(config) => return Some((config, config_path)),
                        Err(e) => {
                            tracing::warn!(path = %config_path.display(), error = %e, "skipping unreadable config")
                        }
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// The listing catalog.
    pub fn catalog(&self) -> Catalog {
        Catalog::sample()
    }

    /// Get the data directory for blob files.
    pub fn data_dir(&self) -> PathBuf {
        self.resolve_path(&self.config.store.data_dir)
    }

    /// Open the persisted cart.
    pub fn cart(&self) -> Result<CartEngine<FileStore>> {
        let dir = self.data_dir();
        let store = FileStore::open(&dir)
            .with_context(|| format!("Failed to open data directory: {}", dir.display()))?;
        Ok(CartEngine::load(store, &self.config.engine))
    }

    /// Open the persisted cart only if the data directory already exists.
    ///
    /// Read-only commands use this so they never create the directory.
    pub fn existing_cart(&self) -> Result<Option<CartEngine<FileStore>>> {
        if !self.data_dir().is_dir() {
            return Ok(None);
        }
        self.cart().map(Some)
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if PathBuf::from(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_commerce::catalog::Catalog;

    fn context_in(cwd: &Path) -> Context {
        Context {
            config: CliConfig::default(),
            config_path: None,
            output: Output::new(false, true),
            cwd: cwd.to_path_buf(),
        }
    }

    #[test]
    fn test_existing_cart_does_not_create_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context_in(dir.path());

        assert!(ctx.existing_cart().unwrap().is_none());
        assert!(!ctx.data_dir().exists());
    }

    #[test]
    fn test_existing_cart_reads_saved_cart() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context_in(dir.path());
        let listing = Catalog::sample().get(&"1".into()).unwrap().clone();

        let mut cart = ctx.cart().unwrap();
        cart.add_one(&listing).unwrap();
        assert!(ctx.data_dir().is_dir());

        let reopened = ctx.existing_cart().unwrap().unwrap();
        assert!(reopened.is_in_cart(&listing.id));
    }
}
