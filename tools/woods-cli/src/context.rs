//! CLI execution context.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context as _, Result};
use woods_cache::Cache;
use woods_commerce::catalog::Catalog;
use woods_commerce::checkout::SimulatedPayment;
use woods_commerce::store::{CachePersister, Store};

use crate::config::{CliConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// File the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => {
                let path = resolve(&cwd, path);
                (CliConfig::load(&path)?, Some(path))
            }
            None => match find_config(&cwd) {
                Some(path) => (CliConfig::load(&path)?, Some(path)),
                None => (CliConfig::default(), None),
            },
        };

        if let Some(ref path) = config_path {
            output.debug(&format!("Using config {}", path.display()));
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        resolve(&self.cwd, path)
    }

    /// Directory the store snapshot lives in.
    pub fn storage_dir(&self) -> PathBuf {
        self.resolve_path(&self.config.storage.dir)
    }

    /// Load the configured catalog, or the builtin one.
    pub fn catalog(&self) -> Result<Catalog> {
        match self.config.catalog.path {
            Some(ref path) => {
                let path = self.resolve_path(path);
                Catalog::load(&path)
                    .with_context(|| format!("Failed to load catalog {}", path.display()))
            }
            None => Catalog::builtin().context("Failed to load builtin catalog"),
        }
    }

    /// Restore the cart and favorites saved by earlier runs.
    pub fn open_store(&self) -> Result<Store<CachePersister>> {
        let dir = self.storage_dir();
        tracing::debug!(dir = %dir.display(), key = %self.config.storage.key, "restoring store");
        let cache = Cache::open(&dir)
            .with_context(|| format!("Failed to open storage {}", dir.display()))?;
        let persister = CachePersister::with_key(cache, self.config.storage.key.clone());
        Ok(Store::restore(persister))
    }

    /// Payment processor honouring the configured delay.
    pub fn payment_processor(&self) -> SimulatedPayment {
        SimulatedPayment::new(Duration::from_millis(self.config.checkout.payment_delay_ms))
    }
}

/// Find the nearest config file, walking up from `start`.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in CONFIG_FILE_NAMES {
            let candidate = current.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }

        if !current.pop() {
            return None;
        }
    }
}

fn resolve(cwd: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_config_walks_up() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(".woods.toml"), "").unwrap();

        assert_eq!(find_config(&nested), Some(dir.path().join(".woods.toml")));
    }

    #[test]
    fn test_find_config_prefers_woods_toml() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        std::fs::write(dir.path().join("woods.json"), "{}").unwrap();
        std::fs::write(dir.path().join("woods.toml"), "").unwrap();

        assert_eq!(find_config(dir.path()), Some(dir.path().join("woods.toml")));
    }

    #[test]
    fn test_store_round_trips_through_storage_dir() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let mut config = CliConfig::default();
        config.storage.dir = dir.path().join("state").to_string_lossy().into_owned();
        let ctx = Context {
            config,
            config_path: None,
            output: Output::new(false, true),
            cwd: dir.path().to_path_buf(),
        };

        let catalog = ctx.catalog().unwrap();
        let mut store = ctx.open_store().unwrap();
        store.toggle_favorite(catalog.products()[0].to_favorite());

        let reopened = ctx.open_store().unwrap();
        assert_eq!(reopened.favorites_len(), 1);
        assert!(dir.path().join("state").join("artisan-woods-storage.json").is_file());
    }
}
