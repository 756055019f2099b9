//! CLI execution context.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context as _, Result};
use glaze_cart::prelude::{CartService, TimeoutConfig};
use glaze_observability::{Environment, LogLevel};
use glaze_pricing::config::PricingStore;
use glaze_pricing::QuoteEngine;
use glaze_store::FileStore;

use crate::config::{CliConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Environment in effect.
    pub environment: Environment,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = match config_path {
            Some(path) => CliConfig::load(path)?,
            None => Self::find_config(&cwd).unwrap_or_default(),
        };
        let environment = config.environment();

        Ok(Self {
            config,
            environment,
            output,
            cwd,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<CliConfig> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                        return Some(config);
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Install the log subscriber. `--verbose` forces debug.
    pub fn init_logging(&self) -> Result<()> {
        let mut logging = self.config.logging.clone();
        if self.output.is_verbose() {
            logging.level = Some(LogLevel::Debug);
        }
        glaze_observability::init(&logging, self.environment)?;
        Ok(())
    }

    /// The data directory, resolved against the working directory.
    pub fn data_dir(&self) -> PathBuf {
        self.resolve_path(&self.config.store.data_dir)
    }

    /// Open the file store and the services on top of it.
    pub async fn services(&self) -> Result<Services> {
        let dir = self.data_dir();
        let store = Arc::new(
            FileStore::open(&dir)
                .await
                .with_context(|| format!("Failed to open data directory: {}", dir.display()))?,
        );
        self.output.debug(&format!("Using data directory {}", dir.display()));

        let pricing = PricingStore::new()
            .with_sink(store.clone())
            .with_persist_timeout(self.config.store.timeout());
        let table = pricing.load().await;
        self.output.debug(&format!("Loaded price table version {}", table.version));

        let engine = QuoteEngine::new(Arc::new(pricing));
        let carts = CartService::new(store, engine.clone())
            .with_timeouts(TimeoutConfig::from_store(self.config.store.timeout()));

        Ok(Services { engine, carts })
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }
}

/// Services backed by the configured store.
pub struct Services {
    pub engine: QuoteEngine,
    pub carts: CartService,
}
