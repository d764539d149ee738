//! Shared setup for the `src/bin` entry points: config, logging, banners.

use crate::config::{DemoConfig, CONFIG_FILE};
use crate::error::Result;
use colored::Colorize;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Loads `patterns.toml` (or defaults) and installs the tracing subscriber.
pub fn init() -> Result<DemoConfig> {
    let config = DemoConfig::load_or_default(Path::new(CONFIG_FILE))?;
    init_logging(&config);
    Ok(config)
}

/// `RUST_LOG` wins over the configured filter. Logs go to stderr so the demo
/// output on stdout stays clean.
pub fn init_logging(config: &DemoConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn banner(title: &str, config: &DemoConfig) -> String {
    let line = format!("=== {} ===", title);
    if config.colored {
        line.bold().cyan().to_string()
    } else {
        line
    }
}
