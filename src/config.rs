//! Runtime configuration.
//!
//! Values come from three layers, later ones winning: built-in defaults, an
//! optional JSON file, and command line flags. Every file field is optional.
//!
//! ```json
//! {
//!   "rules": { "capture_simulation": "keep_captured", "mate_scan": "all_pieces" },
//!   "cell_width": 4,
//!   "cell_height": 2,
//!   "log_file": "chess.log",
//!   "log_level": "debug"
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::cli::Cli;
use crate::types::RulesConfig;

/// Env var naming a default config file.
pub const CONFIG_ENV: &str = "TUI_CHESS_CONFIG";

/// Env var holding an `env_logger` filter; overrides `log_level`.
pub const LOG_ENV: &str = "TUI_CHESS_LOG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub rules: RulesConfig,
    pub cell_width: u16,
    pub cell_height: u16,
    pub log_file: Option<PathBuf>,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rules: RulesConfig::default(),
            cell_width: 4,
            cell_height: 2,
            log_file: None,
            log_level: "info".into(),
        }
    }
}

impl Config {
    /// Parse a config from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("invalid config JSON")
    }

    /// Read a config file. The file must exist.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("in config {}", path.display()))
    }

    /// Build the effective config for a run.
    ///
    /// An explicit `--config` must exist. The `$TUI_CHESS_CONFIG` fallback is
    /// skipped when it points at a missing file.
    pub fn resolve(cli: &Cli, env_path: Option<PathBuf>) -> Result<Self> {
        let mut cfg = match (&cli.config, env_path) {
            (Some(path), _) => Self::load(path)?,
            (None, Some(path)) if path.exists() => Self::load(&path)?,
            _ => Self::default(),
        };
        cfg.apply_cli(cli);
        Ok(cfg)
    }

    /// Override fields with any flags given on the command line.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(capture) = cli.capture_sim {
            self.rules.capture_simulation = capture;
        }
        if let Some(scan) = cli.mate_scan {
            self.rules.mate_scan = scan;
        }
        if let Some(w) = cli.cell_width {
            self.cell_width = w;
        }
        if let Some(h) = cli.cell_height {
            self.cell_height = h;
        }
        if let Some(path) = &cli.log_file {
            self.log_file = Some(path.clone());
        }
    }
}
