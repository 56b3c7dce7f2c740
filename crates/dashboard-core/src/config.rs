//! Dashboard settings, read from an optional JSON file.
//!
//! Every field has a default, so an empty object (or no file at all) gives
//! the stock dashboard.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::animation::HEART_POPULATION;
use crate::bruteforce::{DICTIONARY_BATCH, EXHAUSTIVE_BATCH};
use crate::scan::{DISCOVERY_ODDS, PROGRESS_STEP};

/// File name the GUI looks for in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "dashboard.json";

/// Environment variable that overrides [`DEFAULT_CONFIG_FILE`].
pub const CONFIG_ENV_VAR: &str = "HACKER_DASHBOARD_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Directory holding the credential and address files.
    pub data_dir: PathBuf,
    /// Credential record, wordlist and learned cracks, all in one file.
    pub credentials_file: String,
    pub addresses_file: String,
    pub dictionary_batch: usize,
    pub exhaustive_batch: usize,
    pub discovery_odds: u32,
    pub progress_step: f64,
    pub heart_count: usize,
    /// Simulation ticks per second.
    pub tick_rate: f32,
    pub font_path: Option<PathBuf>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            credentials_file: "details".into(),
            addresses_file: "ip_addresses".into(),
            dictionary_batch: DICTIONARY_BATCH,
            exhaustive_batch: EXHAUSTIVE_BATCH,
            discovery_odds: DISCOVERY_ODDS,
            progress_step: PROGRESS_STEP,
            heart_count: HEART_POPULATION,
            tick_rate: 60.0,
            font_path: Some(PathBuf::from("arial.ttf")),
        }
    }
}

impl DashboardConfig {
    pub fn credentials_path(&self) -> PathBuf {
        self.data_dir.join(&self.credentials_file)
    }

    pub fn addresses_path(&self) -> PathBuf {
        self.data_dir.join(&self.addresses_file)
    }

    pub fn validate(&self) -> Result<()> {
        if self.dictionary_batch == 0 || self.exhaustive_batch == 0 {
            bail!("batch sizes must be at least 1");
        }
        if self.discovery_odds == 0 {
            bail!("discovery_odds must be at least 1");
        }
        if !(self.progress_step >= 0.0 && self.progress_step <= 1.0) {
            bail!("progress_step must be within 0.0-1.0, got {}", self.progress_step);
        }
        if !(self.tick_rate > 0.0) {
            bail!("tick_rate must be positive, got {}", self.tick_rate);
        }
        Ok(())
    }
}

pub fn load_config(path: &Path) -> Result<DashboardConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Cannot read config {}", path.display()))?;
    let config: DashboardConfig = serde_json::from_str(&data)
        .with_context(|| format!("Invalid config {}", path.display()))?;
    config.validate()?;
    Ok(config)
}
