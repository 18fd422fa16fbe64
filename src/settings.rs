//! Run-loop settings
//!
//! Loaded from an optional JSON file. Missing fields take their defaults and
//! an unreadable file falls back to `Settings::default()`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::TICK_DELAY_MS;

/// Run-loop settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Delay between ticks (ms). Physics is per tick, so this sets game speed.
    pub tick_delay_ms: u64,
    /// Fixed RNG seed; `None` seeds from the clock
    pub seed: Option<u64>,
    /// Stop after this many ticks; `None` runs until interrupted
    pub max_ticks: Option<u64>,

    // === Autopilot ===
    /// Drive the player with the built-in autopilot
    pub autopilot: bool,
    /// Ticks between autopilot gravity toggles (0 = never)
    pub mode_switch_interval: u64,

    // === Logging ===
    /// Ticks between snapshot log lines (0 = never)
    pub snapshot_interval: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_delay_ms: TICK_DELAY_MS,
            seed: None,
            max_ticks: None,

            autopilot: true,
            mode_switch_interval: 1500,

            snapshot_interval: 100,
        }
    }
}

impl Settings {
    /// Parse settings from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from `path`, or defaults if there is none or it can't be read
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {} - using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {}: {} - using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Seed to run with: the configured one, or one derived from the clock
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        })
    }
}
