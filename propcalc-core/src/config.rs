//! Calculator configuration: TOML file with per-section defaults.
//!
//! ```toml
//! [animation]
//! duration_ms = 400
//!
//! [risk]
//! account_size = 50000.0
//! profit_split = "90"
//!
//! [position]
//! stop_loss_units = 20.0
//!
//! [[instruments]]
//! name = "ES"
//! category = "futures"
//! tick_size = 0.25
//! tick_value = 12.5
//! unit = "tick"
//! ```
//!
//! Every key is optional; an empty file yields [`CalculatorConfig::default`].

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::catalog::InstrumentCatalog;
use crate::domain::{InstrumentPreset, PositionInputs, RiskInputs};
use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Length of one readout transition.
    pub duration_ms: u64,
    /// Frame cadence while any readout is animating.
    pub frame_interval_ms: u64,
    /// Input poll timeout while everything is at rest.
    pub idle_poll_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: 400,
            frame_interval_ms: 16,
            idle_poll_ms: 250,
        }
    }
}

impl AnimationConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    /// Never zero, so the frame loop cannot spin.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms.max(1))
    }

    pub fn idle_poll(&self) -> Duration {
        Duration::from_millis(self.idle_poll_ms.max(self.frame_interval_ms).max(1))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub animation: AnimationConfig,
    /// Starting values of the risk/payout form.
    pub risk: RiskInputs,
    /// Starting values of the position-size form.
    pub position: PositionInputs,
    /// Replaces the built-in catalog when present.
    pub instruments: Option<Vec<InstrumentPreset>>,
}

impl CalculatorConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content)?;
        tracing::info!(path = %path.display(), "loaded calculator config");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: CalculatorConfig = toml::from_str(content)?;
        if matches!(&config.instruments, Some(list) if list.is_empty()) {
            return Err(ConfigError::EmptyCatalog);
        }
        Ok(config)
    }

    /// The configured instrument list, or the built-in catalog.
    pub fn catalog(&self) -> InstrumentCatalog {
        match &self.instruments {
            Some(list) => InstrumentCatalog::new(list.clone())
                .unwrap_or_else(|_| InstrumentCatalog::default_catalog()),
            None => InstrumentCatalog::default_catalog(),
        }
    }
}
