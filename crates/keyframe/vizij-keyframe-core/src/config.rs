//! Sizing policy for KeyframeStore.

use serde::{Deserialize, Serialize};

use crate::error::KeyframeError;
use crate::Result;

/// Upper bound for `growth_factor` and `shrink_factor`.
pub const MAX_RESIZE_FACTOR: usize = 16;
/// Upper bound for `initial_capacity` (slots).
pub const MAX_INITIAL_CAPACITY: usize = 1 << 24;

/// Capacity rules for a keyframe store.
///
/// The store grows by `growth_factor` when full and shrinks by `shrink_factor`
/// once fewer than `capacity / shrink_load_divisor` slots are live.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Slots allocated by a fresh (or cleared) store.
    pub initial_capacity: usize,
    pub growth_factor: usize,
    pub shrink_factor: usize,
    /// Must exceed `shrink_factor` so a shrink never leaves the store full.
    pub shrink_load_divisor: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 4,
            growth_factor: 2,
            shrink_factor: 2,
            shrink_load_divisor: 4,
        }
    }
}

impl StoreConfig {
    /// Check the sizing rules.
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_INITIAL_CAPACITY).contains(&self.initial_capacity) {
            return Err(KeyframeError::invalid_config(format!(
                "initial_capacity must be in [1, {MAX_INITIAL_CAPACITY}], got {}",
                self.initial_capacity
            )));
        }
        if !(2..=MAX_RESIZE_FACTOR).contains(&self.growth_factor) {
            return Err(KeyframeError::invalid_config(format!(
                "growth_factor must be in [2, {MAX_RESIZE_FACTOR}], got {}",
                self.growth_factor
            )));
        }
        if !(2..=MAX_RESIZE_FACTOR).contains(&self.shrink_factor) {
            return Err(KeyframeError::invalid_config(format!(
                "shrink_factor must be in [2, {MAX_RESIZE_FACTOR}], got {}",
                self.shrink_factor
            )));
        }
        if self.shrink_load_divisor <= self.shrink_factor {
            return Err(KeyframeError::invalid_config(format!(
                "shrink_load_divisor ({}) must be greater than shrink_factor ({})",
                self.shrink_load_divisor, self.shrink_factor
            )));
        }
        Ok(())
    }

    /// Parse a config from JSON. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let cfg: StoreConfig = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }
}
