//! Error types for the checked keyframe entry points.
//!
//! The core store operations never fail; only checked appends and
//! configuration loading report errors.

use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum KeyframeError {
    /// Keyframe time precedes the last stored keyframe
    #[error("Keyframe time {time} precedes last keyframe time {last}")]
    OutOfOrder { time: f32, last: f32 },

    /// Keyframe time is NaN or infinite
    #[error("Keyframe time must be finite, got {time}")]
    NonFiniteTime { time: f32 },

    /// Configuration values break a sizing rule
    #[error("Invalid store config: {reason}")]
    InvalidConfig { reason: String },

    /// Configuration could not be parsed
    #[error("Config parse error: {reason}")]
    Config { reason: String },
}

impl KeyframeError {
    #[inline]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Get error category for logging
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::OutOfOrder { .. } | Self::NonFiniteTime { .. } => "ordering",
            Self::InvalidConfig { .. } | Self::Config { .. } => "config",
        }
    }
}

impl From<serde_json::Error> for KeyframeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config {
            reason: err.to_string(),
        }
    }
}
