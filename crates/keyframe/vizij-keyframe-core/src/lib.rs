//! Vizij Keyframe Core
//!
//! Ordered storage for timed 3D samples. Keyframes are appended in time order,
//! removed by position, looked up with a nearest-preceding binary search, and
//! blended with linear interpolation.
//!
//! The store manages its own capacity: it doubles when full, reserves once for
//! bulk loads, and halves once it falls under a quarter full.

pub mod config;
pub mod error;
pub mod generate;
pub mod interp;
pub mod keyframe;
pub mod store;

// Re-exports for consumers
pub use config::StoreConfig;
pub use error::KeyframeError;
pub use generate::{random_keyframe, RandomKeyframes};
pub use interp::{interpolate, interpolate_midpoint, DEFAULT_BLEND};
pub use keyframe::Keyframe;
pub use store::KeyframeStore;

/// Result alias for the fallible keyframe entry points.
pub type Result<T> = core::result::Result<T, KeyframeError>;
