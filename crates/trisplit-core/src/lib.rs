// ABOUTME: Shared types and configuration for trisplit.
// ABOUTME: Defines view modes, timing curves, and layout settings.

pub mod config;
pub mod interpolator;
pub mod mode;

pub use config::{ConfigError, LayoutConfig, PaneWeights, Settings};
pub use interpolator::Interpolator;
pub use mode::Mode;
