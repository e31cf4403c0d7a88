//! Configuration module for snapshot capture
//!
//! This module provides the `SnapConfig` struct and its type-safe builder
//! for configuring a capture run with validation and fixed defaults.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod methods;
pub mod types;

// Re-exports for public API
pub use builder::{SnapConfigBuilder, WithOutputDir, WithTargetUrl};
pub use types::SnapConfig;
