//! Snapshot orchestration.
//!
//! Drives the sequential capture pipeline: output directory, browser
//! launch, navigation, idle wait, screenshot, diagnostics, teardown.

// Sub-modules
pub mod cleanup;
pub mod page_timeout;
pub mod runner;
pub mod snap_types;

// Re-exports for public API
pub use cleanup::{CleanupOutcome, cleanup_browser};
pub use runner::run_snapshot;
pub use snap_types::{SnapError, SnapReport, SnapResult};
