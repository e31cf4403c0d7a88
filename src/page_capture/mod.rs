//! Page-level capture operations.
//!
//! This module provides the building blocks applied to a live page:
//! viewport override, network-idle waiting, full-page screenshot
//! capture, and diagnostic value extraction.

// Sub-modules
pub mod diagnostics;
pub mod load_wait;
pub mod screenshot;
pub mod viewport;

// Re-exports for public API
pub use diagnostics::{body_text, excerpt, final_url, page_content};
pub use load_wait::wait_for_network_idle;
pub use screenshot::capture_screenshot;
pub use viewport::apply_viewport;
