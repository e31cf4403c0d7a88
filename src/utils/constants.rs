//! Shared configuration constants for pagesnap
//!
//! This module contains the fixed defaults used throughout the codebase
//! to ensure consistency and avoid magic numbers.

/// Default target address: the local dev server under inspection
///
/// The tool exists to eyeball a locally running frontend, so the
/// default points at the conventional dev-server port rather than a
/// public address.
pub const DEFAULT_TARGET_URL: &str = "http://localhost:4200";

/// Default screenshot output directory
pub const DEFAULT_OUTPUT_DIR: &str = "/tmp/screenshots";

/// Default screenshot file name within the output directory
///
/// The numeric prefix leaves room for follow-up captures to sort
/// after the initial one.
pub const DEFAULT_SCREENSHOT_FILE: &str = "01_initial.png";

/// Fixed page viewport width in CSS pixels
pub const VIEWPORT_WIDTH: u32 = 1280;

/// Fixed page viewport height in CSS pixels
pub const VIEWPORT_HEIGHT: u32 = 720;

/// Maximum number of characters of visible body text echoed in the
/// diagnostic output
///
/// Characters, not bytes: the target page may render non-ASCII text
/// and the excerpt must never split a code point.
pub const BODY_TEXT_PREVIEW_CHARS: usize = 500;

/// Default timeout in seconds for `page.goto()` operations
pub const DEFAULT_PAGE_LOAD_TIMEOUT_SECS: u64 = 30;

/// Default timeout in seconds for `page.wait_for_navigation()`
pub const DEFAULT_NAVIGATION_TIMEOUT_SECS: u64 = 30;

/// Budget in seconds for the network-idle polling loop
///
/// The idle wait is a heuristic, not a hard gate: when the budget is
/// exhausted the capture proceeds with whatever has rendered.
pub const DEFAULT_IDLE_WAIT_SECS: u64 = 10;
