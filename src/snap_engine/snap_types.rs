//! Core types for snapshot operations.
//!
//! This module contains the public error type and the capture report
//! returned by a successful run.

use std::path::PathBuf;

use crate::page_capture::diagnostics;

/// Error type for snapshot operations
#[derive(Debug, thiserror::Error)]
pub enum SnapError {
    /// Configuration or output-directory error before the browser starts
    #[error("Configuration error: {0}")]
    Config(String),

    /// Browser failed to launch or the page could not be created
    #[error("Browser error: {0}")]
    Browser(String),

    /// Navigation to the target failed or timed out
    #[error("Navigation error: {0}")]
    Navigation(String),

    /// Screenshot or diagnostics extraction failed after navigation
    #[error("Capture error: {0}")]
    Capture(String),

    /// Other errors
    #[error("Snapshot error: {0}")]
    Other(String),
}

impl From<anyhow::Error> for SnapError {
    fn from(err: anyhow::Error) -> Self {
        // Use {:#} to preserve full error chain with context
        Self::Other(format!("{err:#}"))
    }
}

/// Convenience alias for Result with `SnapError`
pub type SnapResult<T> = Result<T, SnapError>;

/// Everything a successful capture run observed.
#[derive(Debug, Clone)]
pub struct SnapReport {
    /// URL the page ended up at (after any redirects)
    pub final_url: String,
    /// Byte length of the rendered page markup
    pub content_bytes: usize,
    /// Visible body text, truncated to the configured character limit
    pub body_excerpt: String,
    /// Where the screenshot was written
    pub screenshot_path: PathBuf,
}

impl SnapReport {
    /// The three human-readable diagnostic lines, in print order.
    #[must_use]
    pub fn diagnostic_lines(&self) -> [String; 3] {
        [
            format!("Page URL: {}", self.final_url),
            format!("Page content length: {}", self.content_bytes),
            format!("Body text: {}", self.body_excerpt),
        ]
    }

    /// Build a report from raw page observations.
    #[must_use]
    pub fn new(
        final_url: String,
        content: &str,
        body_text: &str,
        preview_chars: usize,
        screenshot_path: PathBuf,
    ) -> Self {
        Self {
            final_url,
            content_bytes: content.len(),
            body_excerpt: diagnostics::excerpt(body_text, preview_chars),
            screenshot_path,
        }
    }
}
