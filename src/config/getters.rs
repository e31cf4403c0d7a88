//! Getter methods for `SnapConfig`
//!
//! This module provides all the accessor methods for retrieving
//! configuration values from a `SnapConfig` instance.

use std::path::{Path, PathBuf};

use super::types::SnapConfig;

impl SnapConfig {
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    #[must_use]
    pub fn target_url(&self) -> &str {
        &self.target_url
    }

    #[must_use]
    pub fn screenshot_file(&self) -> &str {
        &self.screenshot_file
    }

    /// Full path of the screenshot file: `output_dir` joined with
    /// `screenshot_file`. Overwritten on every run.
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.screenshot_file)
    }

    #[must_use]
    pub fn viewport_width(&self) -> u32 {
        self.viewport_width
    }

    #[must_use]
    pub fn viewport_height(&self) -> u32 {
        self.viewport_height
    }

    #[must_use]
    pub fn headless(&self) -> bool {
        self.headless
    }

    /// Get the page load timeout in seconds
    ///
    /// Returns the configured timeout for `page.goto()` operations.
    /// If None, defaults to 30 seconds.
    #[must_use]
    pub fn page_load_timeout_secs(&self) -> u64 {
        self.page_load_timeout_secs.unwrap_or(30)
    }

    /// Get the navigation timeout in seconds
    ///
    /// Returns the configured timeout for `page.wait_for_navigation()`
    /// operations. If None, defaults to 30 seconds.
    #[must_use]
    pub fn navigation_timeout_secs(&self) -> u64 {
        self.navigation_timeout_secs.unwrap_or(30)
    }

    /// Get the network-idle polling budget in seconds
    ///
    /// If None, defaults to 10 seconds.
    #[must_use]
    pub fn idle_wait_secs(&self) -> u64 {
        self.idle_wait_secs.unwrap_or(10)
    }

    #[must_use]
    pub fn text_preview_chars(&self) -> usize {
        self.text_preview_chars
    }

    /// Get the Chrome user data directory if configured
    #[must_use]
    pub fn chrome_data_dir(&self) -> Option<&PathBuf> {
        self.chrome_data_dir.as_ref()
    }
}
