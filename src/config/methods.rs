//! Builder methods available for all states
//!
//! This module contains methods that can be called on the builder
//! regardless of its current type state.

use super::builder::SnapConfigBuilder;

// Methods available for all states after required fields are set
impl<State> SnapConfigBuilder<State> {
    /// Set the screenshot file name within the output directory
    #[must_use]
    pub fn screenshot_file(mut self, name: impl Into<String>) -> Self {
        self.screenshot_file = name.into();
        self
    }

    /// Set the page viewport in CSS pixels
    #[must_use]
    pub fn viewport(mut self, width: u32, height: u32) -> Self {
        self.viewport_width = width;
        self.viewport_height = height;
        self
    }

    /// Set browser headless mode (visible vs invisible browser window)
    ///
    /// By default the capture runs headless, which is the only mode
    /// that works in containers and CI environments without a display
    /// server. Set to `false` to watch the page load during
    /// development.
    ///
    /// **Headless mode is enforced in release builds.** Any attempt to
    /// enable headed mode in a release build is overridden to headless
    /// with a warning logged.
    #[must_use]
    pub fn headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Set the timeout in seconds for `page.goto()`
    #[must_use]
    pub fn page_load_timeout_secs(mut self, secs: u64) -> Self {
        self.page_load_timeout_secs = Some(secs);
        self
    }

    /// Set the timeout in seconds for `page.wait_for_navigation()`
    #[must_use]
    pub fn navigation_timeout_secs(mut self, secs: u64) -> Self {
        self.navigation_timeout_secs = Some(secs);
        self
    }

    /// Set the budget in seconds for the network-idle polling loop
    #[must_use]
    pub fn idle_wait_secs(mut self, secs: u64) -> Self {
        self.idle_wait_secs = Some(secs);
        self
    }

    /// Set the maximum characters of body text echoed in diagnostics
    #[must_use]
    pub fn text_preview_chars(mut self, chars: usize) -> Self {
        self.text_preview_chars = chars;
        self
    }
}
