//! Type-safe builder for `SnapConfig` using the typestate pattern
//!
//! This module provides a fluent builder interface with compile-time
//! validation ensuring that the output directory and target address
//! are set before a `SnapConfig` can be built.

use anyhow::{Result, anyhow};
use std::marker::PhantomData;
use std::path::PathBuf;
use url::Url;

use super::types::SnapConfig;
use crate::utils::constants::{
    BODY_TEXT_PREVIEW_CHARS, DEFAULT_IDLE_WAIT_SECS, DEFAULT_NAVIGATION_TIMEOUT_SECS,
    DEFAULT_PAGE_LOAD_TIMEOUT_SECS, DEFAULT_SCREENSHOT_FILE, VIEWPORT_HEIGHT, VIEWPORT_WIDTH,
};

// Type states for the builder
pub struct WithOutputDir;
pub struct WithTargetUrl;

pub struct SnapConfigBuilder<State = ()> {
    pub(crate) output_dir: Option<PathBuf>,
    pub(crate) target_url: Option<String>,
    pub(crate) screenshot_file: String,
    pub(crate) viewport_width: u32,
    pub(crate) viewport_height: u32,
    pub(crate) headless: bool,
    pub(crate) page_load_timeout_secs: Option<u64>,
    pub(crate) navigation_timeout_secs: Option<u64>,
    pub(crate) idle_wait_secs: Option<u64>,
    pub(crate) text_preview_chars: usize,
    pub(crate) _phantom: PhantomData<State>,
}

impl Default for SnapConfigBuilder<()> {
    fn default() -> Self {
        Self {
            output_dir: None,
            target_url: None,
            screenshot_file: DEFAULT_SCREENSHOT_FILE.to_string(),
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
            headless: true,
            page_load_timeout_secs: Some(DEFAULT_PAGE_LOAD_TIMEOUT_SECS),
            navigation_timeout_secs: Some(DEFAULT_NAVIGATION_TIMEOUT_SECS),
            idle_wait_secs: Some(DEFAULT_IDLE_WAIT_SECS),
            text_preview_chars: BODY_TEXT_PREVIEW_CHARS,
            _phantom: PhantomData,
        }
    }
}

impl SnapConfig {
    /// Create a builder for configuring a `SnapConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> SnapConfigBuilder<()> {
        SnapConfigBuilder::default()
    }
}

impl SnapConfigBuilder<()> {
    pub fn output_dir(self, dir: impl Into<PathBuf>) -> SnapConfigBuilder<WithOutputDir> {
        SnapConfigBuilder {
            output_dir: Some(dir.into()),
            target_url: self.target_url,
            screenshot_file: self.screenshot_file,
            viewport_width: self.viewport_width,
            viewport_height: self.viewport_height,
            headless: self.headless,
            page_load_timeout_secs: self.page_load_timeout_secs,
            navigation_timeout_secs: self.navigation_timeout_secs,
            idle_wait_secs: self.idle_wait_secs,
            text_preview_chars: self.text_preview_chars,
            _phantom: PhantomData,
        }
    }
}

impl SnapConfigBuilder<WithOutputDir> {
    pub fn target_url(self, url: impl Into<String>) -> SnapConfigBuilder<WithTargetUrl> {
        let url_string = url.into();

        // Normalize: the tool points at local dev servers, so a
        // missing scheme becomes plain http rather than https.
        let normalized_url =
            if url_string.starts_with("http://") || url_string.starts_with("https://") {
                url_string
            } else {
                format!("http://{url_string}")
            };

        SnapConfigBuilder {
            output_dir: self.output_dir,
            target_url: Some(normalized_url),
            screenshot_file: self.screenshot_file,
            viewport_width: self.viewport_width,
            viewport_height: self.viewport_height,
            headless: self.headless,
            page_load_timeout_secs: self.page_load_timeout_secs,
            navigation_timeout_secs: self.navigation_timeout_secs,
            idle_wait_secs: self.idle_wait_secs,
            text_preview_chars: self.text_preview_chars,
            _phantom: PhantomData,
        }
    }
}

// Build method only available when both required fields are set
impl SnapConfigBuilder<WithTargetUrl> {
    pub fn build(self) -> Result<SnapConfig> {
        let target_url = self
            .target_url
            .ok_or_else(|| anyhow!("target_url is required"))?;

        Url::parse(&target_url).map_err(|e| anyhow!("Invalid target URL '{target_url}': {e}"))?;

        // Enforce headless mode in release builds for production safety
        #[cfg(not(debug_assertions))]
        let headless = if !self.headless {
            // In release builds, override headed mode and force headless
            tracing::warn!(
                "Forcing headless mode in release build. \
                Headed mode is only available in debug builds for development."
            );
            true
        } else {
            self.headless
        };

        #[cfg(debug_assertions)]
        let headless = self.headless;

        Ok(SnapConfig {
            output_dir: self
                .output_dir
                .ok_or_else(|| anyhow!("output_dir is required"))?,
            target_url,
            screenshot_file: self.screenshot_file,
            viewport_width: self.viewport_width,
            viewport_height: self.viewport_height,
            headless,
            page_load_timeout_secs: self.page_load_timeout_secs,
            navigation_timeout_secs: self.navigation_timeout_secs,
            idle_wait_secs: self.idle_wait_secs,
            text_preview_chars: self.text_preview_chars,
            chrome_data_dir: None,
        })
    }
}
