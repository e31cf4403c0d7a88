//! Diagnostic value extraction from a loaded page.
//!
//! Pulls the three values echoed after a capture: the page's final
//! URL, the rendered markup, and the visible body text.

use anyhow::{Context, Result};
use chromiumoxide::Page;

/// Placeholder printed when the page body has no visible text
pub const EMPTY_PLACEHOLDER: &str = "Empty";

/// The page's current URL as reported by the browser.
///
/// Falls back to the configured target when CDP reports none (e.g. a
/// target that detached mid-read).
pub async fn final_url(page: &Page, fallback: &str) -> String {
    page.url()
        .await
        .ok()
        .flatten()
        .unwrap_or_else(|| fallback.to_string())
}

/// The rendered page markup.
///
/// This is the serialized DOM at capture time, so JS-rendered content
/// is included. Its byte length is the printed content length.
pub async fn page_content(page: &Page) -> Result<String> {
    page.content()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to get page content: {e}"))
}

/// The page's visible body text via `innerText`.
pub async fn body_text(page: &Page) -> Result<String> {
    let js_result = page
        .evaluate("document.body ? document.body.innerText : ''")
        .await
        .context("Failed to evaluate body text")?;

    match js_result.into_value::<serde_json::Value>() {
        Ok(serde_json::Value::String(text)) => Ok(text),
        Ok(_) => Ok(String::new()),
        Err(e) => Err(anyhow::anyhow!("Failed to get body text value: {e}")),
    }
}

/// First `max_chars` characters of `text`, or the `Empty` placeholder
/// when there is nothing visible.
///
/// Counts characters, not bytes, so multibyte text is never split
/// mid code point.
#[must_use]
pub fn excerpt(text: &str, max_chars: usize) -> String {
    if text.trim().is_empty() {
        return EMPTY_PLACEHOLDER.to_string();
    }
    text.chars().take(max_chars).collect()
}
