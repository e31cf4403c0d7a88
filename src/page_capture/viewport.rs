//! Page viewport control.

use anyhow::{Context, Result};
use chromiumoxide::Page;
use chromiumoxide::cdp::browser_protocol::emulation::SetDeviceMetricsOverrideParams;

/// Pin the page viewport to a fixed size in CSS pixels.
///
/// The browser window is already sized at launch, but window size and
/// layout viewport can drift apart (scrollbars, platform chrome). The
/// device-metrics override fixes the layout viewport the page actually
/// renders into.
pub async fn apply_viewport(page: &Page, width: u32, height: u32) -> Result<()> {
    let params = SetDeviceMetricsOverrideParams::builder()
        .width(i64::from(width))
        .height(i64::from(height))
        .device_scale_factor(1.0)
        .mobile(false)
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to build device metrics override: {e}"))?;

    page.execute(params)
        .await
        .context("Failed to apply viewport override")?;

    log::debug!("Viewport set to {}x{}", width, height);
    Ok(())
}
