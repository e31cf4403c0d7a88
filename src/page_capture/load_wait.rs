//! Network-idle detection for page loads.

use anyhow::Result;
use chromiumoxide::Page;

/// Wait for the page to reach a network-idle state.
///
/// `page.wait_for_navigation()` returns when the HTTP response
/// arrives, not when JavaScript has executed, CSS has applied, or
/// images have loaded. A capture taken at that point of a JS-heavy
/// page is blank. This function polls the page until it quiesces:
///
/// 1. `document.readyState === 'complete'` with a body present
/// 2. the resource-timing entry count stops growing between polls
///    (no new network requests over the quiescent window)
/// 3. a small buffer for final image decoding and CSS transitions
///
/// Idle detection is a heuristic: when `max_wait_secs` is exhausted
/// the capture proceeds with whatever has rendered, with a warning.
///
/// # Arguments
/// * `page` - Page to wait for
/// * `max_wait_secs` - Maximum time to wait before proceeding anyway
pub async fn wait_for_network_idle(page: &Page, max_wait_secs: u64) -> Result<()> {
    use std::time::{Duration, Instant};

    let start = Instant::now();
    let max_wait = Duration::from_secs(max_wait_secs);
    let poll_interval = Duration::from_millis(100);

    log::debug!("Waiting for network idle (max {}s)", max_wait_secs);

    let probe_script = r#"
        (function() {
            return {
                readyState: document.readyState,
                bodyExists: document.body !== null,
                imagesLoaded: Array.from(document.images).every(img => img.complete),
                resourceCount: performance.getEntriesByType('resource').length
            };
        })()
    "#;

    let mut last_resource_count: Option<u64> = None;

    loop {
        if start.elapsed() >= max_wait {
            log::warn!(
                "Timeout waiting for network idle after {}s, proceeding anyway",
                max_wait_secs
            );
            break;
        }

        match page.evaluate(probe_script).await {
            Ok(result) => {
                if let Ok(value) = result.into_value::<serde_json::Value>() {
                    let ready_state = value.get("readyState").and_then(|v| v.as_str());
                    let body_exists = value
                        .get("bodyExists")
                        .and_then(|v| v.as_bool())
                        .unwrap_or(false);
                    let images_loaded = value
                        .get("imagesLoaded")
                        .and_then(|v| v.as_bool())
                        .unwrap_or(false);
                    let resource_count = value.get("resourceCount").and_then(|v| v.as_u64());

                    let quiescent = resource_count.is_some() && resource_count == last_resource_count;
                    last_resource_count = resource_count;

                    if ready_state == Some("complete") && body_exists && quiescent {
                        let elapsed = start.elapsed();
                        log::debug!(
                            "Network idle after {:.2}s (images loaded: {})",
                            elapsed.as_secs_f64(),
                            images_loaded
                        );

                        // readyState=complete doesn't mean decoded pixels;
                        // give in-flight images a moment to finish.
                        if !images_loaded {
                            log::debug!("Images still loading, waiting additional 500ms");
                            tokio::time::sleep(Duration::from_millis(500)).await;
                        }

                        break;
                    }
                }
            }
            Err(e) => {
                log::debug!("Failed to probe page state: {}, retrying", e);
            }
        }

        tokio::time::sleep(poll_interval).await;
    }

    // Final buffer for CSS transitions and lazy-loaded content
    tokio::time::sleep(Duration::from_millis(200)).await;

    log::debug!(
        "Network idle wait complete after {:.2}s",
        start.elapsed().as_secs_f64()
    );
    Ok(())
}
