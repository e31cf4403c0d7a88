//! Timeout utilities for page operations
//!
//! Provides an async timeout wrapper to prevent indefinite hangs
//! during page navigation and loading.

use anyhow::Result;
use std::future::Future;
use std::time::Duration;

/// Wrap an async page operation with an explicit timeout.
///
/// Applies `tokio::time::timeout` and turns an elapsed deadline into a
/// named error, so callers can distinguish "the operation failed" from
/// "the operation never came back".
///
/// # Arguments
/// * `operation` - The async Future to execute with a timeout
/// * `timeout_secs` - Timeout duration in seconds
/// * `operation_name` - Human-readable name for error messages
pub async fn with_page_timeout<F, T>(
    operation: F,
    timeout_secs: u64,
    operation_name: &str,
) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(Duration::from_secs(timeout_secs), operation).await {
        Ok(result) => result,
        Err(_) => Err(anyhow::anyhow!(
            "{operation_name} timeout after {timeout_secs} seconds"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn passes_through_fast_operations() {
        let result = with_page_timeout(async { Ok(42) }, 5, "Fast op").await;
        assert_eq!(result.unwrap(), 42);
    }

    #[tokio::test]
    async fn names_the_operation_on_timeout() {
        let result: Result<()> = with_page_timeout(
            async {
                tokio::time::sleep(Duration::from_secs(30)).await;
                Ok(())
            },
            1,
            "Page navigation",
        )
        .await;

        let msg = result.unwrap_err().to_string();
        assert!(msg.contains("Page navigation"));
        assert!(msg.contains("1 seconds"));
    }
}
