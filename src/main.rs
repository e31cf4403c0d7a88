// Screenshot diagnostic for the local dev server.
//
// Runs with no arguments: captures http://localhost:4200 to
// /tmp/screenshots/01_initial.png and prints what the page looked
// like. Exits non-zero if the browser can't launch or the target is
// unreachable.

use pagesnap::utils::constants::{DEFAULT_OUTPUT_DIR, DEFAULT_TARGET_URL};
use pagesnap::{SnapConfig, snapshot};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .filter_module("chromiumoxide::handler", log::LevelFilter::Off)
        .filter_module("chromiumoxide::conn", log::LevelFilter::Off)
        .init();

    let config = SnapConfig::builder()
        .output_dir(DEFAULT_OUTPUT_DIR)
        .target_url(DEFAULT_TARGET_URL)
        .build()?;

    match snapshot(config).await {
        Ok(report) => {
            for line in report.diagnostic_lines() {
                println!("{line}");
            }
            println!("Done!");
            Ok(())
        }
        Err(e) => {
            log::error!("Snapshot failed: {e:#}");
            Err(e.into())
        }
    }
}
