//! Hub configuration bootstrap — entry point.
//!
//! Startup sequence:
//!   1. Load .env (if present)
//!   2. Capture the environment snapshot and assemble the hub config
//!   3. Init logger at the configured level
//!   4. Log a summary and print the resolved config as JSON
//!
//! Exits non-zero without producing any output config when a required
//! variable is missing; the hub must not start half-configured.

use nbhub_config::{EnvSnapshot, HubConfig, error::AppError, logger};
use tracing::info;

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    // Load .env if present — ignore errors (file is optional).
    let _ = dotenvy::dotenv();

    let env = EnvSnapshot::capture();
    let config = HubConfig::from_env(&env)?;

    logger::parse_level(&config.log_level)?;
    logger::init(&config.log_level)?;

    info!(
        network = %config.spawner.network_name,
        images = config.spawner.images.len(),
        default_image = %config.spawner.default_image,
        bind_url = %config.bind_url,
        connect_url = %config.connect_url,
        "hub config assembled"
    );

    // Effective settings, for operator inspection and for the hub runtime.
    let rendered = serde_json::to_string_pretty(&config)
        .map_err(|e| AppError::Config(format!("cannot render config: {e}")))?;
    println!("{rendered}");

    Ok(())
}
