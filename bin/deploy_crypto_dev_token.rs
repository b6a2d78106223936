//! Deploy CryptoDevToken against an existing Crypto Devs NFT contract
//!
//! Run with: cargo run --bin deploy_crypto_dev_token --features livenet --release
//!
//! Signer and node come from `.env` (see `.env.sample`), the NFT address from
//! `constants/index.toml` or the file named by `CRYPTO_DEVS_CONSTANTS`.

use std::path::PathBuf;
use std::process::ExitCode;

use crypto_devs::artifacts::{Artifacts, DEFAULT_WASM_DIR};
use crypto_devs::config::{Constants, DEFAULT_CONSTANTS_PATH};
use crypto_devs::deployer::EXIT_FAILURE;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Load environment variables from .env file if it exists
    let _ = dotenvy::dotenv();

    init_logging();

    let constants_path = std::env::var_os("CRYPTO_DEVS_CONSTANTS")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONSTANTS_PATH));

    let constants = match Constants::load(&constants_path) {
        Ok(constants) => constants,
        Err(err) => {
            tracing::error!(%err, "failed to load constants");
            println!("{err}");
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    // Load the Casper livenet environment
    let env = odra_casper_livenet_env::env();
    let mut stdout = std::io::stdout().lock();

    let status = crypto_devs::run(&env, &constants, &Artifacts::in_dir(DEFAULT_WASM_DIR), &mut stdout);
    ExitCode::from(status)
}

/// Logs go to stderr so stdout carries only the deployment report.
/// Filtering follows `RUST_LOG`, defaulting to info for this crate.
fn init_logging() {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("crypto_devs=info,warn"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false)
                .compact(),
        )
        .with(env_filter)
        .init();
}
