// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod gateway;
pub mod http;
pub mod logging;
pub mod status;

use std::net::SocketAddr;
use std::path::PathBuf;

use tracing::info;

use crate::cli::CliArgs;
use crate::config::loader::load_and_validate;
use crate::config::model::ConfigFile;
use crate::config::validate::parse_listen_addr;
use crate::errors::Result;
use crate::http::AppState;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - gateway + status-file state
/// - the axum router
/// - Ctrl-C handling
pub async fn run(args: CliArgs) -> Result<()> {
    let config_path = PathBuf::from(&args.config);
    let mut cfg = load_and_validate(&config_path)?;

    // A --listen flag beats the config file.
    if let Some(listen) = args.listen {
        cfg.server.listen = listen;
    }
    let addr: SocketAddr = parse_listen_addr(&cfg)?;

    if args.dry_run {
        print_dry_run(&cfg, addr);
        return Ok(());
    }

    let state = AppState::from_config(&cfg);
    let app = http::router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(
        addr = %addr,
        script = %cfg.backup.save_script.display(),
        status_file = %cfg.backup.status_file.display(),
        "flashgate listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolve on Ctrl-C so `axum::serve` can drain in-flight requests.
///
/// Note: an already-spawned script invocation is not killed; it runs to
/// completion on its own.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        eprintln!("failed to listen for Ctrl+C: {e}");
        return;
    }
    info!("shutdown requested");
}

/// Simple dry-run output: print the resolved settings.
fn print_dry_run(cfg: &ConfigFile, addr: SocketAddr) {
    println!("flashgate dry-run");
    println!("  server.listen = {addr}");
    println!("  backup.save_script = {}", cfg.backup.save_script.display());
    println!("  backup.status_file = {}", cfg.backup.status_file.display());
}
