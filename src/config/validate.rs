// src/config/validate.rs

use std::net::SocketAddr;

use anyhow::{anyhow, Context, Result};

use crate::config::model::ConfigFile;

/// Run basic semantic validation against a loaded configuration.
///
/// This checks:
/// - `[server].listen` parses as a socket address
/// - `[backup].save_script` is a non-empty path
/// - `[backup].status_file` is a non-empty path
///
/// It does **not** check that either path exists on disk: the script and
/// status file are owned by the plugin and may legitimately appear after
/// this service starts (and tests point them at doubles).
pub fn validate_config(cfg: &ConfigFile) -> Result<()> {
    validate_listen(cfg)?;
    validate_paths(cfg)?;
    Ok(())
}

/// Parse the listen address once so startup fails early with a clear error
/// instead of at bind time.
pub fn parse_listen_addr(cfg: &ConfigFile) -> Result<SocketAddr> {
    cfg.server
        .listen
        .parse::<SocketAddr>()
        .with_context(|| format!("invalid [server].listen address {:?}", cfg.server.listen))
}

fn validate_listen(cfg: &ConfigFile) -> Result<()> {
    parse_listen_addr(cfg).map(|_| ())
}

fn validate_paths(cfg: &ConfigFile) -> Result<()> {
    if cfg.backup.save_script.as_os_str().is_empty() {
        return Err(anyhow!("[backup].save_script must not be empty"));
    }
    if cfg.backup.status_file.as_os_str().is_empty() {
        return Err(anyhow!("[backup].status_file must not be empty"));
    }
    Ok(())
}
