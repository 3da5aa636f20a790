// src/config/model.rs

use std::path::PathBuf;

use serde::Deserialize;

/// Top-level configuration as read from a TOML file.
///
/// This is a direct mapping of the config format:
///
/// ```toml
/// [server]
/// listen = "127.0.0.1:8085"
///
/// [backup]
/// save_script = "/usr/local/emhttp/plugins/flash-backup/helpers/save_settings_remote.sh"
/// status_file = "/tmp/flash-backup/restore_status.txt"
/// ```
///
/// All sections are optional and default to the paths the flash-backup
/// plugin ships with.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ConfigFile {
    /// HTTP server settings from `[server]`.
    #[serde(default)]
    pub server: ServerSection,

    /// Script and status-file paths from `[backup]`.
    #[serde(default)]
    pub backup: BackupSection,
}

/// `[server]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSection {
    /// Address to bind, as `host:port`.
    #[serde(default = "default_listen")]
    pub listen: String,
}

fn default_listen() -> String {
    "127.0.0.1:8085".to_string()
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

/// `[backup]` section.
///
/// Both paths are owned by the plugin's shell scripts; this service only
/// invokes one and reads the other.
#[derive(Debug, Clone, Deserialize)]
pub struct BackupSection {
    /// The save-settings script invoked with the six positional arguments.
    #[serde(default = "default_save_script")]
    pub save_script: PathBuf,

    /// The restore-status file written by the restore script.
    #[serde(default = "default_status_file")]
    pub status_file: PathBuf,
}

fn default_save_script() -> PathBuf {
    PathBuf::from("/usr/local/emhttp/plugins/flash-backup/helpers/save_settings_remote.sh")
}

fn default_status_file() -> PathBuf {
    PathBuf::from("/tmp/flash-backup/restore_status.txt")
}

impl Default for BackupSection {
    fn default() -> Self {
        Self {
            save_script: default_save_script(),
            status_file: default_status_file(),
        }
    }
}
