use std::error::Error;
use std::fs;
use std::path::Path;

use tempfile::tempdir;

use flashgate::config::{load_and_validate, load_from_path, validate_config, ConfigFile};
use flashgate::config::validate::parse_listen_addr;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn missing_config_file_falls_back_to_defaults() -> TestResult {
    let dir = tempdir()?;
    let cfg = load_and_validate(dir.path().join("Flashgate.toml"))?;

    assert_eq!(cfg.server.listen, "127.0.0.1:8085");
    assert_eq!(
        cfg.backup.save_script,
        Path::new("/usr/local/emhttp/plugins/flash-backup/helpers/save_settings_remote.sh")
    );
    assert_eq!(
        cfg.backup.status_file,
        Path::new("/tmp/flash-backup/restore_status.txt")
    );
    Ok(())
}

#[test]
fn config_file_overrides_defaults() -> TestResult {
    let dir = tempdir()?;
    let path = dir.path().join("Flashgate.toml");
    fs::write(
        &path,
        r#"
[server]
listen = "0.0.0.0:9090"

[backup]
save_script = "/opt/helpers/save.sh"
status_file = "/var/run/restore_status.txt"
"#,
    )?;

    let cfg = load_and_validate(&path)?;
    assert_eq!(cfg.server.listen, "0.0.0.0:9090");
    assert_eq!(cfg.backup.save_script, Path::new("/opt/helpers/save.sh"));
    assert_eq!(
        cfg.backup.status_file,
        Path::new("/var/run/restore_status.txt")
    );
    Ok(())
}

#[test]
fn partial_config_keeps_remaining_defaults() -> TestResult {
    let dir = tempdir()?;
    let path = dir.path().join("Flashgate.toml");
    fs::write(&path, "[server]\nlisten = \"127.0.0.1:7000\"\n")?;

    let cfg = load_from_path(&path)?;
    assert_eq!(cfg.server.listen, "127.0.0.1:7000");
    assert_eq!(
        cfg.backup.status_file,
        Path::new("/tmp/flash-backup/restore_status.txt")
    );
    Ok(())
}

#[test]
fn unparseable_listen_address_is_rejected() -> TestResult {
    let dir = tempdir()?;
    let path = dir.path().join("Flashgate.toml");
    fs::write(&path, "[server]\nlisten = \"not-an-address\"\n")?;

    assert!(load_and_validate(&path).is_err());
    Ok(())
}

#[test]
fn empty_script_path_is_rejected() -> TestResult {
    let dir = tempdir()?;
    let path = dir.path().join("Flashgate.toml");
    fs::write(&path, "[backup]\nsave_script = \"\"\n")?;

    assert!(load_and_validate(&path).is_err());
    Ok(())
}

#[test]
fn default_config_passes_validation() -> TestResult {
    let cfg = ConfigFile::default();
    validate_config(&cfg)?;
    assert_eq!(parse_listen_addr(&cfg)?.port(), 8085);
    Ok(())
}
