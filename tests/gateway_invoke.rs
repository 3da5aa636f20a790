#![cfg(unix)]

use std::error::Error;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use tempfile::tempdir;

use flashgate::gateway::{CommandGateway, RequestParams, ResponseEnvelope, SaveSettingsParams};
use flashgate::gateway::invoke::{NO_RESPONSE_MESSAGE, SPAWN_FAILURE_MESSAGE};
use flashgate::gateway::params::PARAM_REMOTE_CONFIG;

type TestResult = Result<(), Box<dyn Error>>;

/// Write an executable `/bin/sh` script into `dir` and return its path.
fn write_script(dir: &Path, body: &str) -> std::io::Result<PathBuf> {
    let path = dir.join("save_settings.sh");
    fs::write(&path, format!("#!/bin/sh\n{body}\n"))?;
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755))?;
    Ok(path)
}

#[tokio::test]
async fn stdout_is_relayed_verbatim() -> TestResult {
    let dir = tempdir()?;
    let script = write_script(dir.path(), r#"printf '{"ok":true}'"#)?;
    let gateway = CommandGateway::new(script);

    let body = gateway.invoke(&SaveSettingsParams::default()).await.into_body();
    assert_eq!(body, r#"{"ok":true}"#);
    Ok(())
}

#[tokio::test]
async fn stderr_is_reported_when_stdout_is_empty() -> TestResult {
    let dir = tempdir()?;
    let script = write_script(dir.path(), "printf 'boom' >&2")?;
    let gateway = CommandGateway::new(script);

    let body = gateway.invoke(&SaveSettingsParams::default()).await.into_body();
    assert_eq!(body, r#"{"status":"error","message":"boom"}"#);
    Ok(())
}

#[tokio::test]
async fn silent_script_yields_fallback_message() -> TestResult {
    let dir = tempdir()?;
    let script = write_script(dir.path(), "exit 0")?;
    let gateway = CommandGateway::new(script);

    let envelope = gateway.invoke(&SaveSettingsParams::default()).await;
    assert_eq!(
        envelope,
        ResponseEnvelope::error(NO_RESPONSE_MESSAGE)
    );
    assert_eq!(
        envelope.into_body(),
        r#"{"status":"error","message":"No response from shell script"}"#
    );
    Ok(())
}

#[tokio::test]
async fn missing_parameters_still_pass_six_positional_arguments() -> TestResult {
    let dir = tempdir()?;
    let script = write_script(dir.path(), r#"printf '{"argc":%d}' "$#""#)?;
    let gateway = CommandGateway::new(script);

    let body = gateway.invoke(&SaveSettingsParams::default()).await.into_body();
    assert_eq!(body, r#"{"argc":6}"#);
    Ok(())
}

#[tokio::test]
async fn hostile_values_are_passed_through_unexecuted() -> TestResult {
    let dir = tempdir()?;
    // Echo the third positional argument and nothing else.
    let script = write_script(dir.path(), r#"printf '%s' "$3""#)?;
    let gateway = CommandGateway::new(script);

    let marker = dir.path().join("pwned");
    let hostile = format!(
        "\"; touch {m}; `touch {m}`; $(touch {m}); ; touch {m}",
        m = marker.display()
    );
    let params = SaveSettingsParams {
        remote_path: Some(hostile.clone()),
        ..Default::default()
    };

    let body = gateway.invoke(&params).await.into_body();
    assert_eq!(body, hostile);
    assert!(!marker.exists(), "shell metacharacters were interpreted");
    Ok(())
}

#[tokio::test]
async fn multi_valued_remote_config_reaches_the_script_joined() -> TestResult {
    let dir = tempdir()?;
    let script = write_script(dir.path(), r#"printf '%s' "$2""#)?;
    let gateway = CommandGateway::new(script);

    let params = RequestParams::from_pairs([
        (PARAM_REMOTE_CONFIG, "a "),
        (PARAM_REMOTE_CONFIG, " b"),
    ]);
    let settings = SaveSettingsParams::from_request(&params);

    let body = gateway.invoke(&settings).await.into_body();
    assert_eq!(body, "a,b");
    Ok(())
}

#[tokio::test]
async fn script_errors_surface_through_stderr() -> TestResult {
    // A missing script is caught by the shell, not at spawn time; its
    // complaint comes back through the stderr path of the envelope.
    let gateway = CommandGateway::new("/nonexistent/save_settings.sh");

    let envelope = gateway.invoke(&SaveSettingsParams::default()).await;
    match envelope {
        ResponseEnvelope::Error { message } => assert!(!message.is_empty()),
        other => panic!("expected error envelope, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn run_separates_the_two_streams() -> TestResult {
    let dir = tempdir()?;
    let script = write_script(dir.path(), "printf 'out'; printf 'err' >&2")?;
    let gateway = CommandGateway::new(script);

    let result = gateway.run(&SaveSettingsParams::default()).await?;
    assert_eq!(result.stdout, "out");
    assert_eq!(result.stderr, "err");
    assert!(result.exit_succeeded());
    Ok(())
}

#[test]
fn spawn_failure_envelope_serializes_with_fixed_message() {
    let body = ResponseEnvelope::error(SPAWN_FAILURE_MESSAGE).into_body();
    assert_eq!(body, r#"{"status":"error","message":"Failed to start process"}"#);
}
