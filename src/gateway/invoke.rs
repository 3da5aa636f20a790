// src/gateway/invoke.rs

use std::io;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use serde::Serialize;
use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::gateway::escape::join_command;
use crate::gateway::params::SaveSettingsParams;

/// Error message when the script ran but wrote nothing to either stream.
pub const NO_RESPONSE_MESSAGE: &str = "No response from shell script";

/// Error message when the subprocess could not be spawned at all.
pub const SPAWN_FAILURE_MESSAGE: &str = "Failed to start process";

/// Captured output of one completed script invocation.
///
/// Both streams are captured independently and drained to completion before
/// this is constructed; they are never merged.
#[derive(Debug, Clone)]
pub struct InvocationResult {
    pub stdout: String,
    pub stderr: String,
}

impl InvocationResult {
    /// Success is derived from output, not the exit code: the script
    /// reports its own result as JSON on stdout.
    pub fn exit_succeeded(&self) -> bool {
        !self.stdout.trim().is_empty()
    }
}

/// Normalized JSON response for the HTTP layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseEnvelope {
    /// The script's stdout, relayed verbatim. The script is trusted to have
    /// produced well-formed JSON; the gateway does not validate it.
    Passthrough(String),
    /// A failure, serialized as `{"status":"error","message":...}`.
    Error { message: String },
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    status: &'a str,
    message: &'a str,
}

impl ResponseEnvelope {
    pub fn error(message: impl Into<String>) -> Self {
        ResponseEnvelope::Error {
            message: message.into(),
        }
    }

    /// Render the envelope as the HTTP response body.
    pub fn into_body(self) -> String {
        match self {
            ResponseEnvelope::Passthrough(stdout) => stdout,
            ResponseEnvelope::Error { message } => {
                let body = ErrorBody {
                    status: "error",
                    message: &message,
                };
                // Serialization of two plain string fields cannot fail.
                serde_json::to_string(&body).unwrap_or_else(|_| {
                    format!(r#"{{"status":"error","message":{:?}}}"#, message)
                })
            }
        }
    }
}

/// Broker between request parameters and the external save-settings script.
///
/// The script path is explicit construction-time configuration so tests can
/// point the gateway at a double. Each [`CommandGateway::invoke`] performs
/// exactly one subprocess invocation; there are no retries, no timeout and
/// no cancellation (a client disconnect does not kill the child — the
/// surrounding server owns request timeout policy).
#[derive(Debug, Clone)]
pub struct CommandGateway {
    script: PathBuf,
}

impl CommandGateway {
    pub fn new(script: impl Into<PathBuf>) -> Self {
        CommandGateway {
            script: script.into(),
        }
    }

    pub fn script(&self) -> &Path {
        &self.script
    }

    /// Run the script with the six escaped positional arguments and capture
    /// both output streams to completion.
    ///
    /// `Err` is spawn failure only (missing executable, permissions,
    /// resource exhaustion). A script that runs and produces no output is
    /// `Ok` with empty streams.
    pub async fn run(&self, params: &SaveSettingsParams) -> io::Result<InvocationResult> {
        let argv = params.to_argv();
        let command_line = join_command(&self.script.to_string_lossy(), argv.iter());
        debug!(cmd = %command_line, "invoking save-settings script");

        let output = Command::new("sh")
            .arg("-c")
            .arg(&command_line)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await?;

        let result = InvocationResult {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        info!(
            script = %self.script.display(),
            exit_code = output.status.code().unwrap_or(-1),
            stdout_bytes = result.stdout.len(),
            stderr_bytes = result.stderr.len(),
            "save-settings script exited"
        );

        Ok(result)
    }

    /// Full gateway contract: invoke the script and normalize the outcome
    /// into a JSON response. Never fails; every failure mode collapses into
    /// an error envelope.
    pub async fn invoke(&self, params: &SaveSettingsParams) -> ResponseEnvelope {
        let result = match self.run(params).await {
            Ok(result) => result,
            Err(err) => {
                warn!(
                    script = %self.script.display(),
                    error = %err,
                    "failed to spawn save-settings script"
                );
                return ResponseEnvelope::error(SPAWN_FAILURE_MESSAGE);
            }
        };

        if result.exit_succeeded() {
            return ResponseEnvelope::Passthrough(result.stdout);
        }

        let stderr = result.stderr.trim();
        if stderr.is_empty() {
            ResponseEnvelope::error(NO_RESPONSE_MESSAGE)
        } else {
            ResponseEnvelope::error(stderr)
        }
    }
}
