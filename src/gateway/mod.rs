// src/gateway/mod.rs

//! Command invocation gateway.
//!
//! This module is responsible for turning untrusted request parameters into
//! a single, safe invocation of the external save-settings script, using
//! `tokio::process::Command`, and normalizing whatever the script produces
//! into a JSON response body.
//!
//! - [`params`] owns the request-parameter model and the typed settings
//!   struct that defines the positional-argument contract.
//! - [`escape`] contains the POSIX shell quoting used for every argument.
//! - [`invoke`] owns the subprocess invocation and the response decision
//!   rule.

pub mod escape;
pub mod invoke;
pub mod params;

pub use invoke::{CommandGateway, InvocationResult, ResponseEnvelope};
pub use params::{ParamValue, RequestParams, SaveSettingsParams};
