// src/errors.rs

//! Crate-wide error aliases.
//!
//! Startup and config errors flow through `anyhow`; request-time failures
//! never use these at all, since the gateway absorbs them into JSON error
//! envelopes (see `gateway::invoke`). This module is the single place to
//! add more structured error types later if that changes.

pub use anyhow::{Error, Result};
