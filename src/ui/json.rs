//! NDJSON output: one JSON object per line on stdout.
//!
//! Every command emits a `start` event, its own payload events, then a
//! `complete` (or `error`) event.

use std::io::{self, Write};

use serde::Serialize;

/// Write a single NDJSON event.
pub fn write_event(out: &mut impl Write, event: &impl Serialize) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Convenience helper that writes to stdout.
pub fn emit(event: &impl Serialize) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, event)
}

/// Event emitted when a command starts.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub version: &'static str,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str) -> Self {
        Self {
            event: "start",
            command,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Event emitted when a command completes; `result` carries the report.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a, T: Serialize> {
    pub event: &'static str,
    pub command: &'a str,
    pub success: bool,
    pub result: T,
}

impl<'a, T: Serialize> CompleteEvent<'a, T> {
    pub fn new(command: &'a str, success: bool, result: T) -> Self {
        Self {
            event: "complete",
            command,
            success,
            result,
        }
    }
}

/// Event emitted when a command fails.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent {
    pub event: &'static str,
    pub message: String,
}

impl ErrorEvent {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            event: "error",
            message: message.into(),
        }
    }
}
