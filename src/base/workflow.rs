//! Interaction with the GitHub Actions runner.

use std::path::PathBuf;

use anyhow::Context;
use serde_json::Value;

use super::types::{Err, Res};

/// The event the workflow runner handed to this invocation.
#[derive(Debug, Clone)]
pub struct WorkflowContext {
    /// The webhook event name (`GITHUB_EVENT_NAME`).
    pub event_name: String,
    /// Path of the JSON webhook payload (`GITHUB_EVENT_PATH`).
    pub event_path: PathBuf,
}

impl WorkflowContext {
    pub fn new(event_name: impl Into<String>, event_path: impl Into<PathBuf>) -> Self {
        Self {
            event_name: event_name.into(),
            event_path: event_path.into(),
        }
    }

    /// Read and parse the webhook payload.
    pub fn load_payload(&self) -> Res<Value> {
        let raw = std::fs::read_to_string(&self.event_path).with_context(|| format!("Failed to read event payload at `{}`", self.event_path.display()))?;
        let payload = serde_json::from_str(&raw).with_context(|| format!("Failed to parse event payload at `{}`", self.event_path.display()))?;

        Ok(payload)
    }
}

/// Format an error as an `::error::` workflow command, which fails the step with that message.
pub fn failure_command(err: &Err) -> String {
    format!("::error::{}", escape_data(&format!("{err:#}")))
}

/// Escape a workflow command payload so it stays on one line.
fn escape_data(value: &str) -> String {
    value.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

// Tests.
