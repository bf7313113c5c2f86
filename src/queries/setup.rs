//! First-run provisioning of the sidecar's card database.
//!
//! Provisioning runs server-side; this interface starts it and polls the
//! progress endpoint, forwarding each event to a caller-supplied callback
//! until the sidecar reports completion.

use std::thread;
use std::time::Duration;

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::client::Bridge;
use crate::error::Result;

/// Interval between progress polls while provisioning runs.
const PROGRESS_POLL: Duration = Duration::from_millis(500);

// ---------------------------------------------------------------------------
// SetupProgress
// ---------------------------------------------------------------------------

/// One progress event from the provisioning stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupProgress {
    pub stage: String,
    #[serde(default)]
    pub percent: f64,
    pub message: Option<String>,
    #[serde(default)]
    pub done: bool,
}

// ---------------------------------------------------------------------------
// SetupQuery
// ---------------------------------------------------------------------------

/// Query interface for first-run database provisioning.
pub struct SetupQuery<'a> {
    bridge: &'a Bridge,
}

impl<'a> SetupQuery<'a> {
    /// Create a new `SetupQuery` bound to the given bridge.
    pub fn new(bridge: &'a Bridge) -> Self {
        Self { bridge }
    }

    /// Kick off provisioning. Idempotent on the sidecar side.
    pub fn start(&self) -> Result<()> {
        self.bridge.call("setup.start", json!({}))?;
        Ok(())
    }

    /// Current provisioning state.
    pub fn progress(&self) -> Result<SetupProgress> {
        self.bridge.call_into("setup.progress", json!({}))
    }

    /// Start provisioning and poll until done, invoking `on_progress` for
    /// every observed event. Blocks the calling thread.
    pub fn run(&self, mut on_progress: impl FnMut(&SetupProgress)) -> Result<SetupProgress> {
        self.start()?;
        loop {
            let event = self.progress()?;
            debug!("setup {}: {:.0}%", event.stage, event.percent);
            on_progress(&event);
            if event.done {
                return Ok(event);
            }
            thread::sleep(PROGRESS_POLL);
        }
    }
}
