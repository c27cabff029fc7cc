//! Activity-log adapters

use std::sync::Mutex;

use tracing::info;

use core_kernel::{ActivityEvent, ActivityLog};

/// Emits activity events to the tracing pipeline under the `activity`
/// target. Fire-and-forget: nothing is awaited, nothing fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingActivityLog;

impl ActivityLog for TracingActivityLog {
    fn record(&self, event: ActivityEvent) {
        info!(
            target: "activity",
            action = %event.action,
            entity = %event.entity,
            actor = %event.actor,
            detail = event.detail.as_deref().unwrap_or(""),
            "activity recorded"
        );
    }
}

/// Captures events for assertions in tests
#[derive(Debug, Default)]
pub struct RecordingActivityLog {
    events: Mutex<Vec<ActivityEvent>>,
}

impl RecordingActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far
    pub fn events(&self) -> Vec<ActivityEvent> {
        self.events.lock().expect("activity lock poisoned").clone()
    }

    /// Actions recorded, in order
    pub fn actions(&self) -> Vec<String> {
        self.events().into_iter().map(|e| e.action).collect()
    }
}

impl ActivityLog for RecordingActivityLog {
    fn record(&self, event: ActivityEvent) {
        self.events.lock().expect("activity lock poisoned").push(event);
    }
}
