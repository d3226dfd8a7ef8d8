use super::enums::{TaskPhase, TimeUnit};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Placeholder used when a task has no usable name
pub const PLACEHOLDER_NAME: &str = "untitled";

/// Maximum task name length, in characters
pub const NAME_MAX_CHARS: usize = 8;

/// Bounds for the numeric value in the duration editor
pub const VALUE_MIN: u64 = 1;
pub const VALUE_MAX: u64 = 99;

/// A countdown task. `due_at` (absolute unix seconds) is the sole
/// authoritative timing reference once set; `remaining` is a display cache
/// refreshed on read, never fed back into scheduling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable identity, unique within the collection
    pub id: String,
    /// Display label, at most `NAME_MAX_CHARS` characters
    pub name: String,
    /// Configured target duration in seconds
    pub seconds: u64,
    /// Last-known remaining seconds (display cache)
    pub remaining: u64,
    /// Whether the countdown is active
    pub is_running: bool,
    /// Absolute wall-clock deadline (unix seconds); None = not scheduled
    pub due_at: Option<i64>,
    /// Whether the due-notification fired for the current deadline
    pub notified: bool,
    /// Free-form note
    pub description: String,
}

impl Task {
    /// Create a fresh, unscheduled task
    pub fn new(name: impl Into<String>, seconds: u64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            seconds,
            remaining: seconds,
            is_running: false,
            due_at: None,
            notified: false,
            description: String::new(),
        }
    }

    /// Repair a loosely-typed persisted record into a well-formed task.
    ///
    /// Each field defaults independently when absent or of the wrong shape;
    /// a single bad field never sinks the record. Returns `None` only when
    /// the record is not an object at all, in which case the caller drops it
    /// from the collection.
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;

        let id = match obj.get("id").and_then(Value::as_str) {
            Some(s) if !s.is_empty() => s.to_string(),
            _ => Uuid::new_v4().to_string(),
        };

        let name = match obj.get("name").and_then(Value::as_str) {
            Some(s) if !s.is_empty() => s.to_string(),
            _ => PLACEHOLDER_NAME.to_string(),
        };

        let seconds = coerce_u64(obj.get("seconds"));
        // A missing display cache falls back to the configured duration
        let remaining = match obj.get("remaining") {
            Some(v) => coerce_u64(Some(v)),
            None => seconds,
        };

        let is_running = coerce_bool(obj.get("is_running"));
        let notified = coerce_bool(obj.get("notified"));
        let due_at = coerce_due_at(obj.get("due_at"));

        let description = obj
            .get("description")
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string();

        Some(Self {
            id,
            name,
            seconds,
            remaining,
            is_running,
            due_at,
            notified,
            description,
        })
    }

    /// Whether the deadline is set and has passed
    pub fn is_due(&self, now: i64) -> bool {
        matches!(self.due_at, Some(due) if now >= due)
    }

    /// Remaining seconds at `now`, recomputed from the deadline when
    /// scheduled (clamped at 0), else the stored cache.
    pub fn remaining_at(&self, now: i64) -> u64 {
        match self.due_at {
            Some(due) => (due - now).max(0) as u64,
            None => self.remaining,
        }
    }

    /// Derived lifecycle phase at `now`
    pub fn phase(&self, now: i64) -> TaskPhase {
        match self.due_at {
            None => TaskPhase::Unscheduled,
            Some(due) if now >= due => {
                if self.notified {
                    TaskPhase::DueAcknowledged
                } else {
                    TaskPhase::DueUnacknowledged
                }
            }
            Some(_) => {
                if self.is_running {
                    TaskPhase::Running
                } else {
                    TaskPhase::Paused
                }
            }
        }
    }

    /// Start the countdown. A task past its deadline is rejected silently
    /// (it must be reset first). Starting an already-running task is a no-op;
    /// starting an unscheduled task establishes `due_at = now + seconds` and
    /// clears the notification guard.
    pub fn start(&mut self, now: i64) {
        if self.is_due(now) {
            return;
        }
        self.is_running = true;
        if self.due_at.is_none() {
            self.due_at = Some(now + self.seconds as i64);
            self.notified = false;
        }
    }

    /// Pause the countdown. Only `is_running` changes: the absolute deadline
    /// keeps advancing in wall-clock time, so a later start does not get the
    /// paused time back. Carried-over behavior, kept on purpose.
    pub fn stop(&mut self) {
        self.is_running = false;
    }

    /// Re-arm the deadline from the configured duration. Permitted in every
    /// phase.
    pub fn reset(&mut self, now: i64) {
        self.is_running = false;
        self.due_at = Some(now + self.seconds as i64);
        self.notified = false;
    }

    /// Commit an edit from the form: sanitize the name, clamp the numeric
    /// value to 1..=99 (non-numeric input falls back to 1), recompute the
    /// duration from the unit, then re-arm the deadline. `is_running` is
    /// deliberately left as-is.
    pub fn commit_edit(&mut self, name: &str, value_text: &str, unit: TimeUnit, now: i64) {
        self.name = sanitize_name(name);

        let value = value_text.trim().parse::<u64>().unwrap_or(VALUE_MIN);
        let value = value.clamp(VALUE_MIN, VALUE_MAX);
        let seconds = (value * unit.multiplier()).max(1);

        self.seconds = seconds;
        self.remaining = seconds;
        self.due_at = Some(now + seconds as i64);
        self.notified = false;
    }
}

/// Trim and truncate a name to the display limit; empty becomes the
/// placeholder
pub fn sanitize_name(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return PLACEHOLDER_NAME.to_string();
    }
    trimmed.chars().take(NAME_MAX_CHARS).collect()
}

/// Coerce a JSON value to a non-negative integer, defaulting to 0.
/// Accepts numbers (truncated, clamped at 0) and numeric strings.
fn coerce_u64(value: Option<&Value>) -> u64 {
    match value {
        Some(Value::Number(n)) => {
            if let Some(u) = n.as_u64() {
                u
            } else if let Some(i) = n.as_i64() {
                i.max(0) as u64
            } else {
                n.as_f64().map(|f| f.max(0.0) as u64).unwrap_or(0)
            }
        }
        Some(Value::String(s)) => s.trim().parse::<i64>().map(|i| i.max(0) as u64).unwrap_or(0),
        _ => 0,
    }
}

/// Coerce a JSON value to a boolean, defaulting to false.
/// Accepts booleans and (for hand-edited files) nonzero numbers.
fn coerce_bool(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_i64().map(|i| i != 0).unwrap_or(false),
        _ => false,
    }
}

/// Accept a deadline only when present and non-empty; numbers and numeric
/// strings qualify, everything else is treated as unscheduled.
fn coerce_due_at(value: Option<&Value>) -> Option<i64> {
    match value {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Some(Value::String(s)) if !s.trim().is_empty() => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}
