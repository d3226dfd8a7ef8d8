use crate::domain::Task;
use crate::persistence::atomic_write;
use anyhow::Result;
use serde_json::Value;
use std::path::Path;
use thiserror::Error;

/// Failure importing a task file from an arbitrary path. Unlike the main
/// store (which silently degrades to an empty collection), imports surface
/// container-level problems so the user gets a message.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{path} is not a JSON task array")]
    NotATaskArray { path: String },
}

/// Load the task collection. Never fails: a missing file, unreadable bytes,
/// or a container that is not an array all yield an empty collection, and
/// individual records that are not objects are dropped. Well-formed fields
/// of a partially-malformed record survive (repaired field-by-field).
/// Insertion order is preserved.
pub fn load_tasks<P: AsRef<Path>>(path: P) -> Vec<Task> {
    let path = path.as_ref();
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => return Vec::new(),
    };

    let value: Value = match serde_json::from_str(&content) {
        Ok(value) => value,
        Err(_) => return Vec::new(),
    };

    repair_collection(&value)
}

/// Serialize and atomically persist the full collection. Callers treat a
/// failure as best-effort: in-memory state stays authoritative and the next
/// successful save captures it.
pub fn save_tasks<P: AsRef<Path>>(path: P, tasks: &[Task]) -> Result<()> {
    let json = serde_json::to_string_pretty(tasks)?;
    atomic_write(path, &json)?;
    Ok(())
}

/// Export the collection to an arbitrary path, same array shape as the
/// main store.
pub fn export_tasks<P: AsRef<Path>>(path: P, tasks: &[Task]) -> Result<()> {
    save_tasks(path, tasks)
}

/// Import a task array from an arbitrary path. Records are repaired exactly
/// like the main store's, but an unreadable file or a non-array container is
/// an error the caller reports; the import replaces the whole collection.
pub fn import_tasks<P: AsRef<Path>>(path: P) -> Result<Vec<Task>, ImportError> {
    let path = path.as_ref();
    let display = path.display().to_string();

    let content = std::fs::read_to_string(path).map_err(|source| ImportError::Io {
        path: display.clone(),
        source,
    })?;

    let value: Value = serde_json::from_str(&content)
        .map_err(|_| ImportError::NotATaskArray { path: display.clone() })?;

    if !value.is_array() {
        return Err(ImportError::NotATaskArray { path: display });
    }

    Ok(repair_collection(&value))
}

fn repair_collection(value: &Value) -> Vec<Task> {
    match value.as_array() {
        Some(records) => records.iter().filter_map(Task::from_value).collect(),
        None => Vec::new(),
    }
}
