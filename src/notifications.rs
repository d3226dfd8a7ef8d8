//! Platform toast delivery. Fire-and-forget: runs on a detached thread,
//! reads only the snapshot it was handed, and swallows every failure.
//! The in-app toast is the one surface that must succeed.

use notify_rust::Notification;
use std::thread;

/// Show a system notification for a task that reached its deadline
pub fn notify_task_due(task_name: &str) {
    let body = format!("{} reached its target time", task_name);
    thread::spawn(move || {
        let _ = Notification::new()
            .appname("tickdown")
            .summary("Time's up")
            .body(&body)
            .show();
    });
}
