use crate::domain::Task;

/// Snapshot emitted when a task crosses its deadline. Carries only what the
/// notification side needs; workers never touch the task itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DueEvent {
    pub task_id: String,
    pub task_name: String,
}

/// Sweep the collection for tasks that have just become due: every running
/// task whose deadline has passed and whose notification has not fired is
/// stopped, marked notified, and reported exactly once.
///
/// The `notified` flag is the dedup guard: running the sweep again is a
/// no-op for already-notified tasks. The same sweep runs once at startup to
/// recover deadlines that passed while the process was down.
pub fn due_sweep(tasks: &mut [Task], now: i64) -> Vec<DueEvent> {
    let mut events = Vec::new();

    for task in tasks.iter_mut() {
        if task.is_running && task.is_due(now) && !task.notified {
            task.is_running = false;
            task.notified = true;
            events.push(DueEvent {
                task_id: task.id.clone(),
                task_name: task.name.clone(),
            });
        }
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> i64 {
        1_700_000_000
    }

    #[test]
    fn test_sweep_fires_once_per_deadline() {
        let mut task = Task::new("report", 10);
        task.start(now());
        let mut tasks = vec![task];

        let events = due_sweep(&mut tasks, now() + 15);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].task_name, "report");
        assert!(!tasks[0].is_running);
        assert!(tasks[0].notified);

        // Second sweep is a no-op: notified guards the dedup
        let events = due_sweep(&mut tasks, now() + 16);
        assert!(events.is_empty());
        assert!(!tasks[0].is_running);
    }

    #[test]
    fn test_sweep_ignores_tasks_before_deadline() {
        let mut task = Task::new("report", 100);
        task.start(now());
        let mut tasks = vec![task];

        let events = due_sweep(&mut tasks, now() + 50);
        assert!(events.is_empty());
        assert!(tasks[0].is_running);
        assert!(!tasks[0].notified);
    }

    #[test]
    fn test_sweep_ignores_paused_and_unscheduled_tasks() {
        let mut paused = Task::new("paused", 10);
        paused.start(now());
        paused.stop();
        let unscheduled = Task::new("idle", 10);
        let mut tasks = vec![paused, unscheduled];

        let events = due_sweep(&mut tasks, now() + 100);
        assert!(events.is_empty());
        assert!(!tasks[0].notified);
        assert!(!tasks[1].notified);
    }

    #[test]
    fn test_sweep_handles_mixed_collection() {
        let mut due = Task::new("due", 2);
        due.start(now());
        let mut live = Task::new("live", 500);
        live.start(now());
        let mut already = Task::new("already", 2);
        already.start(now());
        already.notified = true;
        already.is_running = true; // never valid after a sweep, but must still dedup
        let mut tasks = vec![due, live, already];

        let events = due_sweep(&mut tasks, now() + 3);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].task_id, tasks[0].id);
        assert!(tasks[1].is_running);
    }

    #[test]
    fn test_end_to_end_start_then_due() {
        // Create with seconds=2, start, advance the clock 3 seconds, sweep
        let mut task = Task::new("short", 2);
        task.start(now());
        let mut tasks = vec![task];

        let events = due_sweep(&mut tasks, now() + 3);
        assert_eq!(events.len(), 1);
        assert!(!tasks[0].is_running);
        assert!(tasks[0].notified);
        assert_eq!(tasks[0].remaining_at(now() + 3), 0);
    }
}
