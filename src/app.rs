use crate::domain::{sanitize_name, Task, TimeUnit, UiMode, NAME_MAX_CHARS};
use crate::engine::{due_sweep, DueEvent};
use crate::notifications;
use crate::persistence::{save_settings, save_tasks, Settings};
use anyhow::Result;
use std::path::PathBuf;

/// Default duration for a freshly added task (5 minutes)
pub const NEW_TASK_SECONDS: u64 = 300;

/// Form state for adding/editing a task
#[derive(Debug, Clone)]
pub struct TaskFormState {
    pub task_id: String,
    pub is_new: bool,
    pub name: String,
    pub value: String, // two-digit numeric text, sanitized while typing
    pub unit: TimeUnit,
    pub description: String,
    pub editing_field: usize, // 0 = name, 1 = value, 2 = description
}

/// In-app due-notification surface. Sticks around until acknowledged
/// (Enter jumps to editing the task) or dismissed.
#[derive(Debug, Clone)]
pub struct ToastState {
    pub task_id: String,
    pub task_name: String,
}

/// Main application state. Owns the task collection and settings; every
/// mutation happens here, on the main loop thread.
pub struct AppState {
    pub tasks: Vec<Task>,
    pub settings: Settings,
    pub selected_index: usize,
    pub ui_mode: UiMode,
    pub form: Option<TaskFormState>,
    pub toast: Option<ToastState>,
    pub needs_save: bool,
    tasks_path: PathBuf,
    settings_path: PathBuf,
}

impl AppState {
    pub fn new(tasks: Vec<Task>, settings: Settings, tasks_path: PathBuf, settings_path: PathBuf) -> Self {
        Self {
            tasks,
            settings,
            selected_index: 0,
            ui_mode: UiMode::Normal,
            form: None,
            toast: None,
            needs_save: false,
            tasks_path,
            settings_path,
        }
    }

    /// Current wall-clock time in unix seconds
    pub fn now() -> i64 {
        chrono::Local::now().timestamp()
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.tasks.get(self.selected_index)
    }

    pub fn selected_task_mut(&mut self) -> Option<&mut Task> {
        self.tasks.get_mut(self.selected_index)
    }

    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.tasks.len() {
            self.selected_index += 1;
        }
    }

    // --- user intents -----------------------------------------------------

    pub fn start_selected(&mut self, now: i64) {
        if let Some(task) = self.selected_task_mut() {
            task.start(now);
            self.needs_save = true;
        }
    }

    pub fn stop_selected(&mut self) {
        if let Some(task) = self.selected_task_mut() {
            task.stop();
            self.needs_save = true;
        }
    }

    pub fn reset_selected(&mut self, now: i64) {
        if let Some(task) = self.selected_task_mut() {
            task.reset(now);
            self.needs_save = true;
        }
    }

    pub fn delete_selected(&mut self) {
        if self.selected_index < self.tasks.len() {
            self.tasks.remove(self.selected_index);
            if self.selected_index >= self.tasks.len() && self.selected_index > 0 {
                self.selected_index -= 1;
            }
            self.needs_save = true;
        }
    }

    /// Create a transient task and open the form for it. The task is not
    /// persisted until the form is submitted; cancelling discards it.
    pub fn start_add_task(&mut self) {
        let task = Task::new("new task", NEW_TASK_SECONDS);
        let form = form_for(&task, true);
        self.selected_index = self.tasks.len();
        self.tasks.push(task);
        self.form = Some(form);
        self.ui_mode = UiMode::AddingTask;
    }

    pub fn start_edit_selected(&mut self) {
        if let Some(task) = self.selected_task() {
            self.form = Some(form_for(task, false));
            self.ui_mode = UiMode::EditingTask;
        }
    }

    /// Open the edit form for a task by id (used by `--edit-task` and by
    /// toast acknowledgment). Unknown ids are ignored.
    pub fn open_edit_by_id(&mut self, id: &str) {
        if let Some(index) = self.tasks.iter().position(|t| t.id == id) {
            self.selected_index = index;
            self.start_edit_selected();
        }
    }

    pub fn submit_form(&mut self, now: i64) {
        let Some(form) = self.form.take() else {
            return;
        };
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == form.task_id) {
            task.commit_edit(&form.name, &form.value, form.unit, now);
            task.description = form.description;
            self.needs_save = true;
        }
        self.ui_mode = UiMode::Normal;
    }

    /// Close the form; an uncommitted add is discarded in memory with no
    /// store interaction.
    pub fn cancel_form(&mut self) {
        if let Some(form) = self.form.take() {
            if form.is_new {
                self.tasks.retain(|t| t.id != form.task_id);
                if self.selected_index >= self.tasks.len() && self.selected_index > 0 {
                    self.selected_index -= 1;
                }
            }
        }
        self.ui_mode = UiMode::Normal;
    }

    // --- form editing -----------------------------------------------------

    pub fn form_toggle_field(&mut self) {
        if let Some(form) = &mut self.form {
            form.editing_field = (form.editing_field + 1) % 3;
        }
    }

    pub fn form_add_char(&mut self, c: char) {
        if let Some(form) = &mut self.form {
            match form.editing_field {
                0 => {
                    // Enforce the name cap while typing
                    if form.name.chars().count() < NAME_MAX_CHARS {
                        form.name.push(c);
                    }
                }
                1 => {
                    // Two digits, 1..=99 enforced on commit
                    if c.is_ascii_digit() && form.value.len() < 2 {
                        form.value.push(c);
                    }
                }
                _ => form.description.push(c),
            }
        }
    }

    pub fn form_backspace(&mut self) {
        if let Some(form) = &mut self.form {
            match form.editing_field {
                0 => {
                    form.name.pop();
                }
                1 => {
                    form.value.pop();
                }
                _ => {
                    form.description.pop();
                }
            }
        }
    }

    pub fn form_cycle_unit(&mut self, forward: bool) {
        if let Some(form) = &mut self.form {
            form.unit = if forward { form.unit.next() } else { form.unit.prev() };
        }
    }

    // --- settings ---------------------------------------------------------

    pub fn toggle_system_notification(&mut self) {
        self.settings.enable_system_notification = !self.settings.enable_system_notification;
        self.persist_settings();
    }

    pub fn toggle_start_minimized(&mut self) {
        self.settings.start_minimized_to_tray = !self.settings.start_minimized_to_tray;
        self.persist_settings();
    }

    /// Best-effort settings write; in-memory settings stay authoritative
    fn persist_settings(&self) {
        let _ = save_settings(&self.settings_path, &self.settings);
    }

    // --- tick / notifications ---------------------------------------------

    /// Periodic due-sweep plus notification dispatch. Also invoked once at
    /// startup to recover deadlines crossed while the process was down;
    /// the `notified` flag dedups both paths.
    pub fn tick(&mut self, now: i64) {
        let events = due_sweep(&mut self.tasks, now);
        for event in &events {
            self.dispatch_notification(event);
        }
        if !events.is_empty() {
            self.needs_save = true;
        }
    }

    fn dispatch_notification(&mut self, event: &DueEvent) {
        // The in-app toast always shows; the platform toast is optional and
        // best-effort
        self.toast = Some(ToastState {
            task_id: event.task_id.clone(),
            task_name: event.task_name.clone(),
        });
        if self.settings.enable_system_notification {
            notifications::notify_task_due(&event.task_name);
        }
    }

    /// Acknowledge the toast by jumping to the task's edit form
    pub fn acknowledge_toast(&mut self) {
        if let Some(toast) = self.toast.take() {
            self.open_edit_by_id(&toast.task_id);
        }
    }

    pub fn dismiss_toast(&mut self) {
        self.toast = None;
    }

    // --- persistence ------------------------------------------------------

    /// Persist the collection. The caller treats failure as best-effort:
    /// the flag is cleared either way and the next mutation re-arms it.
    pub fn save(&mut self) -> Result<()> {
        self.needs_save = false;
        save_tasks(&self.tasks_path, &self.tasks)
    }
}

fn form_for(task: &Task, is_new: bool) -> TaskFormState {
    let (unit, value) = TimeUnit::best_fit(task.seconds);
    TaskFormState {
        task_id: task.id.clone(),
        is_new,
        name: sanitize_name(&task.name),
        value: value.to_string(),
        unit,
        description: task.description.clone(),
        editing_field: 0,
    }
}
