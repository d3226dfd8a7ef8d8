use crate::app::AppState;
use crate::domain::UiMode;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    // The toast overlay takes Enter/Esc first; everything else falls
    // through so a notification never blocks normal work
    if app.toast.is_some() && app.ui_mode == UiMode::Normal {
        match key.code {
            KeyCode::Enter => {
                app.acknowledge_toast();
                return Ok(false);
            }
            KeyCode::Esc => {
                app.dismiss_toast();
                return Ok(false);
            }
            _ => {}
        }
    }

    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::AddingTask | UiMode::EditingTask => handle_form_mode(app, key),
        UiMode::Settings => handle_settings_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Navigation
        KeyCode::Up => {
            app.move_selection_up();
            Ok(false)
        }
        KeyCode::Down => {
            app.move_selection_down();
            Ok(false)
        }

        // Start countdown
        KeyCode::Char('s') | KeyCode::Char('S') => {
            app.start_selected(AppState::now());
            Ok(false)
        }

        // Pause countdown
        KeyCode::Char('p') | KeyCode::Char('P') => {
            app.stop_selected();
            Ok(false)
        }

        // Reset (re-arm the deadline)
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.reset_selected(AppState::now());
            Ok(false)
        }

        // Edit task
        KeyCode::Char('e') | KeyCode::Char('E') => {
            app.start_edit_selected();
            Ok(false)
        }

        // Add task
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.start_add_task();
            Ok(false)
        }

        // Delete task
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete => {
            app.delete_selected();
            Ok(false)
        }

        // Settings
        KeyCode::Char('o') | KeyCode::Char('O') => {
            app.ui_mode = UiMode::Settings;
            Ok(false)
        }

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => Ok(true),

        _ => Ok(false),
    }
}

/// Handle keys in the add/edit form
fn handle_form_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Commit
        KeyCode::Enter => {
            app.submit_form(AppState::now());
            Ok(false)
        }

        // Cancel (discards an uncommitted add)
        KeyCode::Esc => {
            app.cancel_form();
            Ok(false)
        }

        // Switch between name / value / description
        KeyCode::Tab | KeyCode::Down => {
            app.form_toggle_field();
            Ok(false)
        }

        // Cycle the time unit
        KeyCode::Right => {
            app.form_cycle_unit(true);
            Ok(false)
        }
        KeyCode::Left => {
            app.form_cycle_unit(false);
            Ok(false)
        }

        KeyCode::Backspace => {
            app.form_backspace();
            Ok(false)
        }

        KeyCode::Char(c) => {
            app.form_add_char(c);
            Ok(false)
        }

        _ => Ok(false),
    }
}

/// Handle keys in the settings view
fn handle_settings_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('1') => {
            app.toggle_system_notification();
            Ok(false)
        }
        KeyCode::Char('2') => {
            app.toggle_start_minimized();
            Ok(false)
        }
        KeyCode::Esc | KeyCode::Char('o') | KeyCode::Char('O') => {
            app.ui_mode = UiMode::Normal;
            Ok(false)
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => Ok(true),
        _ => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Task;
    use crate::persistence::Settings;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use tempfile::tempdir;

    fn create_test_app() -> (AppState, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let mut settings = Settings::default();
        settings.enable_system_notification = false;
        let app = AppState::new(
            vec![Task::new("first", 60), Task::new("second", 120)],
            settings,
            dir.path().join("tasks.json"),
            dir.path().join("settings.json"),
        );
        (app, dir)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    #[test]
    fn test_handle_navigation() {
        let (mut app, _dir) = create_test_app();
        assert_eq!(app.selected_index, 0);

        handle_key(&mut app, key(KeyCode::Down)).unwrap();
        assert_eq!(app.selected_index, 1);

        handle_key(&mut app, key(KeyCode::Down)).unwrap();
        assert_eq!(app.selected_index, 1, "selection stops at the last row");

        handle_key(&mut app, key(KeyCode::Up)).unwrap();
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_handle_quit() {
        let (mut app, _dir) = create_test_app();
        let should_quit = handle_key(&mut app, key(KeyCode::Char('q'))).unwrap();
        assert!(should_quit);
    }

    #[test]
    fn test_handle_start_and_pause() {
        let (mut app, _dir) = create_test_app();

        handle_key(&mut app, key(KeyCode::Char('s'))).unwrap();
        assert!(app.tasks[0].is_running);

        handle_key(&mut app, key(KeyCode::Char('p'))).unwrap();
        assert!(!app.tasks[0].is_running);
        assert!(app.tasks[0].due_at.is_some(), "pause keeps the deadline");
    }

    #[test]
    fn test_handle_add_task_flow() {
        let (mut app, _dir) = create_test_app();
        let initial_count = app.tasks.len();

        handle_key(&mut app, key(KeyCode::Char('a'))).unwrap();
        assert_eq!(app.ui_mode, UiMode::AddingTask);
        assert!(app.form.is_some());

        // Clear the prefilled name, type a new one
        for _ in 0.."new task".len() {
            handle_key(&mut app, key(KeyCode::Backspace)).unwrap();
        }
        for c in "demo".chars() {
            handle_key(&mut app, key(KeyCode::Char(c))).unwrap();
        }

        handle_key(&mut app, key(KeyCode::Enter)).unwrap();
        assert_eq!(app.tasks.len(), initial_count + 1);
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.tasks.last().unwrap().name, "demo");
    }

    #[test]
    fn test_handle_cancel_add_discards() {
        let (mut app, _dir) = create_test_app();
        let initial_count = app.tasks.len();

        handle_key(&mut app, key(KeyCode::Char('a'))).unwrap();
        handle_key(&mut app, key(KeyCode::Esc)).unwrap();

        assert_eq!(app.tasks.len(), initial_count);
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_handle_unit_cycling_in_form() {
        let (mut app, _dir) = create_test_app();
        handle_key(&mut app, key(KeyCode::Char('e'))).unwrap();

        let before = app.form.as_ref().unwrap().unit;
        handle_key(&mut app, key(KeyCode::Right)).unwrap();
        assert_eq!(app.form.as_ref().unwrap().unit, before.next());

        handle_key(&mut app, key(KeyCode::Left)).unwrap();
        assert_eq!(app.form.as_ref().unwrap().unit, before);
    }

    #[test]
    fn test_handle_delete() {
        let (mut app, _dir) = create_test_app();
        handle_key(&mut app, key(KeyCode::Char('d'))).unwrap();
        assert_eq!(app.tasks.len(), 1);
        assert_eq!(app.tasks[0].name, "second");
    }

    #[test]
    fn test_handle_settings_toggles() {
        let (mut app, _dir) = create_test_app();

        handle_key(&mut app, key(KeyCode::Char('o'))).unwrap();
        assert_eq!(app.ui_mode, UiMode::Settings);

        handle_key(&mut app, key(KeyCode::Char('1'))).unwrap();
        assert!(app.settings.enable_system_notification);

        handle_key(&mut app, key(KeyCode::Char('2'))).unwrap();
        assert!(app.settings.start_minimized_to_tray);

        handle_key(&mut app, key(KeyCode::Esc)).unwrap();
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_toast_enter_opens_edit() {
        let (mut app, _dir) = create_test_app();
        app.tasks[1].seconds = 1;
        app.selected_index = 1;
        app.start_selected(AppState::now() - 10);
        app.selected_index = 0;
        app.tick(AppState::now());
        assert!(app.toast.is_some());

        handle_key(&mut app, key(KeyCode::Enter)).unwrap();
        assert_eq!(app.ui_mode, UiMode::EditingTask);
        assert_eq!(app.selected_index, 1);
        assert!(app.toast.is_none());
    }

    #[test]
    fn test_toast_esc_dismisses() {
        let (mut app, _dir) = create_test_app();
        app.tasks[0].seconds = 1;
        app.start_selected(AppState::now() - 10);
        app.tick(AppState::now());
        assert!(app.toast.is_some());

        handle_key(&mut app, key(KeyCode::Esc)).unwrap();
        assert!(app.toast.is_none());
        assert_eq!(app.ui_mode, UiMode::Normal);
    }
}
