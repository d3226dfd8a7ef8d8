pub mod details_pane;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod settings_pane;
pub mod styles;
pub mod task_form;
pub mod toast;

use crate::app::AppState;
use crate::domain::UiMode;
use details_pane::render_details_pane;
use keybindings::render_keybindings;
use layout::create_layout;
use list_pane::render_list_pane;
use ratatui::Frame;
use settings_pane::render_settings_pane;
use task_form::render_task_form;
use toast::render_toast;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size);

    // Render keybindings bar
    render_keybindings(f, layout.keybindings_area);

    // Render panes
    render_list_pane(f, app, layout.list_area);
    render_details_pane(f, app, layout.details_area);

    // Render form if active
    if app.form.is_some() {
        render_task_form(f, app, size);
    }

    // Render settings if active
    if app.ui_mode == UiMode::Settings {
        render_settings_pane(f, app, size);
    }

    // Toast renders on top of everything
    if app.toast.is_some() {
        render_toast(f, app, size);
    }
}
