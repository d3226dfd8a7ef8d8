pub mod files;
pub mod settings;
pub mod store;

pub use files::{atomic_write, ensure_data_dir, get_data_dir, settings_file, tasks_file};
pub use settings::{load_settings, save_settings, Settings};
pub use store::{export_tasks, import_tasks, load_tasks, save_tasks, ImportError};
