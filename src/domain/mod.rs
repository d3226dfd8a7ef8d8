pub mod enums;
pub mod task;
pub mod views;

pub use enums::{TaskPhase, TimeUnit, UiMode};
pub use task::{sanitize_name, Task, NAME_MAX_CHARS, PLACEHOLDER_NAME, VALUE_MAX, VALUE_MIN};
pub use views::{find_urls, format_deadline, format_seconds, status_badge};
