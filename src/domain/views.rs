use super::enums::TaskPhase;
use chrono::{DateTime, Local, TimeZone};
use std::ops::Range;

/// Format a second count as its two most significant nonzero units,
/// e.g. "1d 2h", "5m 30s", "45s". Zero renders as "0s".
pub fn format_seconds(total: u64) -> String {
    let days = total / 86400;
    let hours = (total % 86400) / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    let units = [(days, "d"), (hours, "h"), (minutes, "m"), (seconds, "s")];
    let parts: Vec<String> = units
        .iter()
        .filter(|(value, _)| *value > 0)
        .take(2)
        .map(|(value, suffix)| format!("{}{}", value, suffix))
        .collect();

    if parts.is_empty() {
        "0s".to_string()
    } else {
        parts.join(" ")
    }
}

/// Format a unix-seconds deadline as local "MM/DD HH:MM:SS"
pub fn format_deadline(due_at: i64) -> String {
    match Local.timestamp_opt(due_at, 0).single() {
        Some(time) => format_deadline_local(time),
        None => "--/-- --:--:--".to_string(),
    }
}

fn format_deadline_local(time: DateTime<Local>) -> String {
    time.format("%m/%d %H:%M:%S").to_string()
}

/// Short status badge for a task row
pub fn status_badge(phase: TaskPhase) -> &'static str {
    match phase {
        TaskPhase::Unscheduled => "(IDLE)",
        TaskPhase::Running => "(RUNNING)",
        TaskPhase::Paused => "(PAUSED)",
        TaskPhase::DueUnacknowledged | TaskPhase::DueAcknowledged => "(OVERDUE)",
    }
}

/// Byte ranges of http(s) URLs in `text`, for link highlighting in the
/// details pane. A URL runs until whitespace or a quote/angle-bracket.
pub fn find_urls(text: &str) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    let bytes = text.as_bytes();
    let mut pos = 0;

    while pos < text.len() {
        let rest = &text[pos..];
        let offset = match rest.find("http://").into_iter().chain(rest.find("https://")).min() {
            Some(o) => o,
            None => break,
        };
        let start = pos + offset;
        let tail = &text[start..];
        let len = tail
            .find(|c: char| c.is_whitespace() || matches!(c, '<' | '>' | '"'))
            .unwrap_or(tail.len());
        if len > "https://".len() {
            ranges.push(start..start + len);
        }
        pos = start + len.max(1);
    }

    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_seconds_top_two_units() {
        assert_eq!(format_seconds(0), "0s");
        assert_eq!(format_seconds(45), "45s");
        assert_eq!(format_seconds(330), "5m 30s");
        assert_eq!(format_seconds(3600), "1h");
        assert_eq!(format_seconds(3725), "1h 2m");
        assert_eq!(format_seconds(90000), "1d 1h");
        // Third unit is dropped: 1d 0h 5m shows days and minutes only
        assert_eq!(format_seconds(86700), "1d 5m");
    }

    #[test]
    fn test_status_badge() {
        assert_eq!(status_badge(TaskPhase::Running), "(RUNNING)");
        assert_eq!(status_badge(TaskPhase::Paused), "(PAUSED)");
        assert_eq!(status_badge(TaskPhase::Unscheduled), "(IDLE)");
        assert_eq!(status_badge(TaskPhase::DueUnacknowledged), "(OVERDUE)");
        assert_eq!(status_badge(TaskPhase::DueAcknowledged), "(OVERDUE)");
    }

    #[test]
    fn test_find_urls() {
        let text = "see https://example.com/a and http://b.io before eof";
        let urls: Vec<&str> = find_urls(text).into_iter().map(|r| &text[r]).collect();
        assert_eq!(urls, vec!["https://example.com/a", "http://b.io"]);
    }

    #[test]
    fn test_find_urls_stops_at_quotes_and_brackets() {
        let text = "link \"https://example.com\" and <http://x.dev>";
        let urls: Vec<&str> = find_urls(text).into_iter().map(|r| &text[r]).collect();
        assert_eq!(urls, vec!["https://example.com", "http://x.dev"]);
    }

    #[test]
    fn test_find_urls_ignores_bare_scheme() {
        assert!(find_urls("https:// is not a link").is_empty());
        assert!(find_urls("no links here").is_empty());
    }
}
