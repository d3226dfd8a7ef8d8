/// Time unit for the duration editor (value 1..=99 times the multiplier)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl TimeUnit {
    /// Seconds per unit
    pub fn multiplier(&self) -> u64 {
        match self {
            Self::Seconds => 1,
            Self::Minutes => 60,
            Self::Hours => 3600,
            Self::Days => 86400,
        }
    }

    /// Full display name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Seconds => "seconds",
            Self::Minutes => "minutes",
            Self::Hours => "hours",
            Self::Days => "days",
        }
    }

    /// All units, smallest first
    pub fn all() -> &'static [TimeUnit] {
        &[Self::Seconds, Self::Minutes, Self::Hours, Self::Days]
    }

    /// Next unit, wrapping around (for cycling in the form)
    pub fn next(&self) -> TimeUnit {
        match self {
            Self::Seconds => Self::Minutes,
            Self::Minutes => Self::Hours,
            Self::Hours => Self::Days,
            Self::Days => Self::Seconds,
        }
    }

    /// Previous unit, wrapping around
    pub fn prev(&self) -> TimeUnit {
        match self {
            Self::Seconds => Self::Days,
            Self::Minutes => Self::Seconds,
            Self::Hours => Self::Minutes,
            Self::Days => Self::Hours,
        }
    }

    /// Pick the largest unit that expresses `seconds` as a value in 1..=99.
    /// Falls back to raw seconds when nothing fits (precision loss accepted,
    /// matching the two-digit editor field).
    pub fn best_fit(seconds: u64) -> (TimeUnit, u64) {
        let seconds = seconds.max(1);
        for unit in Self::all().iter().rev() {
            let value = seconds / unit.multiplier();
            if (1..=99).contains(&value) {
                return (*unit, value);
            }
        }
        (Self::Seconds, seconds)
    }
}

/// Derived lifecycle phase of a task at a given instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskPhase {
    /// No deadline established
    Unscheduled,
    /// Deadline set, not yet passed, countdown active
    Running,
    /// Deadline set, not yet passed, countdown flagged inactive
    Paused,
    /// Deadline passed, notification not yet fired
    DueUnacknowledged,
    /// Deadline passed, notification fired
    DueAcknowledged,
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    AddingTask,
    EditingTask,
    Settings,
}
