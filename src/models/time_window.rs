//! Clock-time windows parsed from section time text.
//!
//! Section times arrive as human-readable ranges such as
//! `"8:00 AM - 8:50 AM"`. They are parsed into half-open intervals of
//! minutes since midnight so two sections can be compared numerically.
//!
//! # Time Model
//! All times are minutes in `[0, 1440)`. A window is `[start, end)`:
//! a section ending at 8:50 and another starting at 8:50 do not overlap.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Whole-text pattern: `H:MM AM|PM - H:MM AM|PM`.
static TIME_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(\d{1,2}):(\d{2})\s*(AM|PM)\s*-\s*(\d{1,2}):(\d{2})\s*(AM|PM)$")
        .expect("time range pattern is a valid regex")
});

/// A time interval [start, end) in minutes since midnight.
///
/// Half-open interval: includes start, excludes end.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct TimeWindow {
    /// Interval start (minutes, inclusive).
    pub start_min: u16,
    /// Interval end (minutes, exclusive).
    pub end_min: u16,
}

impl TimeWindow {
    /// Creates a new time window.
    pub fn new(start_min: u16, end_min: u16) -> Self {
        Self { start_min, end_min }
    }

    /// Duration of this window (minutes).
    #[inline]
    pub fn duration_min(&self) -> u16 {
        self.end_min.saturating_sub(self.start_min)
    }

    /// Whether a minute falls within this window.
    #[inline]
    pub fn contains(&self, minute: u16) -> bool {
        minute >= self.start_min && minute < self.end_min
    }

    /// Whether two windows overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_min < other.end_min && other.start_min < self.end_min
    }
}

/// Outcome of reading a section's time text.
///
/// `Unparsable` is not an error: it means "clock time unknown" and
/// sends conflict decisions to the period-label fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeParse {
    /// The text held a well-formed range.
    Parsed(TimeWindow),
    /// Missing, empty, or malformed text.
    Unparsable,
}

impl TimeParse {
    /// Parses optional time text.
    pub fn from_text(text: Option<&str>) -> Self {
        match text.and_then(parse_time_range) {
            Some(window) => Self::Parsed(window),
            None => Self::Unparsable,
        }
    }

    /// The parsed window, if any.
    pub fn window(&self) -> Option<TimeWindow> {
        match self {
            Self::Parsed(w) => Some(*w),
            Self::Unparsable => None,
        }
    }
}

/// Parses a range like `"8:00 AM - 8:50 AM"` into a [`TimeWindow`].
///
/// Returns `None` when the whole text does not match, when an hour is
/// outside 1..=12 or a minute outside 0..=59, or when the end is not
/// after the start.
///
/// # Examples
///
/// ```
/// use section_schedule::models::parse_time_range;
///
/// let w = parse_time_range("12:00 PM - 1:15 pm").unwrap();
/// assert_eq!((w.start_min, w.end_min), (720, 795));
/// assert!(parse_time_range("1st Period").is_none());
/// ```
pub fn parse_time_range(text: &str) -> Option<TimeWindow> {
    let caps = TIME_RANGE.captures(text.trim())?;

    let start = to_minutes(&caps[1], &caps[2], &caps[3])?;
    let end = to_minutes(&caps[4], &caps[5], &caps[6])?;

    if start < end {
        Some(TimeWindow::new(start, end))
    } else {
        None
    }
}

/// 12-hour clock to minutes since midnight (12 AM = 0, 12 PM = 720).
fn to_minutes(hour: &str, minute: &str, meridiem: &str) -> Option<u16> {
    let hour: u16 = hour.parse().ok()?;
    let minute: u16 = minute.parse().ok()?;
    if !(1..=12).contains(&hour) || minute > 59 {
        return None;
    }

    let hour24 = match (meridiem.eq_ignore_ascii_case("PM"), hour) {
        (false, 12) => 0,
        (false, h) => h,
        (true, 12) => 12,
        (true, h) => h + 12,
    };
    Some(hour24 * 60 + minute)
}
