//! Weekday sets for section meeting patterns.
//!
//! Persisted day lists are loose string tokens (`"M"`, `"Th"`, `"Friday"`).
//! [`DayPattern`] normalizes them into a set: order-irrelevant,
//! duplicates collapsed.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All days, Monday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Reads a day token (case-insensitive).
    ///
    /// Accepts full names, three-letter abbreviations, and the short
    /// school forms `M T W Th F Sa Su` (plus `R` for Thursday).
    pub fn from_token(token: &str) -> Option<Self> {
        let day = match token.trim().to_ascii_lowercase().as_str() {
            "m" | "mo" | "mon" | "monday" => Weekday::Monday,
            "t" | "tu" | "tue" | "tues" | "tuesday" => Weekday::Tuesday,
            "w" | "we" | "wed" | "wednesday" => Weekday::Wednesday,
            "th" | "r" | "thu" | "thur" | "thurs" | "thursday" => Weekday::Thursday,
            "f" | "fr" | "fri" | "friday" => Weekday::Friday,
            "sa" | "sat" | "saturday" => Weekday::Saturday,
            "su" | "sun" | "sunday" => Weekday::Sunday,
            _ => return None,
        };
        Some(day)
    }

    /// Short school token (`M`, `T`, `W`, `Th`, `F`, `Sa`, `Su`).
    pub fn token(&self) -> &'static str {
        match self {
            Weekday::Monday => "M",
            Weekday::Tuesday => "T",
            Weekday::Wednesday => "W",
            Weekday::Thursday => "Th",
            Weekday::Friday => "F",
            Weekday::Saturday => "Sa",
            Weekday::Sunday => "Su",
        }
    }

    #[inline]
    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// A set of meeting days.
///
/// Stored as a bitmask; serialized as a list of day tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct DayPattern {
    bits: u8,
}

impl DayPattern {
    /// An empty pattern (section not scheduled on any day).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a pattern from weekdays.
    pub fn from_days(days: impl IntoIterator<Item = Weekday>) -> Self {
        let bits = days.into_iter().fold(0u8, |acc, d| acc | d.bit());
        Self { bits }
    }

    /// Builds a pattern from raw tokens, skipping unrecognized ones.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut pattern = Self::empty();
        for token in tokens {
            let token = token.as_ref();
            match Weekday::from_token(token) {
                Some(day) => pattern.bits |= day.bit(),
                None => warn!(token, "skipping unrecognized day token"),
            }
        }
        pattern
    }

    /// Adds a day.
    pub fn with_day(mut self, day: Weekday) -> Self {
        self.bits |= day.bit();
        self
    }

    /// Whether no day is set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Number of distinct days.
    #[inline]
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Whether the pattern includes a day.
    #[inline]
    pub fn contains(&self, day: Weekday) -> bool {
        self.bits & day.bit() != 0
    }

    /// Days present in both patterns.
    #[inline]
    pub fn intersection(&self, other: &Self) -> Self {
        Self {
            bits: self.bits & other.bits,
        }
    }

    /// Whether the two patterns share at least one day.
    #[inline]
    pub fn shares_day_with(&self, other: &Self) -> bool {
        !self.intersection(other).is_empty()
    }

    /// Days in Monday-first order.
    pub fn days(&self) -> Vec<Weekday> {
        Weekday::ALL
            .into_iter()
            .filter(|d| self.contains(*d))
            .collect()
    }
}

impl From<Vec<String>> for DayPattern {
    fn from(tokens: Vec<String>) -> Self {
        Self::from_tokens(tokens)
    }
}

impl From<DayPattern> for Vec<String> {
    fn from(pattern: DayPattern) -> Self {
        pattern.days().iter().map(|d| d.token().to_string()).collect()
    }
}

impl FromIterator<Weekday> for DayPattern {
    fn from_iter<T: IntoIterator<Item = Weekday>>(iter: T) -> Self {
        Self::from_days(iter)
    }
}

impl fmt::Display for DayPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for day in self.days() {
            f.write_str(day.token())?;
        }
        Ok(())
    }
}
