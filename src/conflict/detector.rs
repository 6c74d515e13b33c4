//! Pairwise conflict decision.
//!
//! # Rule
//! Two slots conflict iff both are scheduled, they share a meeting day,
//! and either:
//! - both time texts parse and the windows overlap, or
//! - at least one time text is unparsable and both carry the same
//!   non-empty period label.
//!
//! Period labels are only compared when clock time is unknown; a parsed
//! window is never weighed against the other slot's period.

use tracing::trace;

use crate::models::{SectionTimeSlot, TimeParse};

use super::ConflictPair;

/// A slot with its time text parsed once.
///
/// The scheduler and availability checker compare the same slot many
/// times; preparing it keeps parsing out of the inner loop.
#[derive(Debug, Clone, Copy)]
pub struct PreparedSlot<'a> {
    slot: &'a SectionTimeSlot,
    time: TimeParse,
    scheduled: bool,
}

impl<'a> PreparedSlot<'a> {
    /// Parses a slot's time text.
    pub fn new(slot: &'a SectionTimeSlot) -> Self {
        Self {
            slot,
            time: slot.time_parse(),
            scheduled: slot.is_scheduled(),
        }
    }

    /// The underlying slot.
    #[inline]
    pub fn slot(&self) -> &'a SectionTimeSlot {
        self.slot
    }

    /// The parsed time outcome.
    #[inline]
    pub fn time(&self) -> TimeParse {
        self.time
    }

    /// Whether the two prepared slots conflict.
    pub fn conflicts_with(&self, other: &PreparedSlot<'_>) -> bool {
        if !self.scheduled || !other.scheduled {
            return false;
        }
        if !self.slot.days.shares_day_with(&other.slot.days) {
            return false;
        }

        match (self.time, other.time) {
            (TimeParse::Parsed(a), TimeParse::Parsed(b)) => a.overlaps(&b),
            _ => match (self.slot.period_label(), other.slot.period_label()) {
                (Some(a), Some(b)) => a.trim() == b.trim(),
                _ => false,
            },
        }
    }
}

/// Whether two sections conflict in day and time.
///
/// Symmetric: `has_conflict(a, b) == has_conflict(b, a)`.
///
/// # Examples
///
/// ```
/// use section_schedule::conflict::has_conflict;
/// use section_schedule::models::{DayPattern, SectionTimeSlot};
///
/// let mwf = DayPattern::from_tokens(["M", "W", "F"]);
/// let a = SectionTimeSlot::new("A", "MATH", mwf).with_time("8:00 AM - 9:00 AM");
/// let b = SectionTimeSlot::new("B", "BIO", mwf).with_time("8:30 AM - 9:30 AM");
/// let c = SectionTimeSlot::new("C", "ART", mwf).with_time("9:00 AM - 9:50 AM");
///
/// assert!(has_conflict(&a, &b));
/// assert!(!has_conflict(&a, &c)); // touching endpoints
/// ```
pub fn has_conflict(a: &SectionTimeSlot, b: &SectionTimeSlot) -> bool {
    PreparedSlot::new(a).conflicts_with(&PreparedSlot::new(b))
}

/// Finds every conflicting pair among `slots`.
///
/// Each unordered pair is tested once, in (first index, second index)
/// order. Returns an empty list for fewer than two slots.
///
/// # Complexity
/// O(n²) comparisons.
pub fn find_all_conflicts(slots: &[SectionTimeSlot]) -> Vec<ConflictPair> {
    if slots.len() < 2 {
        return Vec::new();
    }

    let prepared: Vec<PreparedSlot<'_>> = slots.iter().map(PreparedSlot::new).collect();
    let mut conflicts = Vec::new();

    for i in 0..prepared.len() {
        for j in (i + 1)..prepared.len() {
            if prepared[i].conflicts_with(&prepared[j]) {
                trace!(first = %slots[i].id, second = %slots[j].id, "conflict");
                conflicts.push(ConflictPair::new(&slots[i], &slots[j]));
            }
        }
    }

    conflicts
}
