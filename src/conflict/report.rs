//! Conflict detector output types.

use serde::{Deserialize, Serialize};

use crate::models::{DayPattern, SectionTimeSlot};

/// Identity of one side of a conflict, enough to render a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotSummary {
    pub id: String,
    pub course_id: String,
    pub course_name: Option<String>,
    pub section_label: Option<String>,
    pub days: DayPattern,
    pub time: Option<String>,
    pub period: Option<String>,
}

impl From<&SectionTimeSlot> for SlotSummary {
    fn from(slot: &SectionTimeSlot) -> Self {
        Self {
            id: slot.id.clone(),
            course_id: slot.course_id.clone(),
            course_name: slot.course_name.clone(),
            section_label: slot.section_label.clone(),
            days: slot.days,
            time: slot.time.clone(),
            period: slot.period.clone(),
        }
    }
}

/// Two sections found to conflict.
///
/// `first` precedes `second` in the detector's input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictPair {
    /// Earlier slot in input order.
    pub first: SlotSummary,
    /// Later slot in input order.
    pub second: SlotSummary,
    /// Days both sections meet.
    pub shared_days: DayPattern,
}

impl ConflictPair {
    /// Builds a pair from two conflicting slots.
    pub fn new(first: &SectionTimeSlot, second: &SectionTimeSlot) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
            shared_days: first.days.intersection(&second.days),
        }
    }

    /// Whether the pair involves a section id.
    pub fn involves(&self, section_id: &str) -> bool {
        self.first.id == section_id || self.second.id == section_id
    }

    /// Human-readable description.
    pub fn describe(&self) -> String {
        format!(
            "{} conflicts with {} on {}",
            describe_side(&self.first),
            describe_side(&self.second),
            self.shared_days
        )
    }
}

fn describe_side(s: &SlotSummary) -> String {
    let name = s.course_name.as_deref().unwrap_or(&s.course_id);
    let when = s
        .time
        .as_deref()
        .filter(|t| !t.is_empty())
        .or(s.period.as_deref())
        .unwrap_or("unscheduled");
    match &s.section_label {
        Some(label) => format!("{name} ({label}, {when})"),
        None => format!("{name} ({when})"),
    }
}

/// Result of checking a set of sections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictReport {
    /// Whether any pair conflicts.
    pub has_conflicts: bool,
    /// Every conflicting pair, in detection order.
    pub conflicts: Vec<ConflictPair>,
}

/// Checks a set of sections for conflicts.
pub fn detect_conflicts(slots: &[SectionTimeSlot]) -> ConflictReport {
    let conflicts = super::find_all_conflicts(slots);
    ConflictReport {
        has_conflicts: !conflicts.is_empty(),
        conflicts,
    }
}
