//! Teacher and room availability.
//!
//! An entity is free for a candidate meeting pattern iff the pattern
//! conflicts with none of the entity's committed sections. Teacher and
//! room checks share [`is_available`]; they differ only in which
//! offerings they pass in.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::conflict::PreparedSlot;
use crate::models::{DayPattern, SectionOffering, SectionTimeSlot};

/// A proposed meeting pattern, not yet a section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityQuery {
    /// Proposed meeting days.
    #[serde(default)]
    pub days: DayPattern,
    /// Proposed clock-time range text.
    #[serde(default)]
    pub time: Option<String>,
    /// Proposed period label.
    #[serde(default)]
    pub period: Option<String>,
}

impl AvailabilityQuery {
    /// Creates a query for the given days.
    pub fn new(days: DayPattern) -> Self {
        Self {
            days,
            ..Self::default()
        }
    }

    /// Sets the time range text.
    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    /// Sets the period label.
    pub fn with_period(mut self, period: impl Into<String>) -> Self {
        self.period = Some(period.into());
        self
    }

    /// The query as an anonymous slot.
    pub fn to_slot(&self) -> SectionTimeSlot {
        SectionTimeSlot {
            id: String::new(),
            course_id: String::new(),
            days: self.days,
            time: self.time.clone(),
            period: self.period.clone(),
            course_name: None,
            section_label: None,
        }
    }
}

/// Whether `candidate` fits around `existing`.
///
/// The slot whose id equals `exclude_id` is ignored, so a section being
/// edited in place does not block itself.
pub fn is_available<'a, I>(
    candidate: &SectionTimeSlot,
    existing: I,
    exclude_id: Option<&str>,
) -> bool
where
    I: IntoIterator<Item = &'a SectionTimeSlot>,
{
    let candidate = PreparedSlot::new(candidate);
    existing
        .into_iter()
        .filter(|slot| exclude_id != Some(slot.id.as_str()))
        .all(|slot| !candidate.conflicts_with(&PreparedSlot::new(slot)))
}

/// Whether a teacher is free for `query` in a session.
pub fn teacher_available(
    teacher_id: &str,
    session_id: &str,
    query: &AvailabilityQuery,
    offerings: &[SectionOffering],
    exclude_id: Option<&str>,
) -> bool {
    let committed = offerings
        .iter()
        .filter(|o| o.teacher_id == teacher_id && o.session_id == session_id)
        .map(|o| &o.slot);
    let available = is_available(&query.to_slot(), committed, exclude_id);
    debug!(teacher = teacher_id, session = session_id, available, "teacher availability");
    available
}

/// Whether a room is free for `query` in a session.
pub fn room_available(
    room: &str,
    session_id: &str,
    query: &AvailabilityQuery,
    offerings: &[SectionOffering],
    exclude_id: Option<&str>,
) -> bool {
    let committed = offerings
        .iter()
        .filter(|o| o.room.as_deref() == Some(room) && o.session_id == session_id)
        .map(|o| &o.slot);
    let available = is_available(&query.to_slot(), committed, exclude_id);
    debug!(room, session = session_id, available, "room availability");
    available
}
