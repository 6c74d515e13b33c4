//! Section models.
//!
//! A section is one scheduled offering of a course. The conflict and
//! scheduling code only needs its meeting pattern ([`SectionTimeSlot`]);
//! the persistence collaborator supplies the rest ([`SectionOffering`]).

use serde::{Deserialize, Serialize};

use super::{DayPattern, TimeParse};

/// The meeting pattern of one section.
///
/// A slot without days, or with neither time text nor a period label,
/// is unscheduled and never conflicts with anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionTimeSlot {
    /// Unique section identifier.
    pub id: String,
    /// Owning course identifier.
    pub course_id: String,
    /// Meeting days.
    #[serde(default)]
    pub days: DayPattern,
    /// Clock-time range text, e.g. `"8:00 AM - 8:50 AM"`.
    #[serde(default)]
    pub time: Option<String>,
    /// Period label, e.g. `"1st Period"`.
    #[serde(default)]
    pub period: Option<String>,
    /// Course display name (diagnostics only).
    #[serde(default)]
    pub course_name: Option<String>,
    /// Section label such as `"01"` (diagnostics only).
    #[serde(default)]
    pub section_label: Option<String>,
}

impl SectionTimeSlot {
    /// Creates a slot meeting on `days` with no time or period yet.
    pub fn new(id: impl Into<String>, course_id: impl Into<String>, days: DayPattern) -> Self {
        Self {
            id: id.into(),
            course_id: course_id.into(),
            days,
            time: None,
            period: None,
            course_name: None,
            section_label: None,
        }
    }

    /// Sets the clock-time range text.
    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    /// Sets the period label.
    pub fn with_period(mut self, period: impl Into<String>) -> Self {
        self.period = Some(period.into());
        self
    }

    /// Sets the course display name.
    pub fn with_course_name(mut self, name: impl Into<String>) -> Self {
        self.course_name = Some(name.into());
        self
    }

    /// Sets the section label.
    pub fn with_section_label(mut self, label: impl Into<String>) -> Self {
        self.section_label = Some(label.into());
        self
    }

    /// Time text, with empty strings treated as absent.
    pub fn time_text(&self) -> Option<&str> {
        non_empty(self.time.as_deref())
    }

    /// Period label, with empty strings treated as absent.
    pub fn period_label(&self) -> Option<&str> {
        non_empty(self.period.as_deref())
    }

    /// Parses this slot's time text.
    pub fn time_parse(&self) -> TimeParse {
        TimeParse::from_text(self.time_text())
    }

    /// Whether the slot has days and some time information.
    pub fn is_scheduled(&self) -> bool {
        !self.days.is_empty() && (self.time_text().is_some() || self.period_label().is_some())
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|v| !v.trim().is_empty())
}

/// A section as published by the persistence layer.
///
/// Capacity fields are read-only inputs: this crate never adjusts them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionOffering {
    /// Meeting pattern and identity.
    #[serde(flatten)]
    pub slot: SectionTimeSlot,
    /// Assigned teacher.
    pub teacher_id: String,
    /// Room, if one is assigned.
    #[serde(default)]
    pub room: Option<String>,
    /// Academic session (term) the section belongs to.
    pub session_id: String,
    /// Students currently enrolled.
    #[serde(default)]
    pub current_enrollment: u32,
    /// Maximum students.
    pub max_students: u32,
}

impl SectionOffering {
    /// Creates an offering in a session with the given teacher.
    pub fn new(
        slot: SectionTimeSlot,
        teacher_id: impl Into<String>,
        session_id: impl Into<String>,
        max_students: u32,
    ) -> Self {
        Self {
            slot,
            teacher_id: teacher_id.into(),
            room: None,
            session_id: session_id.into(),
            current_enrollment: 0,
            max_students,
        }
    }

    /// Sets the room.
    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.room = Some(room.into());
        self
    }

    /// Sets the current enrollment count.
    pub fn with_enrollment(mut self, current: u32) -> Self {
        self.current_enrollment = current;
        self
    }

    /// Section identifier.
    #[inline]
    pub fn id(&self) -> &str {
        &self.slot.id
    }

    /// Owning course identifier.
    #[inline]
    pub fn course_id(&self) -> &str {
        &self.slot.course_id
    }

    /// Whether at least one seat remains.
    #[inline]
    pub fn has_capacity(&self) -> bool {
        self.current_enrollment < self.max_students
    }

    /// Seats left (zero when full or over-enrolled).
    pub fn remaining_seats(&self) -> u32 {
        self.max_students.saturating_sub(self.current_enrollment)
    }
}
