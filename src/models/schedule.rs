//! Schedule generation inputs and results.
//!
//! The generator receives one [`CourseCandidateGroup`] per requested
//! course and returns a [`ScheduleResult`]: either one section per
//! course, or a typed failure the caller can tell apart.

use serde::{Deserialize, Serialize};

use super::SectionTimeSlot;

/// A requested course and its open sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseCandidateGroup {
    /// Requested course identifier.
    pub course_id: String,
    /// Sections with remaining capacity, in preference order.
    pub candidates: Vec<SectionTimeSlot>,
}

impl CourseCandidateGroup {
    /// Creates an empty group for a course.
    pub fn new(course_id: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            candidates: Vec::new(),
        }
    }

    /// Adds a candidate section.
    pub fn with_candidate(mut self, slot: SectionTimeSlot) -> Self {
        self.candidates.push(slot);
        self
    }

    /// Sets all candidates.
    pub fn with_candidates(mut self, slots: Vec<SectionTimeSlot>) -> Self {
        self.candidates = slots;
        self
    }

    /// Whether the course has no open section.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Outcome of one schedule generation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScheduleResult {
    /// One section per requested course, in requested course order.
    Scheduled {
        /// Chosen section ids.
        section_ids: Vec<String>,
    },
    /// Some requested courses have no open section; search not attempted.
    NoCandidates {
        /// Every course without a candidate, in requested order.
        course_ids: Vec<String>,
    },
    /// Sections exist for every course but none fit together.
    Unsatisfiable,
}

impl ScheduleResult {
    /// Whether a schedule was found.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Scheduled { .. })
    }

    /// Chosen section ids, if a schedule was found.
    pub fn section_ids(&self) -> Option<&[String]> {
        match self {
            Self::Scheduled { section_ids } => Some(section_ids),
            _ => None,
        }
    }

    /// Caller-facing summary line.
    pub fn message(&self) -> String {
        match self {
            Self::Scheduled { section_ids } => {
                format!("Schedule generated with {} section(s)", section_ids.len())
            }
            Self::NoCandidates { course_ids } => {
                format!("No available sections for: {}", course_ids.join(", "))
            }
            Self::Unsatisfiable => {
                "Unable to create a conflict-free schedule with the requested courses".to_string()
            }
        }
    }
}
