//! Enrollment validation.
//!
//! Checks a proposed set of sections for one student before the
//! persistence layer enrolls them. Detects:
//! - Duplicate section IDs
//! - Full sections
//! - Two sections of the same course
//! - Time conflicts between sections
//!
//! Every problem is reported, not only the first.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use crate::conflict::find_all_conflicts;
use crate::models::{SectionOffering, SectionTimeSlot};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Sections the error is about.
    pub section_ids: Vec<String>,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The same section appears twice.
    DuplicateSection,
    /// A section has no remaining seat.
    SectionFull,
    /// Two sections belong to the same course.
    DuplicateCourse,
    /// Two sections meet at the same time.
    TimeConflict,
}

impl ValidationError {
    fn new(
        kind: ValidationErrorKind,
        section_ids: Vec<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            section_ids,
            message: message.into(),
        }
    }
}

/// Validates a proposed enrollment.
///
/// Checks:
/// 1. No duplicate section IDs
/// 2. Every section has a free seat
/// 3. At most one section per course
/// 4. No two distinct sections conflict in time
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_enrollment(offerings: &[SectionOffering]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut section_ids = HashSet::new();
    let mut unique: Vec<&SectionOffering> = Vec::with_capacity(offerings.len());
    for o in offerings {
        if section_ids.insert(o.id()) {
            unique.push(o);
        } else {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateSection,
                vec![o.id().to_string()],
                format!("Duplicate section ID: {}", o.id()),
            ));
        }
    }

    for o in &unique {
        if !o.has_capacity() {
            errors.push(ValidationError::new(
                ValidationErrorKind::SectionFull,
                vec![o.id().to_string()],
                format!("Course section {} is full", display_label(&o.slot)),
            ));
        }
    }

    let mut by_course: HashMap<&str, &str> = HashMap::new();
    for o in &unique {
        match by_course.entry(o.course_id()) {
            Entry::Occupied(first) => errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateCourse,
                vec![first.get().to_string(), o.id().to_string()],
                format!(
                    "Sections '{}' and '{}' are both for course '{}'",
                    first.get(),
                    o.id(),
                    o.course_id()
                ),
            )),
            Entry::Vacant(slot) => {
                slot.insert(o.id());
            }
        }
    }

    let slots: Vec<SectionTimeSlot> = unique.iter().map(|o| o.slot.clone()).collect();
    for pair in find_all_conflicts(&slots) {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeConflict,
            vec![pair.first.id.clone(), pair.second.id.clone()],
            pair.describe(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn display_label(slot: &SectionTimeSlot) -> &str {
    slot.section_label.as_deref().unwrap_or(&slot.id)
}
