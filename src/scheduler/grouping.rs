//! Building generator input from published offerings.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::BacktrackScheduler;
use crate::models::{CourseCandidateGroup, ScheduleResult, SectionOffering};

/// A student's request for an automatic schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// Requesting student.
    pub student_id: String,
    /// Session (term) to schedule in.
    pub session_id: String,
    /// Requested courses, in priority order.
    pub course_ids: Vec<String>,
}

impl ScheduleRequest {
    /// Creates a new schedule request.
    pub fn new(
        student_id: impl Into<String>,
        session_id: impl Into<String>,
        course_ids: Vec<String>,
    ) -> Self {
        Self {
            student_id: student_id.into(),
            session_id: session_id.into(),
            course_ids,
        }
    }
}

/// Groups open sections by requested course.
///
/// Keeps offerings in `session_id` with remaining capacity. Groups follow
/// the order of `course_ids` (repeats ignored); candidates keep the
/// order of `offerings`. A course with no open section gets an empty
/// group so the generator reports it.
pub fn group_candidates(
    course_ids: &[String],
    session_id: &str,
    offerings: &[SectionOffering],
) -> Vec<CourseCandidateGroup> {
    let mut seen = HashSet::new();

    course_ids
        .iter()
        .filter(|id| seen.insert(id.as_str()))
        .map(|course_id| {
            let candidates = offerings
                .iter()
                .filter(|o| {
                    o.course_id() == course_id.as_str()
                        && o.session_id == session_id
                        && o.has_capacity()
                })
                .map(|o| o.slot.clone())
                .collect();
            CourseCandidateGroup::new(course_id.clone()).with_candidates(candidates)
        })
        .collect()
}

impl BacktrackScheduler {
    /// Groups `offerings` for `request` and generates a schedule.
    pub fn plan(&self, request: &ScheduleRequest, offerings: &[SectionOffering]) -> ScheduleResult {
        let groups = group_candidates(&request.course_ids, &request.session_id, offerings);
        tracing::debug!(
            student = %request.student_id,
            session = %request.session_id,
            courses = groups.len(),
            "planning student schedule"
        );
        self.generate(&groups)
    }
}

/// Plans a schedule for one student with an exhaustive search.
pub fn plan_student_schedule(
    request: &ScheduleRequest,
    offerings: &[SectionOffering],
) -> ScheduleResult {
    BacktrackScheduler::new().plan(request, offerings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DayPattern, SectionTimeSlot};

    fn offering(
        id: &str,
        course: &str,
        session: &str,
        time: &str,
        seats: (u32, u32),
    ) -> SectionOffering {
        let slot =
            SectionTimeSlot::new(id, course, DayPattern::from_tokens(["T", "Th"])).with_time(time);
        SectionOffering::new(slot, "T1", session, seats.1).with_enrollment(seats.0)
    }

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_group_filters_session_and_capacity() {
        let offerings = vec![
            offering("m1", "MATH", "FALL", "8:00 AM - 8:50 AM", (30, 30)), // full
            offering("m2", "MATH", "FALL", "9:00 AM - 9:50 AM", (10, 30)),
            offering("m3", "MATH", "SPRING", "9:00 AM - 9:50 AM", (0, 30)), // other session
            offering("b1", "BIO", "FALL", "10:00 AM - 10:50 AM", (0, 20)),
        ];
        let groups = group_candidates(&ids(&["MATH", "BIO"]), "FALL", &offerings);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].course_id, "MATH");
        assert_eq!(groups[0].candidates.len(), 1);
        assert_eq!(groups[0].candidates[0].id, "m2");
        assert_eq!(groups[1].candidates[0].id, "b1");
    }

    #[test]
    fn test_group_keeps_request_order_and_dedups() {
        let offerings = vec![
            offering("b1", "BIO", "FALL", "10:00 AM - 10:50 AM", (0, 20)),
            offering("m1", "MATH", "FALL", "9:00 AM - 9:50 AM", (0, 20)),
        ];
        let groups = group_candidates(&ids(&["MATH", "BIO", "MATH"]), "FALL", &offerings);
        let order: Vec<&str> = groups.iter().map(|g| g.course_id.as_str()).collect();
        assert_eq!(order, vec!["MATH", "BIO"]);
    }

    #[test]
    fn test_group_empty_for_unknown_course() {
        let groups = group_candidates(&ids(&["ART"]), "FALL", &[]);
        assert_eq!(groups.len(), 1);
        assert!(groups[0].is_empty());
    }

    #[test]
    fn test_plan_student_schedule() {
        let offerings = vec![
            offering("m1", "MATH", "FALL", "8:00 AM - 8:50 AM", (0, 30)),
            offering("m2", "MATH", "FALL", "9:00 AM - 9:50 AM", (0, 30)),
            offering("b1", "BIO", "FALL", "8:15 AM - 9:00 AM", (0, 30)),
        ];
        let request = ScheduleRequest::new("STU1", "FALL", ids(&["BIO", "MATH"]));
        let result = plan_student_schedule(&request, &offerings);
        assert_eq!(result.section_ids().unwrap(), ["b1", "m2"]);
    }

    #[test]
    fn test_plan_full_course_reports_no_candidates() {
        let offerings = vec![
            offering("m1", "MATH", "FALL", "8:00 AM - 8:50 AM", (0, 30)),
            offering("c1", "CHEM", "FALL", "1:00 PM - 1:50 PM", (24, 24)),
        ];
        let request = ScheduleRequest::new("STU1", "FALL", ids(&["MATH", "CHEM"]));
        assert_eq!(
            plan_student_schedule(&request, &offerings),
            ScheduleResult::NoCandidates {
                course_ids: vec!["CHEM".into()]
            }
        );
    }
}
