//! End-to-end use from collaborator-supplied JSON records.

use section_schedule::availability::{room_available, teacher_available, AvailabilityQuery};
use section_schedule::conflict::detect_conflicts;
use section_schedule::models::{DayPattern, ScheduleResult, SectionOffering, SectionTimeSlot};
use section_schedule::scheduler::{plan_student_schedule, BacktrackScheduler, ScheduleRequest};
use section_schedule::validation::{validate_enrollment, ValidationErrorKind};
use section_schedule::SchedulerConfig;

const OFFERINGS: &str = r#"[
    {"id": "alg-1", "course_id": "ALG", "course_name": "Algebra I", "section_label": "01",
     "days": ["M", "W", "F"], "time": "8:00 AM - 8:50 AM",
     "teacher_id": "t-lee", "room": "101", "session_id": "2026-fall",
     "current_enrollment": 28, "max_students": 28},
    {"id": "alg-2", "course_id": "ALG", "course_name": "Algebra I", "section_label": "02",
     "days": ["M", "W", "F"], "time": "9:00 AM - 9:50 AM",
     "teacher_id": "t-lee", "room": "101", "session_id": "2026-fall",
     "current_enrollment": 12, "max_students": 28},
    {"id": "bio-1", "course_id": "BIO", "course_name": "Biology", "section_label": "01",
     "days": ["M", "W"], "time": "9:30 AM - 10:45 AM",
     "teacher_id": "t-ortiz", "room": "Lab A", "session_id": "2026-fall",
     "current_enrollment": 3, "max_students": 24},
    {"id": "bio-2", "course_id": "BIO", "course_name": "Biology", "section_label": "02",
     "days": ["T", "Th"], "time": "9:30 AM - 10:45 AM",
     "teacher_id": "t-ortiz", "room": "Lab A", "session_id": "2026-fall",
     "current_enrollment": 3, "max_students": 24},
    {"id": "pe-1", "course_id": "PE", "course_name": "Physical Education",
     "days": ["M", "T", "W", "Th", "F"], "period": "4th Period",
     "teacher_id": "t-kim", "room": "Gym", "session_id": "2026-fall",
     "current_enrollment": 0, "max_students": 40},
    {"id": "art-1", "course_id": "ART", "course_name": "Studio Art",
     "days": ["F"], "period": "4th Period",
     "teacher_id": "t-kim", "room": "Gym", "session_id": "2026-fall",
     "current_enrollment": 0, "max_students": 15}
]"#;

fn offerings() -> Vec<SectionOffering> {
    serde_json::from_str(OFFERINGS).unwrap()
}

fn courses(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_generate_skips_full_and_conflicting_sections() {
    let request = ScheduleRequest::new("stu-1", "2026-fall", courses(&["ALG", "BIO", "PE"]));
    let result = plan_student_schedule(&request, &offerings());

    // alg-1 is full; alg-2 overlaps bio-1 on M/W, so bio-2 is picked.
    assert_eq!(result.section_ids().unwrap(), ["alg-2", "bio-2", "pe-1"]);

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["status"], "scheduled");
}

#[test]
fn test_generate_period_clash_is_unsatisfiable() {
    let request = ScheduleRequest::new("stu-2", "2026-fall", courses(&["PE", "ART"]));
    assert_eq!(
        plan_student_schedule(&request, &offerings()),
        ScheduleResult::Unsatisfiable
    );
}

#[test]
fn test_generate_other_session_has_no_candidates() {
    let request = ScheduleRequest::new("stu-3", "2027-spring", courses(&["ALG", "BIO"]));
    assert_eq!(
        plan_student_schedule(&request, &offerings()),
        ScheduleResult::NoCandidates {
            course_ids: courses(&["ALG", "BIO"])
        }
    );
}

#[test]
fn test_configured_budget() {
    let config = SchedulerConfig::from_toml_str("[search]\nmax_nodes = 2").unwrap();
    let request = ScheduleRequest::new("stu-1", "2026-fall", courses(&["ALG", "BIO", "PE"]));
    let result = BacktrackScheduler::new()
        .with_config(config)
        .plan(&request, &offerings());
    assert_eq!(result, ScheduleResult::Unsatisfiable);
}

#[test]
fn test_conflict_report_for_selection() {
    let picked: Vec<SectionTimeSlot> = offerings()
        .into_iter()
        .filter(|o| ["alg-2", "bio-1", "pe-1", "art-1"].contains(&o.id()))
        .map(|o| o.slot)
        .collect();

    let report = detect_conflicts(&picked);
    assert!(report.has_conflicts);
    let pairs: Vec<(&str, &str)> = report
        .conflicts
        .iter()
        .map(|c| (c.first.id.as_str(), c.second.id.as_str()))
        .collect();
    assert_eq!(pairs, vec![("alg-2", "bio-1"), ("pe-1", "art-1")]);
    assert_eq!(report.conflicts[0].first.course_name.as_deref(), Some("Algebra I"));
}

#[test]
fn test_teacher_and_room_availability() {
    let all = offerings();
    let mwf = DayPattern::from_tokens(["M", "W", "F"]);

    let early = AvailabilityQuery::new(mwf).with_time("8:30 AM - 9:20 AM");
    assert!(!teacher_available("t-lee", "2026-fall", &early, &all, None));
    assert!(teacher_available("t-ortiz", "2026-fall", &early, &all, None));

    // Moving alg-2 to its own slot in 101 while editing it.
    let same = AvailabilityQuery::new(mwf).with_time("9:00 AM - 9:50 AM");
    assert!(!room_available("101", "2026-fall", &same, &all, None));
    assert!(room_available("101", "2026-fall", &same, &all, Some("alg-2")));

    let gym = AvailabilityQuery::new(DayPattern::from_tokens(["F"])).with_period("4th Period");
    assert!(!room_available("Gym", "2026-fall", &gym, &all, Some("art-1")));
}

#[test]
fn test_enrollment_validation() {
    let all = offerings();
    let find = |id: &str| all.iter().find(|o| o.id() == id).unwrap().clone();

    assert!(validate_enrollment(&[find("alg-2"), find("bio-2"), find("pe-1")]).is_ok());

    let errors = validate_enrollment(&[find("alg-1"), find("bio-1"), find("alg-2")]).unwrap_err();
    let kinds: Vec<&ValidationErrorKind> = errors.iter().map(|e| &e.kind).collect();
    assert!(kinds.contains(&&ValidationErrorKind::SectionFull));
    assert!(kinds.contains(&&ValidationErrorKind::DuplicateCourse));
    assert!(kinds.contains(&&ValidationErrorKind::TimeConflict));
}
