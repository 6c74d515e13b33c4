//! Course section scheduling core.
//!
//! Given course sections that are already fetched into memory, decides
//! whether sections conflict in time, picks one non-conflicting section
//! per requested course for a student, and answers whether a teacher or
//! room is free for a proposed meeting pattern. It performs no I/O:
//! storage, capacity bookkeeping, and transport belong to the caller.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `TimeWindow`, `DayPattern`,
//!   `SectionTimeSlot`, `SectionOffering`, `CourseCandidateGroup`, `ScheduleResult`
//! - **`conflict`**: Pairwise conflict decision and all-pairs scan
//! - **`scheduler`**: Backtracking schedule generation
//! - **`availability`**: Teacher and room free/busy checks
//! - **`validation`**: Enrollment checks (capacity, duplicates, conflicts)
//! - **`config`**: Search limits loaded from TOML
//!
//! # Data Flow
//!
//! `models` (time parsing) → `conflict` → { `scheduler`, `availability`,
//! `validation` }. Every call is synchronous and stateless; concurrent
//! calls need no coordination.
//!
//! # Example
//!
//! ```
//! use section_schedule::conflict::has_conflict;
//! use section_schedule::models::{DayPattern, SectionTimeSlot};
//!
//! let tth = DayPattern::from_tokens(["T", "Th"]);
//! let a = SectionTimeSlot::new("S1", "CHEM", tth).with_period("1st Period");
//! let b = SectionTimeSlot::new("S2", "PHYS", tth).with_period("1st Period");
//! assert!(has_conflict(&a, &b));
//! ```

pub mod availability;
pub mod config;
pub mod conflict;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use availability::{is_available, room_available, teacher_available, AvailabilityQuery};
pub use config::{ConfigError, SchedulerConfig};
pub use conflict::{detect_conflicts, find_all_conflicts, has_conflict, ConflictPair};
pub use models::{
    parse_time_range, CourseCandidateGroup, DayPattern, ScheduleResult, SectionOffering,
    SectionTimeSlot, TimeWindow, Weekday,
};
pub use scheduler::{generate_schedule, plan_student_schedule, BacktrackScheduler};
