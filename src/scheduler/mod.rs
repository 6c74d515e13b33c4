//! Automatic student schedule generation.
//!
//! Selects one open section per requested course such that no two
//! selected sections conflict.
//!
//! # Algorithm
//!
//! `BacktrackScheduler` is an exhaustive depth-first search over the
//! requested courses in order. It returns the first conflict-free
//! combination found; there is no objective function, so ties are
//! broken purely by input order.
//!
//! # Failures
//!
//! - `NoCandidates`: some course has no open section (checked first).
//! - `Unsatisfiable`: every combination conflicts, or the node budget ran out.

mod backtrack;
mod grouping;

pub use backtrack::{generate_schedule, BacktrackScheduler, SearchStats};
pub use grouping::{group_candidates, plan_student_schedule, ScheduleRequest};
