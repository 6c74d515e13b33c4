//! Conflict detection between course sections.
//!
//! Decides whether two sections overlap in both day and time, and scans
//! a set of sections for every conflicting pair. The schedule generator
//! and the availability checker are built on the same decision.

mod detector;
mod report;

pub use detector::{find_all_conflicts, has_conflict, PreparedSlot};
pub use report::{detect_conflicts, ConflictPair, ConflictReport, SlotSummary};
