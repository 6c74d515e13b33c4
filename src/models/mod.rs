//! Course scheduling domain models.
//!
//! Provides the data types the conflict detector, schedule generator
//! and availability checker operate on. All values are plain in-memory
//! records supplied by the persistence collaborator.
//!
//! # Domain Mappings
//!
//! | section-schedule | School records | Meaning |
//! |------------------|----------------|---------|
//! | SectionTimeSlot | Course section | When a section meets |
//! | SectionOffering | Course section + seats | Published offering with teacher, room, capacity |
//! | CourseCandidateGroup | Course request | Open sections for one requested course |
//! | ScheduleResult | Student schedule | One section per requested course, or why not |

mod day_pattern;
mod schedule;
mod section;
mod time_window;

pub use day_pattern::{DayPattern, Weekday};
pub use schedule::{CourseCandidateGroup, ScheduleResult};
pub use section::{SectionOffering, SectionTimeSlot};
pub use time_window::{parse_time_range, TimeParse, TimeWindow};
