//! Timetable domain models.
//!
//! Core data types for the editing engine: reference entities
//! (courses, instructors, rooms, timeslots) and the schedule entries
//! that edits mutate. Reference entities are immutable per session;
//! entries are rewritten in place by accepted edits only.

mod course;
mod entry;
mod instructor;
mod room;
mod timeslot;

pub use course::Course;
pub use entry::{EntryKey, ScheduleEntry, SectionKind};
pub use instructor::{parse_unavailability, Instructor, Role};
pub use room::Room;
pub use timeslot::{slot_label, start_rank, Day, Timeslot, UnknownDay, UNRANKED};
