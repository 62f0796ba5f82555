//! Schedule entry model.
//!
//! A `ScheduleEntry` is one scheduled occurrence of a course section at
//! a specific day/timeslot/room/instructor — the unit the editing
//! engine mutates. Entries denormalize the course name, room type and
//! instructor name for query convenience; the store recomputes the
//! derived fields whenever an edit is accepted.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{slot_label, Day};

/// Whether an entry is a lecture or lab occurrence of its course.
///
/// Generator output may omit the section marker entirely; such entries
/// are `Unspecified` and classified by [`ScheduleEntry::is_lab`] from
/// the course type label instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionKind {
    Lecture,
    Lab,
    Unspecified,
}

impl SectionKind {
    /// Parses a section marker from the source data.
    ///
    /// `"LECTURE"` maps to `Lecture`; any marker containing `"lab"`
    /// (case-insensitive) maps to `Lab`; anything else — including a
    /// missing marker — is `Unspecified`.
    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            None => SectionKind::Unspecified,
            Some(s) if s == "LECTURE" => SectionKind::Lecture,
            Some(s) if s.to_ascii_lowercase().contains("lab") => SectionKind::Lab,
            Some(_) => SectionKind::Unspecified,
        }
    }

    /// Canonical marker used in identity keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Lecture => "LECTURE",
            SectionKind::Lab => "LAB",
            SectionKind::Unspecified => "S1",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One scheduled class occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Course identifier.
    pub course_id: String,
    /// Course display name (denormalized).
    pub course_name: String,
    /// Course type label (denormalized; drives lab inference).
    pub course_type: String,
    /// Lecture/lab marker from the generator.
    pub section_kind: SectionKind,
    /// Teaching day.
    pub day: Day,
    /// Slot start (e.g. "9:00 AM").
    pub start_time: String,
    /// Slot end (e.g. "10:30 AM").
    pub end_time: String,
    /// Assigned room.
    pub room_id: String,
    /// Room classification (denormalized).
    pub room_type: String,
    /// Assigned instructor.
    pub instructor_id: String,
    /// Instructor display name (denormalized).
    pub instructor_name: String,
}

impl ScheduleEntry {
    /// The identity key locating this entry for editing.
    pub fn key(&self) -> EntryKey {
        EntryKey {
            course_id: self.course_id.clone(),
            section_kind: self.section_kind,
            day: self.day,
            start_time: self.start_time.clone(),
        }
    }

    /// Whether this entry is a lab occurrence.
    ///
    /// Explicit section markers win; unspecified entries fall back to
    /// the course type label containing `"Lab"`.
    pub fn is_lab(&self) -> bool {
        match self.section_kind {
            SectionKind::Lab => true,
            SectionKind::Lecture => false,
            SectionKind::Unspecified => self.course_type.contains("Lab"),
        }
    }

    /// Display label of the occupied slot, `"start - end"`.
    pub fn slot_label(&self) -> String {
        slot_label(&self.start_time, &self.end_time)
    }
}

/// Identity key for a schedule entry.
///
/// Unique within a store; equality is field-wise over the structured
/// tuple (course, section kind, day, start time). The fields are kept
/// intact rather than concatenated into a string id, so keys never
/// collide through separator stripping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryKey {
    /// Course identifier.
    pub course_id: String,
    /// Section marker (default marker for unspecified sections).
    pub section_kind: SectionKind,
    /// Teaching day.
    pub day: Day,
    /// Slot start time, verbatim.
    pub start_time: String,
}

impl EntryKey {
    /// Creates a key.
    pub fn new(
        course_id: impl Into<String>,
        section_kind: SectionKind,
        day: Day,
        start_time: impl Into<String>,
    ) -> Self {
        Self {
            course_id: course_id.into(),
            section_kind,
            day,
            start_time: start_time.into(),
        }
    }
}

impl fmt::Display for EntryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}",
            self.course_id, self.section_kind, self.day, self.start_time
        )
    }
}
