//! Instructor model.
//!
//! Instructors carry the three facts the edit validator needs: which
//! courses they may teach, what role they hold (lab sections take
//! teaching assistants, lecture sections take professors or doctors),
//! and an optional weekly blackout day.
//!
//! The source data encodes the blackout as a free-text preference
//! string (`"Not on Wednesday"`). That string is parsed exactly once,
//! at the catalog boundary, by [`parse_unavailability`]; downstream
//! code only ever sees the structured [`Day`].

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::Day;

/// An instructor who can be assigned to schedule entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instructor {
    /// Unique instructor identifier (e.g. "PROF01").
    pub instructor_id: String,
    /// Display name.
    pub name: String,
    /// Academic role; drives section eligibility.
    pub role: Role,
    /// Courses this instructor may teach.
    pub qualified_courses: HashSet<String>,
    /// Weekly blackout day, if any.
    pub unavailable_day: Option<Day>,
}

/// Academic role classification.
///
/// Only the three named roles are section-assignable; anything else in
/// the source data is preserved as `Other` and never passes the role
/// check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Professor,
    Doctor,
    TeachingAssistant,
    /// Unrecognized role label, kept verbatim.
    Other(String),
}

impl Role {
    /// Parses a role label from the source data.
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "Professor" => Role::Professor,
            "Doctor" => Role::Doctor,
            "Teaching Assistant" => Role::TeachingAssistant,
            other => Role::Other(other.to_string()),
        }
    }

    /// Whether this role may take lab sections.
    #[inline]
    pub fn can_teach_lab(&self) -> bool {
        matches!(self, Role::TeachingAssistant)
    }

    /// Whether this role may take lecture sections.
    #[inline]
    pub fn can_teach_lecture(&self) -> bool {
        matches!(self, Role::Professor | Role::Doctor)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Professor => f.write_str("Professor"),
            Role::Doctor => f.write_str("Doctor"),
            Role::TeachingAssistant => f.write_str("Teaching Assistant"),
            Role::Other(label) => f.write_str(label),
        }
    }
}

impl Instructor {
    /// Creates an instructor.
    pub fn new(instructor_id: impl Into<String>, name: impl Into<String>, role: Role) -> Self {
        Self {
            instructor_id: instructor_id.into(),
            name: name.into(),
            role,
            qualified_courses: HashSet::new(),
            unavailable_day: None,
        }
    }

    /// Adds a course qualification.
    pub fn with_qualification(mut self, course_id: impl Into<String>) -> Self {
        self.qualified_courses.insert(course_id.into());
        self
    }

    /// Sets the weekly blackout day.
    pub fn with_unavailable_day(mut self, day: Day) -> Self {
        self.unavailable_day = Some(day);
        self
    }

    /// Whether this instructor may teach the given course.
    #[inline]
    pub fn is_qualified_for(&self, course_id: &str) -> bool {
        self.qualified_courses.contains(course_id)
    }

    /// Whether this instructor can be scheduled on the given day.
    #[inline]
    pub fn is_available_on(&self, day: Day) -> bool {
        self.unavailable_day != Some(day)
    }
}

/// Parses the source's `"Not on <Day>"` preference encoding.
///
/// Matching is case-insensitive; anything that is not a recognizable
/// blackout (empty string, other preference text, unknown day name)
/// yields `None` — the instructor is treated as fully available.
pub fn parse_unavailability(raw: &str) -> Option<Day> {
    let lowered = raw.trim().to_ascii_lowercase();
    let day_name = lowered.strip_prefix("not on ")?;
    day_name.parse::<Day>().ok()
}
