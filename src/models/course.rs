//! Course model.

use serde::{Deserialize, Serialize};

/// A course offered in the catalog.
///
/// `course_type` is a free-text label from the source data (e.g.
/// "Lecture", "Lecture and Lab"); section-kind inference substring
/// matches on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Unique course identifier (e.g. "CSC111").
    pub course_id: String,
    /// Human-readable name.
    pub name: String,
    /// Credit hours.
    pub credit_count: u32,
    /// Free-text type label.
    pub course_type: String,
}

impl Course {
    /// Creates a course.
    pub fn new(course_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            name: name.into(),
            credit_count: 0,
            course_type: String::new(),
        }
    }

    /// Sets the credit hours.
    pub fn with_credits(mut self, credit_count: u32) -> Self {
        self.credit_count = credit_count;
        self
    }

    /// Sets the type label.
    pub fn with_type(mut self, course_type: impl Into<String>) -> Self {
        self.course_type = course_type.into();
        self
    }

    /// Whether the type label marks this course as having a lab component.
    pub fn has_lab_component(&self) -> bool {
        self.course_type.contains("Lab")
    }
}
