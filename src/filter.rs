//! Schedule filtering.
//!
//! Narrows the flat entry collection by day, section kind, and
//! free-text search. The three criteria are ANDed; each defaults to a
//! pass-through. Filtering is independent of the grouping projection —
//! the presentation layer typically projects the filtered sequence.

use serde::{Deserialize, Serialize};

use crate::models::{Day, ScheduleEntry};

/// Day criterion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayFilter {
    /// Any day.
    #[default]
    All,
    /// Only the given day.
    On(Day),
}

/// Section-kind criterion.
///
/// Partitions entries with the same lecture/lab inference the
/// validator uses (explicit section marker, else course type label).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionFilter {
    /// Any section kind.
    #[default]
    All,
    /// Lecture occurrences only.
    Lecture,
    /// Lab occurrences only.
    Lab,
}

/// Combined filter criteria.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleFilter {
    /// Day criterion.
    pub day: DayFilter,
    /// Section-kind criterion.
    pub section: SectionFilter,
    /// Case-insensitive substring matched against course id, course
    /// name, instructor name, and room id. Empty = pass-through.
    pub search: String,
}

impl ScheduleFilter {
    /// A filter that matches everything.
    pub fn all() -> Self {
        Self::default()
    }

    /// Restricts to a day.
    pub fn on_day(mut self, day: Day) -> Self {
        self.day = DayFilter::On(day);
        self
    }

    /// Restricts to a section kind.
    pub fn with_section(mut self, section: SectionFilter) -> Self {
        self.section = section;
        self
    }

    /// Sets the search text.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Whether a single entry passes all three criteria.
    pub fn matches(&self, entry: &ScheduleEntry) -> bool {
        if let DayFilter::On(day) = self.day {
            if entry.day != day {
                return false;
            }
        }

        match self.section {
            SectionFilter::All => {}
            SectionFilter::Lecture => {
                if entry.is_lab() {
                    return false;
                }
            }
            SectionFilter::Lab => {
                if !entry.is_lab() {
                    return false;
                }
            }
        }

        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            let haystack = format!(
                "{}{}{}{}",
                entry.course_id, entry.course_name, entry.instructor_name, entry.room_id
            )
            .to_lowercase();
            if !haystack.contains(&needle) {
                return false;
            }
        }

        true
    }
}

/// Filters the entry collection, preserving input order.
pub fn filter_entries<'a>(
    entries: &'a [ScheduleEntry],
    filter: &ScheduleFilter,
) -> Vec<&'a ScheduleEntry> {
    entries.iter().filter(|e| filter.matches(e)).collect()
}
