//! Teaching days and timeslots.
//!
//! The academic week is a fixed five-day calendar (Sunday through
//! Thursday) with four teaching slots per day. Display ordering of
//! slots follows a canonical rank table keyed by start time — a naive
//! lexical sort would place "10:45 AM" before "9:00 AM".

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A teaching day of the academic week.
///
/// Variant order is calendar order; `Ord` follows it, so sorting days
/// never relies on string comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
}

impl Day {
    /// All teaching days in calendar order.
    pub const ALL: [Day; 5] = [
        Day::Sunday,
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
    ];

    /// Canonical English name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Day::Sunday => "Sunday",
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a day name outside the five-day calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDay(pub String);

impl fmt::Display for UnknownDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown teaching day '{}'", self.0)
    }
}

impl std::error::Error for UnknownDay {}

impl FromStr for Day {
    type Err = UnknownDay;

    /// Parses a day name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Day::ALL
            .iter()
            .find(|d| d.as_str().to_ascii_lowercase() == normalized)
            .copied()
            .ok_or_else(|| UnknownDay(s.to_string()))
    }
}

/// One bookable period: a day plus a start/end time pair.
///
/// Times are kept in the source's clock format (e.g. `"9:00 AM"`);
/// ordering goes through [`start_rank`], never through the strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeslot {
    /// Teaching day.
    pub day: Day,
    /// Slot start (e.g. "9:00 AM").
    pub start_time: String,
    /// Slot end (e.g. "10:30 AM").
    pub end_time: String,
}

impl Timeslot {
    /// Creates a timeslot.
    pub fn new(day: Day, start_time: impl Into<String>, end_time: impl Into<String>) -> Self {
        Self {
            day,
            start_time: start_time.into(),
            end_time: end_time.into(),
        }
    }

    /// Display label, `"start - end"`.
    pub fn label(&self) -> String {
        slot_label(&self.start_time, &self.end_time)
    }
}

/// Rank assigned to start times outside the canonical table.
///
/// Large sentinel so unranked slots sort after all known ones while a
/// stable sort preserves their relative order.
pub const UNRANKED: u32 = 999;

/// Canonical daily slot order, keyed by start time.
const SLOT_ORDER: [(&str, u32); 4] = [
    ("9:00 AM", 1),
    ("10:45 AM", 2),
    ("12:30 PM", 3),
    ("2:15 PM", 4),
];

/// Canonical rank of a slot start time ([`UNRANKED`] if not in the table).
#[inline]
pub fn start_rank(start_time: &str) -> u32 {
    SLOT_ORDER
        .iter()
        .find(|(s, _)| *s == start_time)
        .map(|(_, rank)| *rank)
        .unwrap_or(UNRANKED)
}

/// Builds the `"start - end"` label used to group entries for display.
#[inline]
pub fn slot_label(start_time: &str, end_time: &str) -> String {
    format!("{start_time} - {end_time}")
}
