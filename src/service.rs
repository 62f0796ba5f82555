//! External service boundary.
//!
//! The reference data and the generated schedule come from a separate
//! data/generation service. This module defines the wire shapes of its
//! responses, the conversions into domain types, and the
//! [`TimetableService`] trait the session drives. All free-text
//! decoding — day names, role labels, the `"Not on <Day>"` blackout
//! encoding — happens here, once, so the rest of the crate only sees
//! structured values.
//!
//! Service failures are generic and non-retryable from this crate's
//! point of view: the caller keeps its previous in-memory state and
//! may re-issue the load sequence.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::models::{
    parse_unavailability, Course, Day, Instructor, Role, Room, ScheduleEntry, SectionKind, Timeslot,
};
use crate::stats::ScheduleStatistics;

/// Failure at the service boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The request never produced a usable response.
    #[error("service transport failure: {0}")]
    Transport(String),

    /// The service answered with `success: false`.
    #[error("service reported failure: {0}")]
    Failed(String),

    /// The response arrived but could not be decoded.
    #[error("malformed service response: {0}")]
    Malformed(String),
}

/// One course row as the service sends it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseRecord {
    pub course_id: String,
    pub name: String,
    #[serde(default)]
    pub credits: u32,
    #[serde(rename = "type", default)]
    pub course_type: String,
}

/// One instructor row as the service sends it.
///
/// `preferred_slots` carries the source's blackout encoding; it is
/// parsed here and never stored as text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstructorRecord {
    pub instructor_id: String,
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub preferred_slots: Option<String>,
    #[serde(default)]
    pub qualified_courses: Vec<String>,
}

/// One room row as the service sends it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomRecord {
    pub room_id: String,
    #[serde(rename = "type", default)]
    pub room_type: String,
    #[serde(default)]
    pub capacity: u32,
}

/// One timeslot row as the service sends it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeslotRecord {
    pub day: String,
    pub start_time: String,
    pub end_time: String,
}

/// One schedule entry as the generator sends it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryRecord {
    pub course_id: String,
    #[serde(default)]
    pub course_name: String,
    #[serde(default)]
    pub course_type: String,
    #[serde(default)]
    pub section_id: Option<String>,
    pub day: String,
    pub start_time: String,
    pub end_time: String,
    pub room_id: String,
    #[serde(default)]
    pub room_type: String,
    pub instructor_id: String,
    #[serde(default)]
    pub instructor_name: String,
}

/// Bulk-read payload for courses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoursesPayload {
    pub success: bool,
    #[serde(default)]
    pub courses: Vec<CourseRecord>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Bulk-read payload for instructors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstructorsPayload {
    pub success: bool,
    #[serde(default)]
    pub instructors: Vec<InstructorRecord>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Bulk-read payload for rooms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomsPayload {
    pub success: bool,
    #[serde(default)]
    pub rooms: Vec<RoomRecord>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Bulk-read payload for timeslots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeslotsPayload {
    pub success: bool,
    #[serde(default)]
    pub timeslots: Vec<TimeslotRecord>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Generation payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationPayload {
    pub success: bool,
    #[serde(default)]
    pub schedule: Vec<EntryRecord>,
    #[serde(default)]
    pub scheduled_courses: usize,
    #[serde(default)]
    pub total_courses: usize,
    #[serde(default)]
    pub statistics: Option<ScheduleStatistics>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Decoded generation result, ready to seed the store.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    /// The generated entries.
    pub schedule: Vec<ScheduleEntry>,
    /// How many courses the generator placed.
    pub scheduled_courses: usize,
    /// How many courses it attempted.
    pub total_courses: usize,
    /// The generator's own statistics snapshot, if it sent one.
    pub statistics: Option<ScheduleStatistics>,
}

fn failure_message(error: Option<String>) -> ServiceError {
    ServiceError::Failed(error.unwrap_or_else(|| "no error message".into()))
}

fn parse_day(raw: &str) -> Result<Day, ServiceError> {
    raw.parse::<Day>()
        .map_err(|e| ServiceError::Malformed(e.to_string()))
}

impl From<CourseRecord> for Course {
    fn from(rec: CourseRecord) -> Self {
        Course::new(rec.course_id, rec.name)
            .with_credits(rec.credits)
            .with_type(rec.course_type)
    }
}

impl From<RoomRecord> for Room {
    fn from(rec: RoomRecord) -> Self {
        Room::new(rec.room_id, rec.room_type, rec.capacity)
    }
}

impl From<InstructorRecord> for Instructor {
    fn from(rec: InstructorRecord) -> Self {
        let mut instructor = Instructor::new(rec.instructor_id, rec.name, Role::from_label(&rec.role));
        instructor.qualified_courses = rec.qualified_courses.into_iter().collect();
        instructor.unavailable_day = rec
            .preferred_slots
            .as_deref()
            .and_then(parse_unavailability);
        instructor
    }
}

impl TryFrom<TimeslotRecord> for Timeslot {
    type Error = ServiceError;

    fn try_from(rec: TimeslotRecord) -> Result<Self, Self::Error> {
        Ok(Timeslot::new(parse_day(&rec.day)?, rec.start_time, rec.end_time))
    }
}

impl TryFrom<EntryRecord> for ScheduleEntry {
    type Error = ServiceError;

    fn try_from(rec: EntryRecord) -> Result<Self, Self::Error> {
        Ok(ScheduleEntry {
            course_id: rec.course_id,
            course_name: rec.course_name,
            course_type: rec.course_type,
            section_kind: SectionKind::from_label(rec.section_id.as_deref()),
            day: parse_day(&rec.day)?,
            start_time: rec.start_time,
            end_time: rec.end_time,
            room_id: rec.room_id,
            room_type: rec.room_type,
            instructor_id: rec.instructor_id,
            instructor_name: rec.instructor_name,
        })
    }
}

impl CoursesPayload {
    /// Converts into domain courses, honoring the success flag.
    pub fn into_domain(self) -> Result<Vec<Course>, ServiceError> {
        if !self.success {
            return Err(failure_message(self.error));
        }
        Ok(self.courses.into_iter().map(Course::from).collect())
    }
}

impl InstructorsPayload {
    /// Converts into domain instructors, honoring the success flag.
    pub fn into_domain(self) -> Result<Vec<Instructor>, ServiceError> {
        if !self.success {
            return Err(failure_message(self.error));
        }
        Ok(self.instructors.into_iter().map(Instructor::from).collect())
    }
}

impl RoomsPayload {
    /// Converts into domain rooms, honoring the success flag.
    pub fn into_domain(self) -> Result<Vec<Room>, ServiceError> {
        if !self.success {
            return Err(failure_message(self.error));
        }
        Ok(self.rooms.into_iter().map(Room::from).collect())
    }
}

impl TimeslotsPayload {
    /// Converts into domain timeslots, honoring the success flag.
    pub fn into_domain(self) -> Result<Vec<Timeslot>, ServiceError> {
        if !self.success {
            return Err(failure_message(self.error));
        }
        self.timeslots.into_iter().map(Timeslot::try_from).collect()
    }
}

impl GenerationPayload {
    /// Converts into a decoded generation result, honoring the success flag.
    pub fn into_domain(self) -> Result<GenerationResult, ServiceError> {
        if !self.success {
            return Err(failure_message(self.error));
        }
        let schedule = self
            .schedule
            .into_iter()
            .map(ScheduleEntry::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(GenerationResult {
            schedule,
            scheduled_courses: self.scheduled_courses,
            total_courses: self.total_courses,
            statistics: self.statistics,
        })
    }
}

/// The external data/generation service, seen from this crate.
///
/// The four bulk reads are independent of each other and may be issued
/// in any order (or concurrently by an async adapter); the session
/// requires all four before validation is usable. `generate` carries
/// the caller-supplied timeout through to the solver. Entity CRUD and
/// CSV upload are not modeled — after any of those succeed externally,
/// the catalog must simply be reloaded.
pub trait TimetableService {
    /// Fetches all courses.
    fn fetch_courses(&self) -> Result<Vec<Course>, ServiceError>;
    /// Fetches all instructors.
    fn fetch_instructors(&self) -> Result<Vec<Instructor>, ServiceError>;
    /// Fetches all rooms.
    fn fetch_rooms(&self) -> Result<Vec<Room>, ServiceError>;
    /// Fetches the timeslot grid.
    fn fetch_timeslots(&self) -> Result<Vec<Timeslot>, ServiceError>;
    /// Runs the generator with the given solver timeout.
    fn generate(&self, timeout: Duration) -> Result<GenerationResult, ServiceError>;
}
