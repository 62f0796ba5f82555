//! Reference catalog.
//!
//! Holds the per-session reference data the validator dereferences:
//! courses, instructors, rooms, and the timeslot grid. Built wholesale
//! from the external data service and read-only afterwards — entity
//! CRUD happens outside this crate and is absorbed by rebuilding the
//! catalog, never by editing it in place.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::{Course, Instructor, Room, Timeslot};

/// Immutable-per-session reference data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReferenceCatalog {
    courses: HashMap<String, Course>,
    instructors: HashMap<String, Instructor>,
    rooms: HashMap<String, Room>,
    timeslots: Vec<Timeslot>,
}

impl ReferenceCatalog {
    /// Builds a catalog from the four loaded collections.
    ///
    /// Later duplicates of an id silently replace earlier ones; the
    /// audit pass reports duplicates explicitly.
    pub fn new(
        courses: Vec<Course>,
        instructors: Vec<Instructor>,
        rooms: Vec<Room>,
        timeslots: Vec<Timeslot>,
    ) -> Self {
        Self {
            courses: courses
                .into_iter()
                .map(|c| (c.course_id.clone(), c))
                .collect(),
            instructors: instructors
                .into_iter()
                .map(|i| (i.instructor_id.clone(), i))
                .collect(),
            rooms: rooms.into_iter().map(|r| (r.room_id.clone(), r)).collect(),
            timeslots,
        }
    }

    /// Looks up a course by id.
    pub fn course(&self, course_id: &str) -> Option<&Course> {
        self.courses.get(course_id)
    }

    /// Looks up an instructor by id.
    pub fn instructor(&self, instructor_id: &str) -> Option<&Instructor> {
        self.instructors.get(instructor_id)
    }

    /// Looks up a room by id.
    pub fn room(&self, room_id: &str) -> Option<&Room> {
        self.rooms.get(room_id)
    }

    /// The timeslot grid, in load order.
    pub fn timeslots(&self) -> &[Timeslot] {
        &self.timeslots
    }

    /// Iterates all instructors (unordered).
    pub fn instructors(&self) -> impl Iterator<Item = &Instructor> {
        self.instructors.values()
    }

    /// Iterates all rooms (unordered).
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    /// Number of courses loaded.
    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    /// Number of instructors loaded.
    pub fn instructor_count(&self) -> usize {
        self.instructors.len()
    }

    /// Number of rooms loaded.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Day, Role};

    fn sample_catalog() -> ReferenceCatalog {
        ReferenceCatalog::new(
            vec![
                Course::new("CSC111", "Intro to Computer Science").with_type("Lecture and Lab"),
                Course::new("MTH111", "Calculus").with_type("Lecture"),
            ],
            vec![
                Instructor::new("PROF01", "Dr. Reda Elbasiony", Role::Professor)
                    .with_qualification("CSC111"),
                Instructor::new("TA01", "Eng. Sara", Role::TeachingAssistant)
                    .with_qualification("CSC111"),
            ],
            vec![Room::new("L2", "Lab", 30), Room::new("R105", "Lecture", 60)],
            vec![
                Timeslot::new(Day::Sunday, "9:00 AM", "10:30 AM"),
                Timeslot::new(Day::Sunday, "10:45 AM", "12:15 PM"),
            ],
        )
    }

    #[test]
    fn test_lookups() {
        let catalog = sample_catalog();
        assert_eq!(catalog.course("CSC111").unwrap().name, "Intro to Computer Science");
        assert_eq!(catalog.instructor("TA01").unwrap().role, Role::TeachingAssistant);
        assert_eq!(catalog.room("L2").unwrap().capacity, 30);
        assert!(catalog.course("NOPE").is_none());
        assert!(catalog.instructor("NOPE").is_none());
        assert!(catalog.room("NOPE").is_none());
    }

    #[test]
    fn test_counts() {
        let catalog = sample_catalog();
        assert_eq!(catalog.course_count(), 2);
        assert_eq!(catalog.instructor_count(), 2);
        assert_eq!(catalog.room_count(), 2);
        assert_eq!(catalog.timeslots().len(), 2);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = ReferenceCatalog::default();
        assert_eq!(catalog.course_count(), 0);
        assert!(catalog.timeslots().is_empty());
    }
}
