//! Edit conflict validation.
//!
//! Decides whether a proposed edit to a schedule entry preserves the
//! constraints the generator originally satisfied. Checks run in a
//! fixed order and stop at the first failure, so the reported reason is
//! deterministic:
//!
//! 1. Referenced room and instructor exist in the catalog
//! 2. Instructor is qualified for the entry's course
//! 3. Instructor role matches the section kind (lab → teaching
//!    assistant, lecture → professor or doctor)
//! 4. The new day is not the instructor's blackout day
//! 5. No *other* entry occupies the same (day, start time) with the
//!    same room or the same instructor
//!
//! Validation is pure: it reads the catalog and the entry collection
//! and never mutates either. On acceptance it returns an
//! [`EditApproval`] carrying the catalog-derived denormalized fields
//! for the store to write back.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::catalog::ReferenceCatalog;
use crate::models::{Day, ScheduleEntry};

/// A proposed edit: the new placement for an existing entry.
///
/// Identity fields (course, section kind) are not part of the request;
/// an edit can only move an entry, never turn it into a different one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditRequest {
    /// New teaching day.
    pub day: Day,
    /// New slot start time.
    pub start_time: String,
    /// New slot end time.
    pub end_time: String,
    /// New room.
    pub room_id: String,
    /// New instructor.
    pub instructor_id: String,
}

/// Which kind of catalog reference failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceKind {
    Room,
    Instructor,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Room => f.write_str("room"),
            ResourceKind::Instructor => f.write_str("instructor"),
        }
    }
}

/// The resource a double booking collided on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConflictResource {
    /// The requested room is already occupied.
    Room(String),
    /// The requested instructor already teaches then.
    Instructor(String),
}

impl fmt::Display for ConflictResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConflictResource::Room(id) => write!(f, "room '{id}'"),
            ConflictResource::Instructor(id) => write!(f, "instructor '{id}'"),
        }
    }
}

/// Role a section kind demands of its instructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoleRequirement {
    /// Lab sections take teaching assistants.
    TeachingAssistant,
    /// Lecture sections take professors or doctors.
    ProfessorOrDoctor,
}

impl fmt::Display for RoleRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoleRequirement::TeachingAssistant => f.write_str("a Teaching Assistant"),
            RoleRequirement::ProfessorOrDoctor => f.write_str("a Professor or Doctor"),
        }
    }
}

/// Why a proposed edit was rejected.
///
/// Every variant names the offending resource so the presentation
/// layer can surface it directly.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum RejectReason {
    /// The request references a room or instructor the catalog does not know.
    #[error("unknown {kind} '{id}'")]
    UnknownReference { kind: ResourceKind, id: String },

    /// The instructor is not qualified for the entry's course.
    #[error("instructor '{instructor_id}' is not qualified to teach {course_id}")]
    NotQualified {
        instructor_id: String,
        course_id: String,
    },

    /// The instructor's role does not fit the section kind.
    #[error("'{instructor_id}' is a {role}, but this section requires {required}")]
    RoleMismatch {
        instructor_id: String,
        role: String,
        required: RoleRequirement,
    },

    /// The new day is the instructor's blackout day.
    #[error("instructor '{instructor_id}' is not available on {day}")]
    InstructorUnavailable { instructor_id: String, day: Day },

    /// Another entry already holds the room or instructor at that time.
    #[error("{resource} is already booked on {day} at {start_time}")]
    DoubleBooking {
        resource: ConflictResource,
        day: Day,
        start_time: String,
    },
}

/// Accept token returned by a successful validation.
///
/// Carries the denormalized fields the store rewrites from the catalog
/// when it applies the patch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditApproval {
    /// Display name of the requested instructor.
    pub instructor_name: String,
    /// Type label of the requested room.
    pub room_type: String,
}

/// Validates a proposed edit for the entry at `target_index`.
///
/// `entries` is the full current collection; the target entry itself
/// is skipped in the double-booking scan. Returns the approval token
/// on acceptance or the first failing check's reason.
///
/// # Panics
///
/// Panics if `target_index` is out of bounds for `entries`. Callers
/// resolve the index from the same collection they pass in (as the
/// store does), so a bad index is a caller bug, not a rejectable edit.
pub fn validate_edit(
    catalog: &ReferenceCatalog,
    entries: &[ScheduleEntry],
    target_index: usize,
    request: &EditRequest,
) -> Result<EditApproval, RejectReason> {
    debug_assert!(
        target_index < entries.len(),
        "target_index {target_index} out of bounds for {} entries",
        entries.len()
    );
    let entry = &entries[target_index];

    // 1. References must resolve. Room first, then instructor.
    let room = catalog
        .room(&request.room_id)
        .ok_or_else(|| RejectReason::UnknownReference {
            kind: ResourceKind::Room,
            id: request.room_id.clone(),
        })?;
    let instructor =
        catalog
            .instructor(&request.instructor_id)
            .ok_or_else(|| RejectReason::UnknownReference {
                kind: ResourceKind::Instructor,
                id: request.instructor_id.clone(),
            })?;

    // 2. Qualification.
    if !instructor.is_qualified_for(&entry.course_id) {
        return Err(RejectReason::NotQualified {
            instructor_id: instructor.instructor_id.clone(),
            course_id: entry.course_id.clone(),
        });
    }

    // 3. Section/role match.
    if entry.is_lab() {
        if !instructor.role.can_teach_lab() {
            return Err(RejectReason::RoleMismatch {
                instructor_id: instructor.instructor_id.clone(),
                role: instructor.role.to_string(),
                required: RoleRequirement::TeachingAssistant,
            });
        }
    } else if !instructor.role.can_teach_lecture() {
        return Err(RejectReason::RoleMismatch {
            instructor_id: instructor.instructor_id.clone(),
            role: instructor.role.to_string(),
            required: RoleRequirement::ProfessorOrDoctor,
        });
    }

    // 4. Blackout day.
    if !instructor.is_available_on(request.day) {
        return Err(RejectReason::InstructorUnavailable {
            instructor_id: instructor.instructor_id.clone(),
            day: request.day,
        });
    }

    // 5. Double booking against every other entry.
    for (i, other) in entries.iter().enumerate() {
        if i == target_index {
            continue;
        }
        if other.day != request.day || other.start_time != request.start_time {
            continue;
        }
        if other.room_id == request.room_id {
            return Err(RejectReason::DoubleBooking {
                resource: ConflictResource::Room(request.room_id.clone()),
                day: request.day,
                start_time: request.start_time.clone(),
            });
        }
        if other.instructor_id == request.instructor_id {
            return Err(RejectReason::DoubleBooking {
                resource: ConflictResource::Instructor(request.instructor_id.clone()),
                day: request.day,
                start_time: request.start_time.clone(),
            });
        }
    }

    Ok(EditApproval {
        instructor_name: instructor.name.clone(),
        room_type: room.room_type.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Course, Instructor, Role, Room, SectionKind, Timeslot};

    fn catalog() -> ReferenceCatalog {
        ReferenceCatalog::new(
            vec![
                Course::new("CSC111", "Intro to Computer Science").with_type("Lecture and Lab"),
                Course::new("CSC211", "Data Structures").with_type("Lecture and Lab"),
                Course::new("AID311", "Machine Learning").with_type("Lecture and Lab"),
            ],
            vec![
                Instructor::new("PROF01", "Dr. Reda Elbasiony", Role::Professor)
                    .with_qualification("CSC111")
                    .with_qualification("CSC211"),
                Instructor::new("PROF07", "Dr. Ahmed Arafa", Role::Doctor)
                    .with_qualification("CSC211")
                    .with_qualification("AID311")
                    .with_unavailable_day(Day::Wednesday),
                Instructor::new("TA01", "Eng. Sara Adel", Role::TeachingAssistant)
                    .with_qualification("AID311"),
            ],
            vec![
                Room::new("L2", "Lab", 30),
                Room::new("L3", "Lab", 30),
                Room::new("L4", "Lab", 30),
            ],
            vec![Timeslot::new(Day::Sunday, "9:00 AM", "10:30 AM")],
        )
    }

    fn entry(
        course_id: &str,
        kind: SectionKind,
        day: Day,
        start: &str,
        room: &str,
        instructor: &str,
    ) -> ScheduleEntry {
        ScheduleEntry {
            course_id: course_id.into(),
            course_name: format!("{course_id} name"),
            course_type: "Lecture and Lab".into(),
            section_kind: kind,
            day,
            start_time: start.into(),
            end_time: "10:30 AM".into(),
            room_id: room.into(),
            room_type: "Lab".into(),
            instructor_id: instructor.into(),
            instructor_name: format!("{instructor} name"),
        }
    }

    fn request(day: Day, start: &str, room: &str, instructor: &str) -> EditRequest {
        EditRequest {
            day,
            start_time: start.into(),
            end_time: "10:30 AM".into(),
            room_id: room.into(),
            instructor_id: instructor.into(),
        }
    }

    #[test]
    fn test_accepts_move_to_free_room() {
        // CSC111 lecture, Sunday 9:00 in L2, moved to L3
        // with the same qualified professor.
        let entries = vec![entry(
            "CSC111",
            SectionKind::Lecture,
            Day::Sunday,
            "9:00 AM",
            "L2",
            "PROF01",
        )];
        let approval = validate_edit(
            &catalog(),
            &entries,
            0,
            &request(Day::Sunday, "9:00 AM", "L3", "PROF01"),
        )
        .unwrap();
        assert_eq!(approval.instructor_name, "Dr. Reda Elbasiony");
        assert_eq!(approval.room_type, "Lab");
    }

    #[test]
    fn test_unknown_room() {
        let entries = vec![entry(
            "CSC111",
            SectionKind::Lecture,
            Day::Sunday,
            "9:00 AM",
            "L2",
            "PROF01",
        )];
        let err = validate_edit(
            &catalog(),
            &entries,
            0,
            &request(Day::Sunday, "9:00 AM", "R999", "PROF01"),
        )
        .unwrap_err();
        assert_eq!(
            err,
            RejectReason::UnknownReference {
                kind: ResourceKind::Room,
                id: "R999".into()
            }
        );
    }

    #[test]
    fn test_unknown_instructor() {
        let entries = vec![entry(
            "CSC111",
            SectionKind::Lecture,
            Day::Sunday,
            "9:00 AM",
            "L2",
            "PROF01",
        )];
        let err = validate_edit(
            &catalog(),
            &entries,
            0,
            &request(Day::Sunday, "9:00 AM", "L3", "GHOST"),
        )
        .unwrap_err();
        assert_eq!(
            err,
            RejectReason::UnknownReference {
                kind: ResourceKind::Instructor,
                id: "GHOST".into()
            }
        );
    }

    #[test]
    fn test_unknown_room_reported_before_unknown_instructor() {
        // Both references are bad; the fixed check order reports the room.
        let entries = vec![entry(
            "CSC111",
            SectionKind::Lecture,
            Day::Sunday,
            "9:00 AM",
            "L2",
            "PROF01",
        )];
        let err = validate_edit(
            &catalog(),
            &entries,
            0,
            &request(Day::Sunday, "9:00 AM", "R999", "GHOST"),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            RejectReason::UnknownReference {
                kind: ResourceKind::Room,
                ..
            }
        ));
    }

    #[test]
    fn test_not_qualified() {
        // PROF01 is not qualified for AID311.
        let entries = vec![entry(
            "AID311",
            SectionKind::Lecture,
            Day::Monday,
            "10:45 AM",
            "L2",
            "PROF07",
        )];
        let err = validate_edit(
            &catalog(),
            &entries,
            0,
            &request(Day::Monday, "10:45 AM", "L2", "PROF01"),
        )
        .unwrap_err();
        assert_eq!(
            err,
            RejectReason::NotQualified {
                instructor_id: "PROF01".into(),
                course_id: "AID311".into()
            }
        );
    }

    #[test]
    fn test_lab_section_rejects_professor() {
        // Lab section of AID311 proposed a Doctor.
        let entries = vec![entry(
            "AID311",
            SectionKind::Lab,
            Day::Monday,
            "10:45 AM",
            "L2",
            "TA01",
        )];
        let err = validate_edit(
            &catalog(),
            &entries,
            0,
            &request(Day::Monday, "10:45 AM", "L2", "PROF07"),
        )
        .unwrap_err();
        assert_eq!(
            err,
            RejectReason::RoleMismatch {
                instructor_id: "PROF07".into(),
                role: "Doctor".into(),
                required: RoleRequirement::TeachingAssistant,
            }
        );
    }

    #[test]
    fn test_lecture_section_rejects_teaching_assistant() {
        let entries = vec![entry(
            "AID311",
            SectionKind::Lecture,
            Day::Monday,
            "10:45 AM",
            "L2",
            "PROF07",
        )];
        let err = validate_edit(
            &catalog(),
            &entries,
            0,
            &request(Day::Monday, "10:45 AM", "L2", "TA01"),
        )
        .unwrap_err();
        assert_eq!(
            err,
            RejectReason::RoleMismatch {
                instructor_id: "TA01".into(),
                role: "Teaching Assistant".into(),
                required: RoleRequirement::ProfessorOrDoctor,
            }
        );
    }

    #[test]
    fn test_unspecified_section_uses_course_type_inference() {
        // Unspecified section of a "Lecture and Lab" course counts as a
        // lab, so only a TA passes the role check.
        let entries = vec![entry(
            "AID311",
            SectionKind::Unspecified,
            Day::Monday,
            "10:45 AM",
            "L2",
            "TA01",
        )];
        let err = validate_edit(
            &catalog(),
            &entries,
            0,
            &request(Day::Monday, "10:45 AM", "L2", "PROF07"),
        )
        .unwrap_err();
        assert!(matches!(err, RejectReason::RoleMismatch { .. }));

        let ok = validate_edit(
            &catalog(),
            &entries,
            0,
            &request(Day::Monday, "10:45 AM", "L2", "TA01"),
        );
        assert!(ok.is_ok());
    }

    #[test]
    fn test_instructor_unavailable() {
        // PROF07 is blacked out on Wednesday.
        let entries = vec![entry(
            "CSC211",
            SectionKind::Lecture,
            Day::Sunday,
            "9:00 AM",
            "L4",
            "PROF07",
        )];
        let err = validate_edit(
            &catalog(),
            &entries,
            0,
            &request(Day::Wednesday, "9:00 AM", "L4", "PROF07"),
        )
        .unwrap_err();
        assert_eq!(
            err,
            RejectReason::InstructorUnavailable {
                instructor_id: "PROF07".into(),
                day: Day::Wednesday,
            }
        );
    }

    #[test]
    fn test_double_booking_room() {
        let entries = vec![
            entry("CSC111", SectionKind::Lecture, Day::Sunday, "9:00 AM", "L2", "PROF01"),
            entry("CSC211", SectionKind::Lecture, Day::Sunday, "9:00 AM", "L4", "PROF07"),
        ];
        let err = validate_edit(
            &catalog(),
            &entries,
            0,
            &request(Day::Sunday, "9:00 AM", "L4", "PROF01"),
        )
        .unwrap_err();
        assert_eq!(
            err,
            RejectReason::DoubleBooking {
                resource: ConflictResource::Room("L4".into()),
                day: Day::Sunday,
                start_time: "9:00 AM".into(),
            }
        );
    }

    #[test]
    fn test_double_booking_instructor() {
        // PROF01 would be moved into a slot where they
        // already teach CSC211 — instructor collision, not room.
        let entries = vec![
            entry("CSC111", SectionKind::Lecture, Day::Sunday, "9:00 AM", "L2", "PROF01"),
            entry("CSC211", SectionKind::Lecture, Day::Sunday, "9:00 AM", "L4", "PROF01"),
        ];
        let err = validate_edit(
            &catalog(),
            &entries,
            0,
            &request(Day::Sunday, "9:00 AM", "L3", "PROF01"),
        )
        .unwrap_err();
        assert_eq!(
            err,
            RejectReason::DoubleBooking {
                resource: ConflictResource::Instructor("PROF01".into()),
                day: Day::Sunday,
                start_time: "9:00 AM".into(),
            }
        );
    }

    #[test]
    fn test_target_entry_never_conflicts_with_itself() {
        // Re-submitting the current placement is a valid no-op edit.
        let entries = vec![entry(
            "CSC111",
            SectionKind::Lecture,
            Day::Sunday,
            "9:00 AM",
            "L2",
            "PROF01",
        )];
        assert!(validate_edit(
            &catalog(),
            &entries,
            0,
            &request(Day::Sunday, "9:00 AM", "L2", "PROF01"),
        )
        .is_ok());
    }

    #[test]
    fn test_different_start_time_is_no_conflict() {
        let entries = vec![
            entry("CSC111", SectionKind::Lecture, Day::Sunday, "9:00 AM", "L2", "PROF01"),
            entry("CSC211", SectionKind::Lecture, Day::Sunday, "10:45 AM", "L2", "PROF01"),
        ];
        // Same room and instructor, but at 10:45 — moving CSC111 to
        // 9:00 in L2 collides with nothing.
        assert!(validate_edit(
            &catalog(),
            &entries,
            0,
            &request(Day::Sunday, "9:00 AM", "L2", "PROF01"),
        )
        .is_ok());
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_out_of_range_target_index_panics() {
        let entries = vec![entry(
            "CSC111",
            SectionKind::Lecture,
            Day::Sunday,
            "9:00 AM",
            "L2",
            "PROF01",
        )];
        let _ = validate_edit(
            &catalog(),
            &entries,
            entries.len(),
            &request(Day::Sunday, "9:00 AM", "L2", "PROF01"),
        );
    }

    #[test]
    fn test_reason_messages_name_the_resource() {
        let reason = RejectReason::DoubleBooking {
            resource: ConflictResource::Instructor("PROF01".into()),
            day: Day::Sunday,
            start_time: "9:00 AM".into(),
        };
        assert_eq!(
            reason.to_string(),
            "instructor 'PROF01' is already booked on Sunday at 9:00 AM"
        );

        let reason = RejectReason::UnknownReference {
            kind: ResourceKind::Room,
            id: "R999".into(),
        };
        assert_eq!(reason.to_string(), "unknown room 'R999'");
    }
}
