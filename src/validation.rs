//! Whole-schedule audit.
//!
//! Checks the structural integrity of a seeded or edited schedule
//! against the reference catalog. Detects:
//! - Duplicate entry identity keys
//! - Dangling course/room/instructor references
//! - Room and instructor double bookings
//! - Lab occurrences outside lab rooms (and lectures outside lecture rooms)
//! - Unqualified or wrong-role assignments
//! - Blackout-day assignments
//! - Start times outside the canonical slot table
//!
//! Unlike the per-edit conflict validator this is a report, not a
//! gate: all findings are collected, nothing short-circuits, and the
//! schedule is left exactly as it was.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::catalog::ReferenceCatalog;
use crate::models::{start_rank, EntryKey, ScheduleEntry, UNRANKED};

/// Audit result.
pub type AuditResult = Result<(), Vec<AuditError>>;

/// A single audit finding.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditError {
    /// Finding category.
    pub kind: AuditErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of audit findings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditErrorKind {
    /// Two entries share the same identity key.
    DuplicateKey,
    /// An entry references a course, room, or instructor that doesn't exist.
    DanglingReference,
    /// Two entries share a day, start time, and room.
    RoomClash,
    /// Two entries share a day, start time, and instructor.
    InstructorClash,
    /// The room's type does not fit the section kind.
    RoomTypeMismatch,
    /// The assigned instructor is not qualified for the course.
    Unqualified,
    /// The assigned instructor's role doesn't fit the section kind.
    WrongRole,
    /// The entry falls on the instructor's blackout day.
    BlackoutDay,
    /// The entry's start time has no canonical slot rank.
    UnknownSlot,
}

impl AuditError {
    fn new(kind: AuditErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for AuditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Audits a schedule against the catalog.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn audit_schedule(entries: &[ScheduleEntry], catalog: &ReferenceCatalog) -> AuditResult {
    let mut errors = Vec::new();

    // Identity keys must be unique.
    let mut seen_keys: HashSet<EntryKey> = HashSet::new();
    for entry in entries {
        let key = entry.key();
        if !seen_keys.insert(key.clone()) {
            errors.push(AuditError::new(
                AuditErrorKind::DuplicateKey,
                format!("Duplicate entry key: {key}"),
            ));
        }
    }

    // Resource occupancy per (day, start_time).
    let mut room_slots: HashMap<(String, String), &ScheduleEntry> = HashMap::new();
    let mut instructor_slots: HashMap<(String, String), &ScheduleEntry> = HashMap::new();

    for entry in entries {
        let slot = format!("{} {}", entry.day, entry.start_time);

        if let Some(prev) = room_slots.insert((slot.clone(), entry.room_id.clone()), entry) {
            errors.push(AuditError::new(
                AuditErrorKind::RoomClash,
                format!(
                    "Room '{}' double-booked on {slot}: {} and {}",
                    entry.room_id, prev.course_id, entry.course_id
                ),
            ));
        }
        if let Some(prev) =
            instructor_slots.insert((slot.clone(), entry.instructor_id.clone()), entry)
        {
            errors.push(AuditError::new(
                AuditErrorKind::InstructorClash,
                format!(
                    "Instructor '{}' double-booked on {slot}: {} and {}",
                    entry.instructor_id, prev.course_id, entry.course_id
                ),
            ));
        }
    }

    // Reference integrity and per-entry rules.
    for entry in entries {
        if catalog.course(&entry.course_id).is_none() {
            errors.push(AuditError::new(
                AuditErrorKind::DanglingReference,
                format!("Entry {} references unknown course", entry.key()),
            ));
        }
        match catalog.room(&entry.room_id) {
            None => {
                errors.push(AuditError::new(
                    AuditErrorKind::DanglingReference,
                    format!(
                        "Entry {} references unknown room '{}'",
                        entry.key(),
                        entry.room_id
                    ),
                ));
            }
            Some(room) => {
                // Lab occurrences belong in lab rooms, lectures in
                // lecture rooms.
                let expected = if entry.is_lab() { "Lab" } else { "Lecture" };
                if room.room_type != expected {
                    errors.push(AuditError::new(
                        AuditErrorKind::RoomTypeMismatch,
                        format!(
                            "Entry {} expects a {expected} room, but '{}' is of type '{}'",
                            entry.key(),
                            room.room_id,
                            room.room_type
                        ),
                    ));
                }
            }
        }

        let Some(instructor) = catalog.instructor(&entry.instructor_id) else {
            errors.push(AuditError::new(
                AuditErrorKind::DanglingReference,
                format!(
                    "Entry {} references unknown instructor '{}'",
                    entry.key(),
                    entry.instructor_id
                ),
            ));
            continue;
        };

        if !instructor.is_qualified_for(&entry.course_id) {
            errors.push(AuditError::new(
                AuditErrorKind::Unqualified,
                format!(
                    "Instructor '{}' is not qualified for {}",
                    instructor.instructor_id, entry.course_id
                ),
            ));
        }

        let role_ok = if entry.is_lab() {
            instructor.role.can_teach_lab()
        } else {
            instructor.role.can_teach_lecture()
        };
        if !role_ok {
            errors.push(AuditError::new(
                AuditErrorKind::WrongRole,
                format!(
                    "Instructor '{}' ({}) cannot take {} section of {}",
                    instructor.instructor_id,
                    instructor.role,
                    if entry.is_lab() { "lab" } else { "lecture" },
                    entry.course_id
                ),
            ));
        }

        if !instructor.is_available_on(entry.day) {
            errors.push(AuditError::new(
                AuditErrorKind::BlackoutDay,
                format!(
                    "Instructor '{}' is scheduled on blackout day {}",
                    instructor.instructor_id, entry.day
                ),
            ));
        }
    }

    // Slot sanity.
    for entry in entries {
        if start_rank(&entry.start_time) == UNRANKED {
            errors.push(AuditError::new(
                AuditErrorKind::UnknownSlot,
                format!(
                    "Entry {} starts at '{}', outside the canonical slot table",
                    entry.key(),
                    entry.start_time
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
