//! Interactive timetable editing engine.
//!
//! Holds a generated class schedule in memory and supports validated
//! manual edits on top of it: every proposed change is checked against
//! the reference data (rooms, instructors, qualifications, blackout
//! days) and against the rest of the schedule for double bookings
//! before it lands. Presentation concerns — the day/time grouping, the
//! filter predicates, the statistics counters — are computed here too,
//! so callers render state instead of deriving it.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Day`, `Timeslot`, `Course`, `Room`,
//!   `Instructor`, `ScheduleEntry`, `EntryKey`
//! - **`catalog`**: Per-session reference data with id lookups
//! - **`conflict`**: The ordered per-edit validator and its reject reasons
//! - **`store`**: The working schedule and atomic edit application
//! - **`projection`**: Day → timeslot grouping in canonical order
//! - **`filter`**: Day / section / free-text filtering
//! - **`stats`**: Distribution, utilization, and workload counters
//! - **`validation`**: Whole-schedule audit against the catalog
//! - **`service`**: Wire shapes and the external service trait
//! - **`session`**: The context object tying it all together
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use u_timetable::conflict::EditRequest;
//! use u_timetable::models::{Day, EntryKey, SectionKind};
//! use u_timetable::session::TimetableSession;
//! # fn run(service: &dyn u_timetable::service::TimetableService) -> Result<(), Box<dyn std::error::Error>> {
//! let mut session = TimetableSession::new();
//! session.load(service)?;
//! session.generate(service, Duration::from_secs(30))?;
//!
//! let key = EntryKey::new("CSC111", SectionKind::Lecture, Day::Sunday, "9:00 AM");
//! session.edit(&key, &EditRequest {
//!     day: Day::Monday,
//!     start_time: "10:45 AM".into(),
//!     end_time: "12:15 PM".into(),
//!     room_id: "L3".into(),
//!     instructor_id: "PROF01".into(),
//! })?;
//!
//! for day in &session.timetable().days {
//!     println!("{}: {} classes", day.day, day.class_count());
//! }
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod conflict;
pub mod filter;
pub mod models;
pub mod projection;
pub mod service;
pub mod session;
pub mod stats;
pub mod store;
pub mod validation;
