//! Editing session.
//!
//! Ties the pieces together behind one explicit context object: the
//! reference catalog and the schedule store live here, and every
//! operation — loading, generation, editing, projecting, filtering,
//! auditing — goes through it. There is no global state; independent
//! sessions never interact. A session serves a single caller at a
//! time.

use std::time::Duration;
use tracing::{info, warn};

use crate::catalog::ReferenceCatalog;
use crate::conflict::EditRequest;
use crate::filter::{filter_entries, ScheduleFilter};
use crate::models::{EntryKey, ScheduleEntry};
use crate::projection::{project, TimetableView};
use crate::service::{GenerationResult, ServiceError, TimetableService};
use crate::stats::ScheduleStatistics;
use crate::store::{EditError, ScheduleStore};
use crate::validation::{audit_schedule, AuditResult};

/// One interactive timetable session.
#[derive(Debug, Clone, Default)]
pub struct TimetableSession {
    catalog: ReferenceCatalog,
    store: ScheduleStore,
}

impl TimetableSession {
    /// Creates a session with no reference data and no schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session over pre-built state, for embedding and tests.
    pub fn with_state(catalog: ReferenceCatalog, store: ScheduleStore) -> Self {
        Self { catalog, store }
    }

    /// The current reference catalog.
    pub fn catalog(&self) -> &ReferenceCatalog {
        &self.catalog
    }

    /// The current schedule entries, in seed order.
    pub fn entries(&self) -> &[ScheduleEntry] {
        self.store.all()
    }

    /// Loads all four reference collections from the service.
    ///
    /// All-or-nothing: if any fetch fails, the session keeps its
    /// previous catalog and the error is returned.
    pub fn load(&mut self, service: &dyn TimetableService) -> Result<(), ServiceError> {
        let courses = service.fetch_courses()?;
        let instructors = service.fetch_instructors()?;
        let rooms = service.fetch_rooms()?;
        let timeslots = service.fetch_timeslots()?;

        self.catalog = ReferenceCatalog::new(courses, instructors, rooms, timeslots);
        info!(
            courses = self.catalog.course_count(),
            instructors = self.catalog.instructor_count(),
            rooms = self.catalog.room_count(),
            timeslots = self.catalog.timeslots().len(),
            "reference catalog loaded"
        );
        Ok(())
    }

    /// Reloads the catalog after external entity changes.
    ///
    /// The schedule entries are kept as-is; run [`Self::audit`] to see
    /// what the new catalog makes of them.
    pub fn refresh_catalog(&mut self, service: &dyn TimetableService) -> Result<(), ServiceError> {
        self.load(service)
    }

    /// Runs the generator and seeds the store from its result.
    ///
    /// On failure the previous schedule is kept. Returns the full
    /// generation result, including the generator's own counters and
    /// statistics snapshot.
    pub fn generate(
        &mut self,
        service: &dyn TimetableService,
        timeout: Duration,
    ) -> Result<GenerationResult, ServiceError> {
        let result = service.generate(timeout)?;
        self.store = ScheduleStore::from_entries(result.schedule.clone());
        info!(
            scheduled = result.scheduled_courses,
            total = result.total_courses,
            entries = self.store.len(),
            "schedule generated"
        );
        Ok(result)
    }

    /// Applies an edit to the entry with the given identity key.
    ///
    /// Validates first; a rejection leaves the schedule untouched and
    /// carries the reason, so the caller can surface it and retry.
    pub fn edit(&mut self, key: &EntryKey, request: &EditRequest) -> Result<(), EditError> {
        match self.store.apply(&self.catalog, key, request) {
            Ok(()) => {
                info!(%key, day = %request.day, start = %request.start_time, "edit applied");
                Ok(())
            }
            Err(err) => {
                warn!(%key, reason = %err, "edit rejected");
                Err(err)
            }
        }
    }

    /// The grouped day/time view of the full schedule.
    pub fn timetable(&self) -> TimetableView<'_> {
        project(self.store.all())
    }

    /// The entries passing the given filter, in seed order.
    pub fn filtered(&self, filter: &ScheduleFilter) -> Vec<&ScheduleEntry> {
        filter_entries(self.store.all(), filter)
    }

    /// Statistics over the current entries.
    pub fn statistics(&self) -> ScheduleStatistics {
        ScheduleStatistics::calculate(self.store.all())
    }

    /// Audits the current schedule against the current catalog.
    pub fn audit(&self) -> AuditResult {
        audit_schedule(self.store.all(), &self.catalog)
    }
}
