//! Day/time grouping projection.
//!
//! Transforms the flat entry collection into the nested day →
//! timeslot → entries structure the presentation layer renders. Days
//! come out in calendar order; slot groups within a day follow the
//! canonical rank table, with unranked start times sorted last. Both
//! orderings are independent of the input order of the entries, apart
//! from the stable tie-break among equal ranks.

use crate::models::{start_rank, Day, ScheduleEntry};

/// The grouped view of a schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimetableView<'a> {
    /// Days with at least one entry, in calendar order.
    pub days: Vec<DayView<'a>>,
}

/// All entries of one day, grouped by timeslot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayView<'a> {
    /// The teaching day.
    pub day: Day,
    /// Slot groups in canonical time order.
    pub slots: Vec<SlotGroup<'a>>,
}

/// The entries sharing one timeslot on one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotGroup<'a> {
    /// Display label, `"start - end"`.
    pub label: String,
    /// Slot start time (the ordering key).
    pub start_time: String,
    /// Entries in input order.
    pub entries: Vec<&'a ScheduleEntry>,
}

impl<'a> TimetableView<'a> {
    /// Flattens the view back to a single sequence in day/time order.
    pub fn flatten(&self) -> Vec<&'a ScheduleEntry> {
        self.days
            .iter()
            .flat_map(|d| d.slots.iter())
            .flat_map(|s| s.entries.iter().copied())
            .collect()
    }

    /// Total number of entries across all days.
    pub fn entry_count(&self) -> usize {
        self.days
            .iter()
            .flat_map(|d| d.slots.iter())
            .map(|s| s.entries.len())
            .sum()
    }
}

impl<'a> DayView<'a> {
    /// Number of classes on this day.
    pub fn class_count(&self) -> usize {
        self.slots.iter().map(|s| s.entries.len()).sum()
    }
}

/// Projects the flat entry collection into the grouped day/time view.
///
/// Days without entries are omitted. Within a day, entries sharing a
/// slot label are grouped in encounter order, and groups are sorted by
/// the canonical start-time rank (stable, so unranked labels keep
/// their relative order at the end).
pub fn project(entries: &[ScheduleEntry]) -> TimetableView<'_> {
    let mut days = Vec::new();

    for day in Day::ALL {
        let mut slots: Vec<SlotGroup<'_>> = Vec::new();
        for entry in entries.iter().filter(|e| e.day == day) {
            let label = entry.slot_label();
            match slots.iter_mut().find(|s| s.label == label) {
                Some(group) => group.entries.push(entry),
                None => slots.push(SlotGroup {
                    label,
                    start_time: entry.start_time.clone(),
                    entries: vec![entry],
                }),
            }
        }
        if slots.is_empty() {
            continue;
        }
        slots.sort_by_key(|s| start_rank(&s.start_time));
        days.push(DayView { day, slots });
    }

    TimetableView { days }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SectionKind;

    fn entry(course_id: &str, day: Day, start: &str, end: &str) -> ScheduleEntry {
        ScheduleEntry {
            course_id: course_id.into(),
            course_name: format!("{course_id} name"),
            course_type: "Lecture".into(),
            section_kind: SectionKind::Lecture,
            day,
            start_time: start.into(),
            end_time: end.into(),
            room_id: "R101".into(),
            room_type: "Lecture".into(),
            instructor_id: "PROF01".into(),
            instructor_name: "Dr. A".into(),
        }
    }

    #[test]
    fn test_days_in_calendar_order() {
        let entries = vec![
            entry("C1", Day::Thursday, "9:00 AM", "10:30 AM"),
            entry("C2", Day::Sunday, "9:00 AM", "10:30 AM"),
            entry("C3", Day::Tuesday, "9:00 AM", "10:30 AM"),
        ];
        let view = project(&entries);
        let days: Vec<Day> = view.days.iter().map(|d| d.day).collect();
        assert_eq!(days, vec![Day::Sunday, Day::Tuesday, Day::Thursday]);
    }

    #[test]
    fn test_slots_in_canonical_time_order() {
        // Lexically "10:45 AM" sorts before "9:00 AM"; the rank table
        // must put 9:00 first.
        let entries = vec![
            entry("C1", Day::Sunday, "2:15 PM", "3:45 PM"),
            entry("C2", Day::Sunday, "9:00 AM", "10:30 AM"),
            entry("C3", Day::Sunday, "10:45 AM", "12:15 PM"),
            entry("C4", Day::Sunday, "12:30 PM", "2:00 PM"),
        ];
        let view = project(&entries);
        let labels: Vec<&str> = view.days[0].slots.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "9:00 AM - 10:30 AM",
                "10:45 AM - 12:15 PM",
                "12:30 PM - 2:00 PM",
                "2:15 PM - 3:45 PM",
            ]
        );
    }

    #[test]
    fn test_unknown_start_time_sorts_last() {
        let entries = vec![
            entry("C1", Day::Sunday, "8:00 AM", "9:00 AM"), // not in the table
            entry("C2", Day::Sunday, "2:15 PM", "3:45 PM"),
        ];
        let view = project(&entries);
        let labels: Vec<&str> = view.days[0].slots.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["2:15 PM - 3:45 PM", "8:00 AM - 9:00 AM"]);
    }

    #[test]
    fn test_deterministic_order_from_shuffled_input() {
        let ordered = vec![
            entry("C1", Day::Sunday, "9:00 AM", "10:30 AM"),
            entry("C2", Day::Sunday, "10:45 AM", "12:15 PM"),
            entry("C3", Day::Monday, "9:00 AM", "10:30 AM"),
            entry("C4", Day::Monday, "12:30 PM", "2:00 PM"),
            entry("C5", Day::Thursday, "2:15 PM", "3:45 PM"),
        ];
        let shuffled = vec![
            ordered[4].clone(),
            ordered[1].clone(),
            ordered[3].clone(),
            ordered[0].clone(),
            ordered[2].clone(),
        ];

        let ids_from = |entries: &[ScheduleEntry]| -> Vec<String> {
            project(entries)
                .flatten()
                .iter()
                .map(|e| e.course_id.clone())
                .collect()
        };
        assert_eq!(ids_from(&ordered), ids_from(&shuffled));
        assert_eq!(ids_from(&ordered), vec!["C1", "C2", "C3", "C4", "C5"]);
    }

    #[test]
    fn test_group_preserves_input_order_within_slot() {
        // Stability: entries in the same slot keep their input order.
        let entries = vec![
            entry("C1", Day::Sunday, "9:00 AM", "10:30 AM"),
            entry("C2", Day::Sunday, "9:00 AM", "10:30 AM"),
            entry("C3", Day::Sunday, "9:00 AM", "10:30 AM"),
        ];
        let view = project(&entries);
        let ids: Vec<&str> = view.days[0].slots[0]
            .entries
            .iter()
            .map(|e| e.course_id.as_str())
            .collect();
        assert_eq!(ids, vec!["C1", "C2", "C3"]);
    }

    #[test]
    fn test_empty_projection() {
        let view = project(&[]);
        assert!(view.days.is_empty());
        assert_eq!(view.entry_count(), 0);
        assert!(view.flatten().is_empty());
    }

    #[test]
    fn test_class_count() {
        let entries = vec![
            entry("C1", Day::Sunday, "9:00 AM", "10:30 AM"),
            entry("C2", Day::Sunday, "10:45 AM", "12:15 PM"),
        ];
        let view = project(&entries);
        assert_eq!(view.days[0].class_count(), 2);
        assert_eq!(view.entry_count(), 2);
    }
}
