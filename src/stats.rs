//! Schedule statistics.
//!
//! Aggregates the counts the statistics panel renders: classes per
//! day, sessions per room, and sessions per instructor. Computed
//! locally from the current entries, so the numbers stay current
//! after edits; the generator also ships a snapshot of the same shape
//! with its result.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::{Day, ScheduleEntry};

/// Aggregate counts over a schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleStatistics {
    /// Classes per teaching day.
    #[serde(default)]
    pub day_distribution: HashMap<Day, usize>,
    /// Sessions per room id.
    #[serde(default)]
    pub room_utilization: HashMap<String, usize>,
    /// Sessions per instructor display name.
    #[serde(default)]
    pub instructor_workload: HashMap<String, usize>,
}

impl ScheduleStatistics {
    /// Computes statistics from the current entries.
    pub fn calculate(entries: &[ScheduleEntry]) -> Self {
        let mut day_distribution = HashMap::new();
        let mut room_utilization = HashMap::new();
        let mut instructor_workload = HashMap::new();

        for entry in entries {
            *day_distribution.entry(entry.day).or_insert(0) += 1;
            *room_utilization.entry(entry.room_id.clone()).or_insert(0) += 1;
            *instructor_workload
                .entry(entry.instructor_name.clone())
                .or_insert(0) += 1;
        }

        Self {
            day_distribution,
            room_utilization,
            instructor_workload,
        }
    }

    /// Total classes counted.
    pub fn total_classes(&self) -> usize {
        self.day_distribution.values().sum()
    }

    /// The day carrying the most classes, if any.
    pub fn busiest_day(&self) -> Option<Day> {
        self.day_distribution
            .iter()
            .max_by_key(|(day, count)| (**count, std::cmp::Reverse(**day)))
            .map(|(day, _)| *day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SectionKind;

    fn entry(course_id: &str, day: Day, room: &str, instructor_name: &str) -> ScheduleEntry {
        ScheduleEntry {
            course_id: course_id.into(),
            course_name: format!("{course_id} name"),
            course_type: "Lecture".into(),
            section_kind: SectionKind::Lecture,
            day,
            start_time: "9:00 AM".into(),
            end_time: "10:30 AM".into(),
            room_id: room.into(),
            room_type: "Lecture".into(),
            instructor_id: "X".into(),
            instructor_name: instructor_name.into(),
        }
    }

    #[test]
    fn test_counts() {
        let entries = vec![
            entry("C1", Day::Sunday, "R101", "Dr. A"),
            entry("C2", Day::Sunday, "R101", "Dr. B"),
            entry("C3", Day::Monday, "R102", "Dr. A"),
        ];
        let stats = ScheduleStatistics::calculate(&entries);

        assert_eq!(stats.day_distribution[&Day::Sunday], 2);
        assert_eq!(stats.day_distribution[&Day::Monday], 1);
        assert_eq!(stats.room_utilization["R101"], 2);
        assert_eq!(stats.room_utilization["R102"], 1);
        assert_eq!(stats.instructor_workload["Dr. A"], 2);
        assert_eq!(stats.instructor_workload["Dr. B"], 1);
        assert_eq!(stats.total_classes(), 3);
        assert_eq!(stats.busiest_day(), Some(Day::Sunday));
    }

    #[test]
    fn test_busiest_day_tie_prefers_earlier_day() {
        let entries = vec![
            entry("C1", Day::Sunday, "R101", "Dr. A"),
            entry("C2", Day::Monday, "R102", "Dr. B"),
        ];
        let stats = ScheduleStatistics::calculate(&entries);
        assert_eq!(stats.busiest_day(), Some(Day::Sunday));
    }

    #[test]
    fn test_empty() {
        let stats = ScheduleStatistics::calculate(&[]);
        assert_eq!(stats.total_classes(), 0);
        assert_eq!(stats.busiest_day(), None);
    }

    #[test]
    fn test_serde_roundtrip() {
        let entries = vec![entry("C1", Day::Sunday, "R101", "Dr. A")];
        let stats = ScheduleStatistics::calculate(&entries);
        let json = serde_json::to_string(&stats).unwrap();
        let back: ScheduleStatistics = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stats);
    }
}
