use crate::utils::time::{format_duration, format_timestamp};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackingRecord {
    pub id: i64,               // ⇔ time_tracking.id (INTEGER PK AUTOINCREMENT)
    pub activity_name: String, // ⇔ time_tracking.activity_name (TEXT)
    pub start_time: f64,       // ⇔ time_tracking.start_time (REAL, epoch seconds)
    pub end_time: f64,         // ⇔ time_tracking.end_time (REAL, epoch seconds)
    pub total_time: i64,       // ⇔ time_tracking.total_time (REAL, whole seconds)
}

impl TrackingRecord {
    pub fn total_readable(&self) -> String {
        format_duration(self.total_time)
    }

    pub fn start_str(&self, fmt: &str) -> String {
        format_timestamp(self.start_time, fmt)
    }

    pub fn end_str(&self, fmt: &str) -> String {
        format_timestamp(self.end_time, fmt)
    }
}

/// Snapshot of the records shown to the user, newest first.
///
/// Selection goes through list positions of this snapshot, never through
/// the rendered text.
#[derive(Debug, Clone, Default)]
pub struct RecordList {
    records: Vec<TrackingRecord>,
}

impl RecordList {
    pub fn new(records: Vec<TrackingRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrackingRecord> {
        self.records.iter()
    }

    /// Map a 1-based list position to the record id shown there.
    pub fn record_id_at(&self, position: usize) -> Option<i64> {
        position
            .checked_sub(1)
            .and_then(|idx| self.records.get(idx))
            .map(|r| r.id)
    }

    /// One human-readable line per record, in list order.
    pub fn lines(&self, time_fmt: &str) -> Vec<String> {
        self.records
            .iter()
            .enumerate()
            .map(|(i, r)| {
                format!(
                    "{:>3}. #{} {} - Start: {} - End: {} - Total Time: {}",
                    i + 1,
                    r.id,
                    r.activity_name,
                    r.start_str(time_fmt),
                    r.end_str(time_fmt),
                    r.total_readable()
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(id: i64, name: &str, total: i64) -> TrackingRecord {
        TrackingRecord {
            id,
            activity_name: name.to_string(),
            start_time: 0.0,
            end_time: 60.0,
            total_time: total,
        }
    }

    #[test]
    fn positions_map_to_ids_not_text() {
        let list = RecordList::new(vec![rec(9, "Chess 3 4", 5), rec(4, "Go", 10)]);

        assert_eq!(list.record_id_at(1), Some(9));
        assert_eq!(list.record_id_at(2), Some(4));
        assert_eq!(list.record_id_at(0), None);
        assert_eq!(list.record_id_at(3), None);
    }

    #[test]
    fn lines_contain_id_name_and_total() {
        let list = RecordList::new(vec![rec(2, "Chess", 3661)]);
        let lines = list.lines("%Y");

        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("#2"));
        assert!(lines[0].contains("Chess"));
        assert!(lines[0].contains("1 hours, 1 minutes, 1 seconds"));
    }
}
