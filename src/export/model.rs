// src/export/model.rs

use crate::models::record::TrackingRecord;
use crate::utils::time::{format_duration, to_local};
use serde::Serialize;

/// Flat, serializable view of a record used by every export format.
#[derive(Debug, Clone, Serialize)]
pub struct RecordExport {
    pub id: i64,
    pub activity_name: String,
    pub start: String,
    pub end: String,
    pub total_seconds: i64,
    pub total: String,
}

fn iso(ts: f64) -> String {
    to_local(ts)
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_else(|| format!("{:.0}", ts))
}

impl From<&TrackingRecord> for RecordExport {
    fn from(r: &TrackingRecord) -> Self {
        Self {
            id: r.id,
            activity_name: r.activity_name.clone(),
            start: iso(r.start_time),
            end: iso(r.end_time),
            total_seconds: r.total_time,
            total: format_duration(r.total_time),
        }
    }
}
