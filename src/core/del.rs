use crate::db::store::RecordStore;
use crate::errors::AppResult;
use crate::models::record::TrackingRecord;
use crate::ui::messages::info;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete one record by id outside of a tracking session.
    /// Returns the row as it was before deletion.
    pub fn apply<S: RecordStore>(store: &mut S, id: i64) -> AppResult<TrackingRecord> {
        let record = store.get(id)?;
        store.delete(id)?;

        info(format!(
            "Deleted record #{} ({}, {})",
            record.id,
            record.activity_name,
            record.total_readable()
        ));
        Ok(record)
    }
}
