//! Session controller: a single tracking session on top of a record store.
//!
//! The controller is passive. Every user action is one method call that
//! runs to completion and returns a [`Notice`] for the front-end to render;
//! the periodic display refresh reads [`SessionController::displayed_seconds`].

use crate::db::store::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::utils::time::{Clock, elapsed_secs, format_duration};

/// In-memory state of the current session. Never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub activity_name: String,
    pub tracking: bool,
    pub start_time: Option<f64>,
    pub accumulated_seconds: i64,
    pub selected_record_id: Option<i64>,
}

/// Outcome of a transition, rendered by the front-end.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Started {
        name: String,
        resumed: bool,
    },
    Stopped {
        record_id: i64,
        name: String,
        total_seconds: i64,
        created: bool,
    },
    Deleted {
        record_id: i64,
        name: String,
    },
    Reset,
    AlreadyTracking,
    NotTracking,
    NothingSelected,
}

impl Notice {
    /// Informational no-ops, as opposed to completed transitions.
    pub fn is_noop(&self) -> bool {
        matches!(
            self,
            Notice::AlreadyTracking | Notice::NotTracking | Notice::NothingSelected
        )
    }
}

pub struct SessionController<S: RecordStore, C: Clock> {
    store: S,
    clock: C,
    state: SessionState,
    refresh_end_time: bool,
}

impl<S: RecordStore, C: Clock> SessionController<S, C> {
    pub fn new(store: S, clock: C) -> Self {
        Self {
            store,
            clock,
            state: SessionState::default(),
            refresh_end_time: true,
        }
    }

    /// Whether resuming a record also moves its `end_time` on stop.
    pub fn with_end_time_refresh(mut self, enabled: bool) -> Self {
        self.refresh_end_time = enabled;
        self
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn is_tracking(&self) -> bool {
        self.state.tracking
    }

    /// Start tracking.
    ///
    /// With a selected record the inherited name is used and `entered_name`
    /// is ignored; otherwise the trimmed `entered_name` must be non-empty.
    pub fn start(&mut self, entered_name: &str) -> AppResult<Notice> {
        if self.state.tracking {
            return Ok(Notice::AlreadyTracking);
        }

        let name = match self.state.selected_record_id {
            Some(_) => self.state.activity_name.trim().to_string(),
            None => entered_name.trim().to_string(),
        };
        if name.is_empty() {
            return Err(AppError::Validation("empty name".into()));
        }

        let accumulated = match self.state.selected_record_id {
            Some(id) => match self.store.get(id) {
                Ok(record) => record.total_time,
                Err(e @ AppError::NotFound(_)) => {
                    self.reset();
                    return Err(e);
                }
                Err(e) => return Err(e),
            },
            None => 0,
        };

        self.state.activity_name = name.clone();
        self.state.accumulated_seconds = accumulated;
        self.state.start_time = Some(self.clock.now());
        self.state.tracking = true;

        Ok(Notice::Started {
            name,
            resumed: self.state.selected_record_id.is_some(),
        })
    }

    /// Stop tracking and persist the session as an update or an insert.
    ///
    /// State only changes once the store accepted the write, so a storage
    /// failure leaves the session running and the stop can be retried.
    pub fn stop(&mut self) -> AppResult<Notice> {
        let start = match (self.state.tracking, self.state.start_time) {
            (true, Some(start)) => start,
            _ => return Ok(Notice::NotTracking),
        };

        let now = self.clock.now();
        let total = self.state.accumulated_seconds + elapsed_secs(start, now);

        let (record_id, created) = match self.state.selected_record_id {
            Some(id) => {
                let persisted = if self.refresh_end_time {
                    self.store.update_total_and_end_time(id, total, now)
                } else {
                    self.store.update_total_time(id, total)
                };
                if let Err(e) = persisted {
                    if matches!(e, AppError::NotFound(_)) {
                        self.reset();
                    }
                    return Err(e);
                }
                (id, false)
            }
            None => {
                let id = self
                    .store
                    .create(&self.state.activity_name, start, now, total)?;
                (id, true)
            }
        };

        self.state.accumulated_seconds = total;
        self.state.tracking = false;

        Ok(Notice::Stopped {
            record_id,
            name: self.state.activity_name.clone(),
            total_seconds: total,
            created,
        })
    }

    /// Start if idle, stop if running.
    pub fn toggle(&mut self, entered_name: &str) -> AppResult<Notice> {
        if self.state.tracking {
            self.stop()
        } else {
            self.start(entered_name)
        }
    }

    /// Resume tracking on an existing record.
    ///
    /// Any running session is discarded without being persisted, also when
    /// the record turns out to be gone.
    pub fn select(&mut self, record_id: i64) -> AppResult<Notice> {
        let record = match self.store.get(record_id) {
            Ok(record) => record,
            Err(e @ AppError::NotFound(_)) => {
                self.reset();
                return Err(e);
            }
            Err(e) => return Err(e),
        };

        self.reset();
        self.state.selected_record_id = Some(record.id);
        self.state.activity_name = record.activity_name;
        self.state.accumulated_seconds = record.total_time;

        self.start("")
    }

    pub fn can_delete(&self) -> bool {
        self.state.selected_record_id.is_some()
    }

    /// Name of the selected record, for the confirmation prompt.
    pub fn selected_name(&self) -> Option<&str> {
        self.state
            .selected_record_id
            .map(|_| self.state.activity_name.as_str())
    }

    /// Delete the selected record. The caller has already asked the user.
    pub fn confirm_delete(&mut self) -> AppResult<Notice> {
        let Some(id) = self.state.selected_record_id else {
            return Ok(Notice::NothingSelected);
        };
        let name = self.state.activity_name.clone();

        self.store.delete(id)?;
        self.reset();

        Ok(Notice::Deleted {
            record_id: id,
            name,
        })
    }

    pub fn reset(&mut self) -> Notice {
        self.state = SessionState::default();
        Notice::Reset
    }

    pub fn displayed_seconds(&self) -> i64 {
        match (self.state.tracking, self.state.start_time) {
            (true, Some(start)) => {
                self.state.accumulated_seconds + elapsed_secs(start, self.clock.now())
            }
            _ => self.state.accumulated_seconds,
        }
    }

    pub fn displayed(&self) -> String {
        format_duration(self.displayed_seconds())
    }
}
