//! In-memory error log

use crate::core::types::TranslationRequest;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::Serialize;
use std::collections::VecDeque;
use tracing::error;
use uuid::Uuid;

/// Number of error records kept by default
pub const DEFAULT_ERROR_LOG_CAPACITY: usize = 50;

/// One failure with the context it happened in
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorRecord {
    pub id: Uuid,
    pub session: u64,
    pub kind: String,
    pub message: String,
    pub request: TranslationRequest,
    pub online: bool,
    pub timestamp: DateTime<Utc>,
}

/// Bounded log of the most recent failures, oldest dropped first
#[derive(Debug)]
pub struct ErrorLog {
    records: Mutex<VecDeque<ErrorRecord>>,
    capacity: usize,
}

impl ErrorLog {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            records: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    /// Emit the failure to the tracing pipeline and keep it in memory
    pub fn record(&self, record: ErrorRecord) {
        error!(
            error_id = %record.id,
            session = record.session,
            kind = %record.kind,
            text = %record.request.text,
            source_language = %record.request.source_language,
            target_language = %record.request.target_language,
            online = record.online,
            timestamp = %record.timestamp.to_rfc3339(),
            "Translation failed: {}",
            record.message
        );

        let mut records = self.records.lock();
        if records.len() == self.capacity {
            records.pop_front();
        }
        records.push_back(record);
    }

    /// Recorded failures, oldest first
    pub fn records(&self) -> Vec<ErrorRecord> {
        self.records.lock().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl Default for ErrorLog {
    fn default() -> Self {
        Self::new(DEFAULT_ERROR_LOG_CAPACITY)
    }
}
