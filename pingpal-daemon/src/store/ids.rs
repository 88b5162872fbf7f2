use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use pingpal_types::RecordId;

/// Hands out strictly increasing ids based on the wall clock.
///
/// An id is the current epoch millisecond, bumped past the previous id when
/// two records are created within the same millisecond or the clock steps
/// backwards.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicU64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&self) -> RecordId {
        self.next_at(Utc::now())
    }

    pub fn next_at(&self, now: DateTime<Utc>) -> RecordId {
        let candidate = u64::try_from(now.timestamp_millis()).unwrap_or_default();
        let previous = self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(candidate.max(last + 1))
            })
            .unwrap_or_else(|last| last);

        RecordId(candidate.max(previous + 1))
    }
}
