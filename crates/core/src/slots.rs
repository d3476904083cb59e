//! Expansion of a time range into consecutive one-hour slot periods.
//!
//! A range is valid when its endpoints share the same minute-of-hour
//! offset and the start precedes the end. Note this is narrower than it
//! sounds: alignment to :00 is NOT required, and because seconds are not
//! compared the final emitted period may run past the requested end.

use chrono::{DateTime, Duration, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{TutorError, TutorResult};
use crate::models::slot::SlotRangeRequest;

/// A validated time range, expandable into one-hour periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

/// One generated availability period, `[start, start + 1h)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotPeriod {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl SlotRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> TutorResult<Self> {
        if start.minute() != end.minute() {
            return Err(TutorError::InvalidRange(
                "Start and end times must have the same minutes".to_string(),
            ));
        }

        if start >= end {
            return Err(TutorError::InvalidRange(
                "Start time must be before end time".to_string(),
            ));
        }

        Ok(Self { start, end })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Returns a fresh lazy iterator over the one-hour periods covering
    /// this range. Each call restarts from the beginning.
    pub fn periods(&self) -> SlotPeriods {
        SlotPeriods {
            cursor: self.start,
            end: self.end,
        }
    }
}

impl TryFrom<&SlotRangeRequest> for SlotRange {
    type Error = TutorError;

    fn try_from(request: &SlotRangeRequest) -> TutorResult<Self> {
        SlotRange::new(request.start_date_time, request.end_date_time)
    }
}

/// Lazy iterator emitting `[cursor, cursor + 1h)` while `cursor < end`.
/// The last period is not clipped to the range end.
#[derive(Debug, Clone)]
pub struct SlotPeriods {
    cursor: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl Iterator for SlotPeriods {
    type Item = SlotPeriod;

    fn next(&mut self) -> Option<SlotPeriod> {
        if self.cursor >= self.end {
            return None;
        }

        let start = self.cursor;
        let end = start + Duration::hours(1);
        self.cursor = end;

        Some(SlotPeriod { start, end })
    }
}

/// Expands a single requested range into its one-hour periods.
pub fn expand_range(request: &SlotRangeRequest) -> TutorResult<Vec<SlotPeriod>> {
    let range = SlotRange::try_from(request)?;
    Ok(range.periods().collect())
}

/// Expands several ranges in input order and concatenates the results.
/// The first invalid range fails the whole batch; nothing is emitted for
/// ranges after it.
pub fn expand_ranges(requests: &[SlotRangeRequest]) -> TutorResult<Vec<SlotPeriod>> {
    let mut periods = Vec::new();
    for request in requests {
        periods.extend(expand_range(request)?);
    }
    Ok(periods)
}
