//! Day-offset index of per-date cookie frequencies
//!
//! Buckets are stored newest first, so the bucket for date `d` lives at
//! `newest_date - d` days. Lookup is a subtraction and a vector index rather
//! than a date-keyed map.
//!
//! The log must already be sorted by date, newest first. The index never
//! reorders rows; an out-of-order row only produces a warning.

use crate::types::{CookieError, LogRow, Result};
use chrono::NaiveDate;
use indexmap::IndexMap;
use tracing::{debug, warn};

/// Cookie occurrence counts for a single calendar date.
/// Iteration follows first occurrence in the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyBucket {
    pub date: NaiveDate,
    pub counts: IndexMap<String, u32>,
}

impl DailyBucket {
    fn new(date: NaiveDate) -> Self {
        Self {
            date,
            counts: IndexMap::new(),
        }
    }

    fn record(&mut self, cookie: &str) {
        match self.counts.get_mut(cookie) {
            Some(count) => *count = count.saturating_add(1),
            None => {
                self.counts.insert(cookie.to_string(), 1);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total sightings on this date
    pub fn total(&self) -> u64 {
        self.counts.values().map(|&c| c as u64).sum()
    }
}

#[derive(Debug, Clone)]
pub struct DailyCookieIndex {
    buckets: Vec<DailyBucket>,
    newest_date: NaiveDate,
}

impl DailyCookieIndex {
    /// Group rows into one bucket per distinct date, in row order.
    pub fn build<I>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = LogRow>,
    {
        let mut buckets: Vec<DailyBucket> = Vec::new();
        let mut open: Option<DailyBucket> = None;
        let mut out_of_order = 0usize;

        for row in rows {
            let date = row.date();

            let bucket = match open.take() {
                Some(bucket) if bucket.date == date => bucket,
                Some(bucket) => {
                    if date > bucket.date {
                        out_of_order += 1;
                    }
                    if !bucket.is_empty() {
                        buckets.push(bucket);
                    }
                    DailyBucket::new(date)
                }
                None => DailyBucket::new(date),
            };

            open.insert(bucket).record(&row.cookie);
        }

        let Some(last) = open else {
            return Err(CookieError::EmptyLog);
        };
        buckets.push(last);

        if out_of_order > 0 {
            warn!(
                rows = out_of_order,
                "cookie log is not sorted newest first; lookups may miss dates"
            );
        }

        let newest_date = buckets[0].date;
        debug!(days = buckets.len(), newest = %newest_date, "built daily cookie index");

        Ok(Self {
            buckets,
            newest_date,
        })
    }

    /// Cookie counts for `date`.
    ///
    /// Fails with `OutOfRange` when the date is newer than the newest logged
    /// date, older than the oldest, or lands on a gap in the log.
    pub fn activity_on(&self, date: NaiveDate) -> Result<&DailyBucket> {
        let offset = (self.newest_date - date).num_days();
        debug!(%date, offset, "daily index lookup");

        usize::try_from(offset)
            .ok()
            .and_then(|idx| self.buckets.get(idx))
            .filter(|bucket| bucket.date == date)
            .ok_or_else(|| CookieError::OutOfRange(date.to_string()))
    }

    pub fn newest_date(&self) -> NaiveDate {
        self.newest_date
    }

    pub fn oldest_date(&self) -> NaiveDate {
        self.buckets
            .last()
            .map(|bucket| bucket.date)
            .unwrap_or(self.newest_date)
    }

    /// Number of distinct dates
    pub fn day_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn buckets(&self) -> &[DailyBucket] {
        &self.buckets
    }
}
