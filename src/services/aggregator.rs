//! Aggregator service for picking the most active cookies of a day

use super::daily_index::DailyBucket;

/// Aggregator for computing per-day cookie statistics
pub struct Aggregator;

impl Aggregator {
    /// Highest count in the bucket (None for an empty bucket)
    pub fn max_count(bucket: &DailyBucket) -> Option<u32> {
        bucket.counts.values().copied().max()
    }

    /// Every cookie seen `max_count` times, in first-occurrence order.
    /// All tied cookies are returned.
    pub fn most_active(bucket: &DailyBucket) -> Vec<&str> {
        let Some(max) = Self::max_count(bucket) else {
            return Vec::new();
        };

        bucket
            .counts
            .iter()
            .filter(|(_, count)| **count == max)
            .map(|(cookie, _)| cookie.as_str())
            .collect()
    }
}
