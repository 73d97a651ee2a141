/// Interval bucketing and averaging for chart series.
///
/// Dashboards plot sensor history as fixed-interval averages rather than raw
/// points. Readings are grouped per (source, label, bucket) — labels compare
/// exactly here, unlike the extractor's substring match — and each group's
/// values are averaged. Output capacity is a const generic; readings that
/// would open a group past capacity are counted, not silently lost.
use heapless::Vec;
use serde::Serialize;

use crate::extract::Reading;

/// Default aggregation interval: 15 minutes.
pub const DEFAULT_INTERVAL_MS: i64 = 15 * 60 * 1000;

/// One averaged bucket. Wire names match what the chart components expect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IntervalAverage<'a> {
    #[serde(rename = "id")]
    pub source_id: &'a str,
    #[serde(rename = "measurement")]
    pub label: &'a str,
    /// Bucket start, epoch milliseconds, floored to the interval.
    #[serde(rename = "bucket")]
    pub bucket_start: i64,
    pub mean: f64,
    pub samples: u32,
}

/// Result of one aggregation pass.
#[derive(Debug)]
pub struct Aggregation<'a, const N: usize> {
    pub buckets: Vec<IntervalAverage<'a>, N>,
    /// Readings that could not open a new group because `N` was reached.
    pub dropped: u32,
}

/// Group readings into `interval_ms`-wide buckets per (source, label) and
/// average the values. Bucket starts floor toward negative infinity, so
/// pre-epoch timestamps land in the right bucket too. A non-positive
/// interval falls back to [`DEFAULT_INTERVAL_MS`].
pub fn average_by_interval<'a, const N: usize>(
    readings: &[Reading<'a>],
    interval_ms: i64,
) -> Aggregation<'a, N> {
    let interval = if interval_ms > 0 {
        interval_ms
    } else {
        log::warn!("non-positive aggregation interval {interval_ms}, using default");
        DEFAULT_INTERVAL_MS
    };

    let mut result = Aggregation {
        buckets: Vec::new(),
        dropped: 0,
    };

    for r in readings {
        let bucket_start = r.observed_at - r.observed_at.rem_euclid(interval);
        let existing = result.buckets.iter().position(|b| {
            b.bucket_start == bucket_start && b.source_id == r.source_id && b.label == r.label
        });
        match existing {
            Some(i) => {
                let b = &mut result.buckets[i];
                b.mean += r.value;
                b.samples += 1;
            }
            None => {
                let opened = result.buckets.push(IntervalAverage {
                    source_id: r.source_id,
                    label: r.label,
                    bucket_start,
                    mean: r.value,
                    samples: 1,
                });
                if opened.is_err() {
                    result.dropped += 1;
                }
            }
        }
    }

    // `mean` accumulated sums until now.
    for b in result.buckets.iter_mut() {
        b.mean /= b.samples as f64;
    }

    if result.dropped > 0 {
        log::debug!(
            "interval aggregation dropped {} readings past capacity {}",
            result.dropped,
            N
        );
    }

    result
}
