// File: crates/vitals-chart/src/series.rs
// Summary: Sample and Series model; a Series is always finite and sorted by time.
// Notes:
// - Construction is the only place samples are validated. Renderers rely on the
//   invariants below and never re-check them.

use std::cmp::Ordering;

use tracing::trace;

/// One timestamped reading.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub time: f64,
    pub value: f64,
}

impl Sample {
    pub const fn new(time: f64, value: f64) -> Self {
        Self { time, value }
    }

    /// Both coordinates are finite numbers.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.time.is_finite() && self.value.is_finite()
    }
}

impl From<(f64, f64)> for Sample {
    fn from((time, value): (f64, f64)) -> Self {
        Self { time, value }
    }
}

/// Ordered sequence of samples.
///
/// Invariants:
/// - every sample has finite `time` and `value`;
/// - samples are ascending by `time`; equal times keep the order they were supplied in.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    samples: Vec<Sample>,
}

impl Series {
    pub fn new() -> Self {
        Self { samples: Vec::new() }
    }

    /// Build a series from arbitrary samples: non-finite samples are dropped one by one,
    /// the rest are stably sorted by time.
    pub fn from_samples<I>(samples: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Sample>,
    {
        let mut dropped = 0usize;
        let mut kept: Vec<Sample> = samples
            .into_iter()
            .map(Into::<Sample>::into)
            .filter(|s| {
                let ok = s.is_finite();
                if !ok { dropped += 1; }
                ok
            })
            .collect();
        if dropped > 0 {
            trace!(dropped, kept = kept.len(), "dropped non-finite samples");
        }
        // slice::sort_by is stable
        kept.sort_by(|a, b| a.time.partial_cmp(&b.time).unwrap_or(Ordering::Equal));
        Self { samples: kept }
    }

    /// Build from parallel time/value columns, as produced by split extraction code.
    /// Extra entries in the longer column are ignored.
    pub fn from_columns(times: &[f64], values: &[f64]) -> Self {
        Self::from_samples(times.iter().copied().zip(values.iter().copied()))
    }

    pub fn samples(&self) -> &[Sample] { &self.samples }
    pub fn len(&self) -> usize { self.samples.len() }
    pub fn is_empty(&self) -> bool { self.samples.is_empty() }
    pub fn first(&self) -> Option<&Sample> { self.samples.first() }
    pub fn last(&self) -> Option<&Sample> { self.samples.last() }
    pub fn iter(&self) -> std::slice::Iter<'_, Sample> { self.samples.iter() }

    /// Times in ascending order.
    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.time)
    }

    /// Values in time order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.value)
    }

    /// Smallest and largest value, or `None` when empty.
    pub fn value_extent(&self) -> Option<(f64, f64)> {
        extent(self.values())
    }

    /// First and last time, or `None` when empty. Sorted, so no scan is needed.
    pub fn time_extent(&self) -> Option<(f64, f64)> {
        match (self.first(), self.last()) {
            (Some(a), Some(b)) => Some((a.time, b.time)),
            _ => None,
        }
    }
}

impl<T: Into<Sample>> FromIterator<T> for Series {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_samples(iter)
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;
    fn into_iter(self) -> Self::IntoIter { self.samples.iter() }
}

fn extent(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    let mut any = false;
    for v in values {
        lo = lo.min(v);
        hi = hi.max(v);
        any = true;
    }
    if any { Some((lo, hi)) } else { None }
}
