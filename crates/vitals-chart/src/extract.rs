// File: crates/vitals-chart/src/extract.rs
// Summary: Conversion of upstream metrics payloads into Series, plus a one-shot snapshot.
// Notes:
// - Upstream traces are keyed by string-encoded timestamps:
//   `{"12.5": {"value": 71.0}, "13.0": {"value": 72.4}}`.
//   Entries whose key or value does not convert are dropped individually.
// - Ready-made sequences are accepted too: `[[t, v], ...]` or `[{"time": t, "value": v}, ...]`.

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::debug;

use crate::error::Result;
use crate::series::{Sample, Series};
use crate::signal::Signal;

/// Convert one trace (keyed object or sample array) into a Series.
/// Anything else yields an empty Series.
pub fn series_from_value(trace: &Value) -> Series {
    match trace {
        Value::Object(_) => series_from_keyed(trace),
        Value::Array(items) => {
            let total = items.len();
            let samples: Vec<Sample> = items.iter().filter_map(sample_from_item).collect();
            log_dropped(total, samples.len());
            Series::from_samples(samples)
        }
        _ => Series::new(),
    }
}

/// Convert a keyed trace: time key -> record with a numeric `"value"` field.
pub fn series_from_keyed(trace: &Value) -> Series {
    let Some(map) = trace.as_object() else {
        return Series::new();
    };
    let samples: Vec<Sample> = map
        .iter()
        .filter_map(|(key, record)| {
            let time = key.trim().parse::<f64>().ok()?;
            let value = record_value(record)?;
            Some(Sample::new(time, value))
        })
        .collect();
    log_dropped(map.len(), samples.len());
    Series::from_samples(samples)
}

/// Walk `path` through nested objects and convert what is found there.
/// A missing segment yields an empty Series.
pub fn series_at(root: &Value, path: &[&str]) -> Series {
    let mut node = root;
    for key in path {
        match node.get(key) {
            Some(next) => node = next,
            None => return Series::new(),
        }
    }
    series_from_value(node)
}

/// Numeric reading inside a record. Booleans (e.g. apnea flags) map to 1/0.
fn record_value(record: &Value) -> Option<f64> {
    let v = match record {
        Value::Object(fields) => fields.get("value")?,
        other => other,
    };
    match v {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

fn sample_from_item(item: &Value) -> Option<Sample> {
    match item {
        Value::Array(pair) if pair.len() == 2 => Some(Sample::new(pair[0].as_f64()?, record_value(&pair[1])?)),
        Value::Object(fields) => Some(Sample::new(fields.get("time")?.as_f64()?, record_value(item)?)),
        _ => None,
    }
}

fn log_dropped(total: usize, kept: usize) {
    if kept < total {
        debug!(dropped = total - kept, kept, "dropped unconvertible trace entries");
    }
}

/// Owned copy of every known signal, taken once from a metrics payload.
/// Rendering reads only from this; the live payload may change underneath.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MetricsSnapshot {
    series: BTreeMap<Signal, Series>,
}

impl MetricsSnapshot {
    /// Extract every signal at its default path.
    pub fn capture(root: &Value) -> Self {
        let series = Signal::ALL
            .into_iter()
            .map(|sig| (sig, series_at(root, sig.json_path())))
            .filter(|(_, s)| !s.is_empty())
            .collect::<BTreeMap<_, _>>();
        debug!(signals = series.len(), "captured metrics snapshot");
        Self { series }
    }

    pub fn from_json_str(payload: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(payload)?;
        Ok(Self::capture(&root))
    }

    /// Insert or replace a signal, for callers that already hold a Series.
    pub fn with_series(mut self, signal: Signal, series: Series) -> Self {
        self.series.insert(signal, series);
        self
    }

    /// Captured series for `signal`; empty when the payload did not carry it.
    pub fn series(&self, signal: Signal) -> Series {
        self.series.get(&signal).cloned().unwrap_or_default()
    }

    pub fn contains(&self, signal: Signal) -> bool {
        self.series.contains_key(&signal)
    }

    /// Signals present in the snapshot, in declaration order.
    pub fn signals(&self) -> impl Iterator<Item = Signal> + '_ {
        self.series.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}
