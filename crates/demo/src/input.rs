// File: crates/demo/src/input.rs
// Summary: Input loading: metrics JSON dumps, `time,value` CSVs, or a synthetic heart-rate fallback.

use std::path::Path;

use anyhow::{Context, Result};
use rand::Rng;
use tracing::{debug, info, warn};

use vitals_chart::{MetricsSnapshot, Sample, Series, Signal};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    Json,
    Csv,
}

impl InputKind {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_string_lossy().to_lowercase();
        match ext.as_str() {
            "json" => Some(InputKind::Json),
            "csv" => Some(InputKind::Csv),
            _ => None,
        }
    }
}

/// Read `path` once and capture a snapshot from it.
pub fn load_snapshot(path: &Path, csv_signal: Signal) -> Result<MetricsSnapshot> {
    if !path.exists() {
        anyhow::bail!("file not found: {}", path.display());
    }
    match InputKind::from_path(path) {
        Some(InputKind::Json) => {
            let payload = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            let snapshot = MetricsSnapshot::from_json_str(&payload)
                .with_context(|| format!("parsing metrics dump {}", path.display()))?;
            if snapshot.is_empty() {
                warn!(path = %path.display(), "metrics dump carried no known signals");
            }
            Ok(snapshot)
        }
        Some(InputKind::Csv) => {
            let series = load_series_csv(path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            info!(samples = series.len(), signal = %csv_signal, "loaded CSV series");
            Ok(MetricsSnapshot::default().with_series(csv_signal, series))
        }
        None => anyhow::bail!("unsupported input (expected .json or .csv): {}", path.display()),
    }
}

/// Load a `time,value` CSV. Rows that fail to parse are skipped; without a
/// time column the row index is used.
pub fn load_series_csv(path: &Path) -> Result<Series> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    debug!(?headers, "csv headers");

    let idx = |names: &[&str]| -> Option<usize> { headers.iter().position(|h| names.contains(&h.as_str())) };
    let i_time = idx(&["time", "t", "timestamp", "seconds"]);
    let Some(i_value) = idx(&["value", "v", "y", "hr", "rr"]) else {
        anyhow::bail!("no value column in headers {:?}", headers);
    };

    let mut samples = Vec::new();
    let mut skipped = 0usize;
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let parse = |i: usize| rec.get(i).and_then(|s| s.parse::<f64>().ok());
        let time = match i_time {
            Some(i) => parse(i),
            None => Some(row as f64),
        };
        match (time, parse(i_value)) {
            (Some(t), Some(v)) => samples.push(Sample::new(t, v)),
            _ => skipped += 1,
        }
    }
    if skipped > 0 {
        debug!(skipped, "skipped unparseable CSV rows");
    }
    Ok(Series::from_samples(samples))
}

/// Ten random heart-rate readings in `[60, 100]` at times `1..=10`, per signal.
pub fn synthetic_snapshot(signals: impl IntoIterator<Item = Signal>) -> MetricsSnapshot {
    let mut rng = rand::thread_rng();
    signals.into_iter().fold(MetricsSnapshot::default(), |snap, signal| {
        let series: Series = (1..=10).map(|t| (t as f64, rng.gen_range(60.0..=100.0))).collect();
        snap.with_series(signal, series)
    })
}
