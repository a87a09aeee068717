// File: crates/vitals-chart/src/signal.rs
// Summary: Logical signals exposed by the upstream vitals metrics payload.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ExtractError;
use crate::plot::PlotSpec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Signal {
    PulseWaveform,
    BreathingWaveform,
    PulseRate,
    PulseRateConfidence,
    BreathingRate,
    BreathingAmplitude,
    ApneaDetection,
    BreathingBaseline,
    BloodPressurePhasic,
    RespiratoryLineLength,
    InhaleExhaleRatio,
    HeartRateVariability,
}

impl Signal {
    pub const ALL: [Signal; 12] = [
        Signal::PulseWaveform,
        Signal::BreathingWaveform,
        Signal::PulseRate,
        Signal::PulseRateConfidence,
        Signal::BreathingRate,
        Signal::BreathingAmplitude,
        Signal::ApneaDetection,
        Signal::BreathingBaseline,
        Signal::BloodPressurePhasic,
        Signal::RespiratoryLineLength,
        Signal::InhaleExhaleRatio,
        Signal::HeartRateVariability,
    ];

    /// Stable kebab-case name, matching the serde representation.
    pub fn name(self) -> &'static str {
        match self {
            Signal::PulseWaveform => "pulse-waveform",
            Signal::BreathingWaveform => "breathing-waveform",
            Signal::PulseRate => "pulse-rate",
            Signal::PulseRateConfidence => "pulse-rate-confidence",
            Signal::BreathingRate => "breathing-rate",
            Signal::BreathingAmplitude => "breathing-amplitude",
            Signal::ApneaDetection => "apnea-detection",
            Signal::BreathingBaseline => "breathing-baseline",
            Signal::BloodPressurePhasic => "blood-pressure-phasic",
            Signal::RespiratoryLineLength => "respiratory-line-length",
            Signal::InhaleExhaleRatio => "inhale-exhale-ratio",
            Signal::HeartRateVariability => "heart-rate-variability",
        }
    }

    /// Object keys leading to the signal's keyed trace in a metrics dump.
    pub fn json_path(self) -> &'static [&'static str] {
        match self {
            Signal::PulseWaveform => &["pulse", "hr_trace"],
            Signal::BreathingWaveform => &["breath", "rr_trace"],
            Signal::PulseRate => &["pulse", "hr"],
            Signal::PulseRateConfidence => &["pulse", "hr_confidence"],
            Signal::BreathingRate => &["breath", "rr"],
            Signal::BreathingAmplitude => &["breath", "amplitude"],
            Signal::ApneaDetection => &["breath", "apnea"],
            Signal::BreathingBaseline => &["breath", "baseline"],
            Signal::BloodPressurePhasic => &["blood_pressure", "phasic"],
            Signal::RespiratoryLineLength => &["breath", "rrl"],
            Signal::InhaleExhaleRatio => &["breath", "ie"],
            Signal::HeartRateVariability => &["pulse", "hrv"],
        }
    }

    /// Chart labels used when the caller has no opinion.
    pub fn default_plot(self) -> PlotSpec {
        let (title, y_label, ticks) = match self {
            Signal::PulseWaveform => ("Pulse Pleth", "Amplitude", false),
            Signal::BreathingWaveform => ("Breathing Pleth", "Amplitude", false),
            Signal::PulseRate => ("Pulse Rate", "BPM", true),
            Signal::PulseRateConfidence => ("Pulse Rate Confidence", "Confidence", true),
            Signal::BreathingRate => ("Breathing Rate", "BPM", true),
            Signal::BreathingAmplitude => ("Breathing Amplitude", "Amplitude", true),
            Signal::ApneaDetection => ("Apnea Detection", "Detected", true),
            Signal::BreathingBaseline => ("Breathing Baseline", "Baseline", true),
            Signal::BloodPressurePhasic => ("Blood Pressure Phasic", "Phasic", false),
            Signal::RespiratoryLineLength => ("Respiratory Line Length", "Length", true),
            Signal::InhaleExhaleRatio => ("Inhale/Exhale Ratio", "Ratio", true),
            Signal::HeartRateVariability => ("Heart Rate Variability", "HRV", true),
        };
        PlotSpec::new(title, "Time (s)", y_label).with_y_ticks(ticks)
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Signal {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Signal::ALL
            .into_iter()
            .find(|sig| sig.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ExtractError::UnknownSignal(wanted.to_owned()))
    }
}
