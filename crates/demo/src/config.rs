// File: crates/demo/src/config.rs
// Summary: Demo configuration loaded from TOML, with defaults matching the two-chart pulse/breathing view.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use vitals_chart::{Backend, Canvas, PlotSpec, Signal};

/// Largest canvas side accepted from config, in pixels.
pub const MAX_CANVAS_EXTENT: f64 = 16_384.0;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

/// Top-level demo configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct DemoConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default)]
    pub canvas: Canvas,
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Unset means "whatever the Skia surface supports".
    #[serde(default)]
    pub backend: Option<Backend>,
    #[serde(default = "default_true")]
    pub draw_labels: bool,
    /// Signal a `time,value` CSV is plotted as.
    #[serde(default = "default_csv_signal")]
    pub csv_signal: Signal,
    #[serde(default = "default_charts")]
    pub charts: Vec<ChartConfig>,
}

/// One chart to render; unset labels come from the signal's defaults.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ChartConfig {
    pub signal: Signal,
    pub title: Option<String>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub show_y_ticks: Option<bool>,
    #[serde(default)]
    pub empty_placeholder: bool,
}

impl ChartConfig {
    pub fn for_signal(signal: Signal) -> Self {
        Self {
            signal,
            title: None,
            x_label: None,
            y_label: None,
            show_y_ticks: None,
            empty_placeholder: false,
        }
    }

    pub fn plot_spec(&self) -> PlotSpec {
        let mut spec = self.signal.default_plot();
        if let Some(t) = &self.title { spec.title = t.clone(); }
        if let Some(x) = &self.x_label { spec.x_label = x.clone(); }
        if let Some(y) = &self.y_label { spec.y_label = y.clone(); }
        if let Some(show) = self.show_y_ticks { spec.show_y_ticks = show; }
        spec.with_empty_placeholder(self.empty_placeholder)
    }
}

// Default value functions
fn default_output_dir() -> PathBuf {
    PathBuf::from("target/out")
}

fn default_theme() -> String {
    "light".to_string()
}

fn default_true() -> bool {
    true
}

fn default_csv_signal() -> Signal {
    Signal::PulseWaveform
}

fn default_charts() -> Vec<ChartConfig> {
    vec![
        ChartConfig::for_signal(Signal::PulseWaveform),
        ChartConfig::for_signal(Signal::BreathingWaveform),
    ]
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            canvas: Canvas::default(),
            theme: default_theme(),
            backend: None,
            draw_labels: true,
            csv_signal: default_csv_signal(),
            charts: default_charts(),
        }
    }
}

impl DemoConfig {
    /// Load from `path`, or return defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let mut config: DemoConfig = toml::from_str(content)?;
        config.canvas = config.canvas.sanitized();
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.charts.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "charts".to_string(),
                message: "at least one chart is required".to_string(),
            });
        }
        if self.canvas.width < 1.0 || self.canvas.height < 1.0 {
            return Err(ConfigError::InvalidValue {
                field: "canvas".to_string(),
                message: format!("{}x{} is too small", self.canvas.width, self.canvas.height),
            });
        }
        if self.canvas.width > MAX_CANVAS_EXTENT || self.canvas.height > MAX_CANVAS_EXTENT {
            return Err(ConfigError::InvalidValue {
                field: "canvas".to_string(),
                message: format!(
                    "{}x{} exceeds {} pixels per side",
                    self.canvas.width, self.canvas.height, MAX_CANVAS_EXTENT
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let c = DemoConfig::from_toml("").expect("defaults");
        assert_eq!(c.output_dir, PathBuf::from("target/out"));
        assert_eq!(c.charts, default_charts());
        assert_eq!(c.backend, None);
    }

    #[test]
    fn charts_and_overrides_parse() {
        let c = DemoConfig::from_toml(
            r#"
            theme = "dark"
            backend = "connect-the-dots"
            canvas = { width = 640.0, height = 240.0 }

            [[charts]]
            signal = "pulse-rate-confidence"
            title = "Confidence"
            show_y_ticks = true
            "#,
        )
        .expect("valid config");
        assert_eq!(c.backend, Some(Backend::ConnectTheDots));
        assert_eq!(c.canvas, Canvas::new(640.0, 240.0));
        let spec = c.charts[0].plot_spec();
        assert_eq!(spec.title, "Confidence");
        assert_eq!(spec.y_label, "Confidence");
        assert!(spec.show_y_ticks);
    }

    #[test]
    fn empty_chart_list_is_rejected() {
        let err = DemoConfig::from_toml("charts = []").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn canvas_size_is_bounded() {
        let err = DemoConfig::from_toml("canvas = { width = 1e10, height = 200.0 }").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "canvas"));

        let ok = DemoConfig::from_toml("canvas = { width = 16384.0, height = 200.0 }");
        assert!(ok.is_ok());
    }

    #[test]
    fn unknown_signal_is_a_parse_error() {
        let err = DemoConfig::from_toml("[[charts]]\nsignal = \"heart\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
