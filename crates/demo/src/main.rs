// File: crates/demo/src/main.rs
// Summary: Demo renders vitals charts (pulse/breathing pleth and friends) to PNGs.
// Usage: vitals-demo [INPUT.json|INPUT.csv] [--config FILE.toml] (see `--help`)
// Without INPUT, random heart-rate readings stand in for every configured chart.

mod cli;
mod config;
mod input;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use vitals_chart::{theme, Backend};
use vitals_chart_skia::{RenderOptions, SkiaRenderer, CAPABILITIES};

use crate::cli::Cli;
use crate::config::DemoConfig;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Cli::parse();
    let config = DemoConfig::load(args.config.as_deref()).context("loading demo config")?;

    // Capture once; every chart below reads from this snapshot only.
    let snapshot = match &args.input {
        Some(path) => {
            info!(input = %path.display(), "loading metrics");
            input::load_snapshot(path, config.csv_signal)?
        }
        None => {
            info!("no input given; using random heart-rate data");
            input::synthetic_snapshot(config.charts.iter().map(|c| c.signal))
        }
    };

    let backend = config.backend.unwrap_or_else(|| Backend::for_capabilities(CAPABILITIES));
    let theme = theme::find(&config.theme);

    for chart in &config.charts {
        let spec = chart.plot_spec();
        let series = snapshot.series(chart.signal);

        let mut opts = RenderOptions::for_spec(&spec, config.canvas);
        opts.theme = theme;
        opts.backend = backend;
        opts.draw_labels = config.draw_labels;
        let renderer = SkiaRenderer::new(opts);

        let commands = renderer.commands_for(&series, &spec);
        let out = out_name(&config.output_dir, chart.signal.name());
        renderer
            .render_to_png(&commands, &out)
            .with_context(|| format!("rendering {}", chart.signal))?;
        info!(signal = %chart.signal, samples = series.len(), commands = commands.len(), "rendered chart");
        println!("Wrote {}", out.display());
    }

    Ok(())
}

/// Produce output file name like target/out/chart_<name>.png
fn out_name(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("chart_{}.png", name))
}
