// File: crates/vitals-chart/src/chart.rs
// Summary: Renderer that turns a Series + PlotSpec into an ordered list of draw commands.

use tracing::trace;

use crate::backend::Backend;
use crate::draw::{Anchor, CommandBuffer, DrawCommand};
use crate::geometry::Point;
use crate::grid::{x_ticks, y_tick_stride, y_ticks, LabelFormat};
use crate::plot::PlotSpec;
use crate::scale::PlotScale;
use crate::series::Series;
use crate::theme::Theme;
use crate::types::{
    Canvas, CAPTION_SIZE, HEADLINE_SIZE, LINE_WIDTH, TICK_LENGTH, TICK_WIDTH, TITLE_OFFSET,
    X_LABEL_OFFSET, X_TICK_LABEL_OFFSET, Y_LABEL_OFFSET, Y_TICK_LABEL_X,
};
use crate::view::ViewState;

/// Render with the default theme and the bare-canvas back end.
pub fn render(series: &Series, spec: &PlotSpec, canvas: Canvas) -> Vec<DrawCommand> {
    Renderer::default().render(series, spec, canvas)
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Renderer {
    pub theme: Theme,
    pub backend: Backend,
}

impl Renderer {
    pub fn new(theme: Theme, backend: Backend) -> Self {
        Self { theme, backend }
    }

    /// Produce draw commands for one chart. Never fails: empty or flat input
    /// falls back to the default geometry described on [`ViewState`].
    ///
    /// Order: grid (native only), series line, X ticks, Y ticks, axis text.
    pub fn render(&self, series: &Series, spec: &PlotSpec, canvas: Canvas) -> Vec<DrawCommand> {
        let canvas = canvas.sanitized();
        let view = ViewState::from_series(series);
        let scale = PlotScale::new(&view, canvas);
        let xs = x_ticks(&view);
        let ys = if spec.show_y_ticks { y_ticks(&view) } else { Vec::new() };

        let mut out = CommandBuffer::default();
        if self.backend.draws_grid() {
            draw_grid(&mut out, &self.theme, &scale, canvas, &xs, &ys);
        }
        draw_line_series(&mut out, &self.theme, &scale, canvas, series, spec);
        draw_x_ticks(&mut out, &self.theme, &scale, canvas, &xs, self.backend.skipped_x_ticks());
        if spec.show_y_ticks {
            draw_y_ticks(&mut out, &self.theme, &scale, &view, &ys);
        }
        draw_axes(&mut out, &self.theme, canvas, spec);

        let commands = out.finish();
        trace!(
            samples = series.len(),
            x_ticks = xs.len(),
            y_ticks = ys.len(),
            commands = commands.len(),
            backend = ?self.backend,
            "rendered chart"
        );
        commands
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(out: &mut CommandBuffer, theme: &Theme, scale: &PlotScale, canvas: Canvas, xs: &[f64], ys: &[f64]) {
    // verticals
    for &x in xs {
        let px = scale.x.to_px(x);
        out.segment(Point::new(px, 0.0), Point::new(px, canvas.height), theme.grid, TICK_WIDTH);
    }
    // horizontals
    for &y in ys {
        let py = scale.y.to_px(y);
        out.segment(Point::new(0.0, py), Point::new(canvas.width, py), theme.grid, TICK_WIDTH);
    }
}

fn draw_line_series(
    out: &mut CommandBuffer,
    theme: &Theme,
    scale: &PlotScale,
    canvas: Canvas,
    series: &Series,
    spec: &PlotSpec,
) {
    let mut points = series.iter().map(|s| scale.to_px(s));
    let Some(first) = points.next() else {
        if spec.empty_placeholder {
            let mid = canvas.height / 2.0;
            out.segment(Point::new(0.0, mid), Point::new(canvas.width, mid), theme.line, LINE_WIDTH);
        }
        return;
    };

    out.move_to(first);
    for p in points {
        out.line_to(p);
    }
    out.stroke(theme.line, LINE_WIDTH);
}

fn draw_x_ticks(out: &mut CommandBuffer, theme: &Theme, scale: &PlotScale, canvas: Canvas, xs: &[f64], skip: usize) {
    for &x in xs.iter().skip(skip) {
        let px = scale.x.to_px(x);
        out.segment(
            Point::new(px, canvas.height),
            Point::new(px, canvas.height - TICK_LENGTH),
            theme.tick,
            TICK_WIDTH,
        );
        out.text(
            &LabelFormat::Integer.format(x),
            Point::new(px, canvas.height - X_TICK_LABEL_OFFSET),
            Anchor::Top,
            CAPTION_SIZE,
            theme.label,
        );
    }
}

fn draw_y_ticks(out: &mut CommandBuffer, theme: &Theme, scale: &PlotScale, view: &ViewState, ys: &[f64]) {
    let format = LabelFormat::for_y_stride(y_tick_stride(view));
    for &y in ys {
        let py = scale.y.to_px(y);
        out.segment(Point::new(0.0, py), Point::new(TICK_LENGTH, py), theme.tick, TICK_WIDTH);
        out.text(&format.format(y), Point::new(Y_TICK_LABEL_X, py), Anchor::Leading, CAPTION_SIZE, theme.label);
    }
}

fn draw_axes(out: &mut CommandBuffer, theme: &Theme, canvas: Canvas, spec: &PlotSpec) {
    let cx = canvas.width / 2.0;
    out.text(&spec.title, Point::new(cx, -TITLE_OFFSET), Anchor::Top, HEADLINE_SIZE, theme.title);
    out.text(&spec.y_label, Point::new(0.0, -Y_LABEL_OFFSET), Anchor::Leading, CAPTION_SIZE, theme.label);
    out.text(&spec.x_label, Point::new(cx, canvas.height + X_LABEL_OFFSET), Anchor::Top, CAPTION_SIZE, theme.label);
}
