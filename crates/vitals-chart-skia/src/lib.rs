// File: crates/vitals-chart-skia/src/lib.rs
// Summary: Skia back end; replays vitals-chart draw commands onto CPU raster surfaces (PNG / RGBA8).

pub mod text;

use anyhow::{Context, Result};
use skia_safe as skia;
use tracing::debug;

use vitals_chart::{
    Backend, Canvas, DrawCommand, Insets, PlotSpec, Point, Renderer, Rgba, Series, SurfaceCapabilities, Theme,
};

pub use text::TextShaper;

/// Skia can draw everything a charting library would.
pub const CAPABILITIES: SurfaceCapabilities = SurfaceCapabilities { native_charts: true };

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    /// Plot area handed to the core renderer.
    pub canvas: Canvas,
    /// Outer bands for title and axis labels; the surface is `canvas + insets`.
    pub insets: Insets,
    pub theme: Theme,
    pub backend: Backend,
    /// Text is skipped when false (keeps pixel snapshots independent of installed fonts).
    pub draw_labels: bool,
}

impl RenderOptions {
    /// Options sized for `spec`'s labels on a canvas of `canvas`.
    pub fn for_spec(spec: &PlotSpec, canvas: Canvas) -> Self {
        Self { canvas: canvas.sanitized(), insets: Insets::for_spec(spec), ..Self::default() }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            insets: Insets::default(),
            theme: Theme::light(),
            backend: Backend::for_capabilities(CAPABILITIES),
            draw_labels: true,
        }
    }
}

pub struct SkiaRenderer {
    opts: RenderOptions,
    shaper: TextShaper,
}

impl SkiaRenderer {
    pub fn new(opts: RenderOptions) -> Self {
        Self { opts, shaper: TextShaper::new() }
    }

    pub fn options(&self) -> &RenderOptions { &self.opts }

    /// Full surface size in pixels (canvas plus insets), at least 1x1.
    /// Fails when either side does not fit Skia's `i32` dimensions.
    pub fn surface_size(&self) -> Result<(i32, i32)> {
        let o = &self.opts;
        let w = surface_extent(o.canvas.width, o.insets.hsum())
            .with_context(|| format!("surface width {} + {} is too large", o.canvas.width, o.insets.hsum()))?;
        let h = surface_extent(o.canvas.height, o.insets.vsum())
            .with_context(|| format!("surface height {} + {} is too large", o.canvas.height, o.insets.vsum()))?;
        Ok((w, h))
    }

    /// Core render with this surface's theme and back end.
    pub fn commands_for(&self, series: &Series, spec: &PlotSpec) -> Vec<DrawCommand> {
        Renderer::new(self.opts.theme, self.opts.backend).render(series, spec, self.opts.canvas)
    }

    /// Render `commands` to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(&self, commands: &[DrawCommand], output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(commands)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, &bytes)?;
        debug!(path = %path.display(), bytes = bytes.len(), "wrote chart png");
        Ok(())
    }

    /// Render `commands` and return encoded PNG bytes.
    pub fn render_to_png_bytes(&self, commands: &[DrawCommand]) -> Result<Vec<u8>> {
        let mut surface = self.rasterize(commands)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render `commands` into an unpremultiplied RGBA8 buffer.
    /// Returns `(pixels, width, height, row_stride_bytes)`.
    pub fn render_to_rgba8(&self, commands: &[DrawCommand]) -> Result<(Vec<u8>, i32, i32, usize)> {
        let (w, h) = self.surface_size()?;
        let mut surface = self.rasterize(commands)?;
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("failed to read back {}x{} surface", w, h);
        }
        Ok((pixels, w, h, stride))
    }

    fn rasterize(&self, commands: &[DrawCommand]) -> Result<skia::Surface> {
        let (w, h) = self.surface_size()?;
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow::anyhow!("failed to create {}x{} raster surface", w, h))?;
        let canvas = surface.canvas();
        canvas.clear(to_sk_color(self.opts.theme.background));

        canvas.save();
        canvas.translate((self.opts.insets.left as f32, self.opts.insets.top as f32));
        let shaper = if self.opts.draw_labels { Some(&self.shaper) } else { None };
        replay(canvas, commands, shaper);
        canvas.restore();
        Ok(surface)
    }
}

/// Replay commands in order on `canvas`. Text is dropped when `shaper` is `None`.
pub fn replay(canvas: &skia::Canvas, commands: &[DrawCommand], shaper: Option<&TextShaper>) {
    let mut path = skia::Path::new();
    let mut points = 0usize;
    let mut last = Point::new(0.0, 0.0);

    for cmd in commands {
        match cmd {
            DrawCommand::MoveTo(p) => {
                path.move_to(to_sk_point(*p));
                points += 1;
                last = *p;
            }
            DrawCommand::LineTo(p) => {
                path.line_to(to_sk_point(*p));
                points += 1;
                last = *p;
            }
            DrawCommand::Stroke { color, width } => {
                if points == 1 {
                    // a lone point strokes to nothing; show it as a dot
                    let mut fill = paint(*color, *width);
                    fill.set_style(skia::paint::Style::Fill);
                    canvas.draw_circle(to_sk_point(last), *width, &fill);
                } else if points > 1 {
                    canvas.draw_path(&path, &paint(*color, *width));
                }
                path = skia::Path::new();
                points = 0;
            }
            DrawCommand::Text { text, at, anchor, size, color } => {
                if let Some(shaper) = shaper {
                    shaper.draw_anchored(canvas, text, at.x as f32, at.y as f32, *anchor, *size, to_sk_color(*color));
                }
            }
        }
    }
}

// ---- helpers ----------------------------------------------------------------

/// Canvas extent rounded up plus an inset band, or `None` past `i32::MAX`.
fn surface_extent(canvas: f64, inset: u32) -> Option<i32> {
    let base = canvas.ceil();
    if !(0.0..=f64::from(i32::MAX)).contains(&base) {
        return None;
    }
    (base as i32).checked_add(i32::try_from(inset).ok()?).map(|v| v.max(1))
}

fn paint(color: Rgba, width: f32) -> skia::Paint {
    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(width);
    stroke.set_color(to_sk_color(color));
    stroke
}

fn to_sk_color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn to_sk_point(p: Point) -> skia::Point {
    skia::Point::new(p.x as f32, p.y as f32)
}
