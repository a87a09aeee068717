// File: crates/vitals-chart-skia/src/text.rs
// Summary: Text shaper using Skia textlayout; places labels by the anchor the core renderer chose.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};

use vitals_chart::Anchor;

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["SF Pro Text", "Segoe UI", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Paint `text` so that `(x, y)` lands on the anchor point of its box.
    pub fn draw_anchored(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        anchor: Anchor,
        size: f32,
        color: skia::Color,
    ) {
        let mut p = self.layout(text, size, color);
        // Paragraph paints from its top-left corner
        let origin = match anchor {
            Anchor::Top => (x - p.longest_line() * 0.5, y),
            Anchor::Leading => (x, y - p.height() * 0.5),
        };
        p.paint(canvas, origin);
    }
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}
