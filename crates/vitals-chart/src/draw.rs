// File: crates/vitals-chart/src/draw.rs
// Summary: Backend-agnostic drawing primitives emitted by the renderer.
// Notes:
// - Any immediate-mode 2D surface can replay these in order. `MoveTo`/`LineTo`
//   build the current path; `Stroke` paints it and starts a fresh one.

use crate::geometry::Point;

/// 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Where a text command's point sits relative to the text box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    /// Point is the top-centre of the box.
    Top,
    /// Point is the left edge, vertically centred.
    Leading,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    MoveTo(Point),
    LineTo(Point),
    Stroke { color: Rgba, width: f32 },
    Text { text: String, at: Point, anchor: Anchor, size: f32, color: Rgba },
}

/// Accumulates commands for one render pass.
#[derive(Default)]
pub(crate) struct CommandBuffer {
    commands: Vec<DrawCommand>,
}

impl CommandBuffer {
    pub(crate) fn move_to(&mut self, p: Point) {
        self.commands.push(DrawCommand::MoveTo(p));
    }

    pub(crate) fn line_to(&mut self, p: Point) {
        self.commands.push(DrawCommand::LineTo(p));
    }

    pub(crate) fn stroke(&mut self, color: Rgba, width: f32) {
        self.commands.push(DrawCommand::Stroke { color, width });
    }

    /// Single straight segment, stroked immediately.
    pub(crate) fn segment(&mut self, from: Point, to: Point, color: Rgba, width: f32) {
        self.move_to(from);
        self.line_to(to);
        self.stroke(color, width);
    }

    /// Empty strings are skipped.
    pub(crate) fn text(&mut self, text: &str, at: Point, anchor: Anchor, size: f32, color: Rgba) {
        if text.is_empty() { return; }
        self.commands.push(DrawCommand::Text { text: text.to_owned(), at, anchor, size, color });
    }

    pub(crate) fn finish(self) -> Vec<DrawCommand> {
        self.commands
    }
}
