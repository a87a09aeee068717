// File: crates/vitals-chart/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors.

use crate::draw::Rgba;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub line: Rgba,
    pub tick: Rgba,
    pub label: Rgba,
    pub title: Rgba,
    pub grid: Rgba,
}

impl Theme {
    /// Red trace on white with black ticks and a gray headline.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::rgb(255, 255, 255),
            line: Rgba::rgb(255, 59, 48),
            tick: Rgba::rgb(0, 0, 0),
            label: Rgba::rgb(0, 0, 0),
            title: Rgba::rgb(142, 142, 147),
            grid: Rgba::rgb(229, 229, 234),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::rgb(18, 18, 20),
            line: Rgba::rgb(255, 69, 58),
            tick: Rgba::rgb(180, 180, 190),
            label: Rgba::rgb(235, 235, 245),
            title: Rgba::rgb(152, 152, 157),
            grid: Rgba::rgb(40, 40, 45),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: Rgba::rgb(0x00, 0x00, 0x00),
            line: Rgba::rgb(0x00, 0xff, 0xff),
            tick: Rgba::rgb(0xff, 0xff, 0xff),
            label: Rgba::rgb(0xff, 0xff, 0xff),
            title: Rgba::rgb(0xcc, 0xcc, 0xcc),
            grid: Rgba::rgb(0x22, 0x22, 0x22),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
