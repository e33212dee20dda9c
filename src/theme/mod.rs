//! Theme palettes and the capability for reading the active display mode.

use plotters::style::{RGBAColor, RGBColor};

/// Binary display mode, inferred from the page's theme attribute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark_flag(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }
}

/// Anything that can report whether dark mode is active.
///
/// Keeps palette and option selection independent of the page model, so chart
/// building stays testable without a page.
pub trait ThemeProvider {
    fn dark_mode(&self) -> bool;
}

impl ThemeProvider for bool {
    fn dark_mode(&self) -> bool {
        *self
    }
}

impl ThemeProvider for Theme {
    fn dark_mode(&self) -> bool {
        self.is_dark()
    }
}

/// Series palette for light mode.
pub const LIGHT_CHART_COLORS: [&str; 10] = [
    "#3498db", "#2ecc71", "#f39c12", "#e74c3c", "#9b59b6",
    "#1abc9c", "#d35400", "#34495e", "#16a085", "#c0392b",
];

/// Series palette for dark mode. Same hues, darkened so no entry collides
/// with the light palette.
pub const DARK_CHART_COLORS: [&str; 10] = [
    "#2980b9", "#27ae60", "#b34700", "#922b21", "#8e44ad",
    "#117a65", "#e67e22", "#2c3e50", "#138d75", "#a93226",
];

/// The ordered ten-color palette for the given mode.
pub fn chart_colors(dark_mode: bool) -> &'static [&'static str; 10] {
    if dark_mode {
        &DARK_CHART_COLORS
    } else {
        &LIGHT_CHART_COLORS
    }
}

/// Parse `#rrggbb` or `#rrggbbaa` into an RGBA color.
pub fn parse_color(hex: &str) -> Option<RGBAColor> {
    let hex = hex.strip_prefix('#')?;
    if !hex.is_ascii() || (hex.len() != 6 && hex.len() != 8) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    let a = if hex.len() == 8 {
        f64::from(u8::from_str_radix(&hex[6..8], 16).ok()?) / 255.0
    } else {
        1.0
    };
    Some(RGBAColor(r, g, b, a))
}

/// Parse a hex literal to an opaque RGB color, discarding any alpha.
pub fn parse_rgb(hex: &str) -> Option<RGBColor> {
    parse_color(hex).map(|RGBAColor(r, g, b, _)| RGBColor(r, g, b))
}
