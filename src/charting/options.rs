//! Chart option building: the shared, theme-parameterized configuration every
//! chart starts from, plus the shallow caller-override merge.

use plotters::chart::SeriesLabelPosition;
use plotters::style::RGBAColor;
use serde::{Deserialize, Serialize};

use crate::theme::ThemeProvider;

/// Where the legend sits relative to the plot area.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Top,
    Bottom,
    Left,
    Right,
}

impl LegendPosition {
    pub(crate) fn series_label_position(self) -> SeriesLabelPosition {
        match self {
            LegendPosition::Top => SeriesLabelPosition::UpperMiddle,
            LegendPosition::Bottom => SeriesLabelPosition::LowerMiddle,
            LegendPosition::Left => SeriesLabelPosition::MiddleLeft,
            LegendPosition::Right => SeriesLabelPosition::MiddleRight,
        }
    }
}

/// Tooltip activation mode, carried for interactive consumers. The raster
/// backend has no hover, so it only stores these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TooltipMode {
    /// All series values at the hovered x index
    Index,
    Nearest,
    Point,
}

/// Shared chart configuration, parameterized by theme.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartOptions {
    /// Chart fills its container
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub legend_position: LegendPosition,
    pub tooltip_mode: TooltipMode,
    /// Tooltip activates anywhere on the x index, not only over a point
    pub tooltip_intersect: bool,
    /// Legend and axis tick color
    pub text_color: RGBAColor,
    /// Grid line color, translucent over the theme base
    pub grid_color: RGBAColor,
    /// Canvas fill for the raster backend
    pub background_color: RGBAColor,
}

impl ChartOptions {
    /// Common settings for every chart, with colors picked by theme.
    pub fn for_theme(dark_mode: bool) -> Self {
        let text_color = if dark_mode {
            RGBAColor(0xf8, 0xf9, 0xfa, 1.0)
        } else {
            RGBAColor(0x33, 0x33, 0x33, 1.0)
        };
        let grid_color = if dark_mode {
            RGBAColor(255, 255, 255, 0.1)
        } else {
            RGBAColor(0, 0, 0, 0.1)
        };
        let background_color = if dark_mode {
            RGBAColor(0x1e, 0x1e, 0x1e, 1.0)
        } else {
            RGBAColor(255, 255, 255, 1.0)
        };

        Self {
            responsive: true,
            maintain_aspect_ratio: false,
            legend_position: LegendPosition::Top,
            tooltip_mode: TooltipMode::Index,
            tooltip_intersect: false,
            text_color,
            grid_color,
            background_color,
        }
    }

    pub fn for_provider(provider: &dyn ThemeProvider) -> Self {
        Self::for_theme(provider.dark_mode())
    }

    /// Apply caller overrides; set fields win on collision.
    pub fn merged(mut self, overrides: &ChartOptionsOverride) -> Self {
        if let Some(v) = overrides.responsive {
            self.responsive = v;
        }
        if let Some(v) = overrides.maintain_aspect_ratio {
            self.maintain_aspect_ratio = v;
        }
        if let Some(v) = overrides.legend_position {
            self.legend_position = v;
        }
        if let Some(v) = overrides.tooltip_mode {
            self.tooltip_mode = v;
        }
        if let Some(v) = overrides.tooltip_intersect {
            self.tooltip_intersect = v;
        }
        if let Some(v) = overrides.text_color {
            self.text_color = v;
        }
        if let Some(v) = overrides.grid_color {
            self.grid_color = v;
        }
        if let Some(v) = overrides.background_color {
            self.background_color = v;
        }
        self
    }
}

/// Caller-supplied option overrides; unset fields keep the theme defaults.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ChartOptionsOverride {
    pub responsive: Option<bool>,
    pub maintain_aspect_ratio: Option<bool>,
    pub legend_position: Option<LegendPosition>,
    pub tooltip_mode: Option<TooltipMode>,
    pub tooltip_intersect: Option<bool>,
    pub text_color: Option<RGBAColor>,
    pub grid_color: Option<RGBAColor>,
    pub background_color: Option<RGBAColor>,
}
