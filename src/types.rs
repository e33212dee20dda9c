//! # Common Types
//!
//! Shared plain-data types for chart construction. Chart data arrives from the
//! pages as JSON payloads, so the data-bearing types derive serde.

use serde::{Deserialize, Serialize};

/// The kind of chart drawn on a canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Pie,
    Bar,
}

/// A single series of values with its display metadata.
///
/// Colors are hex literals (`#rrggbb`, optionally `#rrggbbaa`). The chart
/// factory fills them in from the active palette; callers may pre-set them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    /// Series name shown in the legend
    pub label: String,
    /// One value per axis label
    pub data: Vec<f64>,
    /// Stroke color for line charts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    /// Fill color (area fill for lines, bar fill for bars)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

impl Dataset {
    pub fn new(label: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            data,
            border_color: None,
            background_color: None,
        }
    }
}

/// Axis labels plus datasets, the payload handed to the chart registry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    /// Per-slice colors for pie charts; empty for line and bar charts
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub slice_colors: Vec<String>,
}

/// An opaque reference to a chart instance owned by the registry.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ChartHandle(pub(crate) String);

impl ChartHandle {
    /// The id of the canvas this chart was created for.
    pub fn element_id(&self) -> &str {
        &self.0
    }
}
