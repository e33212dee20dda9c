//! Chart constructors.
//!
//! Three entry points sharing one algorithm: resolve the target canvas (absent
//! canvas is the sole failure path and yields `None`), read the current theme
//! from the page, color the datasets from the active palette, merge the theme
//! options with caller overrides and register the instance.

use crate::charting::options::{ChartOptions, ChartOptionsOverride};
use crate::charting::registry::{Chart, ChartRegistry};
use crate::theme::{chart_colors, ThemeProvider};
use crate::types::{ChartData, ChartHandle, ChartKind, Dataset};
use crate::view::Page;

/// Alpha suffix appended to a line dataset's border color for its area fill.
const FILL_ALPHA_SUFFIX: &str = "20";

pub fn create_line_chart(
    page: &Page,
    registry: &mut ChartRegistry,
    element_id: &str,
    labels: Vec<String>,
    mut datasets: Vec<Dataset>,
    overrides: ChartOptionsOverride,
) -> Option<ChartHandle> {
    let canvas = page.canvas(element_id)?;
    let colors = chart_colors(page.dark_mode());

    for (index, dataset) in datasets.iter_mut().enumerate() {
        let color = colors[index % colors.len()];
        dataset.border_color = Some(color.to_string());
        dataset.background_color = Some(format!("{color}{FILL_ALPHA_SUFFIX}"));
    }

    let chart = Chart {
        kind: ChartKind::Line,
        data: ChartData {
            labels,
            datasets,
            slice_colors: Vec::new(),
        },
        options: ChartOptions::for_provider(page).merged(&overrides),
        plot_path: canvas.plot_path.clone(),
    };
    Some(registry.create(element_id, chart))
}

pub fn create_pie_chart(
    page: &Page,
    registry: &mut ChartRegistry,
    element_id: &str,
    labels: Vec<String>,
    data: Vec<f64>,
    overrides: ChartOptionsOverride,
) -> Option<ChartHandle> {
    let canvas = page.canvas(element_id)?;
    let colors = chart_colors(page.dark_mode());

    // First N palette colors only, no wraparound
    let slice_colors: Vec<String> = colors
        .iter()
        .take(data.len())
        .map(|color| (*color).to_string())
        .collect();

    let chart = Chart {
        kind: ChartKind::Pie,
        data: ChartData {
            labels,
            datasets: vec![Dataset::new("", data)],
            slice_colors,
        },
        options: ChartOptions::for_provider(page).merged(&overrides),
        plot_path: canvas.plot_path.clone(),
    };
    Some(registry.create(element_id, chart))
}

pub fn create_bar_chart(
    page: &Page,
    registry: &mut ChartRegistry,
    element_id: &str,
    labels: Vec<String>,
    mut datasets: Vec<Dataset>,
    overrides: ChartOptionsOverride,
) -> Option<ChartHandle> {
    let canvas = page.canvas(element_id)?;
    let colors = chart_colors(page.dark_mode());

    for (index, dataset) in datasets.iter_mut().enumerate() {
        dataset.background_color = Some(colors[index % colors.len()].to_string());
    }

    let chart = Chart {
        kind: ChartKind::Bar,
        data: ChartData {
            labels,
            datasets,
            slice_colors: Vec::new(),
        },
        options: ChartOptions::for_provider(page).merged(&overrides),
        plot_path: canvas.plot_path.clone(),
    };
    Some(registry.create(element_id, chart))
}
