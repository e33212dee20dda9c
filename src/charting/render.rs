//! Chart rasterization through plotters.
//!
//! Plays the role an interactive charting backend would: each registered chart
//! is drawn into a PNG at its canvas plot path, and the UI loads the file back
//! as a texture. All styling comes from the merged [`ChartOptions`].

use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::element::Pie;
use plotters::prelude::*;
use thiserror::Error;

use crate::charting::options::ChartOptions;
use crate::charting::registry::Chart;
use crate::theme::{parse_color, parse_rgb};
use crate::types::{ChartData, ChartKind};

pub const PLOT_WIDTH: u32 = 640;
pub const PLOT_HEIGHT: u32 = 480;

/// Fallback for series and pie slices without an assigned color.
const UNASSIGNED_COLOR: RGBColor = RGBColor(0x95, 0xa5, 0xa6);

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("no chart registered for element '{0}'")]
    UnknownChart(String),
    #[error("invalid color literal '{0}'")]
    InvalidColor(String),
    #[error("drawing failed: {0}")]
    Draw(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn wrap_draw<E: std::fmt::Display>(e: E) -> ChartError {
    ChartError::Draw(e.to_string())
}

/// Rasterize a chart to its plot path.
pub fn render_chart(chart: &Chart) -> Result<(), ChartError> {
    let root =
        BitMapBackend::new(&chart.plot_path, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root.fill(&chart.options.background_color).map_err(wrap_draw)?;

    match chart.kind {
        ChartKind::Line => draw_line(&root, &chart.data, &chart.options)?,
        ChartKind::Bar => draw_bar(&root, &chart.data, &chart.options)?,
        ChartKind::Pie => draw_pie(&root, &chart.data, &chart.options)?,
    }

    root.present().map_err(wrap_draw)?;
    Ok(())
}

fn draw_line(
    root: &DrawingArea<BitMapBackend, Shift>,
    data: &ChartData,
    options: &ChartOptions,
) -> Result<(), ChartError> {
    let x_max = data.labels.len().saturating_sub(1).max(1) as f64;
    let (y_min, y_max) = value_range(data.datasets.iter().flat_map(|d| d.data.iter().copied()));

    let mut chart = ChartBuilder::on(root)
        .margin(10)
        .set_all_label_area_size(50)
        .build_cartesian_2d(0f64..x_max, y_min..y_max)
        .map_err(wrap_draw)?;

    style_mesh(&mut chart, &data.labels, options)?;

    for dataset in &data.datasets {
        let border = color_or_fallback(dataset.border_color.as_deref())?;
        let fill = color_or_fallback(dataset.background_color.as_deref())?;
        chart
            .draw_series(
                AreaSeries::new(
                    dataset.data.iter().enumerate().map(|(i, v)| (i as f64, *v)),
                    0.0,
                    &fill,
                )
                .border_style(border.stroke_width(2)),
            )
            .map_err(wrap_draw)?
            .label(dataset.label.clone())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], border));
    }

    draw_legend(&mut chart, options)
}

fn draw_bar(
    root: &DrawingArea<BitMapBackend, Shift>,
    data: &ChartData,
    options: &ChartOptions,
) -> Result<(), ChartError> {
    let x_max = data.labels.len().max(1) as f64;
    let (raw_min, y_max) = value_range(data.datasets.iter().flat_map(|d| d.data.iter().copied()));
    // Bars grow from the zero line
    let y_min = raw_min.min(0.0);

    let mut chart = ChartBuilder::on(root)
        .margin(10)
        .set_all_label_area_size(50)
        .build_cartesian_2d(0f64..x_max, y_min..y_max)
        .map_err(wrap_draw)?;

    style_mesh(&mut chart, &data.labels, options)?;

    let group_width = 0.8 / data.datasets.len().max(1) as f64;
    for (dataset_index, dataset) in data.datasets.iter().enumerate() {
        let fill = color_or_fallback(dataset.background_color.as_deref())?;
        chart
            .draw_series(dataset.data.iter().enumerate().map(|(i, v)| {
                let x0 = i as f64 + 0.1 + dataset_index as f64 * group_width;
                let x1 = x0 + group_width;
                let (y0, y1) = if *v >= 0.0 { (0.0, *v) } else { (*v, 0.0) };
                Rectangle::new([(x0, y0), (x1, y1)], fill.filled())
            }))
            .map_err(wrap_draw)?
            .label(dataset.label.clone())
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 5), (x + 20, y + 5)], fill.filled())
            });
    }

    draw_legend(&mut chart, options)
}

fn draw_pie(
    root: &DrawingArea<BitMapBackend, Shift>,
    data: &ChartData,
    options: &ChartOptions,
) -> Result<(), ChartError> {
    let dataset = match data.datasets.first() {
        Some(dataset) => dataset,
        None => return Ok(()),
    };
    let sizes = dataset.data.clone();
    if sizes.is_empty() || sizes.iter().sum::<f64>() <= 0.0 {
        return Ok(());
    }

    let mut colors = Vec::with_capacity(sizes.len());
    for i in 0..sizes.len() {
        match data.slice_colors.get(i) {
            Some(hex) => colors
                .push(parse_rgb(hex).ok_or_else(|| ChartError::InvalidColor(hex.clone()))?),
            // Slices past the palette have no assigned color
            None => colors.push(UNASSIGNED_COLOR),
        }
    }

    let labels: Vec<String> = (0..sizes.len())
        .map(|i| data.labels.get(i).cloned().unwrap_or_default())
        .collect();

    let center = (PLOT_WIDTH as i32 / 2, PLOT_HEIGHT as i32 / 2);
    let radius = f64::from(PLOT_WIDTH.min(PLOT_HEIGHT)) * 0.35;
    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.label_style(
        ("sans-serif", 15)
            .into_font()
            .color(&options.text_color),
    );
    root.draw(&pie).map_err(wrap_draw)?;
    Ok(())
}

fn style_mesh(
    chart: &mut ChartContext<BitMapBackend, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    labels: &[String],
    options: &ChartOptions,
) -> Result<(), ChartError> {
    let labels_owned = labels.to_vec();
    let x_label_formatter = move |x: &f64| {
        let idx = *x as usize;
        if idx < labels_owned.len() {
            // Show fewer labels to prevent overlap
            if idx == 0
                || idx == labels_owned.len() - 1
                || idx % (labels_owned.len() / 6).max(1) == 0
            {
                labels_owned[idx].clone()
            } else {
                String::new()
            }
        } else {
            String::new()
        }
    };

    chart
        .configure_mesh()
        .light_line_style(TRANSPARENT)
        .bold_line_style(options.grid_color)
        .axis_style(options.text_color)
        .label_style(
            ("sans-serif", 15)
                .into_font()
                .color(&options.text_color),
        )
        .x_label_formatter(&x_label_formatter)
        .draw()
        .map_err(wrap_draw)?;
    Ok(())
}

fn draw_legend<'a>(
    chart: &mut ChartContext<'a, BitMapBackend<'a>, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    options: &ChartOptions,
) -> Result<(), ChartError> {
    chart
        .configure_series_labels()
        .position(options.legend_position.series_label_position())
        .label_font(
            ("sans-serif", 15)
                .into_font()
                .color(&options.text_color),
        )
        .border_style(options.grid_color)
        .draw()
        .map_err(wrap_draw)?;
    Ok(())
}

fn color_or_fallback(hex: Option<&str>) -> Result<RGBAColor, ChartError> {
    match hex {
        Some(hex) => parse_color(hex).ok_or_else(|| ChartError::InvalidColor(hex.to_string())),
        None => Ok(UNASSIGNED_COLOR.to_rgba()),
    }
}

fn value_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for value in values {
        min = min.min(value);
        max = max.max(value);
    }
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }

    let span = max - min;
    let pad = if span == 0.0 {
        max.abs().max(1.0) * 0.1
    } else {
        span * 0.1
    };
    (min - pad, max + pad)
}
