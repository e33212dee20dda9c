use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

use super::*;
use crate::theme::{DARK_CHART_COLORS, LIGHT_CHART_COLORS};
use crate::types::{ChartKind, Dataset};
use crate::view::{Canvas, Page};

fn setup_page(temp_dir: &TempDir) -> Page {
    let mut page = Page::new();
    for id in ["valueChart", "allocationChart", "performanceChart"] {
        page.canvases
            .push(Canvas::new(id, temp_dir.path().join(format!("{id}.png"))));
    }
    page
}

#[test]
fn missing_canvas_returns_none() {
    let temp_dir = TempDir::new().unwrap();
    let page = setup_page(&temp_dir);
    let mut registry = ChartRegistry::new();

    let handle = create_line_chart(
        &page,
        &mut registry,
        "missing-id",
        Vec::new(),
        Vec::new(),
        ChartOptionsOverride::default(),
    );
    assert!(handle.is_none());
    assert!(registry.is_empty());
}

#[test]
fn line_datasets_cycle_through_palette() {
    let temp_dir = TempDir::new().unwrap();
    let page = setup_page(&temp_dir);
    let mut registry = ChartRegistry::new();

    // Twelve datasets against a ten-color palette
    let datasets: Vec<Dataset> = (0..12)
        .map(|i| Dataset::new(format!("serie {i}"), vec![1.0, 2.0]))
        .collect();
    let handle = create_line_chart(
        &page,
        &mut registry,
        "valueChart",
        vec!["a".to_string(), "b".to_string()],
        datasets,
        ChartOptionsOverride::default(),
    )
    .unwrap();

    let chart = registry.get(&handle).unwrap();
    assert_eq!(chart.kind, ChartKind::Line);
    for (i, dataset) in chart.data.datasets.iter().enumerate() {
        let expected = LIGHT_CHART_COLORS[i % LIGHT_CHART_COLORS.len()];
        assert_eq!(dataset.border_color.as_deref(), Some(expected));
        assert_eq!(
            dataset.background_color.as_deref(),
            Some(format!("{expected}20").as_str())
        );
    }
}

#[test]
fn bar_datasets_get_opaque_palette_fills() {
    let temp_dir = TempDir::new().unwrap();
    let page = setup_page(&temp_dir);
    let mut registry = ChartRegistry::new();

    let datasets = vec![
        Dataset::new("2023", vec![1.0, 2.0]),
        Dataset::new("2024", vec![2.0, 3.0]),
    ];
    let handle = create_bar_chart(
        &page,
        &mut registry,
        "performanceChart",
        vec!["a".to_string(), "b".to_string()],
        datasets,
        ChartOptionsOverride::default(),
    )
    .unwrap();

    let chart = registry.get(&handle).unwrap();
    assert_eq!(
        chart.data.datasets[0].background_color.as_deref(),
        Some(LIGHT_CHART_COLORS[0])
    );
    assert_eq!(
        chart.data.datasets[1].background_color.as_deref(),
        Some(LIGHT_CHART_COLORS[1])
    );
    // No stroke color on bars
    assert_eq!(chart.data.datasets[0].border_color, None);
}

#[test]
fn pie_slice_colors_truncate_to_data_length() {
    let temp_dir = TempDir::new().unwrap();
    let page = setup_page(&temp_dir);
    let mut registry = ChartRegistry::new();

    let handle = create_pie_chart(
        &page,
        &mut registry,
        "allocationChart",
        vec!["a".to_string(), "b".to_string(), "c".to_string()],
        vec![50.0, 30.0, 20.0],
        ChartOptionsOverride::default(),
    )
    .unwrap();
    let chart = registry.get(&handle).unwrap();
    assert_eq!(chart.data.slice_colors.len(), 3);
    assert_eq!(chart.data.slice_colors[0], LIGHT_CHART_COLORS[0]);

    // More slices than palette entries: colors stop at the palette, no wraparound
    let handle = create_pie_chart(
        &page,
        &mut registry,
        "allocationChart",
        (0..12).map(|i| format!("s{i}")).collect(),
        vec![1.0; 12],
        ChartOptionsOverride::default(),
    )
    .unwrap();
    let chart = registry.get(&handle).unwrap();
    assert_eq!(chart.data.slice_colors.len(), 10);
}

#[test]
fn dark_page_selects_dark_palette() {
    let temp_dir = TempDir::new().unwrap();
    let mut page = setup_page(&temp_dir);
    page.dark_mode = true;
    let mut registry = ChartRegistry::new();

    let handle = create_line_chart(
        &page,
        &mut registry,
        "valueChart",
        vec!["a".to_string()],
        vec![Dataset::new("serie", vec![1.0])],
        ChartOptionsOverride::default(),
    )
    .unwrap();
    let chart = registry.get(&handle).unwrap();
    assert_eq!(
        chart.data.datasets[0].border_color.as_deref(),
        Some(DARK_CHART_COLORS[0])
    );
}

#[test]
fn caller_overrides_win_over_theme_options() {
    let temp_dir = TempDir::new().unwrap();
    let page = setup_page(&temp_dir);
    let mut registry = ChartRegistry::new();

    let overrides = ChartOptionsOverride {
        responsive: Some(false),
        legend_position: Some(LegendPosition::Right),
        ..Default::default()
    };
    let handle = create_bar_chart(
        &page,
        &mut registry,
        "performanceChart",
        vec!["a".to_string()],
        vec![Dataset::new("serie", vec![1.0])],
        overrides,
    )
    .unwrap();
    let chart = registry.get(&handle).unwrap();
    assert!(!chart.options.responsive);
    assert_eq!(chart.options.legend_position, LegendPosition::Right);
    assert_eq!(chart.options.tooltip_mode, TooltipMode::Index);
}

#[test]
fn renders_each_kind_to_png() {
    let temp_dir = TempDir::new().unwrap();
    let page = setup_page(&temp_dir);
    let mut registry = ChartRegistry::new();

    let labels: Vec<String> = ["Gen", "Feb", "Mar", "Apr"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    create_line_chart(
        &page,
        &mut registry,
        "valueChart",
        labels.clone(),
        vec![
            Dataset::new("Portafoglio", vec![100.0, 104.2, 101.7, 108.9]),
            Dataset::new("Benchmark", vec![100.0, 101.1, 102.3, 103.0]),
        ],
        ChartOptionsOverride::default(),
    )
    .unwrap();
    create_pie_chart(
        &page,
        &mut registry,
        "allocationChart",
        vec!["Azioni".to_string(), "Obbligazioni".to_string()],
        vec![70.0, 30.0],
        ChartOptionsOverride::default(),
    )
    .unwrap();
    create_bar_chart(
        &page,
        &mut registry,
        "performanceChart",
        labels,
        vec![Dataset::new("Rendimento %", vec![4.2, -1.1, 2.4, 7.1])],
        ChartOptionsOverride::default(),
    )
    .unwrap();

    registry.render_all().unwrap();

    for canvas in &page.canvases {
        let metadata = fs::metadata(&canvas.plot_path).unwrap();
        assert!(metadata.len() > 0);
    }
}

#[test]
fn renders_with_each_legend_position() {
    let temp_dir = TempDir::new().unwrap();
    let page = setup_page(&temp_dir);
    let mut registry = ChartRegistry::new();

    for position in [
        LegendPosition::Top,
        LegendPosition::Bottom,
        LegendPosition::Left,
        LegendPosition::Right,
    ] {
        let handle = create_line_chart(
            &page,
            &mut registry,
            "valueChart",
            vec!["a".to_string(), "b".to_string()],
            vec![Dataset::new("Portafoglio", vec![1.0, 2.0])],
            ChartOptionsOverride {
                legend_position: Some(position),
                ..Default::default()
            },
        )
        .unwrap();
        registry.render(&handle).unwrap();
        let path = &page.canvas("valueChart").unwrap().plot_path;
        assert!(fs::metadata(path).unwrap().len() > 0);
    }
}

#[test]
fn invalid_dataset_color_surfaces_as_error() {
    let temp_dir = TempDir::new().unwrap();
    let page = setup_page(&temp_dir);
    let mut registry = ChartRegistry::new();

    let mut dataset = Dataset::new("serie", vec![1.0, 2.0]);
    dataset.border_color = Some("#€€".to_string());
    dataset.background_color = Some("#€€".to_string());
    let chart = Chart {
        kind: ChartKind::Line,
        data: crate::types::ChartData {
            labels: vec!["a".to_string(), "b".to_string()],
            datasets: vec![dataset],
            slice_colors: Vec::new(),
        },
        options: ChartOptions::for_theme(false),
        plot_path: page.canvas("valueChart").unwrap().plot_path.clone(),
    };
    let handle = registry.create("valueChart", chart);
    let err = registry.render(&handle).unwrap_err();
    assert!(matches!(err, ChartError::InvalidColor(_)));
}

#[test]
fn renders_with_empty_data() {
    let temp_dir = TempDir::new().unwrap();
    let page = setup_page(&temp_dir);
    let mut registry = ChartRegistry::new();

    let handle = create_line_chart(
        &page,
        &mut registry,
        "valueChart",
        Vec::new(),
        Vec::new(),
        ChartOptionsOverride::default(),
    )
    .unwrap();
    assert!(registry.render(&handle).is_ok());
}

#[test]
fn destroy_all_clears_instances_and_plot_files() {
    let temp_dir = TempDir::new().unwrap();
    let page = setup_page(&temp_dir);
    let mut registry = ChartRegistry::new();

    let handle = create_pie_chart(
        &page,
        &mut registry,
        "allocationChart",
        vec!["a".to_string()],
        vec![1.0],
        ChartOptionsOverride::default(),
    )
    .unwrap();
    registry.render(&handle).unwrap();
    let path = page.canvas("allocationChart").unwrap().plot_path.clone();
    assert!(path.exists());

    registry.destroy_all();
    assert!(registry.is_empty());
    assert!(!path.exists());
}

#[test]
fn rendering_an_unknown_handle_fails() {
    let registry = ChartRegistry::new();
    let err = registry
        .render(&crate::types::ChartHandle("ghost".to_string()))
        .unwrap_err();
    assert!(matches!(err, ChartError::UnknownChart(_)));
}

#[test]
fn dataset_payload_deserializes_from_page_json() {
    let payload = r##"[
        {"label": "Azioni", "data": [1.0, 2.5]},
        {"label": "ETF", "data": [3.0], "borderColor": "#3498db"}
    ]"##;
    let datasets: Vec<Dataset> = serde_json::from_str(payload).unwrap();
    assert_eq!(datasets.len(), 2);
    assert_eq!(datasets[0].label, "Azioni");
    assert_eq!(datasets[1].border_color.as_deref(), Some("#3498db"));
    assert_eq!(datasets[0].background_color, None);
}
