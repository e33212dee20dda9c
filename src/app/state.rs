use eframe::App as EApp;
use egui::TextureHandle;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::charting::{
    create_bar_chart, create_line_chart, create_pie_chart, ChartOptionsOverride, ChartRegistry,
};
use crate::types::Dataset;
use crate::view::{
    Canvas, FormElement, Page, PageEvent, ViewElement, FORMAT_CURRENCY_CLASS, FORMAT_DATE_CLASS,
    FORMAT_PERCENTAGE_CLASS,
};

pub const VALUE_CHART_ID: &str = "portfolioValueChart";
pub const ALLOCATION_CHART_ID: &str = "allocationChart";
pub const PERFORMANCE_CHART_ID: &str = "performanceChart";
pub const DELETE_FORM_ID: &str = "delete-portfolio-form";

/// Main application state
pub struct App {
    pub page: Page,
    pub registry: ChartRegistry,
    pub chart_textures: HashMap<String, TextureHandle>,
    pub update_needed: bool,
    /// Portfolio value by date, oldest first
    pub value_history: Vec<(String, f64)>,
    /// Benchmark value on the same dates
    pub benchmark_history: Vec<(String, f64)>,
    /// Allocation by asset class
    pub allocation: Vec<(String, f64)>,
    /// Performance percentage by asset
    pub asset_performance: Vec<(String, f64)>,
}

impl App {
    /// Rebuild every chart from the current data and theme.
    pub fn rebuild_charts(&mut self) {
        let labels: Vec<String> = self.value_history.iter().map(|(d, _)| d.clone()).collect();
        let datasets = vec![
            Dataset::new(
                "Portafoglio",
                self.value_history.iter().map(|(_, v)| *v).collect(),
            ),
            Dataset::new(
                "Benchmark",
                self.benchmark_history.iter().map(|(_, v)| *v).collect(),
            ),
        ];
        create_line_chart(
            &self.page,
            &mut self.registry,
            VALUE_CHART_ID,
            labels,
            datasets,
            ChartOptionsOverride::default(),
        );

        let allocation_labels: Vec<String> =
            self.allocation.iter().map(|(name, _)| name.clone()).collect();
        let allocation_values: Vec<f64> = self.allocation.iter().map(|(_, v)| *v).collect();
        create_pie_chart(
            &self.page,
            &mut self.registry,
            ALLOCATION_CHART_ID,
            allocation_labels,
            allocation_values,
            ChartOptionsOverride::default(),
        );

        let performance_labels: Vec<String> = self
            .asset_performance
            .iter()
            .map(|(name, _)| name.clone())
            .collect();
        let performance_values: Vec<f64> =
            self.asset_performance.iter().map(|(_, v)| *v).collect();
        create_bar_chart(
            &self.page,
            &mut self.registry,
            PERFORMANCE_CHART_ID,
            performance_labels,
            vec![Dataset::new("Rendimento %", performance_values)],
            ChartOptionsOverride::default(),
        );

        self.update_needed = true;
    }

    /// The dark-mode toggle changed: tear down every chart instance and let
    /// listeners rebuild with the new palette.
    pub fn on_theme_toggled(&mut self) {
        self.registry.destroy_all();
        self.chart_textures.clear();
        self.page.dispatch(PageEvent::ThemeChanged);
    }

    /// Drain page events; a theme change recreates the charts.
    pub fn process_events(&mut self) {
        for event in self.page.drain_events() {
            match event {
                PageEvent::ThemeChanged => self.rebuild_charts(),
            }
        }
    }
}

fn plot_path(element_id: &str) -> PathBuf {
    std::env::temp_dir().join(format!("investview_{element_id}.png"))
}

impl Default for App {
    fn default() -> Self {
        let mut page = Page::new();
        page.elements = vec![
            ViewElement::new("totalValue", FORMAT_CURRENCY_CLASS, "125870.5"),
            ViewElement::new("overallPerformance", FORMAT_PERCENTAGE_CLASS, "12.34"),
            ViewElement::new("dailyPerformance", FORMAT_PERCENTAGE_CLASS, "-0.82"),
            ViewElement::new("lastUpdate", FORMAT_DATE_CLASS, "2024-03-14"),
        ];
        page.canvases = vec![
            Canvas::new(VALUE_CHART_ID, plot_path(VALUE_CHART_ID)),
            Canvas::new(ALLOCATION_CHART_ID, plot_path(ALLOCATION_CHART_ID)),
            Canvas::new(PERFORMANCE_CHART_ID, plot_path(PERFORMANCE_CHART_ID)),
        ];
        page.forms = vec![FormElement::new(DELETE_FORM_ID)];
        // Page-ready pass
        page.auto_format();

        let mut app = Self {
            page,
            registry: ChartRegistry::new(),
            chart_textures: HashMap::new(),
            update_needed: false,
            value_history: vec![
                ("2023-10".to_string(), 98500.0),
                ("2023-11".to_string(), 101200.0),
                ("2023-12".to_string(), 104800.0),
                ("2024-01".to_string(), 109300.0),
                ("2024-02".to_string(), 118400.0),
                ("2024-03".to_string(), 125870.5),
            ],
            benchmark_history: vec![
                ("2023-10".to_string(), 98500.0),
                ("2023-11".to_string(), 99800.0),
                ("2023-12".to_string(), 102100.0),
                ("2024-01".to_string(), 104900.0),
                ("2024-02".to_string(), 108700.0),
                ("2024-03".to_string(), 112300.0),
            ],
            allocation: vec![
                ("Azioni".to_string(), 55.0),
                ("Obbligazioni".to_string(), 25.0),
                ("ETF".to_string(), 12.0),
                ("Liquidità".to_string(), 8.0),
            ],
            asset_performance: vec![
                ("Azioni".to_string(), 14.2),
                ("Obbligazioni".to_string(), 2.8),
                ("ETF".to_string(), 9.6),
                ("Liquidità".to_string(), -1.1),
            ],
        };
        app.rebuild_charts();
        app
    }
}

/// Thread-safe wrapper around App for use with eframe
pub struct AppWrapper {
    pub app: Arc<Mutex<App>>,
}

impl EApp for AppWrapper {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Ok(mut app) = self.app.lock() {
            super::ui::draw_ui(&mut app, ctx);
        } else {
            eprintln!("Failed to acquire app lock in update");
        }
    }
}
