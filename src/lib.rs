//! # Investment Dashboard Presentation Library
//!
//! `investview` is the presentation layer of an investment tracking dashboard.
//! It formats display values (currency, percentages, dates) the way the Italian
//! locale expects, and builds theme-aware charts (line, pie, bar) that a GUI
//! shell renders as textures.
//!
//! ## Features
//!
//! - Locale formatting for currency, percentage and date values
//! - Light and dark ten-color chart palettes
//! - Theme-parameterized chart options with caller overrides
//! - A chart factory and instance registry with plotters rasterization
//! - A page view model with an auto-formatting pass for tagged elements
//! - Theme-change teardown with a custom event for chart rebuilds
//! - A delete-confirmation helper
//!
//! ## Example
//!
//! ```no_run
//! use investview::charting::{create_line_chart, ChartOptionsOverride, ChartRegistry};
//! use investview::types::Dataset;
//! use investview::view::{Canvas, Page};
//!
//! let mut page = Page::new();
//! page.canvases.push(Canvas::new("valueChart", "value_chart.png"));
//! let mut registry = ChartRegistry::new();
//!
//! let labels = vec!["Gen".to_string(), "Feb".to_string(), "Mar".to_string()];
//! let datasets = vec![Dataset::new("Portafoglio", vec![100.0, 104.2, 101.7])];
//! let handle = create_line_chart(
//!     &page,
//!     &mut registry,
//!     "valueChart",
//!     labels,
//!     datasets,
//!     ChartOptionsOverride::default(),
//! )
//! .expect("canvas exists");
//! registry.render(&handle).unwrap();
//! ```

pub mod app;
pub mod charting;
pub mod format;
pub mod theme;
pub mod types;
pub mod view;

// Re-export main types for convenience
pub use app::App as InvestViewApp;
pub use charting::{ChartOptions, ChartRegistry};
pub use types::{ChartData, ChartHandle, ChartKind, Dataset};
pub use view::Page;
