//! Chart configuration and construction: theme-aware options, the factory
//! entry points and the instance registry, with plotters rasterization behind
//! them.

pub mod factory;
pub mod options;
pub mod registry;
pub mod render;

#[cfg(test)]
mod tests;

pub use factory::{create_bar_chart, create_line_chart, create_pie_chart};
pub use options::{ChartOptions, ChartOptionsOverride, LegendPosition, TooltipMode};
pub use registry::{Chart, ChartRegistry};
pub use render::ChartError;
