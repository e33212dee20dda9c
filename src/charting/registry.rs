//! The chart instance registry.
//!
//! Stands in for the charting backend's global instance table, owned as an
//! injected value instead of process-global state: the factory registers
//! charts here and the theme-change listener tears them all down.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::charting::options::ChartOptions;
use crate::charting::render::{self, ChartError};
use crate::types::{ChartData, ChartHandle, ChartKind};

/// A chart instance: kind, payload, merged options and its raster target.
#[derive(Clone, Debug)]
pub struct Chart {
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
    /// Where the rendered PNG lands, taken from the target canvas
    pub plot_path: PathBuf,
}

/// Owns every live chart instance, keyed by target element id.
#[derive(Default)]
pub struct ChartRegistry {
    instances: HashMap<String, Chart>,
}

impl ChartRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a chart for `element_id`, replacing any previous instance.
    pub fn create(&mut self, element_id: &str, chart: Chart) -> ChartHandle {
        self.instances.insert(element_id.to_string(), chart);
        ChartHandle(element_id.to_string())
    }

    pub fn get(&self, handle: &ChartHandle) -> Option<&Chart> {
        self.instances.get(handle.element_id())
    }

    pub fn get_element(&self, element_id: &str) -> Option<&Chart> {
        self.instances.get(element_id)
    }

    /// Rasterize one chart to its plot path.
    pub fn render(&self, handle: &ChartHandle) -> Result<(), ChartError> {
        let chart = self
            .instances
            .get(handle.element_id())
            .ok_or_else(|| ChartError::UnknownChart(handle.element_id().to_string()))?;
        render::render_chart(chart)
    }

    /// Rasterize every registered chart.
    pub fn render_all(&self) -> Result<(), ChartError> {
        for chart in self.instances.values() {
            render::render_chart(chart)?;
        }
        Ok(())
    }

    /// Drop every instance and remove its rendered plot file.
    pub fn destroy_all(&mut self) {
        for chart in self.instances.values() {
            let _ = std::fs::remove_file(&chart.plot_path);
        }
        self.instances.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Chart)> {
        self.instances.iter()
    }

    pub fn handles(&self) -> impl Iterator<Item = ChartHandle> + '_ {
        self.instances.keys().cloned().map(ChartHandle)
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}
