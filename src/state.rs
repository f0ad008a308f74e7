use std::path::Path;

use crate::chart::ChartSpec;
use crate::export;

// ---------------------------------------------------------------------------
// Viewer state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    Info(String),
    Error(String),
}

/// The window's state, independent of rendering.
pub struct ViewerState {
    /// The chart being shown.
    pub chart: ChartSpec,

    /// Whether the data table panel is open.
    pub show_table: bool,

    /// Outcome of the last save, shown in the top bar.
    pub status: Option<Status>,
}

impl ViewerState {
    pub fn new(chart: ChartSpec) -> Self {
        Self {
            chart,
            show_table: false,
            status: None,
        }
    }

    pub fn toggle_bar_labels(&mut self) {
        self.chart.bar_labels = !self.chart.bar_labels;
    }

    pub fn toggle_table(&mut self) {
        self.show_table = !self.show_table;
    }

    /// Write the chart as currently configured to `path`.
    pub fn save_to(&mut self, path: &Path) {
        match export::save_chart(&self.chart, path) {
            Ok(()) => {
                self.status = Some(Status::Info(format!("Saved {}", path.display())));
            }
            Err(e) => {
                log::error!("Failed to save chart: {e:#}");
                self.status = Some(Status::Error(format!("Error: {e:#}")));
            }
        }
    }
}
