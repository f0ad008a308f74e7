use anyhow::{anyhow, Result};
use eframe::egui;

use crate::chart::ChartSpec;
use crate::state::ViewerState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SpeedupViewer {
    pub state: ViewerState,
}

impl SpeedupViewer {
    pub fn new(chart: ChartSpec) -> Self {
        Self {
            state: ViewerState::new(chart),
        }
    }
}

impl eframe::App for SpeedupViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Right side panel: rows behind the chart ----
        if self.state.show_table {
            egui::SidePanel::right("data_panel")
                .default_width(320.0)
                .resizable(true)
                .show(ctx, |ui| {
                    panels::data_panel(ui, &self.state);
                });
        }

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::speedup_plot(ui, &self.state);
        });
    }
}

/// Open the chart in a window and block until it is closed.
pub fn show(chart: ChartSpec) -> Result<()> {
    let title = chart.title.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };

    log::info!("Showing \"{title}\"");
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(SpeedupViewer::new(chart)))),
    )
    .map_err(|e| anyhow!("chart window failed: {e}"))
}
