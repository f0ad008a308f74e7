use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::{Status, ViewerState};

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut ViewerState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Save as…").clicked() {
                save_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} rows, {} bars",
            state.chart.rows.len(),
            state.chart.bars().len()
        ));

        ui.separator();

        if ui
            .selectable_label(state.chart.bar_labels, "Bar labels")
            .clicked()
        {
            state.toggle_bar_labels();
        }

        if ui.selectable_label(state.show_table, "Data").clicked() {
            state.toggle_table();
        }

        match &state.status {
            Some(Status::Info(msg)) => {
                ui.label(msg);
            }
            Some(Status::Error(msg)) => {
                ui.label(RichText::new(msg).color(Color32::RED));
            }
            None => {}
        }
    });
}

// ---------------------------------------------------------------------------
// Right side panel – rows behind the chart
// ---------------------------------------------------------------------------

pub fn data_panel(ui: &mut Ui, state: &ViewerState) {
    ui.heading("Data");
    ui.separator();

    let rows = &state.chart.rows;
    if rows.is_empty() {
        ui.label("No rows.");
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .columns(Column::auto(), 4)
        .header(20.0, |mut header| {
            for name in ["function", "parallelism", "optimization", "speedup"] {
                header.col(|ui: &mut Ui| {
                    ui.strong(name);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, rows.len(), |mut row| {
                let r = &rows[row.index()];
                row.col(|ui: &mut Ui| {
                    ui.label(&r.function);
                });
                row.col(|ui: &mut Ui| {
                    ui.label(r.parallelism.to_string());
                });
                row.col(|ui: &mut Ui| {
                    ui.label(&r.optimization);
                });
                row.col(|ui: &mut Ui| {
                    ui.label(format!("{:.3}", r.speedup));
                });
            });
        });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn save_file_dialog(state: &mut ViewerState) {
    let file = rfd::FileDialog::new()
        .set_title("Save chart")
        .set_file_name("speedup.png")
        .add_filter("PNG image", &["png"])
        .add_filter("SVG image", &["svg"])
        .save_file();

    if let Some(path) = file {
        state.save_to(&path);
    }
}
