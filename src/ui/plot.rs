use std::ops::RangeInclusive;

use eframe::egui::{Align2, Ui};
use egui_plot::{Bar, BarChart, Corner, GridMark, Legend, Plot, PlotPoint, Text};

use crate::chart::category_index;
use crate::color::to_color32;
use crate::state::ViewerState;

// ---------------------------------------------------------------------------
// Speedup bar chart (central panel)
// ---------------------------------------------------------------------------

/// Render the grouped bar chart in the central panel.
pub fn speedup_plot(ui: &mut Ui, state: &ViewerState) {
    let chart = &state.chart;

    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(&chart.title);
    });

    if chart.groups.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("No rows left after filtering.");
        });
        return;
    }

    let style = chart.style;
    let text_color = to_color32(style.text);
    ui.visuals_mut().extreme_bg_color = to_color32(style.axes_background);

    let names: Vec<String> = chart.categories.iter().map(|c| c.to_string()).collect();
    let n_categories = names.len() as f64;
    let bars = chart.bars();

    Plot::new("speedup_plot")
        .legend(Legend::default().position(Corner::LeftTop))
        .x_axis_label(chart.x_label)
        .y_axis_label(chart.y_label)
        .show_grid(style.show_grid)
        .include_x(-0.5)
        .include_x(n_categories - 0.5)
        .include_y(0.0)
        .include_y(chart.y_max())
        .x_axis_formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
            category_index(mark.value)
                .and_then(|i| names.get(i).cloned())
                .unwrap_or_default()
        })
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (g, group) in chart.groups.iter().enumerate() {
                let group_bars: Vec<Bar> = bars
                    .iter()
                    .filter(|b| b.group == g)
                    .map(|b| {
                        Bar::new(b.center, b.value)
                            .width(b.width)
                            .name(format!("{} @ {}", group.label, chart.categories[b.category]))
                    })
                    .collect();

                plot_ui.bar_chart(
                    BarChart::new(group_bars)
                        .name(&group.label)
                        .color(to_color32(group.color)),
                );
            }

            if chart.bar_labels {
                for b in &bars {
                    plot_ui.text(
                        Text::new(PlotPoint::new(b.center, b.value), format!("{:.2}", b.value))
                            .anchor(Align2::CENTER_BOTTOM)
                            .color(text_color),
                    );
                }
            }
        });
}
