use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Plot};

use crate::color::generate_palette;
use crate::data::aggregate::CategoryCount;

// ---------------------------------------------------------------------------
// Categorical bar chart
// ---------------------------------------------------------------------------

/// Render one categorical count distribution as a bar chart: one bar per
/// category, y-axis "Number of Projects", category labels on x.
pub fn category_bar_chart(ui: &mut Ui, id: &str, x_label: &str, counts: &[CategoryCount]) {
    if counts.is_empty() {
        ui.label("No data for the current selection.");
        return;
    }

    let palette = generate_palette(counts.len());
    let bars: Vec<Bar> = counts
        .iter()
        .enumerate()
        .map(|(i, c)| {
            Bar::new(i as f64, c.count as f64)
                .name(&c.label)
                .width(0.6)
                .fill(palette[i])
        })
        .collect();

    let labels: Vec<String> = counts.iter().map(|c| c.label.clone()).collect();

    Plot::new(id.to_string())
        .height(260.0)
        .x_axis_label(x_label)
        .y_axis_label("Number of Projects")
        .x_axis_formatter(move |mark, _range| {
            // Only integer grid marks correspond to a category.
            let idx = mark.value.round();
            if idx < 0.0 || (mark.value - idx).abs() > 1e-6 {
                return String::new();
            }
            labels.get(idx as usize).cloned().unwrap_or_default()
        })
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}
