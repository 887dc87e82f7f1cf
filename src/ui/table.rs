use eframe::egui::{self, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::aggregate::ScopeSummaryRow;
use crate::data::model::COLUMN_NAMES;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Filtered projects table
// ---------------------------------------------------------------------------

/// Render the filtered view as a scrollable table, all twelve columns in
/// source order.
pub fn projects_table(ui: &mut Ui, state: &AppState) {
    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a project list to begin  (File → Open…)");
            });
            return;
        }
    };

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .columns(Column::auto().at_least(60.0), COLUMN_NAMES.len())
        .header(20.0, |mut header| {
            for name in COLUMN_NAMES {
                header.col(|ui| {
                    ui.strong(name);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, state.visible_indices.len(), |mut row| {
                let record = &dataset.records[state.visible_indices[row.index()]];
                for col in 0..COLUMN_NAMES.len() {
                    row.col(|ui| {
                        ui.label(record.column(col).unwrap_or(""));
                    });
                }
            });
        });
}

// ---------------------------------------------------------------------------
// Scope summary table
// ---------------------------------------------------------------------------

/// Render the in-scope/out-of-scope summary (Count, Percentage).
pub fn scope_summary_table(ui: &mut Ui, rows: &[ScopeSummaryRow]) {
    if rows.is_empty() {
        ui.label("No projects match the current filters.");
        return;
    }

    egui::Grid::new("scope_summary")
        .striped(true)
        .spacing([24.0, 4.0])
        .show(ui, |ui: &mut Ui| {
            ui.strong("");
            ui.strong("Count");
            ui.strong("Percentage");
            ui.end_row();

            for row in rows {
                ui.label(&row.label);
                ui.label(row.count.to_string());
                ui.label(format!("{:.2}%", row.percent));
                ui.end_row();
            }
        });
}
