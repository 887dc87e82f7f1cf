use eframe::egui::{self, ScrollArea, Ui};

use crate::state::{AppState, DashboardView};
use crate::ui::{charts, panels, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct ProjectDashApp {
    pub state: AppState,
}

impl eframe::App for ProjectDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: active view ----
        egui::CentralPanel::default().show(ctx, |ui| match self.state.view {
            DashboardView::Projects => {
                ui.heading("Infrastructure Projects");
                ui.separator();
                table::projects_table(ui, &self.state);
            }
            DashboardView::Summary => {
                ui.heading("In-Scope vs Out-of-Scope Projects");
                ui.separator();
                table::scope_summary_table(ui, &self.state.scope_summary);
            }
            DashboardView::Charts => charts_view(ui, &self.state),
        });
    }
}

fn charts_view(ui: &mut Ui, state: &AppState) {
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("Projects by Sector");
            charts::category_bar_chart(ui, "sector_chart", "Sector", &state.sector_counts);
            ui.separator();

            ui.heading("Projects by Location (Top 10)");
            charts::category_bar_chart(ui, "location_chart", "Location", &state.location_counts);
            ui.separator();

            // Drawn from the unfiltered base dataset, so it stays put while
            // the sidebar filters change.
            ui.heading("Projects Under $0.5M by Sector");
            charts::category_bar_chart(
                ui,
                "cost_half_chart",
                "Sector",
                &state.cost_half_counts,
            );
        });
}
