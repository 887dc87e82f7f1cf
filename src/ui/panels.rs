use std::collections::BTreeSet;

use eframe::egui::{self, Color32, ComboBox, RichText, ScrollArea, Ui};

use crate::data::export;
use crate::data::filter::FlagChoice;
use crate::data::loader;
use crate::state::{AppState, DashboardView};

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel. Any widget change rebuilds the criteria and
/// triggers a full recompute of the filtered view.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filter Projects");
    ui.separator();

    // Clone the option sets so we can mutate the criteria inside the loop.
    let (sectors, locations, proposers) = match &state.dataset {
        Some(ds) => (
            ds.sectors.clone(),
            ds.locations.clone(),
            ds.proposers.clone(),
        ),
        None => {
            ui.label("No project list loaded.");
            return;
        }
    };

    let mut changed = false;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            changed |= category_filter(ui, "Sector", &sectors, &mut state.criteria.sectors);
            changed |= category_filter(ui, "Location", &locations, &mut state.criteria.locations);
            changed |= category_filter(ui, "Proposer", &proposers, &mut state.criteria.proposers);

            ui.separator();
            changed |= flag_combo(ui, "In Scope?", "in_scope", &mut state.criteria.in_scope);
            changed |= flag_combo(ui, "Cost < $4M?", "cost_4m", &mut state.criteria.cost_under_4m);
            changed |= flag_combo(ui, "Cost < $2M?", "cost_2m", &mut state.criteria.cost_under_2m);
            changed |= flag_combo(ui, "Cost < $1M?", "cost_1m", &mut state.criteria.cost_under_1m);
            changed |= flag_combo(
                ui,
                "Cost < $0.5M?",
                "cost_0_5m",
                &mut state.criteria.cost_under_0_5m,
            );
        });

    if changed {
        state.refilter();
    }
}

/// Collapsible multi-select for one categorical column. An empty selection
/// means no constraint.
fn category_filter(
    ui: &mut Ui,
    label: &str,
    options: &BTreeSet<String>,
    selected: &mut BTreeSet<String>,
) -> bool {
    let mut changed = false;

    let header_text = format!("{label}  ({}/{})", selected.len(), options.len());
    egui::CollapsingHeader::new(RichText::new(header_text).strong())
        .id_salt(label)
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            if ui.small_button("Clear").clicked() && !selected.is_empty() {
                selected.clear();
                changed = true;
            }

            for value in options {
                let mut checked = selected.contains(value);
                if ui.checkbox(&mut checked, value).changed() {
                    if checked {
                        selected.insert(value.clone());
                    } else {
                        selected.remove(value);
                    }
                    changed = true;
                }
            }
        });

    changed
}

/// Tri-state All/Y/N combo for one flag column.
fn flag_combo(ui: &mut Ui, label: &str, id: &str, choice: &mut FlagChoice) -> bool {
    let mut changed = false;
    ui.horizontal(|ui: &mut Ui| {
        ui.label(label);
        ComboBox::from_id_salt(id)
            .selected_text(choice.label())
            .show_ui(ui, |ui: &mut Ui| {
                for option in FlagChoice::ALL {
                    if ui.selectable_value(choice, option, option.label()).changed() {
                        changed = true;
                    }
                }
            });
    });
    changed
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui
                .add_enabled(state.dataset.is_some(), egui::Button::new("Export Filtered…"))
                .clicked()
            {
                export_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        for view in DashboardView::ALL {
            if ui
                .selectable_label(state.view == view, view.label())
                .clicked()
            {
                state.view = view;
            }
        }

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} projects loaded, {} shown",
                ds.len(),
                state.visible_count()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open project list")
        .add_filter("Supported files", &["xlsx", "xlsm", "csv"])
        .add_filter("Excel workbook", &["xlsx", "xlsm"])
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} projects across {} sectors",
                    dataset.len(),
                    dataset.sectors.len()
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e}");
                state.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}

pub fn export_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export filtered projects")
        .set_file_name(export::DEFAULT_FILE_NAME)
        .add_filter("Excel workbook", &["xlsx"])
        .save_file();

    if let Some(path) = file {
        match state.export_filtered(&path) {
            Ok(()) => {
                log::info!(
                    "Exported {} projects to {}",
                    state.visible_count(),
                    path.display()
                );
                state.status_message = Some(format!(
                    "Exported {} projects to {}",
                    state.visible_count(),
                    path.display()
                ));
            }
            Err(e) => {
                log::error!("Export failed: {e}");
                state.status_message = Some(format!("Export failed: {e}"));
            }
        }
    }
}
