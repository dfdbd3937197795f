use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::{AppState, Page};

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the sidebar filter controls.
///
/// Sliders and checkboxes only edit the *pending* selection; the shared
/// filter moves on "Apply Filter" / "Reset".
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filter Options");
    ui.separator();

    let (bounds, causes) = match &state.dataset {
        Some(ds) => (
            ds.year_bounds,
            ds.cause_labels().map(str::to_string).collect::<Vec<_>>(),
        ),
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };
    let (min_year, max_year) = bounds;

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Year range ----
            ui.strong("Years");
            let (mut from, mut to) = state.pending.years;
            ui.add(egui::Slider::new(&mut from, min_year..=max_year).text("from"));
            ui.add(egui::Slider::new(&mut to, min_year..=max_year).text("to"));
            state.pending.years = (from.min(to), from.max(to));
            ui.separator();

            // ---- Cause multi-select ----
            let n_selected = state.pending.causes.len();
            let header_text = format!("Main Cause  ({n_selected}/{})", causes.len());
            egui::CollapsingHeader::new(RichText::new(header_text).strong())
                .id_salt("cause_filter")
                .default_open(true)
                .show(ui, |ui: &mut Ui| {
                    ui.label("Empty selection means all causes.");
                    for cause in &causes {
                        let mut checked = state.pending.causes.contains(cause);
                        if ui.checkbox(&mut checked, cause).changed() {
                            state.toggle_pending_cause(cause);
                        }
                    }
                });
            ui.separator();

            // ---- Commit buttons ----
            ui.horizontal(|ui: &mut Ui| {
                if ui.button("Apply Filter").clicked() {
                    state.apply_filter();
                }
                if ui.button("Reset").clicked() {
                    state.reset_filter();
                }
            });
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu bar with page tabs and the status message.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Reload").clicked() {
                state.reload();
                ui.close_menu();
            }
        });

        ui.separator();

        if ui
            .selectable_label(state.page == Page::Trend, "Trend")
            .clicked()
        {
            state.page = Page::Trend;
        }
        if ui
            .selectable_label(state.page == Page::Distribution, "Distribution")
            .clicked()
        {
            state.page = Page::Distribution;
        }

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} records loaded, {} visible",
                ds.len(),
                state.filter.visible.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open accident data")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.load_from(&path);
    }
}
