use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::aggregate::{cause_distribution, visible_causes, yearly_trend};
use crate::state::AppState;
use crate::ui::{plot, table};

// ---------------------------------------------------------------------------
// Trend page – yearly line chart for one selected cause
// ---------------------------------------------------------------------------

pub fn trend_page(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Yearly Trend of Accident Causes");
    ui.add_space(4.0);

    let causes = match &state.dataset {
        Some(ds) => visible_causes(ds, &state.filter.visible),
        None => {
            no_dataset_placeholder(ui);
            return;
        }
    };

    if causes.is_empty() {
        ui.label("No causes present in the current filter.");
        return;
    }

    // Keep the selection valid when the filtered cause list shrinks.
    let mut selected = match &state.selected_cause {
        Some(c) if causes.contains(c) => c.clone(),
        _ => causes[0].clone(),
    };

    ui.horizontal(|ui: &mut Ui| {
        ui.label("Select a Cause to View Trend");
        egui::ComboBox::from_id_salt("trend_cause")
            .selected_text(&selected)
            .show_ui(ui, |ui: &mut Ui| {
                for cause in &causes {
                    ui.selectable_value(&mut selected, cause.clone(), cause);
                }
            });
    });
    state.selected_cause = Some(selected.clone());

    let Some(ds) = &state.dataset else { return };
    let trend = yearly_trend(ds, &state.filter.visible, &selected);

    if trend.is_empty() {
        ui.add_space(8.0);
        ui.label(
            RichText::new(format!(
                "No data found for cause: '{selected}' in selected filters."
            ))
            .color(Color32::YELLOW),
        );
        return;
    }

    let color = state.colors.color_for(&selected);
    plot::trend_line(ui, &selected, &trend, color);
}

// ---------------------------------------------------------------------------
// Distribution page – filtered data table and cause pie chart
// ---------------------------------------------------------------------------

pub fn distribution_page(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Traffic Incidents Dashboard");
    ui.add_space(4.0);

    let Some(ds) = &state.dataset else {
        no_dataset_placeholder(ui);
        return;
    };

    ui.strong("Filtered Data");
    table::filtered_table(ui, ds, &state.filter.visible);
    ui.separator();

    ui.strong("Accident Causes Distribution");
    let slices = cause_distribution(ds, &state.filter.visible);
    plot::distribution_pie(ui, &slices, &state.colors);
}

fn no_dataset_placeholder(ui: &mut Ui) {
    ui.centered_and_justified(|ui: &mut Ui| {
        ui.heading("No dataset loaded  (File → Open…)");
    });
}
