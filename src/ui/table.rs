use eframe::egui::{Align, Layout, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::AccidentDataset;

/// Render the filtered records as a scrollable table, every column included.
pub fn filtered_table(ui: &mut Ui, dataset: &AccidentDataset, visible: &[usize]) {
    if dataset.columns.is_empty() {
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .cell_layout(Layout::left_to_right(Align::Center))
        .columns(Column::auto().at_least(70.0), dataset.columns.len())
        .max_scroll_height(280.0)
        .header(20.0, |mut header| {
            for col in &dataset.columns {
                header.col(|ui| {
                    ui.strong(col);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, visible.len(), |mut row| {
                let rec = &dataset.records[visible[row.index()]];
                for cell in &rec.cells {
                    row.col(|ui| {
                        ui.label(cell.to_string());
                    });
                }
            });
        });
}
