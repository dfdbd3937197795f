use std::f32::consts::TAU;

use eframe::egui::{self, Color32, Pos2, Sense, Shape, Stroke, Ui};
use egui_plot::{Line, MarkerShape, Plot, PlotPoints, Points};

use crate::color::CauseColors;
use crate::data::aggregate::CauseCount;

// ---------------------------------------------------------------------------
// Trend line chart
// ---------------------------------------------------------------------------

/// Render the per-year incident counts for one cause as a line with markers.
pub fn trend_line(ui: &mut Ui, cause: &str, trend: &[(i64, u64)], color: Color32) {
    let points: Vec<[f64; 2]> = trend
        .iter()
        .map(|&(year, count)| [year as f64, count as f64])
        .collect();

    Plot::new("trend_plot")
        .x_axis_label("Year")
        .y_axis_label("Incidents")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            let line = Line::new(PlotPoints::from(points.clone()))
                .name(cause)
                .color(color)
                .width(2.0);
            plot_ui.line(line);

            let markers = Points::new(PlotPoints::from(points))
                .name(cause)
                .color(color)
                .shape(MarkerShape::Circle)
                .radius(3.5);
            plot_ui.points(markers);
        });
}

// ---------------------------------------------------------------------------
// Distribution pie chart
// ---------------------------------------------------------------------------

/// Render the cause distribution as a pie chart with a legend alongside.
///
/// Drawn directly with the painter; slices start at twelve o'clock and run
/// clockwise in the (already descending) order of `slices`.
pub fn distribution_pie(ui: &mut Ui, slices: &[CauseCount], colors: &CauseColors) {
    let total: u64 = slices.iter().map(|s| s.count).sum();
    if total == 0 {
        ui.label("No causes to chart.");
        return;
    }

    ui.horizontal(|ui: &mut Ui| {
        let size = ui.available_height().clamp(180.0, 320.0);
        let (rect, _) =
            ui.allocate_exact_size(egui::vec2(size, size), Sense::hover());
        let painter = ui.painter_at(rect);

        let center = rect.center();
        let radius = rect.width().min(rect.height()) * 0.45;

        let mut angle = -TAU / 4.0;
        for slice in slices {
            let sweep = (slice.count as f32 / total as f32) * TAU;
            let color = colors.color_for(&slice.label);
            // convex_polygon needs convex input, so wide slices are split
            // into quarter-turn sectors.
            let mut remaining = sweep;
            while remaining > f32::EPSILON {
                let step = remaining.min(TAU / 4.0);
                painter.add(pie_sector(center, radius, angle, angle + step, color));
                angle += step;
                remaining -= step;
            }
        }

        // Legend with counts and percentages.
        ui.vertical(|ui: &mut Ui| {
            for slice in slices {
                let pct = 100.0 * slice.count as f64 / total as f64;
                ui.horizontal(|ui: &mut Ui| {
                    let (swatch, _) =
                        ui.allocate_exact_size(egui::vec2(12.0, 12.0), Sense::hover());
                    ui.painter_at(swatch)
                        .rect_filled(swatch, 2.0, colors.color_for(&slice.label));
                    ui.label(format!("{}  {} ({pct:.1}%)", slice.label, slice.count));
                });
            }
        });
    });
}

/// One filled sector of the pie, approximated by short arc segments.
fn pie_sector(center: Pos2, radius: f32, start: f32, end: f32, color: Color32) -> Shape {
    let steps = (((end - start) / 0.05).ceil() as usize).max(2);
    let mut points = Vec::with_capacity(steps + 2);
    points.push(center);
    for i in 0..=steps {
        let t = start + (end - start) * (i as f32 / steps as f32);
        points.push(Pos2::new(
            center.x + radius * t.cos(),
            center.y + radius * t.sin(),
        ));
    }
    Shape::convex_polygon(points, color, Stroke::NONE)
}
