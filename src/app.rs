use eframe::egui;

use crate::config::AppConfig;
use crate::state::{AppState, Page};
use crate::ui::{pages, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct TrafficIncidentsApp {
    pub state: AppState,
}

impl TrafficIncidentsApp {
    pub fn new(config: AppConfig) -> Self {
        Self {
            state: AppState::new(config.data_path),
        }
    }
}

impl eframe::App for TrafficIncidentsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar and page tabs ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: shared filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: active page ----
        egui::CentralPanel::default().show(ctx, |ui| match self.state.page {
            Page::Trend => pages::trend_page(ui, &mut self.state),
            Page::Distribution => pages::distribution_page(ui, &mut self.state),
        });
    }
}
