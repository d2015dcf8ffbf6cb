use eframe::egui;

use crate::classifier::Classifier;
use crate::color::LabelColors;
use crate::config::AppConfig;
use crate::state::AppState;
use crate::ui::panels;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct FakeCashApp {
    pub state: AppState,
    classifier: &'static dyn Classifier,
    config: AppConfig,
    colors: LabelColors,
}

impl FakeCashApp {
    pub fn new(classifier: &'static dyn Classifier, config: AppConfig) -> Self {
        Self {
            state: AppState::default(),
            classifier,
            colors: LabelColors::from_config(&config),
            config,
        }
    }
}

impl eframe::App for FakeCashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar + status ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: the whole flow, top to bottom ----
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    panels::header(ui, &self.colors);
                    panels::upload_section(ui, &mut self.state);
                    panels::predict_button(ui, &mut self.state, self.classifier);
                    panels::results_section(ui, &mut self.state, &self.config, &self.colors);
                });
        });
    }
}
