// src/app.rs
use eframe::egui;
use rfd::FileDialog;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Runtime;

use crate::analysis::EnergyAdvisor;
use crate::state::AppState;
use crate::ui::{analysis, input_panel, PanelAction, ResultView};

pub struct EnergyApp {
    state: AppState,
    advisor: Arc<dyn EnergyAdvisor>,
    runtime: Runtime,
}

impl EnergyApp {
    pub fn new(location: String, advisor: Arc<dyn EnergyAdvisor>, runtime: Runtime) -> Self {
        Self {
            state: AppState::new(location),
            advisor,
            runtime,
        }
    }

    fn pick_file(&mut self) {
        let file_dialog = FileDialog::new()
            .add_filter("Consumption data", &["csv", "png", "jpg", "jpeg", "webp"])
            .set_title("Select Smart Meter Data or Bill Image");

        if let Some(path) = file_dialog.pick_file() {
            self.state.select_file(&path);
        }
    }

    fn accept_dropped(&mut self, dropped: egui::DroppedFile) {
        if let Some(path) = &dropped.path {
            self.state.select_file(path);
        } else if let Some(bytes) = dropped.bytes {
            self.state.accept_dropped(&dropped.name, Some(dropped.mime.as_str()), bytes.to_vec());
        }
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if dropped.is_empty() || self.state.is_submitting() {
            return;
        }
        // Only one input can be active; the last file wins
        if let Some(last) = dropped.into_iter().last() {
            self.accept_dropped(last);
        }
    }

    fn analyze(&mut self) {
        let advisor = Arc::clone(&self.advisor);
        self.state.submit(self.runtime.handle(), advisor);
    }
}

impl eframe::App for EnergyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll();
        self.handle_dropped_files(ctx);

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(egui::RichText::new("⚡ E-Power").strong());
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_source("main_scroll")
                .show(ui, |ui| {
                    match input_panel::show_input_panel(ui, &mut self.state) {
                        PanelAction::PickFile => self.pick_file(),
                        PanelAction::Analyze => self.analyze(),
                        PanelAction::None => {}
                    }
                    ui.add_space(16.0);

                    if self.state.is_submitting() {
                        input_panel::show_loading(ui);
                    } else if let Some(report) = &self.state.report {
                        analysis::show_results(ui, &ResultView::new(report));
                    }
                });
        });

        if self.state.is_submitting() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
