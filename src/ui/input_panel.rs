// src/ui/input_panel.rs
use eframe::egui;

use crate::input::ConsumptionInput;
use crate::state::AppState;
use crate::ui::forecast_chart::show_consumption_preview;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelAction {
    None,
    PickFile,
    Analyze,
}

pub fn show_input_panel(ui: &mut egui::Ui, state: &mut AppState) -> PanelAction {
    let mut action = PanelAction::None;

    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.heading("Get Your Personalized Energy Analysis");
        ui.label(
            "Upload your smart meter data (CSV) or a picture of your bill to receive AI-powered recommendations.",
        );
        ui.add_space(8.0);

        egui::Grid::new("input_grid")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label("📁 Smart Meter Data or Bill Image");
                ui.horizontal(|ui| {
                    if ui
                        .add_enabled(!state.is_submitting(), egui::Button::new("Choose File..."))
                        .clicked()
                    {
                        action = PanelAction::PickFile;
                    }
                    ui.label(egui::RichText::new(state.file_name()).strong());
                });
                ui.end_row();

                ui.label("");
                ui.small("CSV, PNG, JPG, WEBP accepted (or drop a file on the window)");
                ui.end_row();

                ui.label("📍 Your Location");
                let mut location = state.location().to_string();
                let response = ui.add_enabled(
                    !state.is_submitting(),
                    egui::TextEdit::singleline(&mut location)
                        .hint_text("e.g., Nairobi, Kenya; Lagos, Nigeria")
                        .desired_width(320.0),
                );
                if response.changed() {
                    state.set_location(location);
                }
                ui.end_row();
            });

        ui.add_space(8.0);
        let label = if state.is_submitting() { "Analyzing..." } else { "Analyze My Energy" };
        if ui
            .add_enabled(state.can_submit(), egui::Button::new(label).min_size(egui::vec2(180.0, 32.0)))
            .clicked()
        {
            action = PanelAction::Analyze;
        }

        if let Some(error) = &state.error_message {
            ui.add_space(4.0);
            ui.colored_label(egui::Color32::RED, error);
        }

        ui.add_space(8.0);
        match state.consumption() {
            ConsumptionInput::Csv { .. } => {
                if let Some(preview) = state.preview().filter(|p| !p.is_empty()) {
                    let mut summary = format!("{} hourly readings loaded", preview.readings.len());
                    if preview.skipped_rows > 0 {
                        summary.push_str(&format!(" ({} rows skipped)", preview.skipped_rows));
                    }
                    ui.label(summary);
                    show_consumption_preview(ui, preview);
                }
            }
            ConsumptionInput::Image { base64_data, mime_type } => {
                ui.label(format!(
                    "Bill image ({}, {} KiB encoded)",
                    mime_type,
                    base64_data.len() / 1024
                ));
            }
        }
    });

    action
}

pub fn show_loading(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(16.0);
        ui.add(egui::Spinner::new().size(32.0));
        ui.label(
            egui::RichText::new("Our AI is analyzing your data... this may take a moment.").strong(),
        );
        ui.add_space(16.0);
    });
}
