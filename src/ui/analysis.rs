// src/ui/analysis.rs
use eframe::egui;

use crate::analysis::RenewableSource;
use crate::ui::forecast_chart::{show_forecast_chart, source_color};
use crate::ui::view::{ApplianceCard, ResultView};

const CARD_WIDTH: f32 = 300.0;

pub fn show_results(ui: &mut egui::Ui, view: &ResultView) {
    show_action_plan(ui, &view.action_plan);
    ui.add_space(16.0);

    ui.heading("AI Load Estimator Results");
    ui.add_space(8.0);
    ui.horizontal_wrapped(|ui| {
        for card in &view.cards {
            show_appliance_card(ui, card);
        }
    });
    ui.add_space(16.0);

    show_renewables(ui, view);

    ui.add_space(8.0);
    ui.weak(format!("Analysis completed at {}", view.completed_at));
}

fn show_action_plan(ui: &mut egui::Ui, steps: &[String]) {
    let accent = egui::Color32::from_rgb(21, 128, 61);

    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.heading(egui::RichText::new("Your Action Plan").color(accent));
        ui.label("Here are the top recommendations from our AI to help you start saving immediately:");
        ui.add_space(8.0);

        for step in steps {
            ui.horizontal_wrapped(|ui| {
                ui.label(egui::RichText::new("✔").color(accent));
                ui.label(step);
            });
        }
    });
}

fn show_appliance_card(ui: &mut egui::Ui, card: &ApplianceCard) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(12.0))
        .show(ui, |ui| {
            ui.set_width(CARD_WIDTH);
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(format!("💡 {}", card.title)).strong().size(18.0));
                ui.add_space(6.0);
                ui.label(format!("⚡ {}", card.consumption));
                ui.label(
                    egui::RichText::new(format!("💰 {}", card.savings))
                        .color(egui::Color32::from_rgb(21, 128, 61)),
                );
                ui.add_space(6.0);
                ui.add(egui::Label::new(&card.recommendation).wrap(true));
            });
        });
}

fn show_renewables(ui: &mut egui::Ui, view: &ResultView) {
    ui.heading("Renewables Integration");
    ui.add_space(8.0);

    let icon = match view.source {
        RenewableSource::Solar => "☀",
        RenewableSource::Wind => "🌬",
    };
    ui.label(
        egui::RichText::new(format!("{} {}", icon, view.summary))
            .size(16.0)
            .color(source_color(view.source)),
    );
    ui.add_space(8.0);

    ui.columns(2, |columns| {
        columns[0].strong("48-Hour Availability Forecast");
        show_forecast_chart(&mut columns[0], &view.forecast, view.source);

        columns[1].strong("Usage Recommendations");
        for (index, tip) in view.usage_tips.iter().enumerate() {
            columns[1].horizontal_wrapped(|ui| {
                ui.label(egui::RichText::new(format!("{}.", index + 1)).strong());
                ui.label(tip);
            });
        }
    });
}
