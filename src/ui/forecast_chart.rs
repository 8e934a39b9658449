// src/ui/forecast_chart.rs
use eframe::egui;
use egui_plot::{Bar, BarChart, Legend, Line, Plot, Points};

use crate::analysis::RenewableSource;
use crate::input::ConsumptionPreview;
use crate::ui::view::hour_label;

pub fn source_color(source: RenewableSource) -> egui::Color32 {
    match source {
        RenewableSource::Solar => egui::Color32::from_rgb(245, 158, 11),
        RenewableSource::Wind => egui::Color32::from_rgb(59, 130, 246),
    }
}

/// 48-hour output forecast as a line with point markers.
pub fn show_forecast_chart(ui: &mut egui::Ui, points: &[[f64; 2]], source: RenewableSource) {
    let color = source_color(source);

    Plot::new("renewable_forecast")
        .height(280.0)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .include_y(0.0)
        .include_y(100.0)
        .legend(Legend::default())
        .x_axis_formatter(|x, _, _| hour_label(x))
        .y_axis_formatter(|y, _, _| format!("{:.0}%", y))
        .label_formatter(|_, point| format!("{}\nOutput: {:.0}%", hour_label(point.x), point.y))
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(points.to_vec())
                    .name("Output (%)")
                    .color(color)
                    .width(3.0),
            );
            plot_ui.points(Points::new(points.to_vec()).radius(3.0).color(color));
        });
}

/// Hourly bars of the CSV that is about to be sent.
pub fn show_consumption_preview(ui: &mut egui::Ui, preview: &ConsumptionPreview) {
    let bars: Vec<Bar> = preview
        .readings
        .iter()
        .map(|reading| {
            Bar::new(reading.hour, reading.kwh)
                .width(0.8)
                .fill(egui::Color32::from_rgb(100, 150, 255))
        })
        .collect();

    Plot::new("consumption_preview")
        .height(120.0)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .show_background(false)
        .include_y(0.0)
        .y_axis_formatter(|y, _, _| format!("{:.1} kWh", y))
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name("Consumption (kWh)"));
        });
}
