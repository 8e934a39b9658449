// src/ui/view.rs
use crate::analysis::{AnalysisReport, ApplianceAnalysis, ForecastPoint, RenewableSource};

#[derive(Debug, Clone, PartialEq)]
pub struct ApplianceCard {
    pub title: String,
    pub consumption: String,
    pub savings: String,
    pub recommendation: String,
}

impl From<&ApplianceAnalysis> for ApplianceCard {
    fn from(item: &ApplianceAnalysis) -> Self {
        Self {
            title: item.appliance.clone(),
            consumption: format!("Est. Consumption: {} kWh/month", item.estimated_consumption),
            savings: format!(
                "Potential Savings: ${:.2}/month ({} kWh)",
                item.potential_savings.cost, item.potential_savings.kwh
            ),
            recommendation: item.recommendation.clone(),
        }
    }
}

/// Everything the results panel draws, already formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub action_plan: Vec<String>,
    pub cards: Vec<ApplianceCard>,
    pub source: RenewableSource,
    pub summary: String,
    pub forecast: Vec<[f64; 2]>,
    pub usage_tips: Vec<String>,
    pub completed_at: String,
}

impl ResultView {
    pub fn new(report: &AnalysisReport) -> Self {
        let result = &report.result;
        let renewables = &result.renewable_analysis;

        Self {
            action_plan: result.action_plan.clone(),
            cards: result.appliance_analysis.iter().map(ApplianceCard::from).collect(),
            source: renewables.best_option,
            summary: format!(
                "For {}, {} is the most promising renewable source.",
                report.location,
                renewables.best_option.title()
            ),
            forecast: forecast_points(&renewables.forecast),
            usage_tips: renewables.recommendations.clone(),
            completed_at: report.completed_at.format("%H:%M").to_string(),
        }
    }
}

pub fn forecast_points(forecast: &[ForecastPoint]) -> Vec<[f64; 2]> {
    forecast
        .iter()
        .map(|point| [point.hour as f64, point.output_percentage])
        .collect()
}

/// Forecast hours run past midnight; labels wrap to the hour of day.
pub fn hour_label(hour: f64) -> String {
    let hour = hour.round() as i64;
    format!("{}:00", hour.rem_euclid(24))
}
