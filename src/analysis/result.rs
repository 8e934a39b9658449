// src/analysis/result.rs
use chrono::{DateTime, Local};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub appliance_analysis: Vec<ApplianceAnalysis>,
    pub renewable_analysis: RenewableAnalysis,
    pub action_plan: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplianceAnalysis {
    pub appliance: String,
    /// kWh per month
    pub estimated_consumption: f64,
    pub recommendation: String,
    pub potential_savings: PotentialSavings,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PotentialSavings {
    #[serde(rename = "kWh")]
    pub kwh: f64,
    /// USD per month
    pub cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenewableAnalysis {
    pub best_option: RenewableSource,
    pub forecast: Vec<ForecastPoint>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenewableSource {
    Solar,
    Wind,
}

impl RenewableSource {
    pub const ALL: [RenewableSource; 2] = [RenewableSource::Solar, RenewableSource::Wind];

    pub fn as_str(&self) -> &'static str {
        match self {
            RenewableSource::Solar => "solar",
            RenewableSource::Wind => "wind",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            RenewableSource::Solar => "Solar",
            RenewableSource::Wind => "Wind",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPoint {
    /// Hours from now, 0..=47
    #[serde(deserialize_with = "whole_hour")]
    pub hour: u32,
    /// Percent of rated capacity, 0..=100
    pub output_percentage: f64,
}

// Models sometimes write integral values as `1.0`
fn whole_hour<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if !value.is_finite() || value < 0.0 || value > u32::MAX as f64 {
        return Err(D::Error::custom(format!("hour out of range: {}", value)));
    }
    Ok(value.round() as u32)
}

impl AnalysisResult {
    /// Parse the model's reply text. Surrounding whitespace is ignored; any
    /// missing field fails the whole parse.
    pub fn from_reply(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text.trim())
    }
}

/// A completed analysis together with what it was asked about.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    pub result: AnalysisResult,
    pub location: String,
    pub completed_at: DateTime<Local>,
}

impl AnalysisReport {
    pub fn new(result: AnalysisResult, location: impl Into<String>) -> Self {
        Self {
            result,
            location: location.into(),
            completed_at: Local::now(),
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use serde_json::{json, Value};

    /// A reply shaped the way the response schema demands.
    pub fn reply_json() -> Value {
        let forecast: Vec<Value> = (0..48)
            .map(|hour| {
                let hour_of_day = hour % 24;
                let output = if (6..18).contains(&hour_of_day) {
                    80.0 - ((hour_of_day as f64) - 12.0).abs() * 10.0
                } else {
                    0.0
                };
                json!({ "hour": hour, "outputPercentage": output })
            })
            .collect();

        json!({
            "applianceAnalysis": [
                {
                    "appliance": "Old Refrigerator",
                    "estimatedConsumption": 120.0,
                    "recommendation": "ENERGY STAR certified inverter refrigerator",
                    "potentialSavings": { "kWh": 60.0, "cost": 9.0 }
                },
                {
                    "appliance": "HVAC System",
                    "estimatedConsumption": 310.5,
                    "recommendation": "Heat pump with smart thermostat",
                    "potentialSavings": { "kWh": 90.0, "cost": 13.5 }
                },
                {
                    "appliance": "Electric Water Heater",
                    "estimatedConsumption": 150.0,
                    "recommendation": "Heat pump water heater",
                    "potentialSavings": { "kWh": 75.0, "cost": 11.25 }
                }
            ],
            "renewableAnalysis": {
                "bestOption": "solar",
                "forecast": forecast,
                "recommendations": [
                    "Run the washing machine between 10:00 and 14:00.",
                    "Charge devices from the grid overnight only when needed."
                ]
            },
            "actionPlan": [
                "Replace the refrigerator.",
                "Install a smart thermostat.",
                "Shift laundry to midday solar hours.",
                "Insulate the water heater."
            ]
        })
    }

    pub fn reply_text() -> String {
        reply_json().to_string()
    }
}
