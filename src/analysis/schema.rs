// src/analysis/schema.rs
use serde::Serialize;
use std::collections::BTreeMap;

use super::result::RenewableSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SchemaType {
    Object,
    Array,
    String,
    Number,
    Integer,
}

/// The subset of the OpenAPI schema object that `generateContent` accepts
/// as `responseSchema`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    #[serde(rename = "type")]
    pub schema_type: SchemaType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, Schema>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
}

impl Schema {
    fn of(schema_type: SchemaType) -> Self {
        Self {
            schema_type,
            description: None,
            enum_values: None,
            properties: BTreeMap::new(),
            required: Vec::new(),
            items: None,
        }
    }

    pub fn string() -> Self {
        Self::of(SchemaType::String)
    }

    pub fn number() -> Self {
        Self::of(SchemaType::Number)
    }

    pub fn integer() -> Self {
        Self::of(SchemaType::Integer)
    }

    pub fn array(items: Schema) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::of(SchemaType::Array)
        }
    }

    /// Every listed property is required.
    pub fn object<const N: usize>(properties: [(&str, Schema); N]) -> Self {
        let required = properties.iter().map(|(name, _)| name.to_string()).collect();
        Self {
            properties: properties
                .into_iter()
                .map(|(name, schema)| (name.to_string(), schema))
                .collect(),
            required,
            ..Self::of(SchemaType::Object)
        }
    }

    pub fn describe(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn one_of(mut self, values: &[&str]) -> Self {
        self.enum_values = Some(values.iter().map(|v| v.to_string()).collect());
        self
    }
}

fn appliance_schema() -> Schema {
    Schema::array(Schema::object([
        (
            "appliance",
            Schema::string()
                .describe("Name of the appliance, e.g., 'Old Refrigerator' or 'HVAC System'."),
        ),
        (
            "estimatedConsumption",
            Schema::number().describe("Estimated monthly power consumption in kWh."),
        ),
        (
            "recommendation",
            Schema::string().describe(
                "Recommendation for an energy-efficient replacement, e.g., 'ENERGY STAR certified inverter refrigerator'.",
            ),
        ),
        (
            "potentialSavings",
            Schema::object([
                (
                    "kWh",
                    Schema::number().describe("Potential monthly energy savings in kWh."),
                ),
                (
                    "cost",
                    Schema::number()
                        .describe("Estimated monthly cost savings in USD, assuming $0.15/kWh."),
                ),
            ]),
        ),
    ]))
}

fn renewable_schema() -> Schema {
    let sources: Vec<&str> = RenewableSource::ALL.iter().map(|s| s.as_str()).collect();

    Schema::object([
        (
            "bestOption",
            Schema::string()
                .one_of(&sources)
                .describe("The most suitable renewable energy source for the location."),
        ),
        (
            "forecast",
            Schema::array(Schema::object([
                (
                    "hour",
                    Schema::integer().describe("The hour of the day (0-47)."),
                ),
                (
                    "outputPercentage",
                    Schema::number().describe(
                        "The estimated power output as a percentage of maximum capacity (0-100).",
                    ),
                ),
            ]))
            .describe("A 48-hour availability forecast, with one entry per hour."),
        ),
        (
            "recommendations",
            Schema::array(Schema::string()).describe(
                "A list of actionable recommendations for energy usage based on the forecast.",
            ),
        ),
    ])
}

fn action_plan_schema() -> Schema {
    Schema::array(Schema::string()).describe(
        "A concise, actionable summary of 3-5 key steps the user should take to reduce their bills and use energy more efficiently, based on all the above findings.",
    )
}

/// Reply shape for a full analysis; mirrors `AnalysisResult`.
pub fn full_analysis_schema() -> Schema {
    Schema::object([
        ("applianceAnalysis", appliance_schema()),
        ("renewableAnalysis", renewable_schema()),
        ("actionPlan", action_plan_schema()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn top_level_requires_all_sections() {
        let schema = full_analysis_schema();
        assert_eq!(schema.schema_type, SchemaType::Object);
        assert_eq!(
            schema.required,
            vec!["applianceAnalysis", "renewableAnalysis", "actionPlan"]
        );
    }

    #[test]
    fn serializes_in_gemini_form() {
        let value = serde_json::to_value(full_analysis_schema()).unwrap();
        let renewable = &value["properties"]["renewableAnalysis"];

        assert_eq!(value["type"], "OBJECT");
        assert_eq!(renewable["properties"]["bestOption"]["enum"], json!(["solar", "wind"]));
        assert_eq!(renewable["properties"]["forecast"]["type"], "ARRAY");
        assert_eq!(
            renewable["properties"]["forecast"]["items"]["properties"]["hour"]["type"],
            "INTEGER"
        );
        assert_eq!(
            renewable["required"],
            json!(["bestOption", "forecast", "recommendations"])
        );
        assert_eq!(
            value["properties"]["applianceAnalysis"]["items"]["properties"]["potentialSavings"]
                ["required"],
            json!(["kWh", "cost"])
        );
        // Leaf schemas carry no empty collections
        assert!(value["properties"]["actionPlan"]["items"].get("properties").is_none());
        assert!(value["properties"]["actionPlan"]["items"].get("required").is_none());
    }
}
