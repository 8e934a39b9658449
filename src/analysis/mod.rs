// src/analysis/mod.rs
use async_trait::async_trait;
use thiserror::Error;

use crate::input::ConsumptionInput;

pub mod gemini;
pub mod prompt;
pub mod result;
pub mod schema;

// Re-export commonly used types
pub use gemini::GeminiClient;
pub use result::{
    AnalysisReport,
    AnalysisResult,
    ApplianceAnalysis,
    ForecastPoint,
    RenewableSource,
};

pub const ANALYSIS_FAILED_MESSAGE: &str = "Failed to generate the full energy analysis. \
    The model may have returned an unexpected format or could not process the provided data.";
pub const MISSING_INPUT_MESSAGE: &str =
    "Please provide a location and your consumption data (CSV or bill image).";

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("location or consumption data missing")]
    MissingInput,
    #[error("request to the model API failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("model API returned {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("model reply contained no text")]
    EmptyReply,
    #[error("model reply did not match the expected shape: {0}")]
    MalformedReply(#[from] serde_json::Error),
    #[error("analysis task ended without a result")]
    Interrupted,
}

impl AnalysisError {
    pub fn user_message(&self) -> &'static str {
        match self {
            AnalysisError::MissingInput => MISSING_INPUT_MESSAGE,
            _ => ANALYSIS_FAILED_MESSAGE,
        }
    }
}

/// Anything that can turn consumption data and a location into a full analysis.
#[async_trait]
pub trait EnergyAdvisor: Send + Sync {
    async fn analyze(
        &self,
        input: &ConsumptionInput,
        location: &str,
    ) -> Result<AnalysisResult, AnalysisError>;
}

/// Rejects requests that would be pointless to send.
pub fn check_request(input: &ConsumptionInput, location: &str) -> Result<(), AnalysisError> {
    if location.trim().is_empty() || input.is_empty() {
        return Err(AnalysisError::MissingInput);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_needs_location_and_data() {
        let sample = ConsumptionInput::sample();
        assert!(check_request(&sample, "Nairobi, Kenya").is_ok());
        assert!(matches!(check_request(&sample, "   "), Err(AnalysisError::MissingInput)));

        let blank = ConsumptionInput::Csv { text: String::new() };
        assert!(matches!(check_request(&blank, "Nairobi"), Err(AnalysisError::MissingInput)));
    }

    #[test]
    fn only_missing_input_has_its_own_message() {
        assert_eq!(AnalysisError::MissingInput.user_message(), MISSING_INPUT_MESSAGE);
        assert_eq!(AnalysisError::EmptyReply.user_message(), ANALYSIS_FAILED_MESSAGE);
        assert_eq!(AnalysisError::Interrupted.user_message(), ANALYSIS_FAILED_MESSAGE);
        let malformed = AnalysisResult::from_reply("{}").unwrap_err();
        assert_eq!(AnalysisError::from(malformed).user_message(), ANALYSIS_FAILED_MESSAGE);
    }
}
