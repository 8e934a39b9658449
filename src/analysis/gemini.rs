// src/analysis/gemini.rs
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::prompt::build_prompt;
use super::schema::{full_analysis_schema, Schema};
use super::{check_request, AnalysisError, AnalysisResult, EnergyAdvisor};
use crate::input::ConsumptionInput;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part<'a> {
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData<'a>,
    },
    Text {
        text: &'a str,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData<'a> {
    mime_type: &'a str,
    data: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: Schema,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ReplyPart>,
}

#[derive(Debug, Deserialize)]
struct ReplyPart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, all parts joined.
    fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// Image input goes first as inline data, followed by the instruction.
fn build_request<'a>(input: &'a ConsumptionInput, prompt: &'a str) -> GenerateContentRequest<'a> {
    let mut parts = Vec::with_capacity(2);
    if let ConsumptionInput::Image { base64_data, mime_type } = input {
        parts.push(Part::InlineData {
            inline_data: InlineData {
                mime_type,
                data: base64_data,
            },
        });
    }
    parts.push(Part::Text { text: prompt });

    GenerateContentRequest {
        contents: vec![Content { parts }],
        generation_config: GenerationConfig {
            response_mime_type: "application/json",
            response_schema: full_analysis_schema(),
        },
    }
}

pub struct GeminiClient {
    api_key: String,
    model: String,
    api_base: String,
    client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String, api_base: String) -> Self {
        Self {
            api_key,
            model,
            api_base,
            client: reqwest::Client::new(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            self.model
        )
    }
}

#[async_trait]
impl EnergyAdvisor for GeminiClient {
    async fn analyze(
        &self,
        input: &ConsumptionInput,
        location: &str,
    ) -> Result<AnalysisResult, AnalysisError> {
        check_request(input, location)?;

        let prompt = build_prompt(input, location);
        let request = build_request(input, &prompt);

        log::info!(
            "Requesting {} analysis for {:?} from {}",
            input.kind_label(),
            location.trim(),
            self.model
        );
        log::debug!("Prompt is {} bytes", prompt.len());

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        log::debug!("Model API response status: {}", status);

        if !status.is_success() {
            let body = response.text().await?;
            log::error!("Model API error response: {}", body);
            return Err(AnalysisError::Api { status, body });
        }

        let body = response.text().await?;
        let reply: GenerateContentResponse = serde_json::from_str(&body)?;
        let text = reply.text().ok_or(AnalysisError::EmptyReply)?;
        log::debug!("Reply text is {} bytes", text.len());

        Ok(AnalysisResult::from_reply(&text)?)
    }
}
