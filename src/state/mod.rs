// src/state/mod.rs
use std::path::Path;
use std::sync::Arc;
use tokio::runtime::Handle;

use crate::analysis::{AnalysisError, AnalysisReport, EnergyAdvisor, MISSING_INPUT_MESSAGE};
use crate::file::{self, SelectedFile};
use crate::input::{
    mime_from_extension, ConsumptionInput, ConsumptionPreview, InputError, SAMPLE_FILE_NAME,
};

pub mod analysis_state;

pub use analysis_state::{AnalysisPhase, PendingAnalysis};

// Core application state
#[derive(Debug)]
pub struct AppState {
    // Inputs
    location: String,
    consumption: ConsumptionInput,
    file_name: String,
    preview: Option<ConsumptionPreview>,

    // Outcome of the last submit
    pub report: Option<AnalysisReport>,
    pub error_message: Option<String>,
    phase: AnalysisPhase,
}

impl AppState {
    pub fn new(location: impl Into<String>) -> Self {
        let consumption = ConsumptionInput::sample();
        Self {
            location: location.into(),
            preview: preview_of(&consumption),
            consumption,
            file_name: SAMPLE_FILE_NAME.to_string(),
            report: None,
            error_message: None,
            phase: AnalysisPhase::Idle,
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn consumption(&self) -> &ConsumptionInput {
        &self.consumption
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn preview(&self) -> Option<&ConsumptionPreview> {
        self.preview.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.phase.is_submitting()
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.location = location.into();
    }

    pub fn select_file(&mut self, path: &Path) {
        self.accept_file(file::load_from_path(path));
    }

    /// Apply the outcome of reading a user-selected file.
    pub fn accept_file(&mut self, loaded: Result<SelectedFile, InputError>) {
        match loaded {
            Ok(selected) => {
                log::info!("Using {} as {}", selected.file_name, selected.input.kind_label());
                self.replace_consumption(selected.input, selected.file_name);
                self.error_message = None;
            }
            Err(e) => {
                log::warn!("Rejected file selection: {}", e);
                if e.resets_selection() {
                    self.replace_consumption(ConsumptionInput::sample(), SAMPLE_FILE_NAME.to_string());
                }
                self.error_message = Some(e.user_message().to_string());
            }
        }
    }

    /// Accept a file dropped on the window as raw bytes. The platform's MIME
    /// type is used when it gives one, else the name's extension.
    pub fn accept_dropped(&mut self, file_name: &str, mime_type: Option<&str>, bytes: Vec<u8>) {
        let mime_type = mime_type
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .or_else(|| mime_from_extension(file_name));
        self.accept_file(file::load_consumption(file_name, mime_type, || Ok(bytes)));
    }

    fn replace_consumption(&mut self, input: ConsumptionInput, file_name: String) {
        self.preview = preview_of(&input);
        self.consumption = input;
        self.file_name = file_name;
    }

    pub fn can_submit(&self) -> bool {
        !self.is_submitting() && !self.location.trim().is_empty() && !self.consumption.is_empty()
    }

    /// Start an analysis on `runtime`. Returns false when nothing was sent.
    pub fn submit(&mut self, runtime: &Handle, advisor: Arc<dyn EnergyAdvisor>) -> bool {
        if self.is_submitting() {
            log::warn!("Ignoring submit while an analysis is outstanding");
            return false;
        }
        if self.location.trim().is_empty() || self.consumption.is_empty() {
            self.error_message = Some(MISSING_INPUT_MESSAGE.to_string());
            return false;
        }

        self.error_message = None;
        self.report = None;
        self.phase = AnalysisPhase::Submitting(PendingAnalysis::spawn(
            runtime,
            advisor,
            self.consumption.clone(),
            self.location.clone(),
        ));
        true
    }

    /// Collect a finished analysis, if any. Call once per frame.
    pub fn poll(&mut self) {
        let outcome = match &mut self.phase {
            AnalysisPhase::Submitting(pending) => pending.try_finish(),
            _ => None,
        };

        match outcome {
            Some(Ok(report)) => {
                self.report = Some(report);
                self.phase = AnalysisPhase::Complete;
            }
            Some(Err(e)) => self.fail(e),
            None => {}
        }
    }

    fn fail(&mut self, error: AnalysisError) {
        log::error!("Error in energy analysis: {}", error);
        self.report = None;
        self.error_message = Some(error.user_message().to_string());
        self.phase = AnalysisPhase::Failed;
    }
}

fn preview_of(input: &ConsumptionInput) -> Option<ConsumptionPreview> {
    match input {
        ConsumptionInput::Csv { text } => Some(ConsumptionPreview::from_csv(text)),
        ConsumptionInput::Image { .. } => None,
    }
}
