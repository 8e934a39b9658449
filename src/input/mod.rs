// src/input/mod.rs
use thiserror::Error;

pub mod preview;

pub use preview::ConsumptionPreview;

pub const SAMPLE_FILE_NAME: &str = "sample-data.csv";

/// One day of hourly smart-meter readings, loaded at startup.
pub const SAMPLE_CSV: &str = "Hour,Consumption(kWh)
0,0.5
1,0.4
2,0.4
3,0.3
4,0.3
5,0.8
6,1.5
7,2.5
8,2.2
9,1.8
10,1.5
11,1.4
12,1.6
13,1.5
14,1.7
15,1.9
16,2.8
17,3.5
18,4.2
19,3.8
20,3.2
21,2.5
22,1.5
23,0.8
";

pub const READ_ERROR_MESSAGE: &str = "Failed to read the file.";
pub const UNSUPPORTED_TYPE_MESSAGE: &str =
    "Unsupported file type. Please upload a CSV or an image (JPEG, PNG, WEBP).";

/// Consumption data as it will be sent to the model.
#[derive(Debug, Clone, PartialEq)]
pub enum ConsumptionInput {
    Csv { text: String },
    Image { base64_data: String, mime_type: String },
}

impl ConsumptionInput {
    pub fn sample() -> Self {
        ConsumptionInput::Csv { text: SAMPLE_CSV.to_string() }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            ConsumptionInput::Csv { text } => text.trim().is_empty(),
            ConsumptionInput::Image { base64_data, .. } => base64_data.is_empty(),
        }
    }

    pub fn kind_label(&self) -> &'static str {
        match self {
            ConsumptionInput::Csv { .. } => "CSV",
            ConsumptionInput::Image { .. } => "Bill image",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FileKind {
    Image { mime_type: String },
    Csv,
    Unsupported,
}

/// Decide how a selected file is read. The MIME type wins when it names an
/// image; otherwise a `text/csv` type or a `.csv` name selects text.
pub fn classify(file_name: &str, mime_type: Option<&str>) -> FileKind {
    let mime_type = mime_type.map(str::trim).filter(|m| !m.is_empty());

    if let Some(mime) = mime_type {
        if mime.starts_with("image/") {
            return FileKind::Image { mime_type: mime.to_string() };
        }
        if mime == "text/csv" {
            return FileKind::Csv;
        }
    }

    if file_name.to_lowercase().ends_with(".csv") {
        FileKind::Csv
    } else {
        FileKind::Unsupported
    }
}

/// Desktop file systems carry no MIME type, so it is inferred from the extension.
pub fn mime_from_extension(file_name: &str) -> Option<&'static str> {
    let extension = file_name.rsplit_once('.')?.1.to_lowercase();
    match extension.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "webp" => Some("image/webp"),
        "gif" => Some("image/gif"),
        "bmp" => Some("image/bmp"),
        "csv" => Some("text/csv"),
        _ => None,
    }
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("unsupported file type for {file_name}")]
    UnsupportedFileType { file_name: String },
    #[error("failed to read {file_name}: {source}")]
    Read {
        file_name: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{file_name} contained no image data")]
    EmptyImage { file_name: String },
}

impl InputError {
    pub fn user_message(&self) -> &'static str {
        match self {
            InputError::UnsupportedFileType { .. } => UNSUPPORTED_TYPE_MESSAGE,
            InputError::Read { .. } | InputError::EmptyImage { .. } => READ_ERROR_MESSAGE,
        }
    }

    /// Read failures reset the collector to the sample data; type errors don't.
    pub fn resets_selection(&self) -> bool {
        !matches!(self, InputError::UnsupportedFileType { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_mime_selects_image() {
        assert_eq!(
            classify("bill.png", Some("image/png")),
            FileKind::Image { mime_type: "image/png".to_string() }
        );
        // Any image family member is accepted, whatever the name says
        assert_eq!(
            classify("scan.csv", Some("image/webp")),
            FileKind::Image { mime_type: "image/webp".to_string() }
        );
    }

    #[test]
    fn csv_by_mime_or_extension() {
        assert_eq!(classify("readings", Some("text/csv")), FileKind::Csv);
        assert_eq!(classify("READINGS.CSV", None), FileKind::Csv);
        assert_eq!(classify("readings.csv", Some("application/vnd.ms-excel")), FileKind::Csv);
    }

    #[test]
    fn everything_else_is_unsupported() {
        assert_eq!(classify("notes.txt", Some("text/plain")), FileKind::Unsupported);
        assert_eq!(classify("report.pdf", None), FileKind::Unsupported);
        assert_eq!(classify("", Some("")), FileKind::Unsupported);
    }

    #[test]
    fn extension_mapping() {
        assert_eq!(mime_from_extension("a.JPG"), Some("image/jpeg"));
        assert_eq!(mime_from_extension("a.jpeg"), Some("image/jpeg"));
        assert_eq!(mime_from_extension("a.webp"), Some("image/webp"));
        assert_eq!(mime_from_extension("data.csv"), Some("text/csv"));
        assert_eq!(mime_from_extension("README"), None);
        assert_eq!(mime_from_extension("archive.tar.gz"), None);
    }

    #[test]
    fn sample_is_non_empty_csv() {
        let sample = ConsumptionInput::sample();
        assert!(!sample.is_empty());
        assert!(matches!(sample, ConsumptionInput::Csv { .. }));
        assert!(ConsumptionInput::Csv { text: "  \n".into() }.is_empty());
        assert!(ConsumptionInput::Image { base64_data: String::new(), mime_type: "image/png".into() }.is_empty());
    }

    #[test]
    fn only_read_errors_reset() {
        let unsupported = InputError::UnsupportedFileType { file_name: "x.txt".into() };
        assert!(!unsupported.resets_selection());
        assert_eq!(unsupported.user_message(), UNSUPPORTED_TYPE_MESSAGE);

        let empty = InputError::EmptyImage { file_name: "x.png".into() };
        assert!(empty.resets_selection());
        assert_eq!(empty.user_message(), READ_ERROR_MESSAGE);
    }
}
