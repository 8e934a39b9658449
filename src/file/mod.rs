// src/file/mod.rs
use base64::{engine::general_purpose, Engine};
use std::fs;
use std::io;
use std::path::Path;

use crate::input::{classify, mime_from_extension, ConsumptionInput, FileKind, InputError};

/// A file the user picked, already turned into model input.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub file_name: String,
    pub input: ConsumptionInput,
}

pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Load a file from disk, inferring its MIME type from the extension.
pub fn load_from_path(path: &Path) -> Result<SelectedFile, InputError> {
    let file_name = display_name(path);
    let mime_type = mime_from_extension(&file_name);
    load_consumption(&file_name, mime_type, || fs::read(path))
}

/// Classify first, then read. Unsupported files are never read.
pub fn load_consumption<F>(
    file_name: &str,
    mime_type: Option<&str>,
    read: F,
) -> Result<SelectedFile, InputError>
where
    F: FnOnce() -> io::Result<Vec<u8>>,
{
    let read_error = |source: io::Error| InputError::Read {
        file_name: file_name.to_string(),
        source,
    };

    let input = match classify(file_name, mime_type) {
        FileKind::Unsupported => {
            return Err(InputError::UnsupportedFileType {
                file_name: file_name.to_string(),
            })
        }
        FileKind::Image { mime_type } => {
            let bytes = read().map_err(read_error)?;
            if bytes.is_empty() {
                return Err(InputError::EmptyImage {
                    file_name: file_name.to_string(),
                });
            }
            log::debug!("Encoding {} ({} bytes, {})", file_name, bytes.len(), mime_type);
            ConsumptionInput::Image {
                base64_data: general_purpose::STANDARD.encode(&bytes),
                mime_type,
            }
        }
        FileKind::Csv => {
            let bytes = read().map_err(read_error)?;
            let text = String::from_utf8(bytes)
                .map_err(|e| read_error(io::Error::new(io::ErrorKind::InvalidData, e)))?;
            ConsumptionInput::Csv { text }
        }
    };

    Ok(SelectedFile {
        file_name: file_name.to_string(),
        input,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn csv_is_stored_verbatim() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("week.csv");
        let contents = "Hour,Consumption(kWh)\n0,1.2\n1,0.9\n";
        fs::write(&path, contents).unwrap();

        let selected = load_from_path(&path).unwrap();
        assert_eq!(selected.file_name, "week.csv");
        assert_eq!(selected.input, ConsumptionInput::Csv { text: contents.to_string() });
    }

    #[test]
    fn image_is_base64_encoded() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bill.JPG");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(&[0xff, 0xd8, 0xff, 0xe0]).unwrap();

        let selected = load_from_path(&path).unwrap();
        assert_eq!(
            selected.input,
            ConsumptionInput::Image {
                base64_data: "/9j/4A==".to_string(),
                mime_type: "image/jpeg".to_string(),
            }
        );
    }

    #[test]
    fn unsupported_file_is_not_read() {
        let result = load_consumption("notes.txt", Some("text/plain"), || {
            panic!("unsupported files must not be read")
        });
        assert!(matches!(result, Err(InputError::UnsupportedFileType { .. })));
    }

    #[test]
    fn empty_image_is_a_read_error() {
        let result = load_consumption("bill.png", Some("image/png"), || Ok(Vec::new()));
        let err = result.unwrap_err();
        assert!(matches!(err, InputError::EmptyImage { .. }));
        assert!(err.resets_selection());
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempdir().unwrap();
        let err = load_from_path(&dir.path().join("gone.png")).unwrap_err();
        assert!(matches!(err, InputError::Read { .. }));
    }

    #[test]
    fn non_utf8_csv_is_a_read_error() {
        let result = load_consumption("data.csv", None, || Ok(vec![0xff, 0xfe, 0x00]));
        assert!(matches!(result, Err(InputError::Read { .. })));
    }
}
