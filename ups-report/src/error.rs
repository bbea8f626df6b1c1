//! Error types for report operations

use thiserror::Error;

/// Errors that can occur while rendering, loading or exchanging reports.
///
/// Rendering markdown itself never fails; these cover everything around it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReportError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Operation the format (or the toolkit) cannot perform
    #[error("Operation not supported: {0}")]
    NotSupported(String),
    /// Input could not be decoded
    #[error("Parse error: {0}")]
    Parse(String),
    /// Output could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// A field required for the operation is empty
    #[error("Missing required field '{0}'")]
    MissingField(&'static str),
    /// The generative API answered with an error message
    #[error("API error: {0}")]
    Api(String),
    /// The generative API answered with something we cannot use
    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
    /// Upload exceeds the configured size limit
    #[error("File too large: {size} bytes (maximum {max} bytes)")]
    UploadTooLarge { size: u64, max: u64 },
    /// Upload is neither a PDF nor a spreadsheet
    #[error("Unsupported upload '{0}': only PDF and Excel (.xlsx) files are accepted")]
    UnsupportedUpload(String),
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            ReportError::Parse(err.to_string())
        } else {
            ReportError::Serialization(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        assert_eq!(
            ReportError::FormatNotFound("pdf".into()).to_string(),
            "Format 'pdf' not found"
        );
        assert_eq!(
            ReportError::MissingField("projectTitle").to_string(),
            "Missing required field 'projectTitle'"
        );
        assert_eq!(
            ReportError::UploadTooLarge { size: 20, max: 10 }.to_string(),
            "File too large: 20 bytes (maximum 10 bytes)"
        );
    }

    #[test]
    fn json_syntax_errors_become_parse_errors() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(ReportError::from(err), ReportError::Parse(_)));
    }
}
