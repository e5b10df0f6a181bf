use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("JSON error: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },

    #[error("CSV parsing system error: {source}")]
    CsvSystemError {
        #[from]
        source: csv::Error,
    },

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("CSV data format error: {0}")]
    CsvDataFormatError(String),

    #[error("Unknown document kind: {0}")]
    UnknownDocumentKind(String),

    // Wraps parse helpers from `shared::utils` that report through anyhow.
    #[error(transparent)]
    AnyhowError(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;

impl EngineError {
    /// Process exit code used by the `govnext` binary.
    pub fn exit_code(&self) -> i32 {
        match self {
            EngineError::ConfigError(_) | EngineError::JsonError { .. } => 78,
            EngineError::IoError { .. } => 74,
            EngineError::CsvSystemError { .. } | EngineError::CsvDataFormatError(_) => 65,
            EngineError::UnknownDocumentKind(_) => 64,
            EngineError::AnyhowError(_) => 70,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = EngineError::CsvDataFormatError("missing column 'documento'".into());
        assert_eq!(err.to_string(), "CSV data format error: missing column 'documento'");

        let err = EngineError::UnknownDocumentKind("rg".into());
        assert_eq!(err.to_string(), "Unknown document kind: rg");
    }

    #[test]
    fn test_exit_codes() {
        let io = EngineError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(io.exit_code(), 74);
        assert_eq!(EngineError::ConfigError("x".into()).exit_code(), 78);
    }
}
