// Engine settings, loaded from a JSON file or the embedded defaults.
use crate::error::{EngineError, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

const DEFAULT_CONFIG: &str = include_str!("../../assets/config/default.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct EngineSettings {
    pub log_level: String,
    pub csv_delimiter: String, // Should be a single byte, but JSON string is easier
    pub document_column: String,
    pub output: OutputFormat,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            log_level: "info".to_string(),
            csv_delimiter: ";".to_string(),
            document_column: "documento".to_string(),
            output: OutputFormat::Text,
        }
    }
}

impl EngineSettings {
    /// The embedded `assets/config/default.json`.
    pub fn load_default() -> Result<Self> {
        Self::from_json(DEFAULT_CONFIG)
    }

    /// Reads `path` if given, else falls back to the embedded defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                debug!("Loading settings from {}", path.display());
                let raw = std::fs::read_to_string(path)?;
                Self::from_json(&raw)
            }
            None => Self::load_default(),
        }
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let settings: EngineSettings = serde_json::from_str(raw)?;
        settings.delimiter_byte()?;
        Ok(settings)
    }

    pub fn delimiter_byte(&self) -> Result<u8> {
        match self.csv_delimiter.as_bytes() {
            [b] => Ok(*b),
            _ => Err(EngineError::ConfigError(format!(
                "csv_delimiter must be a single ASCII character, got '{}'",
                self.csv_delimiter
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_embedded_default_matches_default_impl() {
        assert_eq!(EngineSettings::load_default().unwrap(), EngineSettings::default());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let s = EngineSettings::from_json(r#"{"csv_delimiter": ",", "output": "json"}"#).unwrap();
        assert_eq!(s.delimiter_byte().unwrap(), b',');
        assert_eq!(s.output, OutputFormat::Json);
        assert_eq!(s.document_column, "documento");
    }

    #[test]
    fn test_bad_delimiter_rejected() {
        let err = EngineSettings::from_json(r#"{"csv_delimiter": ";;"}"#).unwrap_err();
        assert!(matches!(err, EngineError::ConfigError(_)));
    }

    #[test]
    fn test_malformed_json() {
        let err = EngineSettings::from_json("{not json").unwrap_err();
        assert!(matches!(err, EngineError::JsonError { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"document_column": "cnpj", "log_level": "debug"}}"#).unwrap();
        let s = EngineSettings::load(Some(file.path())).unwrap();
        assert_eq!(s.document_column, "cnpj");
        assert_eq!(s.log_level, "debug");
    }

    #[test]
    fn test_load_missing_file() {
        let err = EngineSettings::load(Some(Path::new("/definitely/not/here.json"))).unwrap_err();
        assert!(matches!(err, EngineError::IoError { .. }));
    }
}
