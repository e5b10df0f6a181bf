use crate::config::EngineSettings;
use crate::error::{EngineError, Result};
use crate::validation;
use csv::{ReaderBuilder, StringRecord};
use serde::Serialize;
use shared::models::DocumentKind;
use shared::utils::brazilian_format::format_document;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckedRow {
    /// File line, header being line 1.
    pub line: usize,
    pub value: String,
    pub kind: Option<DocumentKind>,
    pub valid: bool,
    pub formatted: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CheckReport {
    pub rows: Vec<CheckedRow>,
    pub valid: usize,
    pub invalid: usize,
}

impl CheckReport {
    fn push(&mut self, row: CheckedRow) {
        if row.valid {
            self.valid += 1;
        } else {
            self.invalid += 1;
        }
        self.rows.push(row);
    }

    pub fn all_valid(&self) -> bool {
        self.invalid == 0
    }
}

/// Validates the identifier column of a delimited file.
pub struct DocumentCsvChecker;

impl DocumentCsvChecker {
    // Header example: nome;documento
    // Row example:    Prefeitura Municipal;11.222.333/0001-81
    pub fn check_file(path: &Path, settings: &EngineSettings) -> Result<CheckReport> {
        let file = File::open(path)?;
        debug!("Checking documents in {}", path.display());
        Self::check_reader(BufReader::new(file), settings)
    }

    pub fn check_reader<R: Read>(reader: R, settings: &EngineSettings) -> Result<CheckReport> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(settings.delimiter_byte()?)
            .has_headers(true)
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        let column = Self::column_index(&headers, &settings.document_column)?;

        let mut report = CheckReport::default();
        for (idx, result) in rdr.records().enumerate() {
            let line = idx + 2;
            let record = result.map_err(|e| {
                EngineError::CsvDataFormatError(format!("Error reading CSV record at line {}: {}", line, e))
            })?;
            // A short row missing the document column is reported as invalid.
            let row = match record.get(column) {
                Some(value) => Self::check_value(line, value.to_string()),
                None => {
                    warn!(line, fields = record.len(), "row has no document column");
                    Self::check_value(line, String::new())
                }
            };
            if !row.valid {
                warn!(line, value = %row.value, "invalid document");
            }
            report.push(row);
        }
        Ok(report)
    }

    fn check_value(line: usize, value: String) -> CheckedRow {
        let (kind, valid) = validation::check(&value);
        CheckedRow {
            line,
            formatted: format_document(&value),
            kind,
            valid,
            value,
        }
    }

    // Header names are matched case-insensitively.
    fn column_index(headers: &StringRecord, name: &str) -> Result<usize> {
        headers
            .iter()
            .position(|header| header.eq_ignore_ascii_case(name))
            .ok_or_else(|| EngineError::CsvDataFormatError(format!("Missing '{}' column in CSV header", name)))
    }
}
