//! Batch intake of quote requests from CSV exports.
//!
//! Partner offices hand over their measured jobs as spreadsheets; this
//! module turns such an export into ready-to-price [`QuoteRequest`]s.
//! Categorical columns are matched strictly (a typo fails the import with
//! the offending line), while measurement cells stay as lenient as the
//! customer-facing form.

mod normalizer;
mod parser;

use std::io::Read;
use std::path::Path;

use crate::quoting::domain::{QuoteRequest, UnknownVariant};

/// One CSV row, carrying the caller's reference so results can be matched
/// back to the source sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedQuoteRequest {
    pub reference: String,
    pub request: QuoteRequest,
}

#[derive(Debug)]
pub enum QuoteImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Field {
        line: usize,
        column: &'static str,
        source: UnknownVariant,
    },
    Number {
        line: usize,
        column: &'static str,
        value: String,
    },
}

impl std::fmt::Display for QuoteImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuoteImportError::Io(err) => write!(f, "failed to read quote export: {}", err),
            QuoteImportError::Csv(err) => write!(f, "invalid quote CSV data: {}", err),
            QuoteImportError::Field {
                line,
                column,
                source,
            } => write!(f, "line {line}, column '{column}': {source}"),
            QuoteImportError::Number {
                line,
                column,
                value,
            } => write!(f, "line {line}, column '{column}': '{value}' is not usable"),
        }
    }
}

impl std::error::Error for QuoteImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuoteImportError::Io(err) => Some(err),
            QuoteImportError::Csv(err) => Some(err),
            QuoteImportError::Field { source, .. } => Some(source),
            QuoteImportError::Number { .. } => None,
        }
    }
}

impl From<std::io::Error> for QuoteImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for QuoteImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

pub struct QuoteRequestImporter;

impl QuoteRequestImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<Vec<ImportedQuoteRequest>, QuoteImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(
        reader: R,
    ) -> Result<Vec<ImportedQuoteRequest>, QuoteImportError> {
        parser::parse_requests(reader)
    }
}
