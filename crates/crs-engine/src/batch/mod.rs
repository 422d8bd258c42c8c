//! Quick estimates for a CSV of bucketed answers, one score per row.

mod normalizer;
mod parser;

use crate::scoring::{BasicInfo, CrsCalculator};
use serde::Serialize;
use std::io::Read;
use std::path::Path;
use tracing::debug;

#[derive(Debug)]
pub enum BatchImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for BatchImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatchImportError::Io(err) => write!(f, "failed to read estimate batch: {}", err),
            BatchImportError::Csv(err) => write!(f, "invalid estimate CSV data: {}", err),
        }
    }
}

impl std::error::Error for BatchImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BatchImportError::Io(err) => Some(err),
            BatchImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for BatchImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for BatchImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Score for one CSV row, keyed by its `id` column or `row-N` when blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickEstimateRow {
    pub id: String,
    pub info: BasicInfo,
    pub score: u32,
}

pub struct QuickEstimateImporter;

impl QuickEstimateImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        calculator: &CrsCalculator,
    ) -> Result<Vec<QuickEstimateRow>, BatchImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, calculator)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        calculator: &CrsCalculator,
    ) -> Result<Vec<QuickEstimateRow>, BatchImportError> {
        let rows = parser::parse_records(reader)?
            .into_iter()
            .map(|record| {
                let score = calculator.quick_estimate(&record.info);
                QuickEstimateRow {
                    id: record.id,
                    info: record.info,
                    score,
                }
            })
            .collect::<Vec<_>>();

        debug!(rows = rows.len(), "scored quick-estimate batch");
        Ok(rows)
    }
}
