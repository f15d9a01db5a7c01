mod parser;

use super::reality_check::KpiInput;
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
pub enum KpiImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    UnnamedKpi { row: usize },
}

impl std::fmt::Display for KpiImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KpiImportError::Io(err) => write!(f, "failed to read KPI export: {}", err),
            KpiImportError::Csv(err) => write!(f, "invalid KPI CSV data: {}", err),
            KpiImportError::UnnamedKpi { row } => {
                write!(f, "KPI on data row {} has an empty name", row)
            }
        }
    }
}

impl std::error::Error for KpiImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            KpiImportError::Io(err) => Some(err),
            KpiImportError::Csv(err) => Some(err),
            KpiImportError::UnnamedKpi { .. } => None,
        }
    }
}

impl From<std::io::Error> for KpiImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for KpiImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Loads KPI definitions from a `Name,Description` CSV export.
pub struct KpiCsvImporter;

impl KpiCsvImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<KpiInput>, KpiImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<KpiInput>, KpiImportError> {
        parser::parse_rows(reader)?
            .into_iter()
            .enumerate()
            .map(|(index, row)| {
                if row.name.is_empty() {
                    Err(KpiImportError::UnnamedKpi { row: index + 1 })
                } else {
                    Ok(KpiInput {
                        name: row.name,
                        description: row.description.unwrap_or_default(),
                    })
                }
            })
            .collect()
    }
}
