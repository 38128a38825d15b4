use super::table::Table;
use crate::domain::errors::DomainError;
use calamine::{Reader, open_workbook_auto_from_rs};
use std::{io::Cursor, path::Path};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchFormat {
    /// Comma-delimited `.csv`.
    Csv,
    /// Tab-delimited `.txt`.
    Tsv,
    /// `.xlsx` / `.xls`, first worksheet.
    Spreadsheet,
}

impl BatchFormat {
    pub fn from_file_name(file_name: &str) -> Result<Self, DomainError> {
        let extension = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "csv" => Ok(Self::Csv),
            "txt" => Ok(Self::Tsv),
            "xlsx" | "xls" => Ok(Self::Spreadsheet),
            _ => Err(DomainError::ValidationError(format!(
                "Unsupported file type '{}'. Upload a .csv, .txt, .xlsx or .xls file",
                file_name
            ))),
        }
    }
}

pub fn read_table(file_name: &str, data: &[u8]) -> Result<Table, DomainError> {
    let table = match BatchFormat::from_file_name(file_name)? {
        BatchFormat::Csv => read_delimited(data, b',')?,
        BatchFormat::Tsv => read_delimited(data, b'\t')?,
        BatchFormat::Spreadsheet => read_spreadsheet(data)?,
    };

    if table.headers.iter().all(|h| h.trim().is_empty()) {
        return Err(DomainError::ValidationError(
            "The uploaded file has no header row".into(),
        ));
    }
    tracing::debug!(
        file_name,
        rows = table.len(),
        columns = table.headers.len(),
        "Read batch file"
    );
    Ok(table)
}

pub fn read_delimited(data: &[u8], delimiter: u8) -> Result<Table, DomainError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(data);

    let headers: Vec<String> = reader
        .headers()
        .map_err(unreadable)?
        .iter()
        .enumerate()
        .map(|(i, h)| {
            if i == 0 {
                h.trim_start_matches('\u{feff}').to_string()
            } else {
                h.to_string()
            }
        })
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(unreadable)?;
        if record.len() > headers.len() {
            let line = record.position().map_or(rows.len() + 2, |p| p.line() as usize);
            return Err(DomainError::ValidationError(format!(
                "Line {} has {} fields but the header has {}. Quote values that contain the delimiter",
                line,
                record.len(),
                headers.len()
            )));
        }
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(Table::new(headers, rows))
}

fn read_spreadsheet(data: &[u8]) -> Result<Table, DomainError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(data.to_vec())).map_err(unreadable)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| DomainError::ValidationError("The spreadsheet has no worksheets".into()))?
        .map_err(unreadable)?;

    let mut rows = range
        .rows()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect::<Vec<String>>());
    let headers = rows.next().unwrap_or_default();

    Ok(Table::new(headers, rows.collect()))
}

fn unreadable(err: impl std::fmt::Display) -> DomainError {
    DomainError::ValidationError(format!("Could not read the uploaded file: {}", err))
}
