use std::path::Path;

use calamine::{DataType, Reader, Xlsx, open_workbook};

use crate::error::{Result, ToolError};
use crate::model::{CellValue, Table};

/// Reads the first worksheet of an `.xlsx` workbook into a [`Table`].
///
/// The first row provides the headers. Empty headers are named
/// `Unnamed: <index>` and repeated headers receive a `.N` suffix, so every
/// column of the returned table has a distinct name. Rows with no value in
/// any cell are skipped.
pub fn read_table(path: &Path) -> Result<Table> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let range = read_first_sheet(&mut workbook)?;
    Ok(range_to_table(&range))
}

fn read_first_sheet<R: std::io::Read + std::io::Seek>(
    workbook: &mut Xlsx<R>,
) -> Result<calamine::Range<DataType>> {
    let range_result = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| ToolError::InvalidWorkbook("workbook has no worksheets".into()))?;
    let range = range_result.map_err(ToolError::from)?;
    Ok(range)
}

fn range_to_table(range: &calamine::Range<DataType>) -> Table {
    let mut rows = range.rows();
    let headers = match rows.next() {
        Some(first_row) => unique_headers(first_row),
        None => return Table::default(),
    };

    let records = rows
        .filter(|row| row.iter().any(|cell| *cell != DataType::Empty))
        .map(|row| row.iter().map(cell_to_value).collect::<Vec<_>>());
    Table::from_rows(&headers, records)
}

fn unique_headers(row: &[DataType]) -> Vec<String> {
    let mut headers: Vec<String> = Vec::with_capacity(row.len());

    for (col_idx, cell) in row.iter().enumerate() {
        let mut header = cell_to_string(cell);
        if header.is_empty() {
            header = format!("Unnamed: {col_idx}");
        }

        if headers.contains(&header) {
            let base = header.clone();
            let mut suffix = 1;
            while headers.contains(&header) {
                header = format!("{base}.{suffix}");
                suffix += 1;
            }
        }
        headers.push(header);
    }

    headers
}

fn cell_to_string(cell: &DataType) -> String {
    match cell {
        DataType::String(value) => value.clone(),
        DataType::Float(value) => value.to_string(),
        DataType::Int(value) => value.to_string(),
        DataType::Bool(value) => value.to_string(),
        DataType::Empty => String::new(),
        other => other.to_string(),
    }
}

fn cell_to_value(cell: &DataType) -> CellValue {
    match cell {
        DataType::String(value) => CellValue::String(value.clone()),
        DataType::Float(value) => CellValue::Number(*value),
        DataType::Int(value) => CellValue::Number(*value as f64),
        DataType::Bool(value) => CellValue::Boolean(*value),
        DataType::DateTime(value) => CellValue::DateTime(*value),
        DataType::Empty => CellValue::Empty,
        other => CellValue::String(other.to_string()),
    }
}
