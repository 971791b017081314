use std::path::Path;

use rust_xlsxwriter::{Format, Workbook, Worksheet};

use crate::error::Result;
use crate::model::{CellValue, Table};

/// Name of the single worksheet in the exported workbook.
pub const OUTPUT_SHEET: &str = "Sheet1";

const DATE_FORMAT: &str = "yyyy-mm-dd";

/// Writes the table to a single-sheet workbook at the given path, replacing
/// any existing file.
pub fn write_table(path: &Path, table: &Table) -> Result<()> {
    let mut workbook_writer = Workbook::new();
    let header_format = Format::new().set_bold();
    let date_format = Format::new().set_num_format(DATE_FORMAT);

    let worksheet = workbook_writer.add_worksheet();
    worksheet.set_name(OUTPUT_SHEET)?;

    for (col_idx, column) in table.columns().iter().enumerate() {
        let col = col_idx as u16;
        worksheet.write_string_with_format(0, col, &column.name, &header_format)?;

        for (row_idx, cell) in column.values.iter().enumerate() {
            write_cell(worksheet, (row_idx + 1) as u32, col, cell, &date_format)?;
        }
    }

    workbook_writer.save(path)?;
    Ok(())
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &CellValue,
    date_format: &Format,
) -> Result<()> {
    match cell {
        CellValue::Empty => {}
        CellValue::String(value) => {
            worksheet.write_string(row, col, value)?;
        }
        CellValue::Number(value) => {
            worksheet.write_number(row, col, *value)?;
        }
        CellValue::Boolean(value) => {
            worksheet.write_boolean(row, col, *value)?;
        }
        CellValue::DateTime(value) => {
            worksheet.write_number_with_format(row, col, *value, date_format)?;
        }
    }
    Ok(())
}
