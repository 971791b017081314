use crate::error::{Result, ToolError};

/// Represents a single spreadsheet cell. Values are carried through the
/// pipeline as read; no coercion happens between input and output.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// Blank cell.
    #[default]
    Empty,
    /// Plain string literal.
    String(String),
    /// Numeric literal. Excel stores integers as floats as well.
    Number(f64),
    /// Boolean literal.
    Boolean(bool),
    /// Excel serial date/time number.
    DateTime(f64),
}

impl CellValue {
    /// Returns `true` when the cell holds no value.
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::String(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::String(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

/// A named column and its values, one per row.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: Vec<CellValue>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<CellValue>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

/// Column-oriented table. Every column holds exactly `row_count` values.
///
/// Column names are not required to be unique: the standardized layout may
/// repeat a name when a mandatory column is also a mapping target.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<Column>,
    row_count: usize,
}

impl Table {
    /// Creates an empty table with the given number of rows and no columns.
    pub fn with_rows(row_count: usize) -> Self {
        Self {
            columns: Vec::new(),
            row_count,
        }
    }

    /// Builds a table from a header and row-major records. Short records are
    /// padded with empty cells and surplus cells are dropped.
    pub fn from_rows<H, R>(headers: &[H], rows: R) -> Self
    where
        H: AsRef<str>,
        R: IntoIterator<Item = Vec<CellValue>>,
    {
        let mut columns: Vec<Column> = headers
            .iter()
            .map(|header| Column::new(header.as_ref(), Vec::new()))
            .collect();
        let mut row_count = 0;

        for mut row in rows {
            row.resize(columns.len(), CellValue::Empty);
            for (column, cell) in columns.iter_mut().zip(row) {
                column.values.push(cell);
            }
            row_count += 1;
        }

        Self { columns, row_count }
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column names in layout order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|column| column.name.as_str()).collect()
    }

    /// Returns the leftmost column with the given name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Appends a column without checking for existing names. The column
    /// must hold exactly one value per row.
    pub fn push_column(&mut self, column: Column) -> Result<()> {
        if column.values.len() != self.row_count {
            return Err(ToolError::InvalidWorkbook(format!(
                "column '{}' has {} values, table has {} rows",
                column.name,
                column.values.len(),
                self.row_count
            )));
        }
        self.columns.push(column);
        Ok(())
    }

    /// Assembles a table from columns already sized to `row_count`.
    pub(crate) fn from_columns(columns: Vec<Column>, row_count: usize) -> Self {
        debug_assert!(columns.iter().all(|column| column.values.len() == row_count));
        Self { columns, row_count }
    }

    /// Returns the cell at the given row in the leftmost column named `name`.
    pub fn cell(&self, row: usize, name: &str) -> Option<&CellValue> {
        self.column(name).and_then(|column| column.values.get(row))
    }

    /// Appends all rows of `other`, matching columns by position.
    pub(crate) fn extend_rows(&mut self, other: Table) {
        for (column, incoming) in self.columns.iter_mut().zip(other.columns) {
            column.values.extend(incoming.values);
        }
        self.row_count += other.row_count;
    }
}
