use tracing::debug;

use crate::mapping::ColumnMapping;
use crate::model::{CellValue, Column, Table};
use crate::month::extract_month;

/// Column holding the month inferred from the source file name.
pub const PUBLISHED_DATE_COLUMN: &str = "Published Date";
/// Column reserved for the link owner; always blank.
pub const OWNER_COLUMN: &str = "Owner";
/// Column reserved for the project name; blank unless project data is kept.
pub const PROJECT_COLUMN: &str = "Project";
/// Column holding the warranty period.
pub const EXPIRY_WARRANTY_COLUMN: &str = "Expiry Warranty";
/// Mandatory columns appended after the canonical columns, in output order.
pub const MANDATORY_COLUMNS: [&str; 4] = [
    PUBLISHED_DATE_COLUMN,
    OWNER_COLUMN,
    PROJECT_COLUMN,
    EXPIRY_WARRANTY_COLUMN,
];
/// Warranty written into every row unless overridden.
pub const DEFAULT_EXPIRY_WARRANTY: &str = "1 year";

/// Tunables for the mandatory columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardizeOptions {
    /// Value written into `Expiry Warranty` on every row.
    pub expiry_warranty: String,
    /// Keep the renamed `Project` column instead of blanking it.
    pub keep_project_data: bool,
}

impl Default for StandardizeOptions {
    fn default() -> Self {
        Self {
            expiry_warranty: DEFAULT_EXPIRY_WARRANTY.to_string(),
            keep_project_data: false,
        }
    }
}

/// Rewrites arbitrary source tables into the fixed output layout.
#[derive(Debug, Clone, Default)]
pub struct Standardizer {
    mapping: ColumnMapping,
    options: StandardizeOptions,
}

impl Standardizer {
    pub fn new(mapping: ColumnMapping, options: StandardizeOptions) -> Self {
        Self { mapping, options }
    }

    pub fn mapping(&self) -> &ColumnMapping {
        &self.mapping
    }

    pub fn options(&self) -> &StandardizeOptions {
        &self.options
    }

    /// Column names every standardized table carries, in order: the distinct
    /// canonical names followed by [`MANDATORY_COLUMNS`]. A name that is both
    /// canonical and mandatory appears twice.
    pub fn layout(&self) -> Vec<String> {
        self.mapping
            .canonical_columns()
            .into_iter()
            .chain(MANDATORY_COLUMNS)
            .map(str::to_string)
            .collect()
    }

    /// Standardizes one table read from `filename`.
    ///
    /// Mapped columns are renamed, absent canonical columns are backfilled
    /// with blanks, the mandatory columns are (over)written, and everything
    /// else is dropped.
    pub fn standardize(&self, table: &Table, filename: &str) -> Table {
        let rows = table.row_count();
        let renamed = rename_columns(table, &self.mapping);

        let published = match extract_month(filename) {
            Some(month) => CellValue::from(month.name()),
            None => CellValue::Empty,
        };

        let layout = self.layout();
        let mut columns = Vec::with_capacity(layout.len());
        for name in layout {
            let values = match name.as_str() {
                PUBLISHED_DATE_COLUMN => vec![published.clone(); rows],
                OWNER_COLUMN => vec![CellValue::Empty; rows],
                PROJECT_COLUMN if self.options.keep_project_data => find_column(&renamed, &name)
                    .map(|column| column.values.clone())
                    .unwrap_or_else(|| vec![CellValue::Empty; rows]),
                PROJECT_COLUMN => vec![CellValue::Empty; rows],
                EXPIRY_WARRANTY_COLUMN => {
                    vec![CellValue::from(self.options.expiry_warranty.as_str()); rows]
                }
                _ => match find_column(&renamed, &name) {
                    Some(column) => column.values.clone(),
                    None => {
                        debug!(column = %name, filename, "backfilling missing column");
                        vec![CellValue::Empty; rows]
                    }
                },
            };
            columns.push(Column::new(name, values));
        }

        Table::from_columns(columns, rows)
    }
}

/// Standardizes `table` with the given mapping and default options.
pub fn standardize(table: &Table, mapping: &ColumnMapping, filename: &str) -> Table {
    Standardizer::new(mapping.clone(), StandardizeOptions::default()).standardize(table, filename)
}

fn rename_columns<'a>(table: &'a Table, mapping: &'a ColumnMapping) -> Vec<(&'a str, &'a Column)> {
    table
        .columns()
        .iter()
        .map(|column| {
            let name = mapping
                .canonical_for(&column.name)
                .unwrap_or(column.name.as_str());
            (name, column)
        })
        .collect()
}

// Leftmost match wins when several source columns share a canonical name.
fn find_column<'a>(renamed: &[(&str, &'a Column)], name: &str) -> Option<&'a Column> {
    renamed
        .iter()
        .find(|(renamed_name, _)| *renamed_name == name)
        .map(|(_, column)| *column)
}
