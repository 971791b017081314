use tracing::debug;

use crate::error::{Result, ToolError};
use crate::model::Table;

/// Concatenates tables row-wise, keeping table order and row order.
///
/// Returns `Ok(None)` when there is nothing to merge. Every table must share
/// the first table's column layout.
pub fn merge_tables<I>(tables: I) -> Result<Option<Table>>
where
    I: IntoIterator<Item = Table>,
{
    let mut tables = tables.into_iter();
    let Some(mut merged) = tables.next() else {
        return Ok(None);
    };

    for table in tables {
        if table.column_names() != merged.column_names() {
            return Err(ToolError::LayoutMismatch {
                expected: owned_names(&merged),
                found: owned_names(&table),
            });
        }
        debug!(rows = table.row_count(), "appending table");
        merged.extend_rows(table);
    }

    Ok(Some(merged))
}

fn owned_names(table: &Table) -> Vec<String> {
    table
        .column_names()
        .into_iter()
        .map(str::to_string)
        .collect()
}
