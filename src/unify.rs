use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::error::{Result, ToolError};
use crate::io::{excel_read, excel_write};
use crate::merge::merge_tables;
use crate::model::Table;
use crate::standardize::Standardizer;

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnifyReport {
    /// Number of input workbooks merged.
    pub files: usize,
    /// Number of data rows written, excluding the header.
    pub rows: usize,
    /// Location of the unified workbook.
    pub output: PathBuf,
}

/// Reads and standardizes every input workbook, in order.
#[instrument(level = "debug", skip_all, fields(file_count = inputs.len()))]
pub fn standardize_files(inputs: &[PathBuf], standardizer: &Standardizer) -> Result<Vec<Table>> {
    if let Some(missing) = inputs.iter().find(|path| !path.exists()) {
        return Err(ToolError::MissingInput(missing.clone()));
    }

    inputs
        .iter()
        .map(|path| -> Result<Table> {
            let table = excel_read::read_table(path)?;
            let filename = file_name(path);
            info!(
                input = %path.display(),
                rows = table.row_count(),
                columns = table.columns().len(),
                "read workbook"
            );
            Ok(standardizer.standardize(&table, &filename))
        })
        .collect()
}

/// Merges a batch of workbooks into a single standardized workbook.
///
/// An empty batch only logs a warning and returns `Ok(None)`; no output file
/// is written. An existing file at `output` is overwritten.
#[instrument(
    level = "info",
    skip_all,
    fields(file_count = inputs.len(), output = %output.display())
)]
pub fn unify_files(
    inputs: &[PathBuf],
    output: &Path,
    standardizer: &Standardizer,
) -> Result<Option<UnifyReport>> {
    if inputs.is_empty() {
        warn!("no input files supplied; nothing to process");
        return Ok(None);
    }

    let tables = standardize_files(inputs, standardizer)?;
    let Some(merged) = merge_tables(tables)? else {
        warn!("no tables produced; nothing to process");
        return Ok(None);
    };
    debug!(columns = ?merged.column_names(), "merged layout");

    excel_write::write_table(output, &merged)?;
    info!(rows = merged.row_count(), "unified file saved as {}", output.display());

    Ok(Some(UnifyReport {
        files: inputs.len(),
        rows: merged.row_count(),
        output: output.to_path_buf(),
    }))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
