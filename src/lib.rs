//! Core library for the sheet-unify command line application.
//!
//! The library merges spreadsheets that describe the same records under
//! different column names into one workbook with a fixed layout. IO adapters
//! live under [`io`], the table representation inside [`model`], the rename
//! rules in [`mapping`], the per-file rewrite in [`standardize`], row
//! concatenation in [`merge`], and the end-to-end orchestration under
//! [`unify`].

pub mod error;
pub mod io;
pub mod mapping;
pub mod merge;
pub mod model;
pub mod month;
pub mod standardize;
pub mod unify;

pub use error::{Result, ToolError};
pub use mapping::ColumnMapping;
pub use month::{Month, extract_month};
pub use standardize::{StandardizeOptions, Standardizer, standardize};
