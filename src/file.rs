// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::chart::{ChartRow, HEADERS};
use crate::config::options::ExportOptions;
use crate::csv;

pub fn ensure_directory(path: &Path) -> std::io::Result<()> {
    fs::create_dir_all(path)
}

/// Assemble the export text for Copy/Export according to the options.
pub fn export_string(export: &ExportOptions, rows: &[ChartRow]) -> String {
    let cells: Vec<Vec<String>> = rows.iter().map(ChartRow::to_export_row).collect();
    csv::to_export_string(&HEADERS, &cells, export.include_headers, export.format.delim())
}

/// Write a single export file based on ExportOptions (path, headers policy,
/// delimiter). Returns the final path written to.
pub fn write_export(
    export: &ExportOptions,
    rows: &[ChartRow],
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    fs::write(&path, export_string(export, rows))?;
    Ok(path)
}
