// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::csv::report_to_string;
use crate::error::Result;
use crate::reconcile::Report;

/// Write the report to `export.path`, adding the format's extension when the path has
/// none. Returns the final path written to.
pub fn export_report(export: &ExportOptions, report: &Report) -> Result<PathBuf> {
    let mut path = export.path.clone();
    if path.extension().is_none() {
        path.set_extension(export.format.ext());
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    fs::write(&path, report_to_string(report, export.format.delim()))?;
    logf!("report written to {}", path.display());
    Ok(path)
}

pub fn ensure_directory(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
