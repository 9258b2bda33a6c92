// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::flatten;
use crate::models::Aggregation;
use crate::ui::messages::warning;
use std::io::{self, BufRead};
use std::path::Path;

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `aggregation` to `file` (absolute path) as CSV rows or as
    /// the JSON tree. Asks on stdin before overwriting unless `force`.
    pub fn export(
        aggregation: &Aggregation,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let stdin = io::stdin();
        Self::export_with_input(aggregation, format, file, force, &mut stdin.lock())
    }

    pub fn export_with_input(
        aggregation: &Aggregation,
        format: ExportFormat,
        file: &str,
        force: bool,
        input: &mut dyn BufRead,
    ) -> AppResult<()> {
        let path = Path::new(file);
        ensure_writable(path, force, input)?;

        match format {
            ExportFormat::Csv => {
                let rows = flatten(aggregation);
                if rows.is_empty() {
                    warning("No logged time in the selected period; the CSV will be empty.");
                }
                export_csv(&rows, path)?
            }
            ExportFormat::Json => export_json(aggregation, path)?,
        }

        Ok(())
    }
}
