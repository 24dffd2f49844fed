// src/export/logic.rs

use crate::core::timesheet::TimesheetLogic;
use crate::db::documents::DocumentStore;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{TimesheetExport, flatten};
use crate::export::xlsx::export_xlsx;
use crate::models::identity::Identity;
use crate::ui::messages::warning;
use chrono::NaiveDate;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export the timesheet of `month` visible to `identity`.
    ///
    /// Returns the number of exported rows; nothing is written when the month
    /// has no records.
    pub fn export<S: DocumentStore + ?Sized>(
        store: &S,
        identity: &Identity,
        month: NaiveDate,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        let sheet = TimesheetLogic::load(store, identity, month);
        let rows = sheet.rows().count();

        if rows == 0 {
            warning("No records found for the selected month.");
            return Ok(0);
        }

        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&flatten(&sheet), path)?,
            ExportFormat::Json => export_json(&TimesheetExport::from(&sheet), path)?,
            ExportFormat::Xlsx => export_xlsx(&sheet, path)?,
        }

        Ok(rows)
    }
}
