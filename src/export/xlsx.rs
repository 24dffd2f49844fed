// src/export/xlsx.rs

use crate::core::timesheet::Timesheet;
use crate::errors::{AppError, AppResult};
use crate::export::model::{flatten, get_headers, row_to_cells};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use crate::utils::time::format_minutes;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// XLSX export: one sheet, banded rows, half-month totals under the table.
pub(crate) fn export_xlsx(sheet: &Timesheet, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(sheet.month.format("%Y-%m").to_string())
        .map_err(to_app_error)?;

    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x0F766E))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_app_error)?;
    }

    worksheet.set_freeze_panes(1, 0).ok();

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xE6F4F1);
    let band2 = Color::RGB(0xFFFFFF);

    let rows = flatten(sheet);
    for (row_index, r) in rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, value) in row_to_cells(r).iter().enumerate() {
            write_cell(worksheet, row, col as u16, value, band_color)?;
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    // Totals block
    let bold = Format::new().set_bold();
    let mut row = rows.len() as u32 + 2;
    for half in &sheet.halves {
        let label = format!("{} scheduled", half.half.label());
        worksheet.write_with_format(row, 0, label.as_str(), &bold).map_err(to_app_error)?;
        worksheet
            .write(row, 1, format_minutes(half.totals.scheduled_minutes))
            .map_err(to_app_error)?;
        row += 1;

        let label = format!("{} completed", half.half.label());
        worksheet.write_with_format(row, 0, label.as_str(), &bold).map_err(to_app_error)?;
        worksheet
            .write(row, 1, format_minutes(half.totals.worked_minutes))
            .map_err(to_app_error)?;
        row += 1;

        col_widths[0] = col_widths[0].max(UnicodeWidthStr::width(label.as_str()));
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_app_error)?;
    }

    workbook.save(path).map_err(to_app_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// Numbers are written as numbers, everything else as text.
fn write_cell(worksheet: &mut Worksheet, row: u32, col: u16, s: &str, bg: Color) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    if let Ok(num) = s.parse::<f64>() {
        let fmt = base.set_align(FormatAlign::Right);
        worksheet
            .write_with_format(row, col, num, &fmt)
            .map_err(to_app_error)?;
        return Ok(());
    }

    worksheet
        .write_with_format(row, col, s, &base)
        .map_err(to_app_error)?;

    Ok(())
}

fn to_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
