// src/render/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::render::model::{EntryExport, entry_to_row, get_headers};
use crate::render::notify_export_success;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// XLSX export with styling and auto column widths.
pub(crate) fn export_xlsx(rows: &[EntryExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    // ---------------------------
    // Empty dataset
    // ---------------------------
    if rows.is_empty() {
        worksheet.write(0, 0, "No data available")?;
        workbook.save(path_str(path)?)?;
        notify_export_success("XLSX (empty dataset)", path);
        return Ok(());
    }

    // ---------------------------
    // Header
    // ---------------------------
    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet.write_with_format(0, col as u16, *header, &header_format)?;
    }

    worksheet.set_freeze_panes(1, 0).ok();

    // ---------------------------
    // Column widths
    // ---------------------------
    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Rows
    // ---------------------------
    for (row_index, entry) in rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };

        let band_format = Format::new()
            .set_background_color(band_color)
            .set_pattern(FormatPattern::Solid)
            .set_border(FormatBorder::Thin)
            .set_align(FormatAlign::Left);

        let values = entry_to_row(entry);

        for (col, value) in values.iter().enumerate() {
            let v = value.as_str();
            worksheet.write_with_format(row, col as u16, v, &band_format)?;
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(v));
        }
    }

    for (col, width) in col_widths.iter().enumerate() {
        worksheet.set_column_width(col as u16, (*width + 2) as f64).ok();
    }

    workbook.save(path_str(path)?)?;
    notify_export_success("XLSX", path);
    Ok(())
}

fn path_str(path: &Path) -> AppResult<&str> {
    path.to_str()
        .ok_or_else(|| AppError::Export(format!("Invalid output path: {}", path.display())))
}
