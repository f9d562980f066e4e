//! Builds the users sheet: classify every cell, write it with its style,
//! fix the column widths and save.

use std::collections::HashMap;
use std::path::Path;

use log::{debug, info};

use crate::classify::{COLUMN_COUNT, CellClass, Row, classify_row};
use crate::error::ReportError;
use crate::sink::{SheetSink, WorkbookSink, cell_ref};
use crate::style::StyleSpec;

pub const OUTPUT_FILE: &str = "users.xlsx";

#[derive(Debug, Clone, PartialEq)]
pub struct ReportLayout {
    pub sheet_name: &'static str,
    /// Name, Email, Age, Status, in character units.
    pub column_widths: [f64; COLUMN_COUNT],
}

impl Default for ReportLayout {
    fn default() -> Self {
        Self {
            sheet_name: "Users",
            column_widths: [15.0, 20.0, 10.0, 10.0],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportSummary {
    pub rows: usize,
    pub counts: HashMap<CellClass, usize>,
}

impl ReportSummary {
    pub fn count(&self, class: CellClass) -> usize {
        self.counts.get(&class).copied().unwrap_or(0)
    }

    fn record(&mut self, class: CellClass) {
        *self.counts.entry(class).or_insert(0) += 1;
    }
}

/// Writes `rows` (header first) into a fresh sheet of `workbook` and saves
/// it to `path`. The rows themselves are never modified.
pub fn write_report<W: WorkbookSink>(
    workbook: &mut W,
    rows: &[Row],
    layout: &ReportLayout,
    path: &Path,
) -> Result<ReportSummary, ReportError> {
    let mut summary = ReportSummary::default();
    let sheet = workbook.create_sheet(layout.sheet_name);

    for (row_index, row) in rows.iter().enumerate() {
        let classes = classify_row(row_index, row);
        for (col, (value, class)) in row.iter().zip(classes).enumerate() {
            if !matches!(class, CellClass::Normal | CellClass::Header) {
                debug!(
                    "{} {:?}: {value:?}",
                    cell_ref(row_index as u32, col as u32),
                    class
                );
            }
            sheet.write_cell(
                row_index as u32,
                col as u32,
                value,
                &StyleSpec::for_class(class),
            );
            summary.record(class);
        }
        summary.rows += 1;
    }

    for (col, units) in layout.column_widths.iter().enumerate() {
        sheet.set_column_width(col as u32, *units);
    }

    info!(
        "{} rows: {} error-row cells, {} invalid emails, {} invalid ages",
        summary.rows,
        summary.count(CellClass::ErrorRow),
        summary.count(CellClass::InvalidEmail),
        summary.count(CellClass::InvalidAge),
    );

    workbook.save(path)?;
    info!("saved {}", path.display());

    Ok(summary)
}
