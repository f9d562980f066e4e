//! The spreadsheet writer behind the report builder.
//!
//! [`write_report`](crate::report::write_report) only talks to these two
//! traits, so the builder can run against a recording fake in tests and
//! against `umya-spreadsheet` in the binary.

use std::io;
use std::path::Path;

use umya_spreadsheet::{Spreadsheet, Worksheet, XlsxError};

use crate::error::ReportError;
use crate::style::StyleSpec;

pub trait SheetSink {
    /// Writes `value` as a text cell. `row` and `col` are 0-based.
    fn write_cell(&mut self, row: u32, col: u32, value: &str, style: &StyleSpec);

    /// Width in character units.
    fn set_column_width(&mut self, col: u32, units: f64);
}

pub trait WorkbookSink {
    type Sheet: SheetSink;

    /// The workbook holds a single sheet; this names it and hands it out.
    fn create_sheet(&mut self, name: &str) -> &mut Self::Sheet;

    fn save(&self, path: &Path) -> Result<(), ReportError>;
}

/// 0 -> A, 25 -> Z, 26 -> AA ...
pub fn column_name(col: u32) -> String {
    let mut col = col + 1;
    let mut name = String::new();
    while col > 0 {
        let rem = ((col - 1) % 26) as u8;
        name.insert(0, (b'A' + rem) as char);
        col = (col - 1) / 26;
    }
    name
}

pub fn cell_ref(row: u32, col: u32) -> String {
    format!("{}{}", column_name(col), row + 1)
}

pub struct UmyaWorkbook {
    book: Spreadsheet,
}

impl UmyaWorkbook {
    pub fn new() -> Self {
        Self {
            book: umya_spreadsheet::new_file(),
        }
    }

    #[cfg(test)]
    pub(crate) fn book(&self) -> &Spreadsheet {
        &self.book
    }
}

impl Default for UmyaWorkbook {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkbookSink for UmyaWorkbook {
    type Sheet = Worksheet;

    fn create_sheet(&mut self, name: &str) -> &mut Worksheet {
        let sheet = self.book.get_active_sheet_mut();
        sheet.set_name(name);
        sheet
    }

    fn save(&self, path: &Path) -> Result<(), ReportError> {
        // The file handle is opened and closed inside the writer, on the
        // error path too. A partially written file is left as is.
        umya_spreadsheet::writer::xlsx::write(&self.book, path).map_err(|err| {
            let source = match err {
                XlsxError::Io(err) => err,
                other => io::Error::other(other.to_string()),
            };
            ReportError::FileWrite {
                path: path.to_path_buf(),
                source,
            }
        })
    }
}

impl SheetSink for Worksheet {
    fn write_cell(&mut self, row: u32, col: u32, value: &str, style: &StyleSpec) {
        let addr = cell_ref(row, col);
        let cell = self.get_cell_mut(addr.as_str());
        cell.set_value_string(value);
        if !style.is_plain() {
            cell.set_style(style.to_umya());
        }
    }

    fn set_column_width(&mut self, col: u32, units: f64) {
        self.get_column_dimension_mut(&column_name(col)).set_width(units);
    }
}
