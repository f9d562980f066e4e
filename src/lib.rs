pub mod classify;
pub mod dataset;
pub mod error;
pub mod report;
pub mod sink;
pub mod style;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use report::{OUTPUT_FILE, ReportLayout, ReportSummary, write_report};
use sink::UmyaWorkbook;

pub use classify::{CellClass, Row};
pub use error::ReportError;
pub use style::StyleSpec;

/// Writes the users sheet to `path` with `umya-spreadsheet`.
pub fn generate(path: &Path) -> Result<ReportSummary, ReportError> {
    let mut workbook = UmyaWorkbook::new();
    write_report(
        &mut workbook,
        &dataset::users(),
        &ReportLayout::default(),
        path,
    )
}

/// Writes `users.xlsx` into the current directory.
pub fn run() -> Result<PathBuf> {
    let output_path = PathBuf::from(OUTPUT_FILE);
    generate(&output_path)
        .with_context(|| format!("could not create {}", output_path.display()))?;
    Ok(output_path)
}
