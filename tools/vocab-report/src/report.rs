use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Format, Workbook, XlsxError};
use tracing::{error, info};
use vocab_protocol::{FrequencyRecord, RankedResult};

use crate::config::ReportConfig;
use crate::error::ReportError;

pub const RANKED_SHEET: &str = "Top 500 Vocabulary";
pub const LOG_SHEET: &str = "Frequency Log";

const RANKED_HEADERS: [&str; 11] = [
    "Rank",
    "Vocabulary Unit",
    "Type",
    "Part of Speech",
    "Forms",
    "Accepted Variations",
    "Weighted Score",
    "Script Frequency",
    "Answer Frequency",
    "Observed Forms",
    "Source Files",
];
const LOG_HEADERS: [&str; 4] = ["Unit", "Source", "File Type", "Count"];

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
}

impl Cell {
    fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    /// CSV rendering. Whole numbers print without a fraction.
    fn render(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Number(n) if n.fract() == 0.0 => format!("{}", *n as i64),
            Cell::Number(n) => n.to_string(),
        }
    }
}

/// A named grid of cells with a header row.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub name: &'static str,
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<Cell>>,
}

/// At most `width` characters of `text`.
pub fn truncate(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}

fn joined<'a>(items: impl IntoIterator<Item = &'a String>) -> String {
    items.into_iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}

pub fn ranked_table(results: &[RankedResult], column_width: usize) -> Table {
    let rows = results
        .iter()
        .map(|r| {
            vec![
                Cell::Number(r.rank as f64),
                Cell::text(r.unit.display_unit()),
                Cell::text(r.unit.kind.to_string()),
                Cell::text(r.unit.pos.as_str()),
                Cell::text(r.inflections.to_string()),
                Cell::text(truncate(&joined(&r.unit.variations), column_width)),
                Cell::Number(f64::from(r.score)),
                Cell::Number(f64::from(r.unit.script_count)),
                Cell::Number(f64::from(r.unit.answer_count)),
                Cell::text(truncate(&joined(&r.unit.forms), column_width)),
                Cell::text(joined(&r.unit.sources)),
            ]
        })
        .collect();
    Table { name: RANKED_SHEET, headers: RANKED_HEADERS.to_vec(), rows }
}

pub fn log_table(records: &[FrequencyRecord]) -> Table {
    let rows = records
        .iter()
        .map(|r| {
            vec![
                Cell::text(r.unit.clone()),
                Cell::text(r.source.clone()),
                Cell::text(r.category.as_str()),
                Cell::Number(f64::from(r.count)),
            ]
        })
        .collect();
    Table { name: LOG_SHEET, headers: LOG_HEADERS.to_vec(), rows }
}

fn fill_sheet(workbook: &mut Workbook, table: &Table) -> Result<(), XlsxError> {
    let bold = Format::new().set_bold();
    let sheet = workbook.add_worksheet();
    sheet.set_name(table.name)?;

    for (col, header) in table.headers.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *header, &bold)?;
    }
    for (i, row) in table.rows.iter().enumerate() {
        let row_num = i as u32 + 1;
        for (col, cell) in row.iter().enumerate() {
            match cell {
                Cell::Text(s) => sheet.write_string(row_num, col as u16, s.as_str())?,
                Cell::Number(n) => sheet.write_number(row_num, col as u16, *n)?,
            };
        }
    }
    Ok(())
}

/// One workbook, one sheet per table.
pub fn write_xlsx(path: &Path, tables: &[&Table]) -> Result<(), ReportError> {
    let wrap = |source| ReportError::Xlsx { path: path.to_path_buf(), source };
    let mut workbook = Workbook::new();
    for table in tables {
        fill_sheet(&mut workbook, table).map_err(wrap)?;
    }
    workbook.save(path).map_err(wrap)
}

pub fn write_csv(path: &Path, table: &Table) -> Result<(), ReportError> {
    let wrap = |source| ReportError::Csv { path: path.to_path_buf(), source };
    let mut writer = csv::Writer::from_path(path).map_err(wrap)?;
    writer.write_record(&table.headers).map_err(wrap)?;
    for row in &table.rows {
        writer.write_record(row.iter().map(Cell::render)).map_err(wrap)?;
    }
    writer.flush().map_err(|source| ReportError::Io { path: path.to_path_buf(), source })
}

/// Paths written and how many writes failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WrittenReports {
    pub saved: Vec<PathBuf>,
    pub failed: usize,
}

/// Write the workbook and both CSV exports. A failed write is logged and
/// the remaining files are still attempted.
pub fn write_reports(
    results: &[RankedResult],
    frequency_log: &[FrequencyRecord],
    config: &ReportConfig,
) -> WrittenReports {
    let mut written = WrittenReports::default();

    if let Err(source) = fs::create_dir_all(&config.output_dir) {
        let err = ReportError::Io { path: config.output_dir.clone(), source };
        error!(error = %err, "output directory unavailable");
        written.failed = 3;
        return written;
    }

    let ranked = ranked_table(results, config.column_width);
    let log = log_table(frequency_log);

    let attempts: [(PathBuf, Result<(), ReportError>); 3] = [
        (config.xlsx_path(), write_xlsx(&config.xlsx_path(), &[&ranked, &log])),
        (config.csv_path(), write_csv(&config.csv_path(), &ranked)),
        (config.log_csv_path(), write_csv(&config.log_csv_path(), &log)),
    ];
    for (path, outcome) in attempts {
        match outcome {
            Ok(()) => {
                info!(path = %path.display(), "report saved");
                written.saved.push(path);
            }
            Err(err) => {
                error!(error = %err, "report write failed");
                written.failed += 1;
            }
        }
    }
    written
}

fn banner(out: &mut String, title: &str) {
    let rule = "=".repeat(80);
    let _ = writeln!(out, "{rule}\n{title}\n{rule}");
}

/// Console table of the first `top` results.
pub fn render_summary(results: &[RankedResult], top: usize) -> String {
    let mut out = String::new();
    if results.is_empty() {
        banner(&mut out, "No vocabulary found");
        return out;
    }

    banner(&mut out, &format!("TOP {} VOCABULARY UNITS", top.min(results.len())));
    let _ = writeln!(
        out,
        "{:>5}  {:<32} {:<12} {:>6} {:>7} {:>7}",
        "Rank", "Vocabulary Unit", "Type", "Score", "Script", "Answer"
    );
    for r in results.iter().take(top) {
        let _ = writeln!(
            out,
            "{:>5}  {:<32} {:<12} {:>6} {:>7} {:>7}",
            r.rank,
            truncate(r.unit.display_unit(), 32),
            r.unit.kind,
            r.score,
            r.unit.script_count,
            r.unit.answer_count
        );
    }
    banner(&mut out, &format!("Total units: {}", results.len()));
    out
}
