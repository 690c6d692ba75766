//! Report output sinks.
//!
//! Commands produce a [`Report`] of `(x, y)` rows; a [`ReportSink`] renders it
//! as a box-drawn table, CSV, or JSON.

use serde::{Deserialize, Serialize};
use std::io::Write;
use std::str::FromStr;

use crate::config::ConfigError;
use crate::Result;

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Box-drawn text table
    #[default]
    Table,
    /// CSV with a header row
    Csv,
    /// Pretty-printed JSON
    Json,
}

impl FromStr for ReportFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(ReportFormat::Table),
            "csv" => Ok(ReportFormat::Csv),
            "json" => Ok(ReportFormat::Json),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

/// One evaluated point
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReportRow {
    /// Query value
    pub x: f64,
    /// Value of the fitted polynomial
    pub y: f64,
}

/// Titled collection of rows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Report title
    pub title: String,
    /// Header of the x column
    pub x_label: String,
    /// Header of the y column
    pub y_label: String,
    /// Rows in output order
    pub rows: Vec<ReportRow>,
}

impl Report {
    /// Empty report with the default `x` / `y` headers
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x_label: "x".to_string(),
            y_label: "y".to_string(),
            rows: Vec::new(),
        }
    }

    /// Replace the column headers
    pub fn with_labels(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_label = x_label.into();
        self.y_label = y_label.into();
        self
    }

    /// Append a row
    pub fn push(&mut self, x: f64, y: f64) {
        self.rows.push(ReportRow { x, y });
    }
}

/// Report output destination trait
pub trait ReportSink {
    /// Render a report
    fn write(&mut self, report: &Report) -> Result<()>;
}

/// Build the sink for `format` writing to `out`
pub fn sink_for<'a, W: Write + 'a>(
    format: ReportFormat,
    precision: usize,
    out: W,
) -> Box<dyn ReportSink + 'a> {
    match format {
        ReportFormat::Table => Box::new(TableSink::new(out, precision)),
        ReportFormat::Csv => Box::new(CsvSink::new(out, precision)),
        ReportFormat::Json => Box::new(JsonSink::new(out)),
    }
}

/// Box-drawn table, x printed as-is and y with fixed decimals
pub struct TableSink<W: Write> {
    out: W,
    precision: usize,
}

impl<W: Write> TableSink<W> {
    /// Table writer printing `precision` decimals for y
    pub fn new(out: W, precision: usize) -> Self {
        Self { out, precision }
    }
}

impl<W: Write> ReportSink for TableSink<W> {
    fn write(&mut self, report: &Report) -> Result<()> {
        let cells: Vec<(String, String)> = report
            .rows
            .iter()
            .map(|row| (row.x.to_string(), format!("{:.*}", self.precision, row.y)))
            .collect();

        let x_width = cells
            .iter()
            .map(|(x, _)| x.len())
            .chain(std::iter::once(report.x_label.len()))
            .max()
            .unwrap_or(0);
        let y_width = cells
            .iter()
            .map(|(_, y)| y.len())
            .chain(std::iter::once(report.y_label.len()))
            .max()
            .unwrap_or(0);
        let rule = format!("+-{}-+-{}-+", "-".repeat(x_width), "-".repeat(y_width));

        writeln!(self.out, "{}", report.title)?;
        writeln!(self.out, "{}", rule)?;
        writeln!(
            self.out,
            "| {:^xw$} | {:^yw$} |",
            report.x_label,
            report.y_label,
            xw = x_width,
            yw = y_width
        )?;
        writeln!(self.out, "{}", rule)?;
        for (x, y) in &cells {
            writeln!(self.out, "| {:>xw$} | {:>yw$} |", x, y, xw = x_width, yw = y_width)?;
        }
        writeln!(self.out, "{}", rule)?;
        self.out.flush()?;
        Ok(())
    }
}

/// CSV with a header row; the title is not written
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
    precision: usize,
}

impl<W: Write> CsvSink<W> {
    /// CSV writer printing `precision` decimals for y
    pub fn new(out: W, precision: usize) -> Self {
        Self {
            writer: csv::Writer::from_writer(out),
            precision,
        }
    }
}

impl<W: Write> ReportSink for CsvSink<W> {
    fn write(&mut self, report: &Report) -> Result<()> {
        self.writer
            .write_record([report.x_label.as_str(), report.y_label.as_str()])?;
        for row in &report.rows {
            self.writer.write_record([
                row.x.to_string(),
                format!("{:.*}", self.precision, row.y),
            ])?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// Pretty-printed JSON of the whole report, values at full precision
pub struct JsonSink<W: Write> {
    out: W,
}

impl<W: Write> JsonSink<W> {
    /// JSON writer
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> ReportSink for JsonSink<W> {
    fn write(&mut self, report: &Report) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.out, report)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
