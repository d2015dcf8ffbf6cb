use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};

use super::model::Dataset;

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a dataset from a `.csv` file on disk.
pub fn load_file(path: &Path) -> Result<Dataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    if ext != "csv" {
        bail!("Unsupported file extension: .{ext} (expected .csv)");
    }

    let bytes = std::fs::read(path)
        .with_context(|| format!("reading {}", path.display()))?;
    load_bytes(&bytes)
}

/// Parse an uploaded byte buffer as comma-separated text.
pub fn load_bytes(bytes: &[u8]) -> Result<Dataset> {
    parse_csv(bytes)
}

/// Parse comma-separated text whose first row is the header.
///
/// Every cell is kept verbatim; numeric interpretation happens only when the
/// features are extracted. Rows shorter than the header get empty trailing
/// cells; longer rows are an error. Repeated header names get a `.1`, `.2`… suffix so
/// each column stays addressable.
pub fn parse_csv<R: Read>(reader: R) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let raw_headers = reader.headers().context("reading CSV headers")?.clone();
    if raw_headers.is_empty() {
        bail!("CSV file is empty (no header row)");
    }
    let columns = dedup_headers(raw_headers.iter());

    let mut rows = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let row_no = idx + 1;
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        if record.len() > columns.len() {
            bail!(
                "CSV row {row_no}: found {} fields, but the header has {}",
                record.len(),
                columns.len()
            );
        }
        // Short rows are padded with empty cells.
        let mut row: Vec<String> = record.iter().map(str::to_string).collect();
        row.resize(columns.len(), String::new());
        rows.push(row);
    }

    Ok(Dataset { columns, rows })
}

fn dedup_headers<'a>(headers: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for header in headers {
        let mut name = header.to_string();
        let mut n = 0;
        while columns.contains(&name) {
            n += 1;
            name = format!("{header}.{n}");
        }
        columns.push(name);
    }
    columns
}
