//! Factory-table loading
//!
//! Loads the factory workbook from a local `.xlsx`/`.csv` path or an
//! HTTP(S) URL, and maps header-named columns onto `FactoryRow`. Column
//! order in the source file does not matter; blank rows are skipped.

use calamine::{open_workbook, Reader, Xlsx};
use csv::ReaderBuilder;
use std::io::Cursor;
use std::path::Path;
use std::time::Duration;
use transitcast_common::{Error, Result};

pub const BRAND_COLUMN: &str = "Empresa";
pub const CITY_COLUMN: &str = "City";
pub const COUNTRY_COLUMN: &str = "Country / Region";
pub const ZIP_COLUMN: &str = "Zip Code";
pub const WORKERS_COLUMN: &str = "Workers Count";

const DOWNLOAD_TIMEOUT_SECS: u64 = 60;

/// One raw factory row from the input table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactoryRow {
    pub brand: String,
    pub city: String,
    pub country: String,
    pub postal_code: String,
    pub worker_count: u32,
}

/// Load factory rows from a local path or an HTTP(S) URL
pub async fn load_factory_rows(input: &str) -> Result<Vec<FactoryRow>> {
    if input.starts_with("http://") || input.starts_with("https://") {
        let bytes = download(input).await?;
        if url_is_csv(input) {
            parse_csv(bytes.as_slice())
        } else {
            parse_xlsx_reader(Cursor::new(bytes))
        }
    } else {
        let path = Path::new(input);
        if !path.exists() {
            return Err(Error::Spreadsheet(format!(
                "Input file not found: {}",
                path.display()
            )));
        }

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();
        match ext.as_str() {
            "csv" => parse_csv(std::fs::File::open(path)?),
            "xlsx" | "xls" => parse_xlsx_path(path),
            other => Err(Error::Spreadsheet(format!(
                "Unsupported input format: {other:?}"
            ))),
        }
    }
}

async fn download(url: &str) -> Result<Vec<u8>> {
    tracing::info!(url = %url, "Downloading factory table");

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(DOWNLOAD_TIMEOUT_SECS))
        .build()
        .map_err(|e| Error::Spreadsheet(e.to_string()))?;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| Error::Spreadsheet(format!("Download failed: {e}")))?;

    if !response.status().is_success() {
        return Err(Error::Spreadsheet(format!(
            "Download failed: HTTP {} from {url}",
            response.status()
        )));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| Error::Spreadsheet(format!("Download failed: {e}")))?;
    Ok(bytes.to_vec())
}

fn url_is_csv(url: &str) -> bool {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    path.to_ascii_lowercase().ends_with(".csv")
}

fn parse_csv<R: std::io::Read>(reader: R) -> Result<Vec<FactoryRow>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| Error::Spreadsheet(e.to_string()))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| Error::Spreadsheet(e.to_string()))?;
        rows.push(record.iter().map(|v| v.trim().to_string()).collect());
    }

    map_rows(&headers, rows)
}

fn parse_xlsx_path(path: &Path) -> Result<Vec<FactoryRow>> {
    let workbook: Xlsx<_> =
        open_workbook(path).map_err(|e: calamine::XlsxError| Error::Spreadsheet(e.to_string()))?;
    parse_workbook(workbook)
}

fn parse_xlsx_reader<RS: std::io::Read + std::io::Seek>(reader: RS) -> Result<Vec<FactoryRow>> {
    let workbook = Xlsx::new(reader).map_err(|e| Error::Spreadsheet(e.to_string()))?;
    parse_workbook(workbook)
}

fn parse_workbook<RS: std::io::Read + std::io::Seek>(mut workbook: Xlsx<RS>) -> Result<Vec<FactoryRow>> {
    let sheet_names = workbook.sheet_names();
    let sheet_name = sheet_names
        .first()
        .cloned()
        .ok_or_else(|| Error::Spreadsheet("Workbook has no sheets".to_string()))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| Error::Spreadsheet(e.to_string()))?;

    let mut range_rows = range.rows();
    let header_row = range_rows
        .next()
        .ok_or_else(|| Error::Spreadsheet("Workbook has no data rows".to_string()))?;
    let headers: Vec<String> = header_row
        .iter()
        .map(|cell| cell.to_string().trim().to_string())
        .collect();

    let rows: Vec<Vec<String>> = range_rows
        .map(|row| {
            row.iter()
                .map(|cell| cell.to_string().trim().to_string())
                .collect()
        })
        .collect();

    map_rows(&headers, rows)
}

/// Map header-named cells onto `FactoryRow`s
///
/// Row numbers in errors are 1-based file rows (header is row 1).
fn map_rows(headers: &[String], rows: Vec<Vec<String>>) -> Result<Vec<FactoryRow>> {
    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| Error::Spreadsheet(format!("Missing column: {name:?}")))
    };

    let brand_idx = column(BRAND_COLUMN)?;
    let city_idx = column(CITY_COLUMN)?;
    let country_idx = column(COUNTRY_COLUMN)?;
    let zip_idx = column(ZIP_COLUMN)?;
    let workers_idx = column(WORKERS_COLUMN)?;

    let mut result = Vec::new();
    for (index, cells) in rows.into_iter().enumerate() {
        if cells.iter().all(|cell| cell.is_empty()) {
            continue;
        }

        let cell = |i: usize| cells.get(i).map(String::as_str).unwrap_or("").to_string();
        let workers_raw = cell(workers_idx);
        let worker_count = parse_worker_count(&workers_raw).ok_or_else(|| {
            Error::Spreadsheet(format!(
                "Row {}: invalid worker count {workers_raw:?}",
                index + 2
            ))
        })?;

        result.push(FactoryRow {
            brand: cell(brand_idx),
            city: cell(city_idx),
            country: cell(country_idx),
            postal_code: cell(zip_idx),
            worker_count,
        });
    }

    Ok(result)
}

/// Parse a worker count cell; Excel renders integers as "50" or "50.0"
fn parse_worker_count(raw: &str) -> Option<u32> {
    let value: f64 = raw.trim().parse().ok()?;
    if value.is_finite() && value >= 0.0 {
        Some(value.round() as u32)
    } else {
        None
    }
}
