use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use csv::ReaderBuilder;
use serde_json::Value;
use tracing::{debug, warn};

use crate::catalog::RawRecord;
use crate::error::{RecommendError, Result};

/// On-disk shape of a corpus file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorpusFormat {
    /// header row + one record per line
    Csv,
    /// one JSON array of record objects
    Json,
    /// one JSON record object per line
    JsonLines,
}

impl CorpusFormat {
    /// Guess the format from the file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "csv" | "tsv" => Ok(CorpusFormat::Csv),
            "json" => Ok(CorpusFormat::Json),
            "jsonl" | "ndjson" => Ok(CorpusFormat::JsonLines),
            _ => Err(RecommendError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoaderOptions {
    /// `None` means guess from the extension
    pub format: Option<CorpusFormat>,
    /// CSV field delimiter
    pub delimiter: u8,
}

impl LoaderOptions {
    /// Set the CSV delimiter, rejecting anything outside ASCII
    pub fn with_delimiter(mut self, delimiter: char) -> Result<Self> {
        if !delimiter.is_ascii() {
            return Err(RecommendError::InvalidDelimiter(delimiter));
        }
        self.delimiter = delimiter as u8;
        Ok(self)
    }
}

impl Default for LoaderOptions {
    fn default() -> Self {
        LoaderOptions {
            format: None,
            delimiter: b',',
        }
    }
}

/// Read every record from a corpus file.
///
/// Rows that fail to parse are skipped with a warning; I/O failures abort.
pub fn load_records(path: &Path, opts: &LoaderOptions) -> Result<Vec<RawRecord>> {
    let format = match opts.format {
        Some(format) => format,
        None => CorpusFormat::from_path(path)?,
    };
    let delimiter = match (opts.format, path.extension().and_then(|e| e.to_str())) {
        (None, Some(ext)) if ext.eq_ignore_ascii_case("tsv") => b'\t',
        _ => opts.delimiter,
    };
    let file = File::open(path)?;
    let records = match format {
        CorpusFormat::Csv => read_csv(file, delimiter)?,
        CorpusFormat::Json => read_json(file)?,
        CorpusFormat::JsonLines => read_json_lines(BufReader::new(file))?,
    };
    debug!(path = %path.display(), ?format, records = records.len(), "corpus file read");
    Ok(records)
}

pub fn read_csv<R: Read>(reader: R, delimiter: u8) -> Result<Vec<RawRecord>> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(reader);
    let mut records = Vec::new();
    for (row, result) in rdr.deserialize::<RawRecord>().enumerate() {
        match result {
            Ok(record) => records.push(record),
            Err(err) if err.is_io_error() => return Err(err.into()),
            Err(err) => warn!(row, error = %err, "skipping malformed csv row"),
        }
    }
    Ok(records)
}

pub fn read_json<R: Read>(reader: R) -> Result<Vec<RawRecord>> {
    let values: Vec<Value> = serde_json::from_reader(reader)?;
    let mut records = Vec::with_capacity(values.len());
    for (row, value) in values.into_iter().enumerate() {
        match serde_json::from_value::<RawRecord>(value) {
            Ok(record) => records.push(record),
            Err(err) => warn!(row, error = %err, "skipping malformed json record"),
        }
    }
    Ok(records)
}

pub fn read_json_lines<R: BufRead>(reader: R) -> Result<Vec<RawRecord>> {
    let mut records = Vec::new();
    for (row, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<RawRecord>(&line) {
            Ok(record) => records.push(record),
            Err(err) => warn!(row, error = %err, "skipping malformed json line"),
        }
    }
    Ok(records)
}
