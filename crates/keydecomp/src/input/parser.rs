//! CSV/TSV loader with delimiter detection.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use sha2::{Digest, Sha256};

use super::source::{SourceMetadata, Table};
use crate::error::{KeyError, Result};

/// Delimiters to try when auto-detecting.
const DELIMITERS: &[u8] = &[b'\t', b',', b';', b'|'];

/// Non-blank lines sampled when auto-detecting.
const SAMPLE_LINES: usize = 10;

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Delimiter to use (None = auto-detect).
    pub delimiter: Option<u8>,
    /// Whether the file has a header row.
    pub has_header: bool,
    /// Maximum rows to read (None = all).
    pub max_rows: Option<usize>,
    /// Quote character.
    pub quote: u8,
    /// Map null tokens (`NA`, `null`, empty, ...) to missing values.
    pub detect_nulls: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            has_header: true,
            max_rows: None,
            quote: b'"',
            detect_nulls: true,
        }
    }
}

/// Loads tabular data files into a [`Table`].
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a file and return the table and its metadata.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<(Table, SourceMetadata)> {
        let path = path.as_ref();
        let io_err = |source| KeyError::Io {
            path: path.to_path_buf(),
            source,
        };

        let mut file = File::open(path).map_err(io_err)?;
        let size_bytes = file.metadata().map_err(io_err)?.len();

        let mut contents = Vec::new();
        file.read_to_end(&mut contents).map_err(io_err)?;

        let mut hasher = Sha256::new();
        hasher.update(&contents);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let delimiter = match self.config.delimiter {
            Some(d) => d,
            None => detect_delimiter(&contents, self.config.quote)?,
        };

        let table = self.parse_bytes(&contents, delimiter)?;

        let format = match delimiter {
            b'\t' => "tsv",
            b',' => "csv",
            b';' => "csv-semicolon",
            b'|' => "psv",
            _ => "delimited",
        }
        .to_string();

        log::debug!(
            "loaded {} ({} rows, {} columns, {})",
            path.display(),
            table.row_count(),
            table.column_count(),
            format
        );

        let metadata = SourceMetadata::new(
            path.to_path_buf(),
            hash,
            size_bytes,
            format,
            table.row_count(),
            table.column_count(),
        );

        Ok((table, metadata))
    }

    /// Parse bytes directly with a known delimiter.
    pub fn parse_bytes(&self, bytes: &[u8], delimiter: u8) -> Result<Table> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(self.config.has_header)
            .quote(self.config.quote)
            .flexible(true)
            .from_reader(bytes);

        let mut headers: Vec<String> = if self.config.has_header {
            reader.headers()?.iter().map(|s| s.to_string()).collect()
        } else {
            Vec::new()
        };

        let mut rows = Vec::new();
        for (row_idx, result) in reader.records().enumerate() {
            if let Some(max) = self.config.max_rows {
                if row_idx >= max {
                    break;
                }
            }

            let record = result?;
            if !self.config.has_header && headers.is_empty() {
                headers = (0..record.len())
                    .map(|i| format!("column_{}", i + 1))
                    .collect();
            }

            let row: Vec<Option<String>> = record
                .iter()
                .map(|s| {
                    if self.config.detect_nulls && Table::is_null_value(s) {
                        None
                    } else {
                        Some(s.to_string())
                    }
                })
                .collect();
            rows.push(row);
        }

        // A lone empty header field is what csv reports for a blank file.
        if headers.is_empty() || (headers.len() == 1 && headers[0].is_empty() && rows.is_empty()) {
            return Err(KeyError::EmptySchema);
        }

        Ok(Table::new(headers, rows))
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a user-supplied delimiter such as `,`, `tab` or `\t`.
pub fn parse_delimiter(value: &str) -> Result<u8> {
    match value {
        "tab" | "\\t" | "\t" => Ok(b'\t'),
        "comma" => Ok(b','),
        "semicolon" => Ok(b';'),
        "pipe" => Ok(b'|'),
        s if s.len() == 1 && s.is_ascii() => Ok(s.as_bytes()[0]),
        other => Err(KeyError::InvalidDelimiter(other.to_string())),
    }
}

/// Pick the delimiter whose field count agrees across the most sample lines.
///
/// Lines made only of null tokens (such as `,,,` or `NA\tNA`) are left out of
/// the vote. Ties go to the earlier entry of [`DELIMITERS`]; a file where no
/// delimiter yields two fields is read as a single comma-separated column.
fn detect_delimiter(bytes: &[u8], quote: u8) -> Result<u8> {
    let text = String::from_utf8_lossy(bytes);
    let lines: Vec<&str> = text
        .lines()
        .filter(|l| !l.trim().is_empty())
        .take(SAMPLE_LINES)
        .collect();

    if lines.is_empty() {
        return Err(KeyError::EmptySchema);
    }

    let mut best = (b',', 0, 0);
    for &delimiter in DELIMITERS {
        let widths: Vec<usize> = lines
            .iter()
            .map(|line| split_fields(line, delimiter, quote))
            .filter(|fields| !fields.iter().all(|f| Table::is_null_value(f)))
            .map(|fields| fields.len())
            .collect();

        let Some(&width) = widths.first() else {
            continue;
        };
        if width < 2 {
            continue;
        }

        let agreeing = widths.iter().filter(|&&w| w == width).count();
        if agreeing > best.1 || (agreeing == best.1 && width > best.2) {
            best = (delimiter, agreeing, width);
        }
    }

    Ok(best.0)
}

/// Split a line on `delimiter`, ignoring delimiters inside quotes.
fn split_fields(line: &str, delimiter: u8, quote: u8) -> Vec<&str> {
    let mut fields = Vec::new();
    let mut in_quotes = false;
    let mut start = 0;

    for (i, byte) in line.bytes().enumerate() {
        if byte == quote {
            in_quotes = !in_quotes;
        } else if byte == delimiter && !in_quotes {
            fields.push(&line[start..i]);
            start = i + 1;
        }
    }
    fields.push(&line[start..]);

    fields
}
