use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::model::{DataTable, Record};
use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Parse options
// ---------------------------------------------------------------------------

/// What to do with a record whose field count disagrees with the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowPolicy {
    /// Fail the whole parse on the first mismatched record.
    #[default]
    Reject,
    /// Drop mismatched records, keep a count, and log each one.
    Skip,
}

/// Options controlling the parse stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions {
    /// Field delimiter. Defaults to a comma.
    pub delimiter: u8,
    /// Mismatched-record handling. Defaults to [`RowPolicy::Reject`].
    pub policy: RowPolicy,
}

impl Default for TableOptions {
    fn default() -> Self {
        TableOptions {
            delimiter: b',',
            policy: RowPolicy::Reject,
        }
    }
}

impl TableOptions {
    /// Use a different field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Use a different mismatched-record policy.
    pub fn with_policy(mut self, policy: RowPolicy) -> Self {
        self.policy = policy;
        self
    }
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// Parse a delimited dataset from a file.
///
/// Expected layout: a header row naming the columns, then one record per
/// row with the same field count. Quoting follows the usual CSV rules, so
/// fields may contain the delimiter or line breaks when quoted:
///
/// ```csv
/// Year,Name,Notes
/// 1971,4004,"4-bit, 2300 transistors"
/// 1974,8080,8-bit
/// ```
///
/// Fields are kept verbatim. Whitespace is not trimmed and no numeric
/// conversion is attempted.
pub fn read_table(path: &Path, options: &TableOptions) -> Result<DataTable> {
    let file = File::open(path).map_err(|e| Error::source_unavailable(e, path))?;
    read_table_from(BufReader::new(file), options)
}

/// Parse a delimited dataset from any reader. See [`read_table`] for the
/// expected layout.
pub fn read_table_from<R: Read>(reader: R, options: &TableOptions) -> Result<DataTable> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .flexible(true)
        .from_reader(reader);

    let header = Record::new(
        csv_reader
            .headers()?
            .iter()
            .map(|h| h.to_string())
            .collect(),
    );
    if header.is_empty() {
        return Err(Error::EmptySource);
    }
    let expected = header.len();

    let mut rows = Vec::new();
    let mut skipped = 0usize;

    for result in csv_reader.records() {
        let record = result?;
        if record.len() != expected {
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            match options.policy {
                RowPolicy::Reject => {
                    return Err(Error::malformed_record(line, expected, record.len()));
                }
                RowPolicy::Skip => {
                    log::warn!(
                        "skipping record on line {line}: {} fields, expected {expected}",
                        record.len()
                    );
                    skipped += 1;
                    continue;
                }
            }
        }
        rows.push(Record::new(record.iter().map(|f| f.to_string()).collect()));
    }

    Ok(DataTable {
        header,
        rows,
        skipped,
    })
}
