// ---------------------------------------------------------------------------
// Record – one logical row of a delimited source
// ---------------------------------------------------------------------------

/// A single record: the ordered field values of one source row, kept
/// verbatim as text. No type inference is performed on fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Field values in file order.
    pub fields: Vec<String>,
}

impl Record {
    /// Wrap already-split field values.
    pub fn new(fields: Vec<String>) -> Self {
        Record { fields }
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }
}

impl From<Vec<&str>> for Record {
    fn from(fields: Vec<&str>) -> Self {
        Record::new(fields.into_iter().map(str::to_string).collect())
    }
}

// ---------------------------------------------------------------------------
// DataTable – the complete parsed dataset
// ---------------------------------------------------------------------------

/// The parsed dataset: a header naming the columns plus the data rows,
/// in source order. Every row holds exactly `header.len()` fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataTable {
    /// Column names taken from the first record.
    pub header: Record,
    /// Data records in source order.
    pub rows: Vec<Record>,
    /// Rows dropped by [`RowPolicy::Skip`](crate::data::loader::RowPolicy);
    /// always zero under `Reject`.
    pub skipped: usize,
}

impl DataTable {
    /// Assemble a table from a header and rows, checking that every row
    /// matches the header width.
    pub fn new(header: Record, rows: Vec<Record>) -> crate::Result<Self> {
        let expected = header.len();
        for (position, row) in rows.iter().enumerate() {
            if row.len() != expected {
                return Err(crate::Error::malformed_record(
                    (position + 1) as u64,
                    expected,
                    row.len(),
                ));
            }
        }
        Ok(DataTable {
            header,
            rows,
            skipped: 0,
        })
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.header.len()
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table holds no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_uniform_rows() {
        let header = Record::from(vec!["Year", "Name"]);
        let rows = vec![
            Record::from(vec!["1965", "PDP-8"]),
            Record::from(vec!["1971", "4004"]),
        ];
        let table = DataTable::new(header, rows).unwrap();
        assert_eq!(table.width(), 2);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[1].get(1), Some("4004"));
    }

    #[test]
    fn new_rejects_ragged_rows() {
        let header = Record::from(vec!["Year", "Name"]);
        let rows = vec![
            Record::from(vec!["1965", "PDP-8"]),
            Record::from(vec!["1971"]),
        ];
        let err = DataTable::new(header, rows).unwrap_err();
        match err {
            crate::Error::MalformedRecord {
                line,
                expected,
                found,
            } => {
                assert_eq!(line, 2);
                assert_eq!(expected, 2);
                assert_eq!(found, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
