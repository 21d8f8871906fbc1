use crate::data::model::DataTable;
use crate::error::{Error, Result};

use super::style::{Alignment, TableStyle};

// ---------------------------------------------------------------------------
// Rendered table – structured output of the tagging stage
// ---------------------------------------------------------------------------

/// One field value tagged with its presentation alignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledField {
    pub value: String,
    pub alignment: Alignment,
}

/// One data row tagged with its stripe class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledRow {
    pub fields: Vec<StyledField>,
    pub stripe: String,
}

/// The fully tagged table. Carries no markup: serialization lives in
/// [`crate::html`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTable {
    pub header: Vec<StyledField>,
    pub rows: Vec<StyledRow>,
}

impl RenderedTable {
    /// Number of rendered columns.
    pub fn width(&self) -> usize {
        self.header.len()
    }

    /// Number of rendered data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table holds no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ---------------------------------------------------------------------------
// render – pure transform from parsed table to tagged table
// ---------------------------------------------------------------------------

/// Tag a parsed table with presentation attributes.
///
/// The projection in `style.columns` is checked against the table width
/// up front, as is row consistency, so the transform itself cannot fail
/// halfway. Rendering the same inputs twice yields equal output.
pub fn render(table: &DataTable, style: &TableStyle) -> Result<RenderedTable> {
    let width = table.width();

    if let Some(columns) = &style.columns {
        for &index in columns {
            if index >= width {
                return Err(Error::column_out_of_range(index, width));
            }
        }
    }
    for (position, row) in table.rows.iter().enumerate() {
        if row.len() != width {
            return Err(Error::malformed_record(
                (position + 1) as u64,
                width,
                row.len(),
            ));
        }
    }

    let projection: Vec<usize> = match &style.columns {
        Some(columns) => columns.clone(),
        None => (0..width).collect(),
    };

    let header = projection
        .iter()
        .map(|&index| StyledField {
            value: table.header.fields[index].clone(),
            alignment: style.alignment(index),
        })
        .collect();

    let rows = table
        .rows
        .iter()
        .enumerate()
        .map(|(position, row)| StyledRow {
            fields: projection
                .iter()
                .map(|&index| StyledField {
                    value: row.fields[index].clone(),
                    alignment: style.alignment(index),
                })
                .collect(),
            stripe: style.stripe_for(position).to_string(),
        })
        .collect();

    Ok(RenderedTable { header, rows })
}
