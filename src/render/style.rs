use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Alignment – per-column text alignment
// ---------------------------------------------------------------------------

/// Text alignment intent for one column. Serialized in lowercase so site
/// configuration can say `"center"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    /// The CSS class the page stylesheet keys on.
    pub fn as_class(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }
}

// ---------------------------------------------------------------------------
// TableStyle – presentation attributes for one table
// ---------------------------------------------------------------------------

/// Maps column positions to presentation attributes for one table:
/// alignment, an optional ordered projection of visible columns, and the
/// stripe class pair cycled over data rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableStyle {
    /// Column index → alignment. Unmapped columns fall back to left.
    pub alignments: BTreeMap<usize, Alignment>,
    /// Ordered column indices to render. `None` renders every column.
    pub columns: Option<Vec<usize>>,
    /// Class pair for even and odd data rows.
    pub stripes: (String, String),
}

impl Default for TableStyle {
    fn default() -> Self {
        TableStyle {
            alignments: BTreeMap::new(),
            columns: None,
            stripes: ("tr1".to_string(), "tr2".to_string()),
        }
    }
}

impl TableStyle {
    /// Set the alignment for one column.
    pub fn with_alignment(mut self, index: usize, alignment: Alignment) -> Self {
        self.alignments.insert(index, alignment);
        self
    }

    /// Restrict rendering to the given columns, in the given order.
    pub fn with_columns(mut self, columns: Vec<usize>) -> Self {
        self.columns = Some(columns);
        self
    }

    /// Use a different stripe class pair.
    pub fn with_stripes(mut self, even: impl Into<String>, odd: impl Into<String>) -> Self {
        self.stripes = (even.into(), odd.into());
        self
    }

    /// Look up the alignment for a column, falling back to left.
    pub fn alignment(&self, index: usize) -> Alignment {
        self.alignments.get(&index).copied().unwrap_or_default()
    }

    /// Stripe class for the data row at `position` (0-based). The first
    /// data row always gets the first class of the pair; the header is
    /// not part of the cycle.
    pub fn stripe_for(&self, position: usize) -> &str {
        if position % 2 == 0 {
            &self.stripes.0
        } else {
            &self.stripes.1
        }
    }
}
