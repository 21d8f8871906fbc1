/// Data layer: core types and dataset parsing.
///
/// Architecture:
/// ```text
///  dataset.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → DataTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ DataTable │  header Record + data Records
///   └──────────┘
/// ```
///
/// Everything past this point is presentation: see [`crate::render`] for
/// the tagging stage and [`crate::html`] for markup.

pub mod loader;
pub mod model;
