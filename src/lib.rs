//! datasheet - Render delimited datasets as sortable HTML tables with
//! shared page chrome.
//!
//! The pipeline has two stages. The parse stage turns a CSV file into a
//! [`DataTable`] of verbatim text fields; the render stage tags it with
//! per-column alignment, an optional column projection, and alternating
//! row stripes, yielding a [`RenderedTable`]. Markup is a separate step:
//! [`table_html`] serializes the tagged table, and [`html::page`] wraps
//! page bodies in shared header and footer chrome stamped with the
//! newest source mod time. [`site`] drives whole-site builds from a JSON
//! configuration.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::path::Path;
//!
//! use datasheet::{read_table, render, table_html};
//! use datasheet::{Alignment, HtmlOptions, TableOptions, TableStyle};
//!
//! let table = read_table(Path::new("data/processors.csv"), &TableOptions::default()).unwrap();
//! let style = TableStyle::default().with_alignment(0, Alignment::Center);
//! let rendered = render(&table, &style).unwrap();
//! let html = table_html(&rendered, &HtmlOptions::default().with_id("processors"));
//! println!("{html}");
//! ```

pub mod data;
pub mod error;
pub mod html;
pub mod render;
pub mod site;

// Re-exports for convenience
pub use data::loader::{read_table, read_table_from, RowPolicy, TableOptions};
pub use data::model::{DataTable, Record};
pub use error::{Error, Result};
pub use html::page::{format_mod_time, page_mod_time, render_page, Chrome};
pub use html::table::{escape_html, table_html, HtmlOptions};
pub use render::style::{Alignment, TableStyle};
pub use render::table::{render, RenderedTable, StyledField, StyledRow};
pub use site::{build_site, BuildSummary, DatasetConfig, PageConfig, SiteConfig};
