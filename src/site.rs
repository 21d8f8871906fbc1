use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::data::loader::{read_table, RowPolicy, TableOptions};
use crate::error::{Error, Result};
use crate::html::page::{page_mod_time, render_page, Chrome};
use crate::html::table::{table_html, HtmlOptions};
use crate::render::style::{Alignment, TableStyle};
use crate::render::table::render;

/// Marker in a body fragment replaced by the rendered dataset table.
pub const TABLE_MARKER: &str = "<!-- table -->";

// ---------------------------------------------------------------------------
// Site configuration
// ---------------------------------------------------------------------------

/// Site-wide configuration, read from a JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Directory pages are written into.
    pub output_dir: PathBuf,
    /// Header fragment wrapped around every page.
    pub header: PathBuf,
    /// Footer fragment wrapped around every page.
    pub footer: PathBuf,
    /// Pages to build.
    pub pages: Vec<PageConfig>,
}

/// One page: a body fragment, optionally with a dataset table substituted
/// at its table marker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    /// Output file name, e.g. `processors.html`.
    pub output: String,
    /// Page title.
    pub title: String,
    /// Body fragment path.
    pub content: PathBuf,
    /// Dataset table for this page, if any.
    #[serde(default)]
    pub dataset: Option<DatasetConfig>,
}

/// Source, parse, and presentation settings for one dataset table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Delimited source file.
    pub path: PathBuf,
    /// Field delimiter, a single ASCII character.
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    /// Mismatched-record handling.
    #[serde(default)]
    pub policy: RowPolicy,
    /// Column index → alignment.
    #[serde(default)]
    pub alignments: BTreeMap<usize, Alignment>,
    /// Ordered projection of columns to render; omit for all columns.
    #[serde(default)]
    pub columns: Option<Vec<usize>>,
    /// Table element `id`.
    #[serde(default)]
    pub id: Option<String>,
    /// Table element `class`.
    #[serde(default = "default_table_class")]
    pub class: String,
    /// Convert backtick spans in cell text to `<code>` elements.
    #[serde(default)]
    pub code_markup: bool,
}

fn default_delimiter() -> char {
    ','
}

fn default_table_class() -> String {
    "tablesorter".to_string()
}

impl SiteConfig {
    /// Read and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(e, path))?;
        let config: SiteConfig = serde_json::from_str(&text)?;
        Ok(config)
    }
}

// ---------------------------------------------------------------------------
// Site build
// ---------------------------------------------------------------------------

/// Counts reported by [`build_site`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BuildSummary {
    /// Pages written.
    pub pages: usize,
    /// Pages whose dataset table failed and was replaced by a notice.
    pub degraded: usize,
}

/// Build every configured page into the output directory.
///
/// A failing dataset table does not fail its page: the page is still
/// written with a short notice in the table slot and the error goes to
/// the log. The build as a whole fails only when chrome or a page's own
/// content cannot be read, or output cannot be written.
pub fn build_site(config: &SiteConfig) -> Result<BuildSummary> {
    let chrome = Chrome::load(&config.header, &config.footer)?;
    std::fs::create_dir_all(&config.output_dir)
        .map_err(|e| Error::io(e, &config.output_dir))?;

    let mut summary = BuildSummary::default();

    for page in &config.pages {
        let body = std::fs::read_to_string(&page.content)
            .map_err(|e| Error::missing_include(e, &page.content))?;

        let mut sources: Vec<PathBuf> =
            vec![page.content.clone(), config.header.clone(), config.footer.clone()];

        let body = match &page.dataset {
            Some(dataset) => {
                sources.push(dataset.path.clone());
                let fragment = match dataset_fragment(dataset) {
                    Ok(fragment) => fragment,
                    Err(e) => {
                        log::error!(
                            "dataset table {} for {} failed: {e}",
                            dataset.path.display(),
                            page.output
                        );
                        summary.degraded += 1;
                        "<p class=\"table-error\">Dataset table unavailable.</p>\n".to_string()
                    }
                };
                if body.contains(TABLE_MARKER) {
                    body.replace(TABLE_MARKER, &fragment)
                } else {
                    log::warn!(
                        "{} has a dataset but no {TABLE_MARKER} marker, appending table",
                        page.content.display()
                    );
                    body + &fragment
                }
            }
            None => body,
        };

        let html = render_page(&chrome, &page.title, &body, page_mod_time(&sources));

        let target = config.output_dir.join(&page.output);
        std::fs::write(&target, html).map_err(|e| Error::io(e, &target))?;
        log::info!("built {}", target.display());
        summary.pages += 1;
    }

    Ok(summary)
}

/// Parse, tag, and serialize one configured dataset table.
fn dataset_fragment(dataset: &DatasetConfig) -> Result<String> {
    let options = TableOptions::default()
        .with_delimiter(delimiter_byte(dataset.delimiter)?)
        .with_policy(dataset.policy);
    let table = read_table(&dataset.path, &options)?;
    if table.skipped > 0 {
        log::warn!(
            "{}: skipped {} malformed record(s)",
            dataset.path.display(),
            table.skipped
        );
    }

    let style = TableStyle {
        alignments: dataset.alignments.clone(),
        columns: dataset.columns.clone(),
        ..TableStyle::default()
    };
    let rendered = render(&table, &style)?;

    let mut html_options = HtmlOptions::default().with_class(dataset.class.clone());
    if let Some(id) = &dataset.id {
        html_options = html_options.with_id(id.clone());
    }
    if dataset.code_markup {
        html_options = html_options.with_code_markup();
    }
    Ok(table_html(&rendered, &html_options))
}

fn delimiter_byte(delimiter: char) -> Result<u8> {
    if delimiter.is_ascii() {
        Ok(delimiter as u8)
    } else {
        Err(Error::config(format!(
            "delimiter {delimiter:?} is not a single-byte character"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_parses_with_defaults() {
        let json = r#"{
            "output_dir": "public",
            "header": "chrome/header.html",
            "footer": "chrome/footer.html",
            "pages": [
                {
                    "output": "processors.html",
                    "title": "Processors",
                    "content": "content/processors.html",
                    "dataset": {
                        "path": "data/processors.csv",
                        "alignments": {"0": "center", "5": "right"},
                        "id": "processors"
                    }
                },
                {
                    "output": "index.html",
                    "title": "Home",
                    "content": "content/index.html"
                }
            ]
        }"#;
        let config: SiteConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.pages.len(), 2);

        let dataset = config.pages[0].dataset.as_ref().unwrap();
        assert_eq!(dataset.delimiter, ',');
        assert_eq!(dataset.policy, RowPolicy::Reject);
        assert_eq!(dataset.class, "tablesorter");
        assert_eq!(dataset.alignments.get(&0), Some(&Alignment::Center));
        assert_eq!(dataset.alignments.get(&5), Some(&Alignment::Right));
        assert!(config.pages[1].dataset.is_none());
    }

    #[test]
    fn config_accepts_policy_and_columns() {
        let json = r#"{
            "path": "d.csv",
            "policy": "skip",
            "columns": [0, 1, 2, 9],
            "code_markup": true
        }"#;
        let dataset: DatasetConfig = serde_json::from_str(json).unwrap();
        assert_eq!(dataset.policy, RowPolicy::Skip);
        assert_eq!(dataset.columns, Some(vec![0, 1, 2, 9]));
        assert!(dataset.code_markup);
    }

    #[test]
    fn non_ascii_delimiter_is_rejected() {
        let err = delimiter_byte('→').unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn ascii_delimiter_converts() {
        assert_eq!(delimiter_byte(';').unwrap(), b';');
        assert_eq!(delimiter_byte('\t').unwrap(), b'\t');
    }
}
