use std::path::Path;
use std::time::SystemTime;

use chrono::{DateTime, Local};

use crate::error::{Error, Result};

use super::table::escape_html;

/// Marker in the header fragment replaced by the page title.
pub const TITLE_MARKER: &str = "<!-- title -->";
/// Marker in the footer fragment replaced by the formatted mod time.
pub const MODIFIED_MARKER: &str = "<!-- modified -->";

// ---------------------------------------------------------------------------
// Chrome – shared header and footer fragments
// ---------------------------------------------------------------------------

/// The shared page chrome: a header fragment prepended to every page body
/// and a footer fragment appended to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chrome {
    pub header: String,
    pub footer: String,
}

impl Chrome {
    /// Read both fragments from disk.
    pub fn load(header: &Path, footer: &Path) -> Result<Self> {
        let header = std::fs::read_to_string(header)
            .map_err(|e| Error::missing_include(e, header))?;
        let footer = std::fs::read_to_string(footer)
            .map_err(|e| Error::missing_include(e, footer))?;
        Ok(Chrome { header, footer })
    }
}

// ---------------------------------------------------------------------------
// Page assembly
// ---------------------------------------------------------------------------

/// Assemble a full page: header fragment, body, footer fragment.
///
/// [`TITLE_MARKER`] in the header is replaced by the escaped title, and
/// [`MODIFIED_MARKER`] in the footer by the formatted mod time. Markers
/// are optional; absent ones leave the fragment untouched, and with no
/// mod time the footer marker stays in place (it is an HTML comment).
pub fn render_page(
    chrome: &Chrome,
    title: &str,
    body: &str,
    modified: Option<SystemTime>,
) -> String {
    let mut out = String::with_capacity(chrome.header.len() + body.len() + chrome.footer.len());

    out.push_str(&chrome.header.replace(TITLE_MARKER, &escape_html(title)));
    out.push_str(body);
    match modified {
        Some(time) => out.push_str(&chrome.footer.replace(MODIFIED_MARKER, &format_mod_time(time))),
        None => out.push_str(&chrome.footer),
    }

    out
}

/// Most recent modification time across the given paths. Paths that are
/// missing or not plain files are ignored; `None` when nothing yields a
/// time.
pub fn page_mod_time<P: AsRef<Path>>(paths: &[P]) -> Option<SystemTime> {
    paths
        .iter()
        .filter_map(|p| {
            let meta = std::fs::metadata(p.as_ref()).ok()?;
            if !meta.is_file() {
                return None;
            }
            meta.modified().ok()
        })
        .max()
}

/// Format a timestamp as e.g. `August 22 2026`, in local time.
pub fn format_mod_time(time: SystemTime) -> String {
    let local: DateTime<Local> = time.into();
    local.format("%B %d %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn chrome() -> Chrome {
        Chrome {
            header: "<html><head><title><!-- title --></title></head><body>\n".to_string(),
            footer: "<div id=\"footer\">Last modified: <!-- modified --></div></body></html>\n"
                .to_string(),
        }
    }

    #[test]
    fn page_is_header_body_footer() {
        let html = render_page(&chrome(), "Processors", "<p>body</p>\n", None);
        assert!(html.starts_with("<html>"));
        assert!(html.contains("<title>Processors</title>"));
        assert!(html.contains("<p>body</p>"));
        assert!(html.ends_with("</body></html>\n"));
    }

    #[test]
    fn title_is_escaped() {
        let html = render_page(&chrome(), "R&D <notes>", "", None);
        assert!(html.contains("<title>R&amp;D &lt;notes&gt;</title>"));
    }

    #[test]
    fn mod_time_fills_the_footer_marker() {
        let html = render_page(&chrome(), "t", "", Some(SystemTime::now()));
        assert!(!html.contains(MODIFIED_MARKER));
        assert!(html.contains("Last modified: "));
    }

    #[test]
    fn fragments_without_markers_pass_through() {
        let plain = Chrome {
            header: "<body>\n".to_string(),
            footer: "</body>\n".to_string(),
        };
        let html = render_page(&plain, "ignored", "x", Some(SystemTime::now()));
        assert_eq!(html, "<body>\nx</body>\n");
    }

    #[test]
    fn mod_time_is_the_newest_contributor() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("a.html");
        let second = dir.path().join("b.csv");
        std::fs::File::create(&first)
            .unwrap()
            .write_all(b"a")
            .unwrap();
        std::fs::File::create(&second)
            .unwrap()
            .write_all(b"b")
            .unwrap();

        let expected = [&first, &second]
            .iter()
            .map(|p| std::fs::metadata(p).unwrap().modified().unwrap())
            .max()
            .unwrap();
        let missing = dir.path().join("nope.txt");
        let got = page_mod_time(&[&first, &second, &missing]).unwrap();
        assert_eq!(got, expected);
    }

    #[test]
    fn mod_time_over_no_files_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        assert_eq!(page_mod_time(&[missing]), None);
    }

    #[test]
    fn formatted_time_is_month_day_year() {
        let text = format_mod_time(SystemTime::now());
        let parts: Vec<&str> = text.split(' ').collect();
        assert_eq!(parts.len(), 3, "got: {text}");
        assert!(parts[0].chars().all(|c| c.is_ascii_alphabetic()));
        assert_eq!(parts[1].len(), 2);
        assert!(parts[1].chars().all(|c| c.is_ascii_digit()));
        assert_eq!(parts[2].len(), 4);
        assert!(parts[2].chars().all(|c| c.is_ascii_digit()));
    }
}
