use std::borrow::Cow;
use std::fmt::Write;

use crate::render::table::RenderedTable;

// ---------------------------------------------------------------------------
// Markup options
// ---------------------------------------------------------------------------

/// Attributes and cell-text treatments for the serialized table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlOptions {
    /// `id` attribute, the hook client-side sorters key on.
    pub id: Option<String>,
    /// `class` attribute.
    pub class: Option<String>,
    /// Convert backtick spans in cell text to `<code>` elements.
    pub code_markup: bool,
}

impl HtmlOptions {
    /// Set the table `id` attribute.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the table `class` attribute.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Enable backtick-to-`<code>` conversion in cell text.
    pub fn with_code_markup(mut self) -> Self {
        self.code_markup = true;
        self
    }
}

// ---------------------------------------------------------------------------
// Table serialization
// ---------------------------------------------------------------------------

/// Serialize a tagged table as an HTML fragment.
///
/// Shape of the output:
/// ```html
/// <table id="processors" class="tablesorter">
/// <thead>
/// <tr>
/// <th class="left">Name</th>
/// </tr>
/// </thead>
/// <tbody>
/// <tr class="tr1">
/// <td class="right">2300</td>
/// </tr>
/// </tbody>
/// </table>
/// ```
///
/// Header cells become `th`, data cells `td`, each carrying its alignment
/// class. Data rows carry their stripe class; the header row carries none.
/// All cell text and attribute values are entity-escaped.
pub fn table_html(table: &RenderedTable, options: &HtmlOptions) -> String {
    let mut out = String::new();

    out.push_str("<table");
    if let Some(id) = &options.id {
        let _ = write!(out, " id=\"{}\"", escape_html(id));
    }
    if let Some(class) = &options.class {
        let _ = write!(out, " class=\"{}\"", escape_html(class));
    }
    out.push_str(">\n<thead>\n<tr>\n");

    for field in &table.header {
        let _ = writeln!(
            out,
            "<th class=\"{}\">{}</th>",
            field.alignment.as_class(),
            cell_text(&field.value, options)
        );
    }
    out.push_str("</tr>\n</thead>\n<tbody>\n");

    for row in &table.rows {
        let _ = writeln!(out, "<tr class=\"{}\">", escape_html(&row.stripe));
        for field in &row.fields {
            let _ = writeln!(
                out,
                "<td class=\"{}\">{}</td>",
                field.alignment.as_class(),
                cell_text(&field.value, options)
            );
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</tbody>\n</table>\n");

    out
}

fn cell_text(value: &str, options: &HtmlOptions) -> String {
    let escaped = escape_html(value);
    if options.code_markup {
        code_spans(&escaped)
    } else {
        escaped.into_owned()
    }
}

// ---------------------------------------------------------------------------
// Escaping helpers
// ---------------------------------------------------------------------------

/// Entity-escape `&`, `<`, `>` and `"` for element text and double-quoted
/// attribute values.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    // Quick check: most cell text needs no escaping
    if !text.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(text);
    }

    let mut result = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            other => result.push(other),
        }
    }
    Cow::Owned(result)
}

/// Convert backtick spans to `<code>` elements: `` `ls -l` `` becomes
/// `<code>ls -l</code>`. A backslash before a backtick makes it literal,
/// and an unpaired backtick stays as-is. Runs on already-escaped text.
fn code_spans(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '\\' if i + 1 < chars.len() && chars[i + 1] == '`' => {
                out.push('`');
                i += 2;
            }
            '`' => {
                let mut body = String::new();
                let mut j = i + 1;
                let mut closed = false;
                while j < chars.len() {
                    if chars[j] == '\\' && j + 1 < chars.len() && chars[j + 1] == '`' {
                        body.push('`');
                        j += 2;
                        continue;
                    }
                    if chars[j] == '`' {
                        closed = true;
                        break;
                    }
                    body.push(chars[j]);
                    j += 1;
                }
                if closed {
                    out.push_str("<code>");
                    out.push_str(&body);
                    out.push_str("</code>");
                    i = j + 1;
                } else {
                    out.push('`');
                    i += 1;
                }
            }
            c => {
                out.push(c);
                i += 1;
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{DataTable, Record};
    use crate::render::style::{Alignment, TableStyle};
    use crate::render::table::render;

    fn rendered() -> RenderedTable {
        let table = DataTable::new(
            Record::from(vec!["Name", "Transistors"]),
            vec![
                Record::from(vec!["4004", "2300"]),
                Record::from(vec!["Z80", "8500"]),
                Record::from(vec!["68000", "68000"]),
            ],
        )
        .unwrap();
        let style = TableStyle::default().with_alignment(1, Alignment::Right);
        render(&table, &style).unwrap()
    }

    #[test]
    fn full_markup_shape() {
        let options = HtmlOptions::default()
            .with_id("processors")
            .with_class("tablesorter");
        let html = table_html(&rendered(), &options);
        let expected = "\
<table id=\"processors\" class=\"tablesorter\">
<thead>
<tr>
<th class=\"left\">Name</th>
<th class=\"right\">Transistors</th>
</tr>
</thead>
<tbody>
<tr class=\"tr1\">
<td class=\"left\">4004</td>
<td class=\"right\">2300</td>
</tr>
<tr class=\"tr2\">
<td class=\"left\">Z80</td>
<td class=\"right\">8500</td>
</tr>
<tr class=\"tr1\">
<td class=\"left\">68000</td>
<td class=\"right\">68000</td>
</tr>
</tbody>
</table>
";
        assert_eq!(html, expected);
    }

    #[test]
    fn no_attributes_when_options_empty() {
        let html = table_html(&rendered(), &HtmlOptions::default());
        assert!(html.starts_with("<table>\n"));
    }

    #[test]
    fn cell_text_is_escaped() {
        let table = DataTable::new(
            Record::from(vec!["Note"]),
            vec![Record::from(vec!["a < b & \"c\""])],
        )
        .unwrap();
        let rendered = render(&table, &TableStyle::default()).unwrap();
        let html = table_html(&rendered, &HtmlOptions::default());
        assert!(html.contains("a &lt; b &amp; &quot;c&quot;"));
        assert!(!html.contains("a < b"));
    }

    #[test]
    fn escape_html_passes_clean_text_through() {
        assert!(matches!(escape_html("plain text"), Cow::Borrowed(_)));
        assert_eq!(escape_html("x > y"), "x &gt; y");
    }

    #[test]
    fn code_markup_wraps_backtick_spans() {
        let table = DataTable::new(
            Record::from(vec!["Command"]),
            vec![Record::from(vec!["run `ls -l` to list"])],
        )
        .unwrap();
        let rendered = render(&table, &TableStyle::default()).unwrap();
        let html = table_html(&rendered, &HtmlOptions::default().with_code_markup());
        assert!(html.contains("run <code>ls -l</code> to list"));
    }

    #[test]
    fn escaped_backtick_stays_literal() {
        assert_eq!(code_spans("a \\` b"), "a ` b");
        assert_eq!(code_spans("`x \\` y`"), "<code>x ` y</code>");
    }

    #[test]
    fn unpaired_backtick_stays_as_is() {
        assert_eq!(code_spans("5` drop"), "5` drop");
    }

    #[test]
    fn code_markup_runs_after_escaping() {
        let table = DataTable::new(
            Record::from(vec!["Command"]),
            vec![Record::from(vec!["`a < b`"])],
        )
        .unwrap();
        let rendered = render(&table, &TableStyle::default()).unwrap();
        let html = table_html(&rendered, &HtmlOptions::default().with_code_markup());
        assert!(html.contains("<code>a &lt; b</code>"));
    }

    #[test]
    fn backticks_stay_literal_without_code_markup() {
        let table = DataTable::new(
            Record::from(vec!["Command"]),
            vec![Record::from(vec!["run `ls -l` to list"])],
        )
        .unwrap();
        let rendered = render(&table, &TableStyle::default()).unwrap();
        let html = table_html(&rendered, &HtmlOptions::default());
        assert!(html.contains("run `ls -l` to list"));
        assert!(!html.contains("<code>"));
    }

    #[test]
    fn custom_stripe_classes_reach_the_markup() {
        let table = DataTable::new(
            Record::from(vec!["Name"]),
            vec![Record::from(vec!["4004"]), Record::from(vec!["8080"])],
        )
        .unwrap();
        let style = TableStyle::default().with_stripes("odd", "even");
        let rendered = render(&table, &style).unwrap();
        let html = table_html(&rendered, &HtmlOptions::default());
        assert!(html.contains("<tr class=\"odd\">"));
        assert!(html.contains("<tr class=\"even\">"));
    }
}
