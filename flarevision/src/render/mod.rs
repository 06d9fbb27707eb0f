//! HTML report generation.
//!
//! Produces one self-contained document: inline CSS, the `searchTable`
//! filter script, a search box, then an `<h2>` and a table per group.
//! Writing goes through a temporary file so a failed write never leaves a
//! truncated report behind.

pub mod template;

use std::borrow::Cow;
use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::Builder;

use crate::config::RenderOptions;
use crate::error::RenderError;
use crate::models::{Group, GroupedReport};

use template::{SCRIPT, SEARCH_BAR, STYLE};

/// Escape the five HTML-significant characters.
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Text as it goes into the document: verbatim unless escaping is on.
fn text<'a>(s: &'a str, options: &RenderOptions) -> Cow<'a, str> {
    if options.escape_html {
        Cow::Owned(html_escape(s))
    } else {
        Cow::Borrowed(s)
    }
}

/// Render the whole report document.
pub fn render_document(report: &GroupedReport, options: &RenderOptions) -> String {
    let sections: String = report
        .groups
        .iter()
        .map(|group| render_section(group, &report.columns, options))
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>{title}</title>
    <style>{css}</style>
    <script>{js}</script>
</head>
<body>
    <h1>{heading}</h1>
    {search_bar}
{sections}</body></html>"#,
        title = text(&options.title, options),
        heading = text(&options.heading, options),
        css = STYLE,
        js = SCRIPT,
        search_bar = SEARCH_BAR,
        sections = sections,
    )
}

/// Render one `<h2>` heading followed by the group's table.
pub fn render_section(group: &Group, columns: &[String], options: &RenderOptions) -> String {
    format!(
        "<h2>{key}</h2>{table}",
        key = text(&group.key, options),
        table = render_table(group, columns, options),
    )
}

/// Render a group as a table with a header row and one row per record.
pub fn render_table(group: &Group, columns: &[String], options: &RenderOptions) -> String {
    let header_cells: String = columns
        .iter()
        .map(|c| format!("      <th>{}</th>\n", text(c, options)))
        .collect();

    let body_rows: String = group
        .rows
        .iter()
        .map(|row| {
            let cells: String = (0..columns.len())
                .map(|i| format!("      <td>{}</td>\n", text(row.value(i), options)))
                .collect();
            format!("    <tr>\n{}    </tr>\n", cells)
        })
        .collect();

    format!(
        "<table border=\"1\" class=\"dataframe\">\n  <thead>\n    <tr style=\"text-align: right;\">\n{}    </tr>\n  </thead>\n  <tbody>\n{}  </tbody>\n</table>",
        header_cells, body_rows
    )
}

/// Write `content` to `path`, replacing it only once fully written.
///
/// A new report gets the usual umask-filtered mode; a replaced report keeps
/// the mode of the file it replaces.
pub fn write_report(path: &Path, content: &str) -> Result<(), RenderError> {
    let to_err = |source: std::io::Error| RenderError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let existing = fs::metadata(path).ok().map(|m| m.permissions());

    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // open(2) applies the umask to this, like a plain File::create
        builder.permissions(fs::Permissions::from_mode(0o666));
    }

    let mut file = builder.tempfile_in(dir).map_err(to_err)?;
    file.write_all(content.as_bytes()).map_err(to_err)?;
    file.flush().map_err(to_err)?;
    if let Some(permissions) = existing {
        file.as_file().set_permissions(permissions).map_err(to_err)?;
    }
    file.persist(path).map_err(|e| to_err(e.error))?;
    Ok(())
}
