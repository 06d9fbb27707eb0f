//! End-to-end report generation.
//!
//! ```text
//! CSV file → load → prepare (project, fill, group) → render → write
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use flarevision::{generate_report, ConsoleReporter, ReportConfig};
//!
//! let summary = generate_report(&ReportConfig::new("export.csv"), &ConsoleReporter)?;
//! println!("Wrote {}", summary.output_path);
//! ```

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::config::{ReportConfig, OUTPUT_EXTENSION, OUTPUT_SUFFIX};
use crate::error::{ReportError, ReportResult};
use crate::logs::{LogEntry, Reporter};
use crate::models::{ReportSummary, UNCATEGORIZED};
use crate::parser::load_csv_file;
use crate::render::{render_document, write_report};

use super::prepare;

/// Report path for an input file: extension dropped, suffix appended.
///
/// `exports/flare.csv` becomes `exports/flare_filtered_searchable.html`.
pub fn derive_output_path(input: &Path) -> PathBuf {
    let mut name = OsString::new();
    if let Some(stem) = input.file_stem() {
        name.push(stem);
    }
    name.push(OUTPUT_SUFFIX);
    name.push(".");
    name.push(OUTPUT_EXTENSION);
    input.with_file_name(name)
}

/// Load, transform, render and write one report.
///
/// Nothing is written unless every earlier stage succeeded.
pub fn generate_report<R: Reporter>(config: &ReportConfig, reporter: &R) -> ReportResult<ReportSummary> {
    if config.input.as_os_str().is_empty() {
        return Err(ReportError::NoInput);
    }

    let output = config
        .output
        .clone()
        .unwrap_or_else(|| derive_output_path(&config.input));

    // Step 1: load
    reporter.info(format!("📖 Reading {}", config.input.display()));
    let table = load_csv_file(&config.input, &config.load)?;
    reporter.success(format!("Read {} rows, {} columns", table.len(), table.headers.len()));

    // Step 2: transform
    let report = prepare(&table)?;
    let uncategorized_count = report
        .groups
        .iter()
        .find(|g| g.key == UNCATEGORIZED)
        .map_or(0, |g| g.rows.len());

    reporter.success(format!("Grouped into {} categories", report.groups.len()));
    for group in &report.groups {
        reporter.log(LogEntry::info(format!("{}: {} rows", group.key, group.rows.len())).with_indent(1));
    }
    if uncategorized_count > 0 {
        reporter.warning(format!("{} rows without a category", uncategorized_count));
    }

    // Step 3: render and write
    let html = render_document(&report, &config.render);
    write_report(&output, &html)?;
    reporter.success(format!("Wrote {} bytes to {}", html.len(), output.display()));

    Ok(ReportSummary {
        input_path: config.input.display().to_string(),
        output_path: output.display().to_string(),
        row_count: report.row_count(),
        group_count: report.groups.len(),
        uncategorized_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{InputError, SchemaError};
    use crate::logs::{LogLevel, MemoryReporter};

    const HEADER: &str = "category_name,credential_preview,id,source_name,browser_url,title,posted_at,extra";

    fn write_csv(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, format!("{HEADER}\n{body}")).unwrap();
        path
    }

    #[test]
    fn test_derive_output_path() {
        assert_eq!(
            derive_output_path(Path::new("exports/flare.csv")),
            PathBuf::from("exports/flare_filtered_searchable.html")
        );
        assert_eq!(
            derive_output_path(Path::new("archive.tar.gz")),
            PathBuf::from("archive.tar_filtered_searchable.html")
        );
        assert_eq!(
            derive_output_path(Path::new("/tmp/export")),
            PathBuf::from("/tmp/export_filtered_searchable.html")
        );
        assert_eq!(
            derive_output_path(Path::new(".hidden")),
            PathBuf::from(".hidden_filtered_searchable.html")
        );
    }

    #[test]
    fn test_generate_report_scenario() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_csv(
            dir.path(),
            "export.csv",
            "Leak,a***,1,forum,http://a,One,2024-01-01,x\n\
             ,b***,2,paste,http://b,Two,2024-01-02,y\n\
             Leak,c***,3,forum,http://c,Three,2024-01-03,z\n",
        );
        let reporter = MemoryReporter::new();

        let summary = generate_report(&ReportConfig::new(&input), &reporter).unwrap();

        let output = dir.path().join("export_filtered_searchable.html");
        assert_eq!(summary.output_path, output.display().to_string());
        assert_eq!(summary.row_count, 3);
        assert_eq!(summary.group_count, 2);
        assert_eq!(summary.uncategorized_count, 1);

        let html = std::fs::read_to_string(&output).unwrap();
        let leak = html.find("<h2>Leak</h2>").unwrap();
        let uncategorized = html.find("<h2>Uncategorized</h2>").unwrap();
        assert!(leak < uncategorized);
        let one = html.find("<td>1</td>").unwrap();
        let three = html.find("<td>3</td>").unwrap();
        let two = html.find("<td>2</td>").unwrap();
        assert!(leak < one && one < three && three < uncategorized && uncategorized < two);
        assert!(!html.contains("extra"));

        assert_eq!(reporter.messages(LogLevel::Warning), vec!["1 rows without a category"]);
    }

    #[test]
    fn test_rerun_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_csv(dir.path(), "e.csv", "B,,1,,,,,\nNA,,2,,,,,\nA,,3,,,,,\n");
        let config = ReportConfig::new(&input);
        let output = derive_output_path(&input);

        generate_report(&config, &crate::logs::SilentReporter).unwrap();
        let first = std::fs::read(&output).unwrap();
        generate_report(&config, &crate::logs::SilentReporter).unwrap();
        let second = std::fs::read(&output).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_column_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("bad.csv");
        std::fs::write(&input, "category_name,id\nLeak,1\n").unwrap();

        let err = generate_report(&ReportConfig::new(&input), &MemoryReporter::new()).unwrap_err();

        assert!(matches!(err, ReportError::Schema(SchemaError::MissingColumns(_))));
        assert!(!derive_output_path(&input).exists());
    }

    #[test]
    fn test_missing_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("absent.csv");

        let err = generate_report(&ReportConfig::new(&input), &MemoryReporter::new()).unwrap_err();

        assert!(matches!(err, ReportError::Input(InputError::Unreadable { .. })));
        assert!(!derive_output_path(&input).exists());
    }

    #[test]
    fn test_explicit_output_path() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_csv(dir.path(), "e.csv", "Leak,,1,,,,,\n");
        let output = dir.path().join("report.html");

        let config = ReportConfig::new(&input).with_output(&output);
        generate_report(&config, &MemoryReporter::new()).unwrap();

        assert!(output.exists());
        assert!(!derive_output_path(&input).exists());
    }

    #[test]
    fn test_empty_input_path() {
        let err = generate_report(&ReportConfig::default(), &MemoryReporter::new()).unwrap_err();
        assert!(matches!(err, ReportError::NoInput));
    }
}
