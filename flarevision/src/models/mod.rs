//! Domain models for the report pipeline.
//!
//! - [`Table`] - raw loader output, every cell text or absent
//! - [`Dataset`] - the export projected onto [`REQUIRED_COLUMNS`]
//! - [`Row`] - one projected record
//! - [`Group`] - rows sharing a category, rendered as one table
//! - [`GroupedReport`] - ordered groups ready for rendering

use serde::Serialize;

// =============================================================================
// Constants
// =============================================================================

/// Columns kept in the report, in display order.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "category_name",
    "credential_preview",
    "id",
    "source_name",
    "browser_url",
    "title",
    "posted_at",
];

/// Column used to split the report into sections.
pub const CATEGORY_COLUMN: &str = "category_name";

/// Label given to rows without a category.
pub const UNCATEGORIZED: &str = "Uncategorized";

// =============================================================================
// Loader output
// =============================================================================

/// A parsed CSV file before projection.
///
/// `None` cells are values the loader treated as absent (null markers).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub records: Vec<Vec<Option<String>>>,
}

impl Table {
    /// Index of the first header named `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// =============================================================================
// Projected data
// =============================================================================

/// One record of the projected dataset, cells in [`Dataset::columns`] order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    cells: Vec<Option<String>>,
}

impl Row {
    pub fn new(cells: Vec<Option<String>>) -> Self {
        Self { cells }
    }

    /// Text of the cell at `index`; absent cells read as `""`.
    pub fn value(&self, index: usize) -> &str {
        self.cells
            .get(index)
            .and_then(|c| c.as_deref())
            .unwrap_or("")
    }

    /// Iterate over all cell texts, absent cells as `""`.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|c| c.as_deref().unwrap_or(""))
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Option<String>] {
        &mut self.cells
    }

    /// True when no cell is absent.
    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }
}

/// Ordered rows plus the ordered column names they are aligned to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Dataset {
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Self {
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub(crate) fn rows_mut(&mut self) -> &mut [Row] {
        &mut self.rows
    }

    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }
}

// =============================================================================
// Grouped data
// =============================================================================

/// Rows sharing one normalized category, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub key: String,
    pub rows: Vec<Row>,
}

/// Everything the renderer needs: columns and groups in ascending key order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupedReport {
    pub columns: Vec<String>,
    pub groups: Vec<Group>,
}

impl GroupedReport {
    /// Total number of data rows across all groups.
    pub fn row_count(&self) -> usize {
        self.groups.iter().map(|g| g.rows.len()).sum()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.key.as_str())
    }
}

// =============================================================================
// Run summary
// =============================================================================

/// What a finished run produced.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub input_path: String,
    pub output_path: String,
    pub row_count: usize,
    pub group_count: usize,
    pub uncategorized_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_absent_cells_read_empty() {
        let row = Row::new(vec![Some("Leak".into()), None]);
        assert_eq!(row.value(0), "Leak");
        assert_eq!(row.value(1), "");
        assert_eq!(row.value(7), "");
        assert!(!row.is_filled());
        assert_eq!(row.values().collect::<Vec<_>>(), vec!["Leak", ""]);
    }

    #[test]
    fn test_dataset_column_index() {
        let columns = vec!["category_name".to_string(), "id".to_string()];
        let row = Row::new(vec![Some("Leak".into()), Some("42".into())]);
        let dataset = Dataset::new(columns, vec![row]);

        assert_eq!(dataset.column_index("id"), Some(1));
        assert_eq!(dataset.column_index("title"), None);
    }

    #[test]
    fn test_first_duplicate_header_wins() {
        let table = Table {
            headers: vec!["id".into(), "title".into(), "id".into()],
            records: vec![],
        };
        assert_eq!(table.column_index("id"), Some(0));
        assert!(table.is_empty());
    }

    #[test]
    fn test_report_row_count() {
        let report = GroupedReport {
            columns: vec!["id".into()],
            groups: vec![
                Group { key: "A".into(), rows: vec![Row::new(vec![Some("1".into())])] },
                Group {
                    key: "B".into(),
                    rows: vec![Row::new(vec![Some("2".into())]), Row::new(vec![Some("3".into())])],
                },
            ],
        };
        assert_eq!(report.row_count(), 3);
        assert_eq!(report.keys().collect::<Vec<_>>(), vec!["A", "B"]);
    }

    #[test]
    fn test_summary_serializes_camel_case() {
        let summary = ReportSummary {
            input_path: "in.csv".into(),
            output_path: "in_filtered_searchable.html".into(),
            row_count: 3,
            group_count: 2,
            uncategorized_count: 1,
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["rowCount"], 3);
        assert_eq!(json["uncategorizedCount"], 1);
    }
}
