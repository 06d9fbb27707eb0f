//! Transformation module.
//!
//! Turns a loaded [`Table`] into a [`GroupedReport`]:
//! - Project: keep the report columns, fill blanks, label uncategorized rows
//! - Grouper: one section per category
//! - Pipeline: load → transform → render → write

pub mod grouper;
pub mod pipeline;
pub mod project;

pub use grouper::group_by;
pub use pipeline::*;
pub use project::{fill_blanks, normalize_category, project};

use crate::error::SchemaResult;
use crate::models::{GroupedReport, Table, CATEGORY_COLUMN, REQUIRED_COLUMNS};

/// Run every transformation step on a loaded table.
pub fn prepare(table: &Table) -> SchemaResult<GroupedReport> {
    let dataset = project(table, &REQUIRED_COLUMNS)?;
    let dataset = normalize_category(fill_blanks(dataset));
    Ok(group_by(dataset, CATEGORY_COLUMN))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LoadOptions;
    use crate::error::SchemaError;
    use crate::models::UNCATEGORIZED;
    use crate::parser::parse_str;

    const HEADER: &str = "category_name,credential_preview,id,source_name,browser_url,title,posted_at";

    fn load(body: &str) -> Table {
        parse_str(&format!("{HEADER}\n{body}"), &LoadOptions::default()).unwrap()
    }

    #[test]
    fn test_prepare_scenario() {
        let table = load(
            "Leak,u***@x.com,1,forum,http://a,First,2024-01-01\n\
             ,,2,paste,http://b,Second,2024-01-02\n\
             Leak,,3,forum,,Third,",
        );
        let report = prepare(&table).unwrap();

        assert_eq!(report.keys().collect::<Vec<_>>(), vec!["Leak", UNCATEGORIZED]);
        let leak_ids: Vec<_> = report.groups[0].rows.iter().map(|r| r.value(2)).collect();
        assert_eq!(leak_ids, vec!["1", "3"]);
        assert_eq!(report.groups[1].rows[0].value(2), "2");
        assert_eq!(report.row_count(), table.len());
    }

    #[test]
    fn test_prepare_every_cell_filled() {
        let table = load("NaN,,1,,,,\n,null,2,,,,");
        let report = prepare(&table).unwrap();

        assert_eq!(report.groups.len(), 1);
        assert_eq!(report.groups[0].key, UNCATEGORIZED);
        assert!(report.groups.iter().flat_map(|g| &g.rows).all(|r| r.is_filled()));
    }

    #[test]
    fn test_prepare_is_deterministic() {
        let table = load("B,,1,,,,\nA,,2,,,,\nB,,3,,,,");
        assert_eq!(prepare(&table).unwrap(), prepare(&table).unwrap());
    }

    #[test]
    fn test_prepare_missing_column() {
        let table = parse_str("category_name,id\nLeak,1", &LoadOptions::default()).unwrap();
        assert!(matches!(prepare(&table), Err(SchemaError::MissingColumns(_))));
    }
}
