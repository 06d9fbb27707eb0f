//! Column projection and cell normalization.
//!
//! ```text
//! Table (all columns)  →  project  →  fill_blanks  →  normalize_category
//! ```

use crate::error::{SchemaError, SchemaResult};
use crate::models::{Dataset, Row, Table, CATEGORY_COLUMN, UNCATEGORIZED};

/// Keep exactly `columns`, in that order.
///
/// Fails listing every missing column; there is no partial projection.
pub fn project(table: &Table, columns: &[&str]) -> SchemaResult<Dataset> {
    let mut indices = Vec::with_capacity(columns.len());
    let mut missing = Vec::new();

    for column in columns {
        match table.column_index(column) {
            Some(i) => indices.push(i),
            None => missing.push(column.to_string()),
        }
    }

    if !missing.is_empty() {
        return Err(SchemaError::MissingColumns(missing));
    }

    let rows = table
        .records
        .iter()
        .map(|record| {
            Row::new(
                indices
                    .iter()
                    .map(|&i| record.get(i).cloned().flatten())
                    .collect(),
            )
        })
        .collect();

    Ok(Dataset::new(
        columns.iter().map(|c| c.to_string()).collect(),
        rows,
    ))
}

/// Replace every absent cell with `""`. Idempotent.
pub fn fill_blanks(mut dataset: Dataset) -> Dataset {
    for row in dataset.rows_mut() {
        for cell in row.cells_mut() {
            if cell.is_none() {
                *cell = Some(String::new());
            }
        }
    }
    dataset
}

/// Rewrite empty `category_name` values to [`UNCATEGORIZED`].
///
/// Only the exact empty string is rewritten; whitespace is a real label.
pub fn normalize_category(mut dataset: Dataset) -> Dataset {
    let Some(index) = dataset.column_index(CATEGORY_COLUMN) else {
        return dataset;
    };

    for row in dataset.rows_mut() {
        if let Some(cell) = row.cells_mut().get_mut(index) {
            if cell.as_deref().map_or(true, str::is_empty) {
                *cell = Some(UNCATEGORIZED.to_string());
            }
        }
    }
    dataset
}
