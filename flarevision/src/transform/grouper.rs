//! Split projected rows into per-category sections.
//!
//! ```text
//! Rows (source order)            →  Groups (ascending key)
//! ┌─────────────────────────┐       ┌──────────────────────┐
//! │ Leak,          id 1     │       │ Leak:          [1, 3]│
//! │ Uncategorized, id 2     │  →    ├──────────────────────┤
//! │ Leak,          id 3     │       │ Uncategorized: [2]   │
//! └─────────────────────────┘       └──────────────────────┘
//! ```

use std::collections::BTreeMap;

use crate::models::{Dataset, Group, GroupedReport};

/// Group rows by the value of `key_column`.
///
/// Groups come out in ascending byte order of the key; rows keep their
/// relative source order. Every row lands in exactly one group. If the
/// column is not projected all rows share the empty key.
pub fn group_by(dataset: Dataset, key_column: &str) -> GroupedReport {
    let index = dataset.column_index(key_column);
    let columns = dataset.columns().to_vec();

    let mut groups: BTreeMap<String, Vec<_>> = BTreeMap::new();
    for row in dataset.into_rows() {
        let key = index.map(|i| row.value(i)).unwrap_or("").to_string();
        groups.entry(key).or_default().push(row);
    }

    GroupedReport {
        columns,
        groups: groups
            .into_iter()
            .map(|(key, rows)| Group { key, rows })
            .collect(),
    }
}
