use std::collections::HashMap;
use std::sync::Arc;

use crate::errors::LoadError;
use crate::MarqueeResult;

pub type ColumnIndex = HashMap<String, usize>;

pub fn column_index_map(columns: &[String]) -> ColumnIndex {
    columns
        .iter()
        .enumerate()
        .map(|(idx, name)| (name.to_string(), idx))
        .collect()
}

/// One record of the dataset. Values are kept exactly as read; use
/// [`crate::field`] to look them up with absent-value handling.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    columns: Arc<ColumnIndex>,
    values: Vec<String>,
}

impl Row {
    /// Raw value for `field`, or `None` when the column does not exist.
    pub fn raw(&self, field: &str) -> Option<&str> {
        self.columns
            .get(field)
            .and_then(|idx| self.values.get(*idx))
            .map(String::as_str)
    }
}

/// All rows of a loaded dataset in file order. Read-only once built.
#[derive(Debug, Clone)]
pub struct RowStore {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl RowStore {
    pub fn new(columns: Vec<String>, records: Vec<Vec<String>>) -> MarqueeResult<Self> {
        let index = column_index_map(&columns);
        if index.len() != columns.len() {
            return Err(Box::new(LoadError(format!(
                "duplicate column names in header: {}",
                duplicate_columns(&columns).join(", ")
            ))));
        }
        let index = Arc::new(index);
        let mut rows = Vec::with_capacity(records.len());
        for (row_idx, values) in records.into_iter().enumerate() {
            if values.len() != columns.len() {
                return Err(Box::new(LoadError(format!(
                    "row {} has {} values, expected {}",
                    row_idx + 1,
                    values.len(),
                    columns.len()
                ))));
            }
            rows.push(Row {
                columns: Arc::clone(&index),
                values,
            });
        }
        Ok(Self { columns, rows })
    }

    /// Convenience constructor for string literals, mostly used by tests and demos.
    pub fn from_records(columns: &[&str], records: &[&[&str]]) -> MarqueeResult<Self> {
        let columns = columns.iter().map(|name| name.to_string()).collect();
        let records = records
            .iter()
            .map(|record| record.iter().map(|value| value.to_string()).collect())
            .collect();
        Self::new(columns, records)
    }

    pub fn all_rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn duplicate_columns(columns: &[String]) -> Vec<String> {
    let mut seen = HashMap::new();
    let mut duplicates = Vec::new();
    for name in columns {
        let count = seen.entry(name.as_str()).or_insert(0usize);
        *count += 1;
        if *count == 2 {
            duplicates.push(name.clone());
        }
    }
    duplicates
}
