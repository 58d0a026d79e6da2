use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::field;
use crate::store::Row;
use crate::MarqueeResult;

pub const DEFAULT_LABEL_FIELD: &str = "movie_title";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Largest first.
    Winning,
    /// Smallest first.
    Losing,
}

impl Direction {
    pub fn order(self, left: f64, right: f64) -> Ordering {
        match self {
            Direction::Winning => right.total_cmp(&left),
            Direction::Losing => left.total_cmp(&right),
        }
    }

    /// True when `candidate` should replace `current` as the pick.
    /// Equal values keep the current pick.
    pub fn prefers(self, candidate: f64, current: f64) -> bool {
        self.order(candidate, current) == Ordering::Less
    }
}

#[derive(Debug, Clone)]
pub struct RankQuery {
    pub field: String,
    pub label_field: String,
    pub limit: usize,
    pub direction: Direction,
}

impl RankQuery {
    pub fn new(field: &str, limit: usize, direction: Direction) -> Self {
        Self {
            field: field.to_string(),
            label_field: DEFAULT_LABEL_FIELD.to_string(),
            limit,
            direction,
        }
    }

    pub fn with_label(mut self, label_field: &str) -> Self {
        self.label_field = label_field.to_string();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub label: String,
    pub value: String,
    pub key: f64,
}

/// Orders `items` by `key`, dropping items without one. The sort is stable so
/// ties keep their input order.
pub fn rank_by<T, F>(
    items: impl IntoIterator<Item = T>,
    key: F,
    limit: usize,
    direction: Direction,
) -> Vec<T>
where
    F: Fn(&T) -> Option<f64>,
{
    if limit == 0 {
        return Vec::new();
    }
    let mut keyed = items
        .into_iter()
        .filter_map(|item| key(&item).map(|value| (value, item)))
        .collect::<Vec<_>>();
    keyed.sort_by(|(left, _), (right, _)| direction.order(*left, *right));
    keyed.truncate(limit);
    keyed.into_iter().map(|(_, item)| item).collect()
}

pub fn rank(rows: &[Row], query: &RankQuery) -> MarqueeResult<Vec<RankedEntry>> {
    let entries = qualifying_entries(rows, query, false)?;
    Ok(rank_by(
        entries,
        |entry| Some(entry.key),
        query.limit,
        query.direction,
    ))
}

/// Same as [`rank`] but entries with the same label and numeric value
/// collapse to one entry placed at the position of their last occurrence.
/// Rows without a label are skipped.
pub fn rank_distinct(rows: &[Row], query: &RankQuery) -> MarqueeResult<Vec<RankedEntry>> {
    let entries = qualifying_entries(rows, query, true)?;
    let mut last_seen = HashMap::with_capacity(entries.len());
    for (idx, entry) in entries.iter().enumerate() {
        last_seen.insert((entry.label.as_str(), entry.key.to_bits()), idx);
    }
    let distinct = entries
        .iter()
        .enumerate()
        .filter(|(idx, entry)| {
            last_seen.get(&(entry.label.as_str(), entry.key.to_bits())) == Some(idx)
        })
        .map(|(_, entry)| entry.clone())
        .collect::<Vec<_>>();
    Ok(rank_by(
        distinct,
        |entry| Some(entry.key),
        query.limit,
        query.direction,
    ))
}

fn qualifying_entries(
    rows: &[Row],
    query: &RankQuery,
    require_label: bool,
) -> MarqueeResult<Vec<RankedEntry>> {
    let mut entries = Vec::new();
    for row in rows {
        let Some((trimmed, key)) = field::numeric(row, &query.field)? else {
            continue;
        };
        let value = row.raw(&query.field).unwrap_or(trimmed);
        let label = match field::get(row, &query.label_field) {
            Some(label) => label.to_string(),
            None if require_label => continue,
            None => String::new(),
        };
        entries.push(RankedEntry {
            label,
            value: value.to_string(),
            key,
        });
    }
    Ok(entries)
}
