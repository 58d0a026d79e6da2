//! Attribution of a row's numeric value to sub-keys split out of a delimited
//! multi-value field, optionally bucketed by a group field.
//!
//! Two policies exist and are kept distinct:
//! - [`Attribution::FirstOnly`] credits only the first listed sub-key. This is
//!   what the per-year genre report uses, so a `"Action|Comedy"` row never
//!   contributes to `"Comedy"` there.
//! - [`Attribution::All`] credits the full value to every listed sub-key.
//!
//! Totals keep the order in which sub-keys were first credited; reductions
//! break ties in favour of the earliest one. [`SubKeyTotals::merge`] and
//! [`GroupTotals::merge`] combine per-chunk partials so that merging chunks in
//! row order gives the same result as a single pass.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::field;
use crate::rank::Direction;
use crate::store::Row;
use crate::MarqueeResult;

pub const GENRE_DELIMITER: char = '|';

/// Ordered, trimmed, non-empty pieces of `value`.
pub fn split_multi_value(value: &str, delimiter: char) -> Vec<&str> {
    value
        .split(delimiter)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribution {
    FirstOnly,
    All,
}

impl Attribution {
    pub fn targets<'a, 'b>(self, sub_keys: &'b [&'a str]) -> &'b [&'a str] {
        match self {
            Attribution::FirstOnly => &sub_keys[..sub_keys.len().min(1)],
            Attribution::All => sub_keys,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubKeyTotals {
    order: Vec<String>,
    totals: HashMap<String, f64>,
}

impl SubKeyTotals {
    pub fn add(&mut self, key: &str, value: f64) {
        match self.totals.get_mut(key) {
            Some(total) => *total += value,
            None => {
                self.order.push(key.to_string());
                self.totals.insert(key.to_string(), value);
            }
        }
    }

    pub fn merge(&mut self, other: &SubKeyTotals) {
        for (key, value) in other.iter() {
            self.add(key, value);
        }
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.totals.get(key).copied()
    }

    /// Sub-keys with their totals in first-credited order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.order
            .iter()
            .map(|key| (key.as_str(), self.totals.get(key).copied().unwrap_or(0.0)))
    }

    pub fn sum(&self) -> f64 {
        self.iter().map(|(_, value)| value).sum()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Sub-key with the largest (winning) or smallest (losing) total.
    pub fn pick(&self, direction: Direction) -> Option<&str> {
        let mut best: Option<(&str, f64)> = None;
        for (key, value) in self.iter() {
            let replace = match best {
                None => true,
                Some((_, current)) => direction.prefers(value, current),
            };
            if replace {
                best = Some((key, value));
            }
        }
        best.map(|(key, _)| key)
    }
}

#[derive(Debug, Clone)]
pub struct AttributionQuery {
    pub value_field: String,
    pub multi_value_field: String,
    pub delimiter: char,
    pub attribution: Attribution,
    pub direction: Direction,
}

impl AttributionQuery {
    /// Public favourite genre: full `movie_facebook_likes` to every genre.
    pub fn genre_popularity() -> Self {
        Self {
            value_field: "movie_facebook_likes".to_string(),
            multi_value_field: "genres".to_string(),
            delimiter: GENRE_DELIMITER,
            attribution: Attribution::All,
            direction: Direction::Winning,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GroupQuery {
    pub group_field: String,
    pub value_field: String,
    pub multi_value_field: String,
    pub delimiter: char,
    pub attribution: Attribution,
    pub direction: Direction,
}

impl GroupQuery {
    /// Genre that raised the most (or least) gross per release year.
    pub fn genre_gross_by_year(direction: Direction) -> Self {
        Self {
            group_field: "title_year".to_string(),
            value_field: "gross".to_string(),
            multi_value_field: "genres".to_string(),
            delimiter: GENRE_DELIMITER,
            attribution: Attribution::FirstOnly,
            direction,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupTotals {
    groups: BTreeMap<String, SubKeyTotals>,
}

impl GroupTotals {
    pub fn accumulate(rows: &[Row], query: &GroupQuery) -> MarqueeResult<Self> {
        let mut totals = Self::default();
        for row in rows {
            let Some(group) = field::get(row, &query.group_field) else {
                continue;
            };
            let Some((_, value)) = field::numeric(row, &query.value_field)? else {
                continue;
            };
            let multi_value = field::get(row, &query.multi_value_field).unwrap_or("");
            let sub_keys = split_multi_value(multi_value, query.delimiter);
            let targets = query.attribution.targets(&sub_keys);
            if targets.is_empty() {
                continue;
            }
            let bucket = totals.groups.entry(group.to_string()).or_default();
            for key in targets {
                bucket.add(key, value);
            }
        }
        Ok(totals)
    }

    pub fn merge(&mut self, other: &GroupTotals) {
        for (group, bucket) in &other.groups {
            self.groups.entry(group.clone()).or_default().merge(bucket);
        }
    }

    pub fn get(&self, group: &str) -> Option<&SubKeyTotals> {
        self.groups.get(group)
    }

    pub fn groups(&self) -> impl Iterator<Item = (&str, &SubKeyTotals)> {
        self.groups.iter().map(|(group, bucket)| (group.as_str(), bucket))
    }

    pub fn reduce(&self, direction: Direction) -> BTreeMap<String, String> {
        self.groups
            .iter()
            .filter_map(|(group, bucket)| {
                bucket
                    .pick(direction)
                    .map(|key| (group.clone(), key.to_string()))
            })
            .collect()
    }
}

/// Totals per sub-key over all rows, without grouping.
pub fn attribute(rows: &[Row], query: &AttributionQuery) -> MarqueeResult<SubKeyTotals> {
    let mut totals = SubKeyTotals::default();
    for row in rows {
        let Some(multi_value) = field::get(row, &query.multi_value_field) else {
            continue;
        };
        let Some((_, value)) = field::numeric(row, &query.value_field)? else {
            continue;
        };
        let sub_keys = split_multi_value(multi_value, query.delimiter);
        for key in query.attribution.targets(&sub_keys) {
            totals.add(key, value);
        }
    }
    Ok(totals)
}

pub fn favorite_subkey(rows: &[Row], query: &AttributionQuery) -> MarqueeResult<Option<String>> {
    let totals = attribute(rows, query)?;
    Ok(totals.pick(query.direction).map(str::to_string))
}

/// One chosen sub-key per group; groups with nothing credited are absent.
pub fn attribute_by_group(
    rows: &[Row],
    query: &GroupQuery,
) -> MarqueeResult<BTreeMap<String, String>> {
    Ok(GroupTotals::accumulate(rows, query)?.reduce(query.direction))
}
