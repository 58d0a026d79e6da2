use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::field;
use crate::rank::Direction;
use crate::store::Row;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    /// `None` groups every row where the field is absent.
    pub label: Option<String>,
    pub count: u64,
}

/// Rows whose trimmed `field` equals `expected`, ignoring ASCII case.
pub fn count_matching(rows: &[Row], field: &str, expected: &str) -> u64 {
    let expected = expected.trim();
    rows.iter()
        .filter(|row| {
            field::get(row, field)
                .map(|value| value.eq_ignore_ascii_case(expected))
                .unwrap_or(false)
        })
        .count() as u64
}

/// One entry per distinct value of `field`, in order of first appearance.
pub fn count_by(rows: &[Row], field: &str) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = Vec::new();
    let mut positions: HashMap<Option<&str>, usize> = HashMap::new();
    for row in rows {
        let value = field::get(row, field);
        match positions.get(&value) {
            Some(position) => counts[*position].count += 1,
            None => {
                positions.insert(value, counts.len());
                counts.push(CategoryCount {
                    label: value.map(str::to_string),
                    count: 1,
                });
            }
        }
    }
    counts
}

/// The present value of `field` shared by the most (winning) or fewest
/// (losing) rows. Ties go to the value seen first.
pub fn dominant_value(rows: &[Row], field: &str, direction: Direction) -> Option<String> {
    let counts = count_by(rows, field);
    let mut best: Option<&CategoryCount> = None;
    for candidate in counts.iter().filter(|count| count.label.is_some()) {
        let replace = match best {
            None => true,
            Some(current) => direction.prefers(candidate.count as f64, current.count as f64),
        };
        if replace {
            best = Some(candidate);
        }
    }
    best.and_then(|count| count.label.clone())
}
