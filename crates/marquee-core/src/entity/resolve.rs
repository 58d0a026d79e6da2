use std::collections::BTreeMap;

use super::{AttributeKind, RepeatedFieldGroup};
use crate::errors::RunError;
use crate::field;
use crate::store::Row;
use crate::MarqueeResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct SlotHit {
    slot: usize,
    row: usize,
}

/// Every (slot, name, row) occurrence of a repeated field group, grouped by
/// name and ordered by slot then row. Built in a single pass over the rows.
#[derive(Debug)]
pub struct EntityIndex<'a> {
    rows: &'a [Row],
    group: &'a RepeatedFieldGroup,
    hits: BTreeMap<String, Vec<SlotHit>>,
}

impl<'a> EntityIndex<'a> {
    pub fn build(rows: &'a [Row], group: &'a RepeatedFieldGroup) -> Self {
        let mut hits: BTreeMap<String, Vec<SlotHit>> = BTreeMap::new();
        for (row_idx, row) in rows.iter().enumerate() {
            for (slot_idx, slot) in group.slots.iter().enumerate() {
                if let Some(name) = field::get(row, &slot.name_field) {
                    hits.entry(name.to_string()).or_default().push(SlotHit {
                        slot: slot_idx,
                        row: row_idx,
                    });
                }
            }
        }
        for entries in hits.values_mut() {
            entries.sort();
        }
        Self { rows, group, hits }
    }

    /// Distinct names in ascending order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.hits.keys().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.hits.contains_key(name)
    }

    /// Name cells holding `name` across every slot and row.
    pub fn appearances(&self, name: &str) -> u64 {
        self.hits.get(name).map(|entries| entries.len() as u64).unwrap_or(0)
    }

    /// Resolves `kind` for `name` from the highest-priority slot that has a
    /// matching row with a present attribute value. Lower-priority slots are
    /// ignored once one qualifies.
    pub fn resolve(&self, name: &str, kind: AttributeKind) -> MarqueeResult<Option<f64>> {
        let entries = self.hits.get(name).ok_or_else(|| {
            Box::new(RunError(format!(
                "entity {name:?} does not appear in any slot"
            ))) as Box<dyn std::error::Error + Send + Sync>
        })?;

        for slot_hits in entries.chunk_by(|left, right| left.slot == right.slot) {
            let attribute_field = match kind {
                AttributeKind::SocialMedia => &self.group.slots[slot_hits[0].slot].attribute_field,
                AttributeKind::BestFilm => &self.group.score_field,
            };
            let mut values = Vec::with_capacity(slot_hits.len());
            for hit in slot_hits {
                if let Some((_, value)) = field::numeric(&self.rows[hit.row], attribute_field)? {
                    values.push(value);
                }
            }
            let Some(first) = values.first().copied() else {
                continue;
            };
            let resolved = match kind {
                AttributeKind::SocialMedia => first,
                AttributeKind::BestFilm => values.into_iter().fold(first, f64::max),
            };
            return Ok(Some(resolved));
        }
        Ok(None)
    }
}
