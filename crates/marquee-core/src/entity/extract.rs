use std::cmp::Ordering;

use super::{AttributeKind, EntityField, EntityIndex, EntityProfile, RepeatedFieldGroup};
use crate::rank::{rank_by, Direction};
use crate::store::Row;
use crate::MarqueeResult;

/// One profile per distinct non-empty name found in any slot, in ascending
/// order of social media, then best film, then appearances. Absent attributes
/// sort first; remaining ties keep name order.
pub fn extract_entities(
    rows: &[Row],
    group: &RepeatedFieldGroup,
) -> MarqueeResult<Vec<EntityProfile>> {
    let index = EntityIndex::build(rows, group);
    let mut profiles = Vec::new();
    for name in index.names() {
        profiles.push(EntityProfile {
            name: name.to_string(),
            social_media: index.resolve(name, AttributeKind::SocialMedia)?,
            best_film: index.resolve(name, AttributeKind::BestFilm)?,
            appearances: index.appearances(name),
        });
    }
    profiles.sort_by(|left, right| {
        compare_attribute(left.social_media, right.social_media)
            .then_with(|| compare_attribute(left.best_film, right.best_film))
            .then_with(|| left.appearances.cmp(&right.appearances))
    });
    Ok(profiles)
}

fn compare_attribute(left: Option<f64>, right: Option<f64>) -> Ordering {
    match (left, right) {
        (Some(left), Some(right)) => left.total_cmp(&right),
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
    }
}

pub fn rank_entities(
    profiles: &[EntityProfile],
    field: EntityField,
    limit: usize,
    direction: Direction,
) -> Vec<EntityProfile> {
    rank_by(
        profiles.iter().cloned(),
        |profile| profile.value(field),
        limit,
        direction,
    )
}
