//! Entities stored redundantly across parallel column slots, such as the
//! three `actor_N_name` / `actor_N_facebook_likes` pairs of the film schema.

mod extract;
mod resolve;

use serde::{Deserialize, Serialize};

pub use extract::{extract_entities, rank_entities};
pub use resolve::EntityIndex;

pub const ACTOR_SLOTS: usize = 3;
pub const SCORE_FIELD: &str = "imdb_score";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotColumns {
    pub name_field: String,
    pub attribute_field: String,
}

/// Ordered slots for one logical role. Slot order is the resolution priority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepeatedFieldGroup {
    pub slots: Vec<SlotColumns>,
    pub score_field: String,
}

impl RepeatedFieldGroup {
    pub fn new(slots: Vec<SlotColumns>, score_field: &str) -> Self {
        Self {
            slots,
            score_field: score_field.to_string(),
        }
    }

    pub fn actors() -> Self {
        let slots = (1..=ACTOR_SLOTS)
            .map(|slot| SlotColumns {
                name_field: format!("actor_{slot}_name"),
                attribute_field: format!("actor_{slot}_facebook_likes"),
            })
            .collect();
        Self::new(slots, SCORE_FIELD)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    /// The slot's own attribute column, taken from the first matching row.
    SocialMedia,
    /// The maximum of the shared score column across the slot's rows.
    BestFilm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityField {
    Appearances,
    SocialMedia,
    BestFilm,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityProfile {
    pub name: String,
    pub social_media: Option<f64>,
    pub best_film: Option<f64>,
    pub appearances: u64,
}

impl EntityProfile {
    pub fn value(&self, field: EntityField) -> Option<f64> {
        match field {
            EntityField::Appearances => Some(self.appearances as f64),
            EntityField::SocialMedia => self.social_media,
            EntityField::BestFilm => self.best_film,
        }
    }
}
