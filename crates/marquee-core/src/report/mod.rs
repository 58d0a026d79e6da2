use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::count::CategoryCount;
use crate::entity::EntityProfile;
use crate::rank::RankedEntry;

/// Answers to every question of the film report, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct FilmReport {
    pub generated_at: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub source_path: Option<String>,
    pub row_count: u64,
    pub colors: ColorCounts,
    pub films_by_director: Vec<CategoryCount>,
    pub least_criticized: Vec<RankedEntry>,
    pub longest_running: Vec<RankedEntry>,
    pub top_grossing: Vec<RankedEntry>,
    pub lowest_grossing: Vec<RankedEntry>,
    pub biggest_budget: Vec<RankedEntry>,
    pub smallest_budget: Vec<RankedEntry>,
    pub busiest_year: Option<String>,
    pub quietest_year: Option<String>,
    pub top_genre_by_year: BTreeMap<String, String>,
    pub bottom_genre_by_year: BTreeMap<String, String>,
    pub actors_by_appearances: Vec<EntityProfile>,
    pub actors_by_popularity: Vec<EntityProfile>,
    pub favorite_genre: Option<String>,
    pub top_directors: Vec<RankedEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ColorCounts {
    pub color: u64,
    pub black_and_white: u64,
}

impl FilmReport {
    pub fn to_json_pretty(&self) -> crate::MarqueeResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
