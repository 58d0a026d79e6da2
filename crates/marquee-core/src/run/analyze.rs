use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::aggregate::{attribute_by_group, favorite_subkey, AttributionQuery, GroupQuery};
use crate::config::QueryConfig;
use crate::count::{count_by, count_matching, dominant_value};
use crate::entity::{extract_entities, rank_entities, EntityField, RepeatedFieldGroup};
use crate::field;
use crate::rank::{rank, rank_distinct, Direction, RankQuery};
use crate::report::{ColorCounts, FilmReport};
use crate::store::{Row, RowStore};
use crate::warnings::Warnings;
use crate::MarqueeResult;

const RANKED_FIELDS: &[&str] = &[
    "num_critic_for_reviews",
    "duration",
    "gross",
    "budget",
    "director_facebook_likes",
];

/// Runs every report question against `store`. Each answer is computed
/// independently from the rows; nothing is cached between them.
pub fn analyze(store: &RowStore, queries: &QueryConfig) -> MarqueeResult<FilmReport> {
    let rows = store.all_rows();
    let mut warnings = Warnings::default();
    for field_name in RANKED_FIELDS {
        if !rows.is_empty() && !has_values(rows, field_name) {
            warnings.empty_field(field_name);
        }
    }

    let actors = extract_entities(rows, &RepeatedFieldGroup::actors())?;

    Ok(FilmReport {
        generated_at: OffsetDateTime::now_utc().format(&Rfc3339)?,
        source_path: None,
        row_count: rows.len() as u64,
        colors: ColorCounts {
            color: count_matching(rows, "color", "color"),
            black_and_white: count_matching(rows, "color", "black and white"),
        },
        films_by_director: count_by(rows, "director_name"),
        least_criticized: rank(
            rows,
            &RankQuery::new(
                "num_critic_for_reviews",
                queries.least_criticized,
                Direction::Losing,
            ),
        )?,
        longest_running: rank(
            rows,
            &RankQuery::new("duration", queries.longest_running, Direction::Winning),
        )?,
        top_grossing: rank(
            rows,
            &RankQuery::new("gross", queries.grossing, Direction::Winning),
        )?,
        lowest_grossing: rank(
            rows,
            &RankQuery::new("gross", queries.grossing, Direction::Losing),
        )?,
        biggest_budget: rank(
            rows,
            &RankQuery::new("budget", queries.budget, Direction::Winning),
        )?,
        smallest_budget: rank(
            rows,
            &RankQuery::new("budget", queries.budget, Direction::Losing),
        )?,
        busiest_year: dominant_value(rows, "title_year", Direction::Winning),
        quietest_year: dominant_value(rows, "title_year", Direction::Losing),
        top_genre_by_year: attribute_by_group(
            rows,
            &GroupQuery::genre_gross_by_year(Direction::Winning),
        )?,
        bottom_genre_by_year: attribute_by_group(
            rows,
            &GroupQuery::genre_gross_by_year(Direction::Losing),
        )?,
        actors_by_appearances: rank_entities(
            &actors,
            EntityField::Appearances,
            queries.actors,
            Direction::Winning,
        ),
        actors_by_popularity: rank_entities(
            &actors,
            EntityField::SocialMedia,
            queries.actors,
            Direction::Winning,
        ),
        favorite_genre: favorite_subkey(rows, &AttributionQuery::genre_popularity())?,
        top_directors: rank_distinct(
            rows,
            &RankQuery::new("director_facebook_likes", queries.directors, Direction::Winning)
                .with_label("director_name"),
        )?,
        warnings: warnings.into_messages(),
    })
}

fn has_values(rows: &[Row], field_name: &str) -> bool {
    rows.iter().any(|row| field::is_present(row, field_name))
}
