use marquee_core::{count_by, count_matching, dominant_value, CategoryCount, Direction};

use crate::fixtures::{reference_store, sparse_store, store};

#[test]
fn colour_counts_are_case_insensitive() {
    let store = store(&[
        &[("color", "Color")],
        &[("color", " Black and White")],
        &[("color", "color")],
        &[("color", "")],
    ]);
    assert_eq!(count_matching(store.all_rows(), "color", "color"), 2);
    assert_eq!(
        count_matching(store.all_rows(), "color", "black and white"),
        1
    );
}

#[test]
fn films_per_director_in_first_seen_order() {
    let store = sparse_store();
    let counts = count_by(store.all_rows(), "director_name");
    assert_eq!(counts.len(), 5);
    assert_eq!(
        counts[3],
        CategoryCount {
            label: Some("Christopher Nolan".to_string()),
            count: 2,
        }
    );
    assert_eq!(counts.iter().map(|count| count.count).sum::<u64>(), 6);
}

#[test]
fn busiest_and_quietest_year() {
    let store = reference_store();
    assert_eq!(
        dominant_value(store.all_rows(), "title_year", Direction::Winning),
        Some("2000".to_string())
    );
    assert_eq!(
        dominant_value(store.all_rows(), "title_year", Direction::Losing),
        Some("2001".to_string())
    );
}
