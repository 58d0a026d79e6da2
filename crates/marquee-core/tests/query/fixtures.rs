use marquee_core::io::REQUIRED_FIELDS;
use marquee_core::RowStore;

/// Builds a store over the full film header; unspecified fields are empty.
pub fn store(rows: &[&[(&str, &str)]]) -> RowStore {
    let columns = REQUIRED_FIELDS
        .iter()
        .map(|name| name.to_string())
        .collect::<Vec<_>>();
    let records = rows
        .iter()
        .map(|pairs| {
            for (name, _) in pairs.iter() {
                assert!(REQUIRED_FIELDS.contains(name), "unknown fixture field {name}");
            }
            REQUIRED_FIELDS
                .iter()
                .map(|name| {
                    pairs
                        .iter()
                        .find(|(key, _)| key == name)
                        .map(|(_, value)| value.to_string())
                        .unwrap_or_default()
                })
                .collect()
        })
        .collect();
    RowStore::new(columns, records).expect("fixture store")
}

/// Rows A, B and C of the reference three-film dataset.
pub fn reference_store() -> RowStore {
    store(&[
        &[
            ("movie_title", "X"),
            ("director_name", "D1"),
            ("duration", "120"),
            ("num_critic_for_reviews", "10"),
            ("gross", "1000"),
            ("budget", "500"),
            ("title_year", "2000"),
            ("genres", "Action|Drama"),
            ("actor_1_name", "P"),
            ("actor_1_facebook_likes", "50"),
            ("imdb_score", "7.0"),
        ],
        &[
            ("movie_title", "Y"),
            ("director_name", "D1"),
            ("duration", "90"),
            ("num_critic_for_reviews", "5"),
            ("gross", "2000"),
            ("budget", "100"),
            ("title_year", "2000"),
            ("genres", "Drama"),
            ("actor_1_name", "Q"),
            ("actor_1_facebook_likes", "200"),
            ("imdb_score", "8.0"),
        ],
        &[
            ("movie_title", "Z"),
            ("director_name", "D2"),
            ("duration", ""),
            ("num_critic_for_reviews", ""),
            ("gross", "500"),
            ("budget", "50"),
            ("title_year", "2001"),
            ("genres", "Action"),
            ("actor_1_name", "P"),
            ("actor_1_facebook_likes", "50"),
            ("imdb_score", "9.0"),
        ],
    ])
}

/// A wider dataset with gaps in most numeric columns.
pub fn sparse_store() -> RowStore {
    store(&[
        &[
            ("movie_title", "Avatar\u{a0}"),
            ("director_name", "James Cameron"),
            ("duration", "178"),
            ("gross", "760505847"),
            ("budget", "237000000"),
            ("title_year", "2009"),
            ("genres", "Action|Adventure|Fantasy|Sci-Fi"),
            ("movie_facebook_likes", "33000"),
            ("director_facebook_likes", "0"),
            ("actor_1_name", "CCH Pounder"),
            ("actor_1_facebook_likes", "1000"),
            ("actor_2_name", "Joel David Moore"),
            ("actor_2_facebook_likes", "936"),
            ("actor_3_name", "Wes Studi"),
            ("actor_3_facebook_likes", "855"),
            ("imdb_score", "7.9"),
        ],
        &[
            ("movie_title", "Star Wars: Episode VII - The Force Awakens"),
            ("director_name", "Doug Walker"),
            ("actor_1_name", "Doug Walker"),
            ("actor_1_facebook_likes", "131"),
            ("actor_2_name", "Rob Walker"),
            ("actor_2_facebook_likes", "12"),
            ("genres", "Documentary"),
            ("director_facebook_likes", "131"),
            ("imdb_score", "7.1"),
        ],
        &[
            ("movie_title", "Spectre"),
            ("director_name", "Sam Mendes"),
            ("duration", "148"),
            ("gross", "200074175"),
            ("budget", "245000000"),
            ("title_year", "2015"),
            ("genres", "Action|Adventure|Thriller"),
            ("movie_facebook_likes", "85000"),
            ("director_facebook_likes", "0"),
            ("actor_1_name", "Christoph Waltz"),
            ("actor_1_facebook_likes", "11000"),
            ("actor_2_name", "Rory Kinnear"),
            ("actor_2_facebook_likes", "393"),
            ("actor_3_name", "Stephanie Sigman"),
            ("actor_3_facebook_likes", "161"),
            ("imdb_score", "6.8"),
        ],
        &[
            ("movie_title", "The Dark Knight Rises"),
            ("director_name", "Christopher Nolan"),
            ("duration", "164"),
            ("gross", "448130642"),
            ("budget", "250000000"),
            ("title_year", "2012"),
            ("genres", "Action|Thriller"),
            ("movie_facebook_likes", "164000"),
            ("director_facebook_likes", "22000"),
            ("actor_1_name", "Tom Hardy"),
            ("actor_1_facebook_likes", "27000"),
            ("actor_2_name", "Christian Bale"),
            ("actor_2_facebook_likes", "23000"),
            ("actor_3_name", "Joseph Gordon-Levitt"),
            ("actor_3_facebook_likes", "23000"),
            ("imdb_score", "8.5"),
        ],
        &[
            ("movie_title", "The Dark Knight"),
            ("director_name", "Christopher Nolan"),
            ("duration", "152"),
            ("gross", "533316061"),
            ("budget", "185000000"),
            ("title_year", "2008"),
            ("genres", "Action|Crime|Drama|Thriller"),
            ("movie_facebook_likes", "37000"),
            ("director_facebook_likes", "22000"),
            ("actor_1_name", "Christian Bale"),
            ("actor_1_facebook_likes", "23000"),
            ("actor_2_name", "Heath Ledger"),
            ("actor_2_facebook_likes", "13000"),
            ("actor_3_name", "Morgan Freeman"),
            ("actor_3_facebook_likes", "11000"),
            ("imdb_score", "9.0"),
        ],
        &[
            ("movie_title", "Tangled"),
            ("director_name", "Nathan Greno"),
            ("duration", "100"),
            ("budget", "260000000"),
            ("title_year", "2010"),
            ("genres", "Adventure|Animation|Comedy"),
            ("movie_facebook_likes", "29000"),
            ("director_facebook_likes", "15"),
            ("actor_1_name", "Brad Garrett"),
            ("actor_1_facebook_likes", "799"),
            ("actor_2_name", "Donna Murphy"),
            ("actor_2_facebook_likes", "553"),
            ("actor_3_name", "M.C. Gainey"),
            ("actor_3_facebook_likes", "284"),
            ("imdb_score", "7.8"),
        ],
    ])
}
