use std::fs;
use std::path::{Path, PathBuf};

use marquee_core::io::REQUIRED_FIELDS;
use tempfile::TempDir;

pub fn temp_dir(prefix: &str) -> TempDir {
    tempfile::Builder::new()
        .prefix(prefix)
        .tempdir()
        .expect("create temp dir")
}

/// One CSV line over the full header, quoting every value.
pub fn csv_line(pairs: &[(&str, &str)], separator: char) -> String {
    REQUIRED_FIELDS
        .iter()
        .map(|name| {
            let value = pairs
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| *value)
                .unwrap_or("");
            if value.is_empty() {
                String::new()
            } else {
                format!("\"{}\"", value.replace('"', "\"\""))
            }
        })
        .collect::<Vec<_>>()
        .join(&separator.to_string())
}

pub fn write_csv(dir: &Path, name: &str, rows: &[&[(&str, &str)]], separator: char) -> PathBuf {
    let mut lines = vec![REQUIRED_FIELDS.join(&separator.to_string())];
    lines.extend(rows.iter().map(|pairs| csv_line(pairs, separator)));
    let path = dir.join(name);
    fs::write(&path, lines.join("\n") + "\n").expect("write csv");
    path
}

pub fn reference_rows() -> Vec<Vec<(&'static str, &'static str)>> {
    vec![
        vec![
            ("movie_title", "X\u{a0}"),
            ("director_name", "D1"),
            ("color", "Color"),
            ("duration", "120"),
            ("num_critic_for_reviews", "10"),
            ("gross", "1000"),
            ("budget", "500"),
            ("title_year", "2000"),
            ("genres", "Action|Drama"),
            ("movie_facebook_likes", "300"),
            ("actor_1_name", "P"),
            ("actor_1_facebook_likes", "50"),
            ("director_facebook_likes", "12"),
            ("imdb_score", "7.0"),
        ],
        vec![
            ("movie_title", "Y, the Sequel"),
            ("director_name", "D1"),
            ("color", " Black and White"),
            ("duration", "90"),
            ("num_critic_for_reviews", "5"),
            ("gross", "2000"),
            ("budget", "100"),
            ("title_year", "2000"),
            ("genres", "Drama"),
            ("movie_facebook_likes", "100"),
            ("actor_1_name", "Q"),
            ("actor_1_facebook_likes", "200"),
            ("director_facebook_likes", "12"),
            ("imdb_score", "8.0"),
        ],
        vec![
            ("movie_title", "Z"),
            ("director_name", "D2"),
            ("color", "Color"),
            ("gross", "500"),
            ("budget", "50"),
            ("title_year", "2001"),
            ("genres", "Action"),
            ("movie_facebook_likes", "250"),
            ("actor_1_name", "P"),
            ("actor_1_facebook_likes", "50"),
            ("director_facebook_likes", "40"),
            ("imdb_score", "9.0"),
        ],
    ]
}

pub fn write_reference_csv(dir: &Path, name: &str, separator: char) -> PathBuf {
    let rows = reference_rows();
    let borrowed = rows.iter().map(Vec::as_slice).collect::<Vec<_>>();
    write_csv(dir, name, &borrowed, separator)
}
