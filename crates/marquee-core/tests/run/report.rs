use std::fs;

use marquee_core::{run, validate, RunOptions, ValidateOptions};

use crate::support::{temp_dir, write_reference_csv};

fn write_config(dir: &std::path::Path, body: &str) -> std::path::PathBuf {
    let path = dir.join("marquee.yml");
    fs::write(&path, body).expect("write config");
    path
}

#[test]
fn run_with_config_resolves_relative_source() {
    let dir = temp_dir("marquee-run-config");
    write_reference_csv(dir.path(), "movies.csv", ',');
    let config = write_config(
        dir.path(),
        r#"
version: "0.1"
source:
  path: "movies.csv"
queries:
  grossing: 1
  directors: 2
"#,
    );

    let outcome = run(RunOptions {
        config: Some(config),
        input: None,
    })
    .expect("run");
    let report = &outcome.report;

    assert_eq!(outcome.source_path, dir.path().join("movies.csv"));
    assert_eq!(report.row_count, 3);
    assert_eq!(report.colors.color, 2);
    assert_eq!(report.colors.black_and_white, 1);
    assert_eq!(report.top_grossing.len(), 1);
    assert_eq!(report.top_grossing[0].label, "Y, the Sequel");
    assert_eq!(report.favorite_genre.as_deref(), Some("Action"));
    assert_eq!(
        report
            .top_directors
            .iter()
            .map(|entry| (entry.label.as_str(), entry.value.as_str()))
            .collect::<Vec<_>>(),
        vec![("D2", "40"), ("D1", "12")]
    );
    assert!(report.warnings.is_empty());
}

#[test]
fn run_with_input_only_uses_defaults() {
    let dir = temp_dir("marquee-run-input");
    let input = write_reference_csv(dir.path(), "movies.csv", ',');

    let outcome = run(RunOptions {
        config: None,
        input: Some(input.clone()),
    })
    .expect("run");

    assert_eq!(outcome.report.source_path, Some(input.display().to_string()));
    assert_eq!(outcome.report.top_grossing.len(), 3);
    assert_eq!(outcome.report.longest_running.len(), 2);
}

#[test]
fn input_overrides_config_source() {
    let dir = temp_dir("marquee-run-override");
    let input = write_reference_csv(dir.path(), "semicolons.csv", ';');
    let config = write_config(
        dir.path(),
        r#"
version: "0.1"
source:
  path: "does-not-exist.csv"
  options:
    separator: ";"
"#,
    );

    let outcome = run(RunOptions {
        config: Some(config),
        input: Some(input.clone()),
    })
    .expect("run");
    assert_eq!(outcome.source_path, input);
    assert_eq!(outcome.report.row_count, 3);
}

#[test]
fn run_requires_config_or_input() {
    let err = run(RunOptions::default()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "either a config file or an input file is required"
    );
}

#[test]
fn validate_checks_source_header_on_request() {
    let dir = temp_dir("marquee-validate");
    fs::write(dir.path().join("movies.csv"), "movie_title\nAvatar\n").expect("write csv");
    let config = write_config(
        dir.path(),
        r#"
version: "0.1"
source:
  path: "movies.csv"
"#,
    );

    validate(&config, ValidateOptions::default()).expect("config alone is valid");
    let err = validate(&config, ValidateOptions { check_source: true }).unwrap_err();
    assert!(err.to_string().contains("missing required columns"));
}

#[test]
fn validate_rejects_bad_separator_and_unknown_keys() {
    let dir = temp_dir("marquee-validate-bad");
    let config = write_config(
        dir.path(),
        r#"
version: "0.1"
source:
  path: "movies.csv"
  options:
    separator: "::"
"#,
    );
    let err = validate(&config, ValidateOptions::default()).unwrap_err();
    assert_eq!(err.to_string(), "separator must be a single byte, got \"::\"");

    let config = write_config(
        dir.path(),
        r#"
version: "0.1"
source:
  path: "movies.csv"
sink:
  path: "out"
"#,
    );
    let err = validate(&config, ValidateOptions::default()).unwrap_err();
    assert_eq!(err.to_string(), "unknown field root.sink");
}

#[test]
fn report_serializes_with_snake_case_keys() {
    let dir = temp_dir("marquee-run-json");
    let input = write_reference_csv(dir.path(), "movies.csv", ',');
    let outcome = run(RunOptions {
        config: None,
        input: Some(input),
    })
    .expect("run");

    let json: serde_json::Value =
        serde_json::from_str(&outcome.report.to_json_pretty().expect("json")).expect("parse");
    assert_eq!(json["top_genre_by_year"]["2000"], "Drama");
    assert_eq!(json["colors"]["black_and_white"], 1);
    assert_eq!(json["actors_by_appearances"][0]["name"], "P");
    assert!(json.get("warnings").is_none());
}
