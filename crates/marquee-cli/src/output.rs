use std::collections::BTreeMap;

use marquee_core::{CategoryCount, EntityProfile, FilmReport, RankedEntry, RunOutcome};

const BANNER: &str = "**************** Movies Data Analysis ****************";
const INDENT: &str = "    ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Default,
    Quiet,
    Verbose,
}

pub fn format_run_output(outcome: &RunOutcome, mode: OutputMode) -> String {
    let report = &outcome.report;
    let mut lines = Vec::new();

    if mode != OutputMode::Quiet {
        lines.push(BANNER.to_string());
    }
    if mode == OutputMode::Verbose {
        lines.push(format!("source: {}", outcome.source_path.display()));
        lines.push(format!("rows: {}", report.row_count));
        lines.push(format!("generated at: {}", report.generated_at));
    }

    lines.extend(format_report(report));

    if mode == OutputMode::Verbose {
        lines.push(format!("elapsed_ms={}", outcome.elapsed_ms));
    }
    lines.join("\n")
}

pub fn format_report(report: &FilmReport) -> Vec<String> {
    let mut lines = Vec::new();

    section(
        &mut lines,
        "1. How many Black & White and color movies are in the list?",
        vec![
            format!("- Color Movies: {}", report.colors.color),
            format!("- Black & White Movies: {}", report.colors.black_and_white),
        ],
    );
    section(
        &mut lines,
        "2. How many movies were produced by director in the list?",
        report.films_by_director.iter().map(director_line).collect(),
    );
    section(
        &mut lines,
        &format!(
            "3. Which are the {} less criticized movies in the list?",
            report.least_criticized.len()
        ),
        entry_lines(&report.least_criticized, |entry| {
            format!("{}: {} review(s)", entry.label, entry.value)
        }),
    );
    section(
        &mut lines,
        &format!(
            "4. Which are the {} longest-running movies in the list?",
            report.longest_running.len()
        ),
        entry_lines(&report.longest_running, |entry| {
            format!("{}: {} duration", entry.label, entry.value)
        }),
    );
    section(
        &mut lines,
        "5. Which movies raised the most money in the list?",
        entry_lines(&report.top_grossing, money_line),
    );
    section(
        &mut lines,
        "6. Which movies made the least money in the list?",
        entry_lines(&report.lowest_grossing, money_line),
    );
    section(
        &mut lines,
        "7. Which movies spent the most money to be produced?",
        entry_lines(&report.biggest_budget, money_line),
    );
    section(
        &mut lines,
        "8. Which movies spent the least money to be produced?",
        entry_lines(&report.smallest_budget, money_line),
    );
    section(
        &mut lines,
        "9. Which year had the most movies released?",
        vec![optional(report.busiest_year.as_deref())],
    );
    section(
        &mut lines,
        "10. Which year had the fewest movies released?",
        vec![optional(report.quietest_year.as_deref())],
    );
    section(
        &mut lines,
        "11. Which movie genre raised the most money per year?",
        year_lines(&report.top_genre_by_year),
    );
    section(
        &mut lines,
        "12. Which movie genre raised the least money per year?",
        year_lines(&report.bottom_genre_by_year),
    );

    let mut actors = vec!["**Number of performances**:".to_string()];
    actors.extend(report.actors_by_appearances.iter().map(|actor| {
        format!("{}: {}", actor.name, actor.appearances)
    }));
    actors.push("**Popularity**:".to_string());
    actors.extend(report.actors_by_popularity.iter().map(popularity_line));
    section(
        &mut lines,
        "13. Ranking of actors by performance and popularity",
        actors,
    );

    section(
        &mut lines,
        "14. What movie genre does the public like most?",
        vec![optional(report.favorite_genre.as_deref())],
    );
    section(
        &mut lines,
        "15. Which directors have the best reputation?",
        entry_lines(&report.top_directors, |entry| {
            format!("{}: {} likes", entry.label, entry.value)
        }),
    );

    lines
}

fn section(lines: &mut Vec<String>, title: &str, body: Vec<String>) {
    lines.push(title.to_string());
    if body.is_empty() {
        lines.push(format!("{INDENT}(none)"));
    }
    lines.extend(body.into_iter().map(|line| format!("{INDENT}{line}")));
    lines.push(String::new());
}

fn entry_lines(entries: &[RankedEntry], render: impl Fn(&RankedEntry) -> String) -> Vec<String> {
    entries.iter().map(render).collect()
}

fn money_line(entry: &RankedEntry) -> String {
    format!("{}: ${}", entry.label, entry.value)
}

fn director_line(count: &CategoryCount) -> String {
    format!(
        "- {}: {} movies",
        count.label.as_deref().unwrap_or("Empty Director"),
        count.count
    )
}

fn popularity_line(actor: &EntityProfile) -> String {
    match actor.social_media {
        Some(likes) => format!("{}: {likes}", actor.name),
        None => format!("{}: -", actor.name),
    }
}

fn year_lines(by_year: &BTreeMap<String, String>) -> Vec<String> {
    by_year
        .iter()
        .map(|(year, genre)| format!("{year}: {genre}"))
        .collect()
}

fn optional(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}
