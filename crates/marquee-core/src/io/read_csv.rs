use std::path::Path;
use std::sync::Arc;

use polars::prelude::{DataFrame, DataType, Schema, SerReader};

use crate::config::SourceOptions;
use crate::errors::LoadError;
use crate::store::RowStore;
use crate::{warnings, MarqueeResult};

/// Columns every film dataset must declare in its header.
pub const REQUIRED_FIELDS: &[&str] = &[
    "movie_title",
    "director_name",
    "color",
    "duration",
    "num_critic_for_reviews",
    "gross",
    "budget",
    "title_year",
    "genres",
    "movie_facebook_likes",
    "actor_1_name",
    "actor_2_name",
    "actor_3_name",
    "actor_1_facebook_likes",
    "actor_2_facebook_likes",
    "actor_3_facebook_likes",
    "director_facebook_likes",
    "imdb_score",
];

/// Reads the whole file into a [`RowStore`]. Every column is read as text;
/// null cells become empty strings. Fails before returning any rows when the
/// file cannot be parsed or lacks a required column.
pub fn load_rows(input_path: &Path, source_options: &SourceOptions) -> MarqueeResult<RowStore> {
    let columns = read_csv_header(input_path, source_options)?;
    let missing = missing_required_columns(&columns);
    if !missing.is_empty() {
        return Err(Box::new(LoadError(format!(
            "{} is missing required columns: {}",
            input_path.display(),
            missing.join(", ")
        ))));
    }

    let df = read_csv_file(input_path, source_options, build_raw_schema(&columns))?;
    let records = dataframe_records(&df, &columns)?;
    if records.is_empty() {
        warnings::emit(&format!("{} has no data rows", input_path.display()));
    }
    RowStore::new(columns, records)
}

pub fn read_csv_header(
    input_path: &Path,
    source_options: &SourceOptions,
) -> MarqueeResult<Vec<String>> {
    let read_options = source_options
        .to_csv_read_options(input_path)?
        .with_n_rows(Some(0));
    let reader = read_options
        .try_into_reader_with_file_path(None)
        .map_err(|err| {
            Box::new(LoadError(format!(
                "failed to open csv at {}: {err}",
                input_path.display()
            ))) as Box<dyn std::error::Error + Send + Sync>
        })?;
    let df = reader.finish().map_err(|err| {
        Box::new(LoadError(format!(
            "csv header read failed for {}: {err}",
            input_path.display()
        ))) as Box<dyn std::error::Error + Send + Sync>
    })?;
    Ok(df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect())
}

fn read_csv_file(
    input_path: &Path,
    source_options: &SourceOptions,
    schema: Schema,
) -> MarqueeResult<DataFrame> {
    let read_options = source_options
        .to_csv_read_options(input_path)?
        .with_schema(Some(Arc::new(schema)));
    let reader = read_options
        .try_into_reader_with_file_path(None)
        .map_err(|err| {
            Box::new(LoadError(format!(
                "failed to open csv at {}: {err}",
                input_path.display()
            ))) as Box<dyn std::error::Error + Send + Sync>
        })?;
    let df = reader.finish().map_err(|err| {
        Box::new(LoadError(format!(
            "csv read failed for {}: {err}",
            input_path.display()
        ))) as Box<dyn std::error::Error + Send + Sync>
    })?;
    Ok(df)
}

fn build_raw_schema(columns: &[String]) -> Schema {
    let mut schema = Schema::with_capacity(columns.len());
    for name in columns {
        schema.insert(name.as_str().into(), DataType::String);
    }
    schema
}

pub(crate) fn missing_required_columns(columns: &[String]) -> Vec<&'static str> {
    REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|required| !columns.iter().any(|name| name == required))
        .collect()
}

fn dataframe_records(df: &DataFrame, columns: &[String]) -> MarqueeResult<Vec<Vec<String>>> {
    let mut records: Vec<Vec<String>> = (0..df.height())
        .map(|_| Vec::with_capacity(columns.len()))
        .collect();
    for name in columns {
        let values = df
            .column(name)
            .map_err(|err| LoadError(format!("column {name} not found: {err}")))?
            .str()
            .map_err(|err| LoadError(format!("column {name} is not utf8: {err}")))?;
        for (record, value) in records.iter_mut().zip(values.into_iter()) {
            record.push(value.unwrap_or("").to_string());
        }
    }
    Ok(records)
}
