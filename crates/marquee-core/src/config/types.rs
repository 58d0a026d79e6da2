use std::path::{Path, PathBuf};

use polars::polars_utils::pl_str::PlSmallStr;
use polars::prelude::{CsvEncoding, CsvParseOptions, CsvReadOptions, NullValues};

use crate::{ConfigError, MarqueeResult};

#[derive(Debug)]
pub struct AnalysisConfig {
    pub version: String,
    pub source: SourceConfig,
    pub queries: QueryConfig,
}

#[derive(Debug)]
pub struct SourceConfig {
    pub path: String,
    pub options: SourceOptions,
}

impl SourceConfig {
    /// Relative paths are resolved against the directory holding the config.
    pub fn resolve_path(&self, config_dir: &Path) -> PathBuf {
        let path = Path::new(&self.path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            config_dir.join(path)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SourceOptions {
    pub header: Option<bool>,
    pub separator: Option<String>,
    pub encoding: Option<String>,
    pub null_values: Option<Vec<String>>,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            header: Some(true),
            separator: Some(",".to_string()),
            encoding: Some("UTF8".to_string()),
            null_values: Some(Vec::new()),
        }
    }
}

impl SourceOptions {
    pub fn to_csv_parse_options(&self) -> MarqueeResult<CsvParseOptions> {
        let separator = parse_separator(self.separator.as_deref().unwrap_or(","))?;
        let encoding = parse_encoding(self.encoding.as_deref())?;
        let null_values = build_null_values(self.null_values.as_ref());
        Ok(CsvParseOptions::default()
            .with_separator(separator)
            .with_encoding(encoding)
            .with_null_values(null_values))
    }

    pub fn to_csv_read_options(&self, input_path: &Path) -> MarqueeResult<CsvReadOptions> {
        let header = self.header.unwrap_or(true);
        let parse_options = self.to_csv_parse_options()?;

        Ok(CsvReadOptions::default()
            .with_path(Some(input_path))
            .with_has_header(header)
            .with_parse_options(parse_options))
    }
}

pub(crate) fn parse_separator(value: &str) -> MarqueeResult<u8> {
    let bytes = value.as_bytes();
    if bytes.len() != 1 {
        return Err(Box::new(ConfigError(format!(
            "separator must be a single byte, got {value:?}"
        ))));
    }
    Ok(bytes[0])
}

fn parse_encoding(value: Option<&str>) -> MarqueeResult<CsvEncoding> {
    let normalized = value
        .unwrap_or("utf8")
        .to_ascii_lowercase()
        .replace(['-', '_'], "");
    match normalized.as_str() {
        "utf8" => Ok(CsvEncoding::Utf8),
        "lossyutf8" => Ok(CsvEncoding::LossyUtf8),
        _ => Err(Box::new(ConfigError(format!(
            "unsupported encoding: {}",
            value.unwrap_or("utf8")
        )))),
    }
}

fn build_null_values(values: Option<&Vec<String>>) -> Option<NullValues> {
    let values = values?;
    match values.as_slice() {
        [] => None,
        [single] => Some(NullValues::AllColumnsSingle(PlSmallStr::from(
            single.as_str(),
        ))),
        _ => Some(NullValues::AllColumns(
            values.iter().map(|value| value.as_str().into()).collect(),
        )),
    }
}

/// Row limits for each ranked question of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryConfig {
    pub least_criticized: usize,
    pub longest_running: usize,
    pub grossing: usize,
    pub budget: usize,
    pub actors: usize,
    pub directors: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            least_criticized: 10,
            longest_running: 20,
            grossing: 5,
            budget: 3,
            actors: 5,
            directors: 5,
        }
    }
}
