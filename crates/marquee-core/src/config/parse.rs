use std::path::Path;

use yaml_rust2::yaml::Hash;
use yaml_rust2::Yaml;

use crate::config::yaml_decode::{
    hash_get, load_yaml, validate_known_keys, yaml_array, yaml_hash, yaml_string,
};
use crate::config::{AnalysisConfig, QueryConfig, SourceConfig, SourceOptions};
use crate::{ConfigError, MarqueeResult};

pub(crate) fn parse_config(path: &Path) -> MarqueeResult<AnalysisConfig> {
    let docs = load_yaml(path)?;
    if docs.is_empty() {
        return Err(Box::new(ConfigError("YAML is empty".to_string())));
    }
    if docs.len() > 1 {
        return Err(Box::new(ConfigError(
            "YAML contains multiple documents; expected one".to_string(),
        )));
    }
    parse_root(&docs[0])
}

fn parse_root(doc: &Yaml) -> MarqueeResult<AnalysisConfig> {
    let root = yaml_hash(doc, "root")?;
    validate_known_keys(root, "root", &["version", "source", "queries"])?;
    let version = get_string(root, "version", "root")?;
    let source = parse_source(get_value(root, "source", "root")?)?;
    let queries = match hash_get(root, "queries") {
        Some(Yaml::Null) | None => QueryConfig::default(),
        Some(value) => parse_queries(value)?,
    };

    Ok(AnalysisConfig {
        version,
        source,
        queries,
    })
}

fn parse_source(value: &Yaml) -> MarqueeResult<SourceConfig> {
    let hash = yaml_hash(value, "source")?;
    validate_known_keys(hash, "source", &["path", "options"])?;
    let options = match hash_get(hash, "options") {
        Some(Yaml::Null) | None => SourceOptions::default(),
        Some(value) => parse_source_options(value)?,
    };

    Ok(SourceConfig {
        path: get_string(hash, "path", "source")?,
        options,
    })
}

fn parse_source_options(value: &Yaml) -> MarqueeResult<SourceOptions> {
    let hash = yaml_hash(value, "source.options")?;
    validate_known_keys(
        hash,
        "source.options",
        &["header", "separator", "encoding", "null_values"],
    )?;
    let defaults = SourceOptions::default();
    Ok(SourceOptions {
        header: opt_bool(hash, "header", "source.options")?.or(defaults.header),
        separator: opt_string(hash, "separator", "source.options")?.or(defaults.separator),
        encoding: opt_string(hash, "encoding", "source.options")?.or(defaults.encoding),
        null_values: opt_vec_string(hash, "null_values", "source.options")?
            .or(defaults.null_values),
    })
}

fn parse_queries(value: &Yaml) -> MarqueeResult<QueryConfig> {
    let hash = yaml_hash(value, "queries")?;
    validate_known_keys(
        hash,
        "queries",
        &[
            "least_criticized",
            "longest_running",
            "grossing",
            "budget",
            "actors",
            "directors",
        ],
    )?;
    let defaults = QueryConfig::default();
    Ok(QueryConfig {
        least_criticized: opt_limit(hash, "least_criticized")?
            .unwrap_or(defaults.least_criticized),
        longest_running: opt_limit(hash, "longest_running")?.unwrap_or(defaults.longest_running),
        grossing: opt_limit(hash, "grossing")?.unwrap_or(defaults.grossing),
        budget: opt_limit(hash, "budget")?.unwrap_or(defaults.budget),
        actors: opt_limit(hash, "actors")?.unwrap_or(defaults.actors),
        directors: opt_limit(hash, "directors")?.unwrap_or(defaults.directors),
    })
}

fn get_value<'a>(hash: &'a Hash, key: &str, ctx: &str) -> MarqueeResult<&'a Yaml> {
    hash_get(hash, key).ok_or_else(|| {
        Box::new(ConfigError(format!("missing required field {ctx}.{key}")))
            as Box<dyn std::error::Error + Send + Sync>
    })
}

fn get_string(hash: &Hash, key: &str, ctx: &str) -> MarqueeResult<String> {
    let value = get_value(hash, key, ctx)?;
    yaml_string(value, &format!("{ctx}.{key}"))
}

fn opt_string(hash: &Hash, key: &str, ctx: &str) -> MarqueeResult<Option<String>> {
    match hash_get(hash, key) {
        None | Some(Yaml::Null) | Some(Yaml::BadValue) => Ok(None),
        Some(value) => Ok(Some(yaml_string(value, &format!("{ctx}.{key}"))?)),
    }
}

fn opt_vec_string(hash: &Hash, key: &str, ctx: &str) -> MarqueeResult<Option<Vec<String>>> {
    let value = match hash_get(hash, key) {
        None | Some(Yaml::Null) | Some(Yaml::BadValue) => return Ok(None),
        Some(value) => value,
    };
    let list = yaml_array(value, &format!("{ctx}.{key}"))?;
    let mut values = Vec::with_capacity(list.len());
    for (index, item) in list.iter().enumerate() {
        let item_ctx = format!("{ctx}.{key}[{index}]");
        values.push(yaml_string(item, &item_ctx)?);
    }
    Ok(Some(values))
}

fn opt_bool(hash: &Hash, key: &str, ctx: &str) -> MarqueeResult<Option<bool>> {
    match hash_get(hash, key) {
        None | Some(Yaml::Null) | Some(Yaml::BadValue) => Ok(None),
        Some(Yaml::Boolean(value)) => Ok(Some(*value)),
        Some(_) => Err(Box::new(ConfigError(format!(
            "expected boolean at {ctx}.{key}"
        )))),
    }
}

fn opt_limit(hash: &Hash, key: &str) -> MarqueeResult<Option<usize>> {
    match hash_get(hash, key) {
        None | Some(Yaml::Null) | Some(Yaml::BadValue) => Ok(None),
        Some(Yaml::Integer(raw)) if *raw >= 0 => Ok(Some(*raw as usize)),
        Some(_) => Err(Box::new(ConfigError(format!(
            "expected non-negative integer at queries.{key}"
        )))),
    }
}
