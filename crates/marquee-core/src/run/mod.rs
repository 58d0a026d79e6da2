mod analyze;

use std::path::{Path, PathBuf};
use std::time::Instant;

pub use analyze::analyze;

use crate::config::{load_config, AnalysisConfig, QueryConfig, SourceOptions};
use crate::errors::LoadError;
use crate::io::read_csv::{load_rows, missing_required_columns, read_csv_header};
use crate::report::FilmReport;
use crate::{ConfigError, MarqueeResult};

#[derive(Debug, Default)]
pub struct ValidateOptions {
    /// Also open the configured source and check its header.
    pub check_source: bool,
}

#[derive(Debug, Default)]
pub struct RunOptions {
    pub config: Option<PathBuf>,
    /// Overrides the source path from the config.
    pub input: Option<PathBuf>,
}

#[derive(Debug)]
pub struct RunOutcome {
    pub report: FilmReport,
    pub source_path: PathBuf,
    pub elapsed_ms: u64,
}

pub fn validate(config_path: &Path, options: ValidateOptions) -> MarqueeResult<AnalysisConfig> {
    let config = load_config(config_path)?;
    validate_config(&config)?;
    if options.check_source {
        let source_path = config.source.resolve_path(config_dir(config_path));
        let columns = read_csv_header(&source_path, &config.source.options)?;
        let missing = missing_required_columns(&columns);
        if !missing.is_empty() {
            return Err(Box::new(LoadError(format!(
                "{} is missing required columns: {}",
                source_path.display(),
                missing.join(", ")
            ))));
        }
    }
    Ok(config)
}

pub fn run(options: RunOptions) -> MarqueeResult<RunOutcome> {
    let (source_path, source_options, queries) = resolve_run_inputs(&options)?;

    let started = Instant::now();
    let store = load_rows(&source_path, &source_options)?;
    let mut report = analyze(&store, &queries)?;
    report.source_path = Some(source_path.display().to_string());
    let elapsed_ms = started.elapsed().as_millis() as u64;

    Ok(RunOutcome {
        report,
        source_path,
        elapsed_ms,
    })
}

fn resolve_run_inputs(
    options: &RunOptions,
) -> MarqueeResult<(PathBuf, SourceOptions, QueryConfig)> {
    match (&options.config, &options.input) {
        (Some(config_path), input) => {
            let config = validate(config_path, ValidateOptions::default())?;
            let source_path = match input {
                Some(input) => input.clone(),
                None => config.source.resolve_path(config_dir(config_path)),
            };
            Ok((source_path, config.source.options, config.queries))
        }
        (None, Some(input)) => Ok((
            input.clone(),
            SourceOptions::default(),
            QueryConfig::default(),
        )),
        (None, None) => Err(Box::new(ConfigError(
            "either a config file or an input file is required".to_string(),
        ))),
    }
}

fn validate_config(config: &AnalysisConfig) -> MarqueeResult<()> {
    if config.version.trim().is_empty() {
        return Err(Box::new(ConfigError("version is required".to_string())));
    }
    if config.source.path.trim().is_empty() {
        return Err(Box::new(ConfigError(
            "source.path cannot be empty".to_string(),
        )));
    }
    config.source.options.to_csv_parse_options()?;
    Ok(())
}

fn config_dir(config_path: &Path) -> &Path {
    config_path.parent().unwrap_or_else(|| Path::new("."))
}
