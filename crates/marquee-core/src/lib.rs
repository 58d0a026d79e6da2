pub mod aggregate;
pub mod config;
pub mod count;
pub mod entity;
pub mod errors;
pub mod field;
pub mod io;
pub mod rank;
pub mod report;
pub mod run;
pub mod store;
pub mod warnings;

pub type MarqueeResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

#[derive(Debug)]
pub struct ConfigError(pub String);

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ConfigError {}

pub use aggregate::{
    attribute_by_group, favorite_subkey, split_multi_value, Attribution, AttributionQuery,
    GroupQuery, GroupTotals, SubKeyTotals,
};
pub use config::{load_config, AnalysisConfig, QueryConfig, SourceOptions};
pub use count::{count_by, count_matching, dominant_value, CategoryCount};
pub use entity::{
    extract_entities, rank_entities, AttributeKind, EntityField, EntityIndex, EntityProfile,
    RepeatedFieldGroup,
};
pub use rank::{rank, rank_by, rank_distinct, Direction, RankQuery, RankedEntry};
pub use report::FilmReport;
pub use run::{analyze, run, validate, RunOptions, RunOutcome, ValidateOptions};
pub use store::{Row, RowStore};
