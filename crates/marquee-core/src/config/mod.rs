mod parse;
mod types;
mod yaml_decode;

use std::path::Path;

pub use types::*;

pub(crate) use parse::parse_config;

pub fn load_config(path: &Path) -> crate::MarqueeResult<AnalysisConfig> {
    parse_config(path)
}
