pub mod read_csv;

pub use read_csv::{load_rows, read_csv_header, REQUIRED_FIELDS};
