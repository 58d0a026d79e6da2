//! Field lookup with explicit absent-value handling.
//!
//! A value is absent when the column is missing from the row or when the
//! stored text is empty after trimming. Numeric conversion is only valid on
//! present values; queries filter with [`get`] before calling [`number`].

use crate::errors::RunError;
use crate::store::Row;
use crate::MarqueeResult;

pub fn get<'a>(row: &'a Row, field: &str) -> Option<&'a str> {
    let value = row.raw(field)?.trim();
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

pub fn is_present(row: &Row, field: &str) -> bool {
    get(row, field).is_some()
}

pub fn number(row: &Row, field: &str) -> MarqueeResult<f64> {
    let value = get(row, field).ok_or_else(|| {
        Box::new(RunError(format!(
            "field {field} is absent and cannot be read as a number"
        ))) as Box<dyn std::error::Error + Send + Sync>
    })?;
    parse_number(value, field)
}

/// Parses a finite number. `NaN` and infinities are rejected like any other
/// non-numeric text.
pub fn parse_number(value: &str, field: &str) -> MarqueeResult<f64> {
    let parsed = value.trim().parse::<f64>().map_err(|err| {
        Box::new(RunError(format!(
            "field {field} has non-numeric value {value:?}: {err}"
        ))) as Box<dyn std::error::Error + Send + Sync>
    })?;
    if !parsed.is_finite() {
        return Err(Box::new(RunError(format!(
            "field {field} has non-finite value {value:?}"
        ))));
    }
    Ok(parsed)
}

/// Present value for `field` together with its numeric interpretation.
pub fn numeric<'a>(row: &'a Row, field: &str) -> MarqueeResult<Option<(&'a str, f64)>> {
    match get(row, field) {
        Some(value) => Ok(Some((value, number(row, field)?))),
        None => Ok(None),
    }
}
