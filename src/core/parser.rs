//! Measurement string parsing.
//!
//! Input is `width,height,length,mass`. Each field is trimmed and parsed as a
//! decimal float literal with an optional sign; scientific notation (`1e3`) is
//! accepted. `inf` and `nan` are recognised as numbers so they surface as
//! invalid measurements instead of malformed text.
//!
//! Checks run in a fixed order and the first violated rule wins:
//! field count, then numeric syntax, then sign, then finiteness. Within each
//! rule fields are scanned left to right.

use crate::domain::model::{Field, PackageSpec};
use crate::utils::error::ParseError;
use crate::utils::validation::{validate_finite, validate_non_negative};

pub const FIELD_COUNT: usize = 4;

pub fn parse(raw: &str) -> Result<PackageSpec, ParseError> {
    let fields = split_fields(raw);
    if fields.len() != FIELD_COUNT {
        tracing::debug!("Rejecting '{}': {} fields", raw, fields.len());
        return Err(ParseError::FieldCount {
            expected: FIELD_COUNT,
            found: fields.len(),
        });
    }

    let mut values = [0.0_f64; FIELD_COUNT];
    for (field, (slot, text)) in Field::ALL.into_iter().zip(values.iter_mut().zip(&fields)) {
        *slot = text.parse::<f64>().map_err(|_| ParseError::NotANumber {
            field,
            position: field.position(),
            raw: text.to_string(),
        })?;
    }

    validate_measurements(values, |field| fields[field.position() - 1].to_string())
}

/// Applies the sign and finiteness checks to four numeric values.
///
/// `raw` renders the original text of a field for error reporting.
pub(crate) fn validate_measurements(
    values: [f64; FIELD_COUNT],
    raw: impl Fn(Field) -> String,
) -> Result<PackageSpec, ParseError> {
    for (field, value) in Field::ALL.into_iter().zip(values) {
        validate_non_negative(field, value)?;
    }
    for (field, value) in Field::ALL.into_iter().zip(values) {
        validate_finite(field, value, || raw(field))?;
    }

    // -0.0 + 0.0 == +0.0, so the canonical form never prints "-0".
    Ok(PackageSpec::from_validated(values.map(|v| v + 0.0)))
}

fn split_fields(raw: &str) -> Vec<&str> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    raw.split(',').map(str::trim).collect()
}
