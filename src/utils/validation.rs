use crate::domain::model::Field;
use crate::utils::error::{ParseError, Result, SorterError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_negative(field: Field, value: f64) -> std::result::Result<(), ParseError> {
    if value < 0.0 {
        return Err(ParseError::Negative { field, value });
    }
    Ok(())
}

pub fn validate_finite(
    field: Field,
    value: f64,
    raw: impl FnOnce() -> String,
) -> std::result::Result<(), ParseError> {
    if !value.is_finite() {
        return Err(ParseError::NonFinite { field, raw: raw() });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SorterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(SorterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(SorterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Checks a `tracing` filter directive such as `debug` or `package_sorter=trace,warn`.
pub fn validate_log_filter(field_name: &str, directive: &str) -> Result<()> {
    validate_non_empty_string(field_name, directive)?;
    tracing_subscriber::EnvFilter::try_new(directive)
        .map(|_| ())
        .map_err(|e| SorterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: directive.to_string(),
            reason: format!("Invalid log filter: {}", e),
        })
}
