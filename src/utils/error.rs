use std::fmt;
use thiserror::Error;

use crate::domain::model::Field;

/// Broad class of a parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The text can't be split into four numeric fields.
    MalformedInput,
    /// A field is numeric but not a usable measurement.
    InvalidMeasurement,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::MalformedInput => f.write_str("MalformedInput"),
            ErrorKind::InvalidMeasurement => f.write_str("InvalidMeasurement"),
        }
    }
}

/// Why a measurement string was rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("malformed input: expected {expected} comma-separated fields (width,height,length,mass), found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("malformed input: field {position} ({field}) is not a number: '{raw}'")]
    NotANumber {
        field: Field,
        position: usize,
        raw: String,
    },

    #[error("invalid measurement: {field} must not be negative, got {value}")]
    Negative { field: Field, value: f64 },

    #[error("invalid measurement: {field} must be finite, got '{raw}'")]
    NonFinite { field: Field, raw: String },
}

impl ParseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::FieldCount { .. } | ParseError::NotANumber { .. } => {
                ErrorKind::MalformedInput
            }
            ParseError::Negative { .. } | ParseError::NonFinite { .. } => {
                ErrorKind::InvalidMeasurement
            }
        }
    }

    /// The offending field, when the failure is tied to one.
    pub fn field(&self) -> Option<Field> {
        match self {
            ParseError::FieldCount { .. } => None,
            ParseError::NotANumber { field, .. }
            | ParseError::Negative { field, .. }
            | ParseError::NonFinite { field, .. } => Some(*field),
        }
    }
}

#[derive(Error, Debug)]
pub enum SorterError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Measurement,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Bad caller input; fix the arguments and rerun.
    Medium,
    /// Environment or settings problem.
    High,
    Critical,
}

impl SorterError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SorterError::Parse(e) => match e.kind() {
                ErrorKind::MalformedInput => ErrorCategory::Input,
                ErrorKind::InvalidMeasurement => ErrorCategory::Measurement,
            },
            SorterError::ConfigValidationError { .. }
            | SorterError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            SorterError::IoError(_) | SorterError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Measurement => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Process exit status for this error. `2` is left to clap usage errors.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::System => 1,
            ErrorCategory::Input => 3,
            ErrorCategory::Measurement => 4,
            ErrorCategory::Configuration => 5,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SorterError::Parse(e) => format!("{}: {}", e.kind(), e),
            SorterError::IoError(e) => format!("Could not read or write a file: {}", e),
            SorterError::SerializationError(e) => format!("Could not render the result: {}", e),
            SorterError::ConfigValidationError { .. }
            | SorterError::InvalidConfigValueError { .. } => self.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SorterError::Parse(ParseError::FieldCount { .. }) => {
                "Pass exactly four comma-separated numbers, e.g. \"50,30,20,5\"".to_string()
            }
            SorterError::Parse(ParseError::NotANumber { field, .. }) => {
                format!("Replace the {} field with a decimal number", field)
            }
            SorterError::Parse(ParseError::Negative { field, .. }) => {
                format!("Measurements can't be negative; check the {} value", field)
            }
            SorterError::Parse(ParseError::NonFinite { field, .. }) => {
                format!("Use a finite number for {}", field)
            }
            SorterError::IoError(_) => "Check that the file exists and is readable".to_string(),
            SorterError::SerializationError(_) => "Try --format text".to_string(),
            SorterError::ConfigValidationError { field, .. }
            | SorterError::InvalidConfigValueError { field, .. } => {
                format!("Fix '{}' in the settings file", field)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SorterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_kinds() {
        let count = ParseError::FieldCount {
            expected: 4,
            found: 3,
        };
        assert_eq!(count.kind(), ErrorKind::MalformedInput);
        assert_eq!(count.field(), None);

        let negative = ParseError::Negative {
            field: Field::Length,
            value: -5.0,
        };
        assert_eq!(negative.kind(), ErrorKind::InvalidMeasurement);
        assert_eq!(negative.field(), Some(Field::Length));
    }

    #[test]
    fn test_error_display_field_count() {
        let err = ParseError::FieldCount {
            expected: 4,
            found: 3,
        };
        assert_eq!(
            err.to_string(),
            "malformed input: expected 4 comma-separated fields (width,height,length,mass), found 3"
        );
    }

    #[test]
    fn test_error_display_not_a_number() {
        let err = ParseError::NotANumber {
            field: Field::Height,
            position: 2,
            raw: "abc".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "malformed input: field 2 (height) is not a number: 'abc'"
        );
    }

    #[test]
    fn test_exit_codes_distinguish_kinds() {
        let malformed: SorterError = ParseError::FieldCount {
            expected: 4,
            found: 1,
        }
        .into();
        let invalid: SorterError = ParseError::Negative {
            field: Field::Mass,
            value: -1.0,
        }
        .into();
        let config = SorterError::ConfigValidationError {
            field: "logging.level".to_string(),
            message: "empty".to_string(),
        };
        let io: SorterError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();

        assert_eq!(malformed.exit_code(), 3);
        assert_eq!(invalid.exit_code(), 4);
        assert_eq!(config.exit_code(), 5);
        assert_eq!(io.exit_code(), 1);
        assert_eq!(io.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_user_friendly_message_names_kind() {
        let err: SorterError = ParseError::Negative {
            field: Field::Length,
            value: -5.0,
        }
        .into();
        assert_eq!(
            err.user_friendly_message(),
            "InvalidMeasurement: invalid measurement: length must not be negative, got -5"
        );
        assert!(err.recovery_suggestion().contains("length"));
    }
}
