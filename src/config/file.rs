use crate::core::ConfigProvider;
use crate::domain::model::{LogFormat, MassUnit, OutputFormat};
use crate::utils::error::{Result, SorterError};
use crate::utils::validation::{validate_log_filter, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings file, e.g.:
///
/// ```toml
/// [output]
/// format = "json"
///
/// [units]
/// mass = "g"
///
/// [logging]
/// level = "debug"
/// format = "compact"
/// ```
///
/// Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub output: Option<OutputSection>,
    pub units: Option<UnitsSection>,
    pub logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UnitsSection {
    pub mass: Option<MassUnit>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingSection {
    pub level: Option<String>,
    pub format: Option<LogFormat>,
}

impl FileConfig {
    /// Loads and parses a settings file. Does not validate; call `validate()`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SorterError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| SorterError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }
}

impl ConfigProvider for FileConfig {
    fn output_format(&self) -> Option<OutputFormat> {
        self.output.as_ref().and_then(|o| o.format)
    }

    fn mass_unit(&self) -> Option<MassUnit> {
        self.units.as_ref().and_then(|u| u.mass)
    }

    fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    fn log_format(&self) -> Option<LogFormat> {
        self.logging.as_ref().and_then(|l| l.format)
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        if let Some(level) = self.log_level() {
            validate_log_filter("logging.level", level)?;
        }
        Ok(())
    }
}
