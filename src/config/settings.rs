use crate::core::ConfigProvider;
use crate::domain::model::{LogFormat, MassUnit, OutputFormat};

pub const DEFAULT_LOG_FILTER: &str = "package_sorter=warn";

/// Effective settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub output_format: OutputFormat,
    pub mass_unit: MassUnit,
    pub log_filter: String,
    pub log_format: LogFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::default(),
            mass_unit: MassUnit::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_format: LogFormat::default(),
        }
    }
}

impl Settings {
    /// Merges providers in order of decreasing precedence; the first one that
    /// sets a value wins, anything left unset falls back to the default.
    pub fn resolve(providers: &[&dyn ConfigProvider]) -> Self {
        let defaults = Self::default();
        Self {
            output_format: providers
                .iter()
                .find_map(|p| p.output_format())
                .unwrap_or(defaults.output_format),
            mass_unit: providers
                .iter()
                .find_map(|p| p.mass_unit())
                .unwrap_or(defaults.mass_unit),
            log_filter: providers
                .iter()
                .find_map(|p| p.log_level())
                .map(str::to_string)
                .unwrap_or(defaults.log_filter),
            log_format: providers
                .iter()
                .find_map(|p| p.log_format())
                .unwrap_or(defaults.log_format),
        }
    }
}
