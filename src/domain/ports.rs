use crate::domain::model::{LogFormat, MassUnit, OutputFormat};

/// A source of run settings. Every value is optional so sources can be layered;
/// `None` means "not set here, fall through to the next source".
pub trait ConfigProvider: Send + Sync {
    fn output_format(&self) -> Option<OutputFormat>;
    fn mass_unit(&self) -> Option<MassUnit>;
    fn log_level(&self) -> Option<&str>;
    fn log_format(&self) -> Option<LogFormat>;
}
