pub mod classifier;
pub mod parser;
pub mod report;
pub mod sorter;

pub use crate::domain::model::{Assessment, Category, Field, MassUnit, OutputFormat, PackageSpec};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::{ParseError, Result};
