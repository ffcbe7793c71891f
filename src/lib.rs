//! Package sorting: classify a package as STANDARD, SPECIAL or REJECTED from
//! its width, height, length and mass.
//!
//! The core is two pure operations, [`parse`] and [`classify`]:
//!
//! ```
//! use package_sorter::{classify, parse, Category};
//!
//! let spec = parse("200,10,10,25").unwrap();
//! assert_eq!(classify(&spec), Category::Rejected);
//! ```

pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{FileConfig, Settings};

pub use core::classifier::{assess, classify, is_bulky, is_heavy};
pub use core::parser::parse;
pub use core::sorter::Sorter;
pub use domain::model::{Assessment, Category, Field, MassUnit, OutputFormat, PackageSpec};
pub use utils::error::{ErrorKind, ParseError, Result, SorterError};
