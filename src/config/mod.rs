pub mod file;
pub mod settings;

pub use file::FileConfig;
pub use settings::Settings;

#[cfg(feature = "cli")]
mod cli {
    use crate::core::ConfigProvider;
    use crate::domain::model::{LogFormat, MassUnit, OutputFormat};
    use clap::Parser;
    use serde::Serialize;
    use std::path::PathBuf;

    const RULES_HELP: &str = "\
OUTPUT:
  STANDARD - neither bulky nor heavy
  SPECIAL  - bulky OR heavy, but not both
  REJECTED - both bulky AND heavy

RULES:
  BULKY: any dimension >= 150 cm OR volume >= 1,000,000 cm³
  HEAVY: mass >= 20 kg

EXAMPLES:
  package-sorter \"50,30,20,5\"            -> STANDARD
  package-sorter \"150,30,20,5\"           -> SPECIAL  (bulky by dimension)
  package-sorter \"100,100,100,15\"        -> SPECIAL  (bulky by volume)
  package-sorter \"50,30,20,25\"           -> SPECIAL  (heavy)
  package-sorter \"150,30,20,25\"          -> REJECTED
  package-sorter -u g \"50,30,20,5000\"    -> STANDARD (mass in grams)

EXIT STATUS:
  0 classified, 1 I/O error, 2 usage error, 3 malformed input,
  4 invalid measurement, 5 configuration error";

    #[derive(Debug, Clone, Serialize, Parser)]
    #[command(name = "package-sorter", version)]
    #[command(about = "Classify a package as STANDARD, SPECIAL or REJECTED from its measurements")]
    #[command(after_long_help = RULES_HELP)]
    pub struct CliConfig {
        /// Package measurements as "width,height,length,mass" (cm, cm, cm, kg)
        #[arg(value_name = "MEASUREMENTS", allow_hyphen_values = true)]
        pub measurements: String,

        /// Output format
        #[arg(short, long, value_enum)]
        pub format: Option<OutputFormat>,

        /// Unit of the mass field
        #[arg(short = 'u', long, value_enum)]
        pub mass_unit: Option<MassUnit>,

        /// Path to a TOML settings file
        #[arg(short, long)]
        pub config: Option<PathBuf>,

        /// Enable verbose output
        #[arg(short, long)]
        pub verbose: bool,
    }

    impl ConfigProvider for CliConfig {
        fn output_format(&self) -> Option<OutputFormat> {
            self.format
        }

        fn mass_unit(&self) -> Option<MassUnit> {
            self.mass_unit
        }

        fn log_level(&self) -> Option<&str> {
            self.verbose.then_some("package_sorter=debug,info")
        }

        fn log_format(&self) -> Option<LogFormat> {
            None
        }
    }

}

#[cfg(feature = "cli")]
pub use cli::CliConfig;
