use clap::Parser;
use package_sorter::core::{report, ConfigProvider};
use package_sorter::utils::logger;
use package_sorter::utils::validation::{validate_path, Validate};
use package_sorter::{CliConfig, FileConfig, Settings, SorterError, Sorter};

fn main() {
    let config = CliConfig::parse();

    let file_config = match load_file_config(&config) {
        Ok(file_config) => file_config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    let providers: [&dyn ConfigProvider; 2] = [&config, &file_config];
    let settings = Settings::resolve(&providers);
    logger::init_cli_logger(&settings);

    tracing::debug!("CLI config: {:?}", config);
    tracing::debug!("Effective settings: {:?}", settings);

    match run(&config.measurements, &settings) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::debug!(
                "Classification failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}

fn load_file_config(config: &CliConfig) -> Result<FileConfig, SorterError> {
    let Some(path) = &config.config else {
        return Ok(FileConfig::default());
    };
    validate_path("--config", &path.to_string_lossy())?;
    let file_config = FileConfig::from_file(path)?;
    file_config.validate()?;
    Ok(file_config)
}

fn run(measurements: &str, settings: &Settings) -> Result<String, SorterError> {
    let assessment = Sorter::new(settings.mass_unit).sort(measurements)?;
    report::render(&assessment, settings.output_format)
}
