use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Settings;
use crate::domain::model::LogFormat;

pub const LOG_ENV_VAR: &str = "PACKAGE_SORTER_LOG";

/// Installs the global subscriber. Logs always go to stderr; stdout carries
/// only the classification result.
///
/// `PACKAGE_SORTER_LOG` (then `RUST_LOG`) overrides the configured filter.
pub fn init_cli_logger(settings: &Settings) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));

    let registry = tracing_subscriber::registry().with(filter);
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    match settings.log_format {
        LogFormat::Compact => registry.with(fmt_layer.compact()).init(),
        LogFormat::Json => registry.with(fmt_layer.json()).init(),
    }
}
