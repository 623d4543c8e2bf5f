use dns_console_domain::{CliOverrides, ConsoleConfig, LogFormat};
use tracing::info;
use tracing_subscriber::EnvFilter;

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<ConsoleConfig> {
    let config = ConsoleConfig::load(path, overrides)?;
    config.validate()?;
    Ok(config)
}

/// Logs go to stderr so rendered output on stdout stays clean.
/// `RUST_LOG` wins over the configured level.
pub fn init_logging(config: &ConsoleConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let result = match config.logging.format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    if let Err(e) = result {
        eprintln!("Logging disabled: {}", e);
        return;
    }

    info!(
        base_url = %config.api.base_url,
        "DNS console v{}",
        env!("CARGO_PKG_VERSION")
    );
}
