/// Failures while resolving the console configuration, before any API call.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read console config {0}: {1}")]
    FileRead(String, String),

    #[error("Invalid console config TOML: {0}")]
    Parse(String),

    #[error("Console config rejected: {0}")]
    Validation(String),
}
