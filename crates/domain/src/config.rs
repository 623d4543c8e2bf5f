pub mod api;
pub mod errors;
pub mod logging;
pub mod presentation;
pub mod root;
pub mod watcher;

pub use api::ApiConfig;
pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use presentation::PresentationConfig;
pub use root::{CliOverrides, ConsoleConfig};
pub use watcher::WatcherConfig;
