pub mod watch_update;

pub use watch_update::{UpdateOutcome, WatchFilterUpdateUseCase, WatchPolicy};
