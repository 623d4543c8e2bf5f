//! DNS Console Application Layer
pub mod ports;
pub mod services;
pub mod session;
pub mod use_cases;

pub use session::{ConsoleSession, UpdateWatchState};
