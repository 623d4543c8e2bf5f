pub mod refresh;
pub mod resort;

pub use refresh::RefreshConsoleUseCase;
pub use resort::ResortConsoleUseCase;
