pub mod set_auto_update;

pub use set_auto_update::SetAutoUpdateUseCase;
