pub mod remove_override;
pub mod set_override;

pub use remove_override::RemoveOverrideUseCase;
pub use set_override::SetOverrideUseCase;
