pub mod allow_list;
pub mod auto_update;
pub mod console;
pub mod filter_update;
pub mod overrides;

// Re-export use cases
pub use allow_list::SetAllowListMembershipUseCase;
pub use auto_update::SetAutoUpdateUseCase;
pub use console::{RefreshConsoleUseCase, ResortConsoleUseCase};
pub use filter_update::{UpdateOutcome, WatchFilterUpdateUseCase, WatchPolicy};
pub use overrides::{RemoveOverrideUseCase, SetOverrideUseCase};
