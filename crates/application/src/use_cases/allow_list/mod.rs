pub mod set_membership;

pub use set_membership::SetAllowListMembershipUseCase;
