//! Access-requirement evaluation for the store-management services.
//!
//! Endpoints declare an ordered list of [`Requirement`]s; the evaluator walks
//! the list against the caller's [`Principal`] and stops at the first denial.
//! The denial reason travels in the returned [`Decision`] so the transport
//! layer can surface it without a side channel.

mod evaluator;
mod principal;
mod requirement;

pub use evaluator::{authorize, evaluate, Decision, Denial};
pub use principal::{Claim, Principal, ROLE_CLAIM_ALIAS, ROLE_CLAIM_TYPE};
pub use requirement::{
    Requirement, RequirementKind, BLOCKED_ROLE_REASON, MISSING_ROLE_REASON,
};

/// Role labels used across the store-management services.
pub mod roles {
    pub const ADMINISTRATOR: &str = "administrador";
    pub const EMPLOYEE: &str = "funcionario";
}
