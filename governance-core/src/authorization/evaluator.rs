use super::principal::Principal;
use super::requirement::{
    Requirement, RequirementKind, BLOCKED_ROLE_REASON, MISSING_ROLE_REASON,
};
use crate::error::AppError;

/// The first requirement denial encountered during evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Denial {
    /// Which requirement kind denied.
    pub kind: RequirementKind,
    /// The fixed, human-readable reason for that kind.
    pub reason: &'static str,
}

/// Outcome of evaluating an ordered requirement list against a principal.
///
/// Terminal on first denial: at most one denial is recorded, and `evaluated`
/// counts only the requirements actually inspected before evaluation stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    denial: Option<Denial>,
    evaluated: usize,
}

impl Decision {
    pub fn succeeded(&self) -> bool {
        self.denial.is_none()
    }

    pub fn denied(&self) -> bool {
        self.denial.is_some()
    }

    pub fn denial(&self) -> Option<&Denial> {
        self.denial.as_ref()
    }

    /// The fixed reason for the first denial, if any.
    pub fn reason(&self) -> Option<&'static str> {
        self.denial.as_ref().map(|d| d.reason)
    }

    /// How many requirements were inspected before evaluation stopped.
    pub fn evaluated(&self) -> usize {
        self.evaluated
    }
}

/// Evaluate `requirements` strictly in the caller-supplied order, stopping at
/// the first denial. Requirements after the failing one are never inspected.
/// An empty list succeeds trivially. Pure: the same inputs always yield the
/// same decision.
pub fn evaluate(requirements: &[Requirement], principal: &Principal) -> Decision {
    let mut evaluated = 0;
    for requirement in requirements {
        evaluated += 1;
        let denial = match requirement {
            Requirement::BlockRole(role) if principal.holds_role(role) => Some(Denial {
                kind: RequirementKind::BlockRole,
                reason: BLOCKED_ROLE_REASON,
            }),
            Requirement::RequireRole(role) if !principal.holds_role(role) => Some(Denial {
                kind: RequirementKind::RequireRole,
                reason: MISSING_ROLE_REASON,
            }),
            _ => None,
        };
        if let Some(denial) = denial {
            return Decision {
                denial: Some(denial),
                evaluated,
            };
        }
    }
    Decision {
        denial: None,
        evaluated,
    }
}

/// Evaluate and map a denial to [`AppError::AccessDenied`].
///
/// This is the seam the service crates call from their handlers; it logs the
/// denied requirement kind before surfacing the error.
pub fn authorize(requirements: &[Requirement], principal: &Principal) -> Result<(), AppError> {
    let decision = evaluate(requirements, principal);
    if let Some(denial) = decision.denial() {
        tracing::warn!(requirement = %denial.kind, "Access requirement denied");
        return Err(AppError::AccessDenied(denial.reason));
    }
    Ok(())
}
