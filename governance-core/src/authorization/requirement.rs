/// Denial reason when a blocked role is present. Fixed per requirement kind.
pub const BLOCKED_ROLE_REASON: &str =
    "Access denied: this operation is not available to the caller's role.";

/// Denial reason when a required role is absent. Fixed per requirement kind.
pub const MISSING_ROLE_REASON: &str =
    "Access denied: the caller does not hold the role required for this operation.";

/// A named access-control policy check. Requirements are data; the evaluator
/// knows how to check each kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requirement {
    /// Deny if the principal holds the role.
    BlockRole(String),
    /// Deny unless the principal holds the role.
    RequireRole(String),
}

impl Requirement {
    pub fn block_role(role: impl Into<String>) -> Self {
        Requirement::BlockRole(role.into())
    }

    pub fn require_role(role: impl Into<String>) -> Self {
        Requirement::RequireRole(role.into())
    }

    pub fn kind(&self) -> RequirementKind {
        match self {
            Requirement::BlockRole(_) => RequirementKind::BlockRole,
            Requirement::RequireRole(_) => RequirementKind::RequireRole,
        }
    }

    pub fn role(&self) -> &str {
        match self {
            Requirement::BlockRole(role) | Requirement::RequireRole(role) => role,
        }
    }
}

/// Tag identifying which requirement kind produced a denial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequirementKind {
    BlockRole,
    RequireRole,
}

impl std::fmt::Display for RequirementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequirementKind::BlockRole => write!(f, "block-role"),
            RequirementKind::RequireRole => write!(f, "require-role"),
        }
    }
}
