/// Canonical claim type under which role memberships are issued.
pub const ROLE_CLAIM_TYPE: &str = "http://schemas.microsoft.com/ws/2008/06/identity/claims/role";

/// Short claim type some token issuers use for role memberships.
pub const ROLE_CLAIM_ALIAS: &str = "role";

/// A single identity claim attached to the current request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claim {
    pub claim_type: String,
    pub value: String,
}

impl Claim {
    pub fn new(claim_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            claim_type: claim_type.into(),
            value: value.into(),
        }
    }
}

/// The authenticated caller's claim set for the current request.
///
/// Immutable for the duration of evaluation. Role membership has two sources
/// of truth: the structured role list granted at token validation, and raw
/// claims carrying a role claim type. [`Principal::holds_role`] consults both.
#[derive(Debug, Clone, Default)]
pub struct Principal {
    roles: Vec<String>,
    claims: Vec<Claim>,
}

impl Principal {
    pub fn new(roles: Vec<String>, claims: Vec<Claim>) -> Self {
        Self { roles, claims }
    }

    pub fn with_roles(roles: Vec<String>) -> Self {
        Self {
            roles,
            claims: Vec::new(),
        }
    }

    pub fn with_claims(claims: Vec<Claim>) -> Self {
        Self {
            roles: Vec::new(),
            claims,
        }
    }

    /// A principal with no roles and no claims.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn claims(&self) -> &[Claim] {
        &self.claims
    }

    /// Structured role membership check. Role names compare case-insensitively.
    pub fn is_in_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r.eq_ignore_ascii_case(role))
    }

    /// True if the principal holds `role` through either source of truth:
    /// the structured role list, or a claim whose type is exactly `"role"`
    /// or the canonical role claim type. The claim type must match exactly;
    /// the claim value compares case-insensitively.
    pub fn holds_role(&self, role: &str) -> bool {
        self.is_in_role(role)
            || self.claims.iter().any(|c| {
                (c.claim_type == ROLE_CLAIM_ALIAS || c.claim_type == ROLE_CLAIM_TYPE)
                    && c.value.eq_ignore_ascii_case(role)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::authorization::roles;

    #[test]
    fn test_role_claim_value_is_case_insensitive() {
        let principal =
            Principal::with_claims(vec![Claim::new(ROLE_CLAIM_ALIAS, "ADMINISTRADOR")]);
        assert!(principal.holds_role(roles::ADMINISTRATOR));
        assert!(principal.holds_role("AdMiNiStRaDoR"));
    }

    #[test]
    fn test_role_claim_type_is_case_sensitive() {
        let principal = Principal::with_claims(vec![Claim::new("ROLE", roles::ADMINISTRATOR)]);
        assert!(!principal.holds_role(roles::ADMINISTRATOR));
    }

    #[test]
    fn test_canonical_claim_type_counts_as_role() {
        let principal =
            Principal::with_claims(vec![Claim::new(ROLE_CLAIM_TYPE, roles::EMPLOYEE)]);
        assert!(principal.holds_role(roles::EMPLOYEE));
    }

    #[test]
    fn test_structured_roles_count_as_role() {
        let principal = Principal::with_roles(vec!["Funcionario".to_string()]);
        assert!(principal.holds_role(roles::EMPLOYEE));
        assert!(principal.is_in_role(roles::EMPLOYEE));
    }

    #[test]
    fn test_unrelated_claim_types_are_ignored() {
        let principal = Principal::with_claims(vec![
            Claim::new("email", "user@example.com"),
            Claim::new("sub", roles::ADMINISTRATOR),
        ]);
        assert!(!principal.holds_role(roles::ADMINISTRATOR));
    }

    #[test]
    fn test_anonymous_holds_no_roles() {
        let principal = Principal::anonymous();
        assert!(!principal.holds_role(roles::ADMINISTRATOR));
        assert!(!principal.is_in_role(roles::ADMINISTRATOR));
    }
}
