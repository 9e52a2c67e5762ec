//! Authenticated actor identity and the forced-transition capability.
//!
//! The transport layer authenticates callers and hands the core an
//! `Actor` (id + role). The core never reads ambient auth state.

use serde::{Deserialize, Serialize};

use super::{DomainError, ErrorCode, UserId};

/// Governance roles, as provisioned by the identity provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Business requester who drafts initiatives.
    Requester,
    /// Portfolio analyst: scores initiatives, maintains project data.
    Analyst,
    /// Expert committee member: submits evaluations.
    CommitteeExpert,
    /// Portfolio lead: reviews, closes evaluation rounds, activates projects.
    PortfolioLead,
    /// Governance board: plan approval and activation decisions.
    GovernanceBoard,
    /// Administrator: may mint forced-transition capabilities.
    Admin,
}

/// Authenticated actor performing a governance operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    user_id: UserId,
    role: Role,
}

impl Actor {
    /// Creates an actor from a pre-validated identity.
    pub fn new(user_id: UserId, role: Role) -> Self {
        Self { user_id, role }
    }

    /// Returns the actor's user id.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns the actor's role.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Mints a forced-transition capability.
    ///
    /// Only administrators can force a transition outside the adjacency
    /// table, and they must do so explicitly: holding the role alone never
    /// bypasses validation.
    ///
    /// # Errors
    ///
    /// - `Forbidden` if the actor is not an administrator
    pub fn force_transition(&self) -> Result<ForceTransition, DomainError> {
        if self.role == Role::Admin {
            Ok(ForceTransition { _priv: () })
        } else {
            Err(DomainError::new(
                ErrorCode::Forbidden,
                "Only administrators may force a state transition",
            ))
        }
    }
}

/// Capability token authorizing one forced state transition.
///
/// Cannot be constructed outside [`Actor::force_transition`].
#[derive(Debug)]
pub struct ForceTransition {
    _priv: (),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actor(role: Role) -> Actor {
        Actor::new(UserId::new("user-1").unwrap(), role)
    }

    #[test]
    fn admin_can_mint_force_capability() {
        assert!(actor(Role::Admin).force_transition().is_ok());
    }

    #[test]
    fn non_admin_cannot_mint_force_capability() {
        for role in [
            Role::Requester,
            Role::Analyst,
            Role::CommitteeExpert,
            Role::PortfolioLead,
            Role::GovernanceBoard,
        ] {
            let err = actor(role).force_transition().unwrap_err();
            assert_eq!(err.code, ErrorCode::Forbidden);
        }
    }

    #[test]
    fn role_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&Role::CommitteeExpert).unwrap(),
            "\"committee_expert\""
        );
    }
}
