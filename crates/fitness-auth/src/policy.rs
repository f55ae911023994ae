//! Role requirements for protected operations.

use std::fmt;

use crate::claims::{Identity, Role};
use crate::errors::AuthError;

/// What an operation demands of its caller once the token has verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredRole {
    /// Any caller with a valid token.
    AnyAuthenticated,
    Admin,
}

impl RequiredRole {
    pub fn permits(self, role: Role) -> bool {
        match self {
            RequiredRole::AnyAuthenticated => true,
            RequiredRole::Admin => role == Role::Admin,
        }
    }
}

impl fmt::Display for RequiredRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequiredRole::AnyAuthenticated => f.write_str("any"),
            RequiredRole::Admin => f.write_str("admin"),
        }
    }
}

/// Allows or denies `identity` for an operation requiring `required`.
pub fn authorize(identity: &Identity, required: RequiredRole) -> Result<(), AuthError> {
    if required.permits(identity.role) {
        Ok(())
    } else {
        Err(AuthError::AccessDenied {
            required,
            role: identity.role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADMIN: Identity = Identity {
        user_id: 1,
        role: Role::Admin,
    };
    const TRAINER: Identity = Identity {
        user_id: 2,
        role: Role::Trainer,
    };

    #[test]
    fn test_admin_passes_everything() {
        assert!(authorize(&ADMIN, RequiredRole::Admin).is_ok());
        assert!(authorize(&ADMIN, RequiredRole::AnyAuthenticated).is_ok());
    }

    #[test]
    fn test_trainer_passes_any_authenticated() {
        assert!(authorize(&TRAINER, RequiredRole::AnyAuthenticated).is_ok());
    }

    #[test]
    fn test_trainer_denied_admin_operation() {
        assert_eq!(
            authorize(&TRAINER, RequiredRole::Admin),
            Err(AuthError::AccessDenied {
                required: RequiredRole::Admin,
                role: Role::Trainer,
            })
        );
    }
}
