//! Session context.
//!
//! An explicit context object instead of an ambient singleton: created on
//! login, replaced by the anonymous state on logout. Route-guard behavior
//! lives in [`Session::require_role`].

use crate::error::AppError;
use remarket_commerce::ids::UserId;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// User role for authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular customer.
    #[default]
    Buyer,
    /// Can create and delete own listings.
    Seller,
    /// Full marketplace administration.
    Admin,
}

impl Role {
    /// Get role as string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Buyer => "buyer",
            Role::Seller => "seller",
            Role::Admin => "admin",
        }
    }

    /// Permission level (higher = more permissions).
    pub fn level(&self) -> u8 {
        match self {
            Role::Buyer => 0,
            Role::Seller => 1,
            Role::Admin => 2,
        }
    }

    /// Check if this role has at least the given permission level.
    pub fn has_permission(&self, required: Role) -> bool {
        self.level() >= required.level()
    }
}

impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "buyer" | "user" => Ok(Role::Buyer),
            "seller" => Ok(Role::Seller),
            "admin" => Ok(Role::Admin),
            _ => Err(()),
        }
    }
}

/// The authenticated user's identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    /// User ID.
    pub id: UserId,
    /// Email address.
    pub email: String,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Granted roles.
    #[serde(default)]
    pub roles: Vec<Role>,
}

impl CurrentUser {
    /// Check whether the user holds a role (directly or through a higher
    /// one).
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.iter().any(|r| r.has_permission(role))
    }
}

/// Session state: anonymous browsing or an authenticated user plus their
/// bearer token.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Session {
    /// No user logged in.
    #[default]
    Anonymous,
    /// Logged-in user.
    Authenticated {
        user: CurrentUser,
        token: String,
    },
}

impl Session {
    /// Create an authenticated session (login).
    pub fn authenticated(user: CurrentUser, token: impl Into<String>) -> Self {
        tracing::debug!(user = %user.id, "session authenticated");
        Session::Authenticated {
            user,
            token: token.into(),
        }
    }

    /// Tear the session down (logout). Cart and other per-user state are
    /// cleared by their own owners.
    pub fn logout(&mut self) {
        if let Some(user) = self.user() {
            tracing::debug!(user = %user.id, "session ended");
        }
        *self = Session::Anonymous;
    }

    /// The current user, if any.
    pub fn user(&self) -> Option<&CurrentUser> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated { user, .. } => Some(user),
        }
    }

    /// The bearer token, if authenticated.
    pub fn bearer(&self) -> Option<&str> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated { token, .. } => Some(token),
        }
    }

    /// Check whether a user is logged in.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }

    /// Route guard: require an authenticated user holding a role.
    pub fn require_role(&self, required: Role) -> Result<&CurrentUser, AppError> {
        let user = self.user().ok_or(AppError::Unauthenticated)?;
        if user.has_role(required) {
            Ok(user)
        } else {
            Err(AppError::Forbidden { required })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(roles: &[Role]) -> CurrentUser {
        CurrentUser {
            id: UserId::new("7"),
            email: "buyer@example.com".to_string(),
            name: None,
            roles: roles.to_vec(),
        }
    }

    #[test]
    fn test_anonymous_guard() {
        let session = Session::default();
        assert_eq!(
            session.require_role(Role::Buyer),
            Err(AppError::Unauthenticated)
        );
        assert!(session.bearer().is_none());
    }

    #[test]
    fn test_role_guard() {
        let session = Session::authenticated(user(&[Role::Buyer]), "tok");
        assert!(session.require_role(Role::Buyer).is_ok());
        assert_eq!(
            session.require_role(Role::Seller),
            Err(AppError::Forbidden {
                required: Role::Seller
            })
        );
    }

    #[test]
    fn test_admin_covers_lower_roles() {
        let session = Session::authenticated(user(&[Role::Admin]), "tok");
        assert!(session.require_role(Role::Seller).is_ok());
        assert!(session.require_role(Role::Buyer).is_ok());
    }

    #[test]
    fn test_logout_tears_down() {
        let mut session = Session::authenticated(user(&[Role::Buyer]), "tok");
        assert!(session.is_authenticated());
        session.logout();
        assert_eq!(session, Session::Anonymous);
    }

    #[test]
    fn test_current_user_from_backend_shape() {
        let json = r#"{
            "id": 7,
            "email": "seller@example.com",
            "name": "Ada",
            "roles": ["buyer", "seller"]
        }"#;
        let user: CurrentUser = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, UserId::new("7"));
        assert!(user.has_role(Role::Seller));
        assert!(!user.has_role(Role::Admin));
    }

    #[test]
    fn test_role_parsing() {
        assert_eq!("SELLER".parse::<Role>(), Ok(Role::Seller));
        assert_eq!("user".parse::<Role>(), Ok(Role::Buyer));
        assert!("root".parse::<Role>().is_err());
    }
}
