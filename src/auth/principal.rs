//! The authenticated caller, as forwarded by the identity provider.

use axum::http::HeaderMap;

use super::role::Role;

/// Header carrying the authenticated user's identifier.
pub const USER_HEADER: &str = "x-auth-user";

/// Header carrying the caller's role claims, comma separated.
pub const ROLES_HEADER: &str = "x-auth-roles";

/// An authenticated caller and its role claims.
///
/// The identity provider sits in front of this service and forwards the
/// verified identity as request headers:
///
/// ```text
/// x-auth-user: student@ucsb.edu
/// x-auth-roles: ROLE_USER,ROLE_ADMIN
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    user: String,
    roles: Vec<Role>,
}

impl Principal {
    pub fn new(user: impl Into<String>, roles: impl IntoIterator<Item = Role>) -> Self {
        Self {
            user: user.into(),
            roles: roles.into_iter().collect(),
        }
    }

    /// Read the caller from request headers. Returns `None` when no user is
    /// present. Unknown role claims are dropped.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let user = headers
            .get(USER_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())?;

        let roles = headers
            .get_all(ROLES_HEADER)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .flat_map(|v| v.split(','))
            .filter_map(Role::parse)
            .collect::<Vec<_>>();

        Some(Self::new(user, roles))
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}
