use std::fmt;

use super::principal::Principal;

/// A role claim carried by an authenticated caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
        }
    }

    /// Parse a role claim. Accepts `USER`, `user` and `ROLE_USER` forms.
    pub fn parse(raw: &str) -> Option<Role> {
        let raw = raw.trim();
        let name = raw
            .strip_prefix("ROLE_")
            .or_else(|| raw.strip_prefix("role_"))
            .unwrap_or(raw);

        if name.eq_ignore_ascii_case("user") {
            Some(Role::User)
        } else if name.eq_ignore_ascii_case("admin") {
            Some(Role::Admin)
        } else {
            None
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who may call a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    /// Anyone, authenticated or not.
    Public,
    /// An authenticated caller holding at least one of these roles.
    AnyOf(Vec<Role>),
}

impl Access {
    pub fn role(role: Role) -> Self {
        Access::AnyOf(vec![role])
    }

    pub fn any_of(roles: impl IntoIterator<Item = Role>) -> Self {
        Access::AnyOf(roles.into_iter().collect())
    }

    pub fn permits(&self, principal: Option<&Principal>) -> bool {
        match self {
            Access::Public => true,
            Access::AnyOf(roles) => principal
                .map(|p| roles.iter().any(|role| p.has_role(*role)))
                .unwrap_or(false),
        }
    }
}

/// Required access for each of a resource's five operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrudRoles {
    pub list: Access,
    pub get: Access,
    pub create: Access,
    pub update: Access,
    pub delete: Access,
}

impl CrudRoles {
    /// The same access for every operation.
    pub fn uniform(access: Access) -> Self {
        Self {
            list: access.clone(),
            get: access.clone(),
            create: access.clone(),
            update: access.clone(),
            delete: access,
        }
    }

    /// Reads for `reader`, writes for `writer`.
    pub fn split(reader: Access, writer: Access) -> Self {
        Self {
            list: reader.clone(),
            get: reader,
            create: writer.clone(),
            update: writer.clone(),
            delete: writer,
        }
    }
}
