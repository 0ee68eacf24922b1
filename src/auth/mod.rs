//! Authorization: caller identity, roles, and the role gate.

mod gate;
mod principal;
mod role;

pub use gate::{enforce, Denied, RoleGate};
pub use principal::{Principal, ROLES_HEADER, USER_HEADER};
pub use role::{Access, CrudRoles, Role};
