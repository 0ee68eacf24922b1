//! Role gate - per-route authorization checked before any handler runs.
//!
//! The route table is plain data built at startup. Anything not in the table
//! is denied.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::Method;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::debug;

use super::principal::Principal;
use super::role::Access;
use crate::api::ApiError;

/// Why the gate turned a request away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Denied {
    /// No route with this method and path is declared.
    Undeclared,
    /// The route needs an authenticated caller and there is none.
    Anonymous,
    /// The caller holds none of the required roles.
    MissingRole,
}

/// Route table mapping `(method, path)` to the access it requires.
#[derive(Debug, Clone, Default)]
pub struct RoleGate {
    rules: HashMap<(Method, String), Access>,
}

impl RoleGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare the access a route requires. Redeclaring a route replaces it.
    pub fn allow(mut self, method: Method, path: impl Into<String>, access: Access) -> Self {
        self.insert(method, path, access);
        self
    }

    pub fn insert(&mut self, method: Method, path: impl Into<String>, access: Access) {
        self.rules.insert((method, path.into()), access);
    }

    pub fn rule(&self, method: &Method, path: &str) -> Option<&Access> {
        self.rules.get(&(method.clone(), path.to_string()))
    }

    /// Decide whether `principal` may call `method path`.
    pub fn check(
        &self,
        method: &Method,
        path: &str,
        principal: Option<&Principal>,
    ) -> Result<(), Denied> {
        let access = self.rule(method, path).ok_or(Denied::Undeclared)?;

        if access.permits(principal) {
            Ok(())
        } else if principal.is_none() {
            Err(Denied::Anonymous)
        } else {
            Err(Denied::MissingRole)
        }
    }
}

/// axum middleware running the gate ahead of routing.
pub async fn enforce(State(gate): State<Arc<RoleGate>>, request: Request, next: Next) -> Response {
    let principal = Principal::from_headers(request.headers());

    match gate.check(request.method(), request.uri().path(), principal.as_ref()) {
        Ok(()) => next.run(request).await,
        Err(denied) => {
            debug!(
                method = %request.method(),
                path = request.uri().path(),
                user = principal.as_ref().map(Principal::user),
                reason = ?denied,
                "request denied"
            );
            ApiError::Forbidden.into_response()
        }
    }
}
