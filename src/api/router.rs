//! Router assembly: resources, role gate and health check.
//!
//! ## Example
//!
//! ```ignore
//! use campus_crud::api::Api;
//! use campus_crud::auth::{Access, CrudRoles, Role};
//! use campus_crud::store::InMemoryRecordStore;
//!
//! let app = Api::new(InMemoryRecordStore::new())
//!     .resource::<Article>(
//!         "/api/articles",
//!         CrudRoles::split(Access::role(Role::User), Access::role(Role::Admin)),
//!     )
//!     .build();
//! ```

use std::sync::Arc;

use axum::extract::State;
use axum::http::Method;
use axum::middleware;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::auth::{enforce, Access, CrudRoles, RoleGate};
use crate::record::Record;
use crate::store::RecordStore;

/// Shared state handed to every handler.
pub struct AppState<S> {
    store: Arc<S>,
    resources: Arc<Vec<String>>,
}

impl<S> AppState<S> {
    /// A shared handle on the store, for work moved off the async runtime.
    pub fn shared_store(&self) -> Arc<S> {
        self.store.clone()
    }
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            resources: self.resources.clone(),
        }
    }
}

/// Builder collecting resources and their role tables into one router.
pub struct Api<S> {
    store: Arc<S>,
    gate: RoleGate,
    router: Router<AppState<S>>,
    resources: Vec<String>,
}

impl<S: RecordStore + 'static> Api<S> {
    pub fn new(store: S) -> Self {
        Self::with_shared(Arc::new(store))
    }

    /// Build over a store the caller keeps a handle to.
    pub fn with_shared(store: Arc<S>) -> Self {
        Self {
            store,
            gate: RoleGate::new().allow(Method::GET, "/health", Access::Public),
            router: Router::new().route("/health", get(health_handler::<S>)),
            resources: Vec::new(),
        }
    }

    /// Mount the CRUD routes for `R` under `base`, gated by `roles`.
    pub fn resource<R: Record>(mut self, base: &str, roles: CrudRoles) -> Self {
        self.gate.insert(Method::GET, format!("{base}/all"), roles.list);
        self.gate.insert(Method::GET, base, roles.get);
        self.gate.insert(Method::POST, format!("{base}/post"), roles.create);
        self.gate.insert(Method::PUT, base, roles.update);
        self.gate.insert(Method::DELETE, base, roles.delete);

        self.router = self.router.merge(handlers::routes::<S, R>(base));
        self.resources.push(base.to_string());
        self
    }

    pub fn gate(&self) -> &RoleGate {
        &self.gate
    }

    /// Finish the router: state, role gate, then request tracing outermost.
    pub fn build(self) -> Router {
        let state = AppState {
            store: self.store,
            resources: Arc::new(self.resources),
        };
        let gate = Arc::new(self.gate);

        self.router
            .with_state(state)
            .layer(middleware::from_fn_with_state(gate, enforce))
            .layer(TraceLayer::new_for_http())
    }
}

/// `GET /health`: returns `{ "ok": true, "resources": [...] }`.
async fn health_handler<S: RecordStore + 'static>(
    State(state): State<AppState<S>>,
) -> impl IntoResponse {
    Json(json!({ "ok": true, "resources": state.resources.as_slice() }))
}
