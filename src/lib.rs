//! campus_crud: role-gated CRUD REST API over flat campus records.
//!
//! Every resource (menu item reviews, dining-commons menu items, student
//! organizations, articles, recommendation requests) is served by the same
//! generic handlers over a [`store::RecordStore`]:
//!
//! - `GET <base>/all`, `GET <base>?id=..`, `POST <base>/post?..`,
//!   `PUT <base>?id=..`, `DELETE <base>?id=..`
//! - a role gate checks the caller's role claims before any handler runs
//! - a missing record is always a 404 `EntityNotFoundException`
//!
//! ## Quick Start
//!
//! ```ignore
//! use campus_crud::store::InMemoryRecordStore;
//!
//! let app = campus_crud::app(InMemoryRecordStore::new());
//! campus_crud::api::serve(app, "0.0.0.0:8080".parse()?).await?;
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod record;
pub mod resources;
pub mod store;
pub mod telemetry;

pub use api::{Api, ApiError};
pub use config::Config;
pub use record::{Record, RecordKey};
pub use store::{InMemoryRecordStore, RecordStore, RecordsExt, StoreError};
#[cfg(feature = "sqlite")]
pub use store::SqliteRecordStore;

use std::sync::Arc;

/// The full campus API over `store`.
pub fn app<S: RecordStore + 'static>(store: S) -> axum::Router {
    app_shared(Arc::new(store))
}

/// The full campus API over a store the caller keeps a handle to.
pub fn app_shared<S: RecordStore + 'static>(store: Arc<S>) -> axum::Router {
    resources::register(Api::with_shared(store)).build()
}
