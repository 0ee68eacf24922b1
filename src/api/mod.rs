//! HTTP transport: maps REST routes onto record stores.
//!
//! Uses axum for routing. Every request passes the role gate before it
//! reaches a handler; a handler that finds no record answers with the
//! shared not-found error.

mod error;
mod handlers;
mod router;
mod server;

pub use error::{ApiError, ErrorBody};
pub use handlers::Message;
pub use router::{Api, AppState};
pub use server::serve;
