#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! HTTP adapter that serves the Torus Life board as htmx fragments.
//!
//! Every request funnels through a single dispatcher that consults the
//! [`routes::RouteTable`], applies the matching command to the shared world and
//! renders the response before releasing the lock.

pub mod config;
pub mod routes;
pub mod state;

mod error;
mod handlers;

use axum::Router;
use tower_http::trace::TraceLayer;

pub use error::ApiError;
pub use state::AppState;

/// Builds the application router around the provided shared state.
pub fn app(state: AppState) -> Router {
    Router::new()
        .fallback(handlers::dispatch)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
