//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/activity-groups[/{id}]` - Activity group CRUD
//! - `/todo-items[/{id}]`      - Todo item CRUD
//!
//! # Middleware
//!
//! - **Panic recovery** - Panics become the 500 envelope
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{panic, tracing};
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    with_middleware(Router::new().merge(api::routes::routes()).with_state(state))
}

/// Wraps a stateless router in the panic guard, request tracing and
/// trailing-slash normalization.
pub fn with_middleware(router: Router) -> NormalizePath<Router> {
    let router = router.layer(panic::layer()).layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
