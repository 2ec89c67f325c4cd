//! Function-key guard for module routes

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::{self, Next},
    response::Response,
    Router,
};
use bookstore_authz::FunctionKeys;

use crate::error::AppError;

/// Reject requests that do not carry an accepted function key.
pub async fn require_function_key(
    State(keys): State<Arc<FunctionKeys>>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    keys.authorize(request.uri(), request.headers())?;
    Ok(next.run(request).await)
}

/// Wrap every route of `router` with the function-key check. Unmatched
/// paths still fall through to 404.
pub fn guard(router: Router, keys: Arc<FunctionKeys>) -> Router {
    router.route_layer(middleware::from_fn_with_state(keys, require_function_key))
}
