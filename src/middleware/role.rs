//! Role guards for route groups.
//!
//! Every module router declares its routes in groups and wraps each group with
//! [`guard`], naming the [`RequiredRole`] for the whole group. Handlers never
//! check roles themselves.
//!
//! ```rust,ignore
//! use fitness_auth::RequiredRole;
//! use crate::middleware::role::guard;
//!
//! let reads = guard(Router::new().route("/", get(list)), RequiredRole::AnyAuthenticated);
//! let writes = guard(Router::new().route("/", post(create)), RequiredRole::Admin);
//! let router = reads.merge(writes);
//! ```

use axum::{
    Router,
    extract::Request,
    middleware::{self, Next},
    response::{IntoResponse, Response},
};
use tracing::warn;

use fitness_auth::{AuthError, RequiredRole, authorize};
use fitness_core::AppError;

use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Runs the request only if the authenticated caller satisfies `required`.
pub async fn require_role(
    required: RequiredRole,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let AuthUser(identity) = req
        .extensions()
        .get::<AuthUser>()
        .copied()
        .ok_or(AuthError::MissingToken)?;

    if let Err(err) = authorize(&identity, required) {
        warn!(
            user.id = %identity.user_id,
            user.role = %identity.role,
            required = %required,
            "Access denied"
        );
        return Err(err.into());
    }

    Ok(next.run(req).await)
}

pub async fn require_admin(req: Request, next: Next) -> Response {
    match require_role(RequiredRole::Admin, req, next).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

pub async fn require_authenticated(req: Request, next: Next) -> Response {
    match require_role(RequiredRole::AnyAuthenticated, req, next).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Declares the role every route in `router` requires.
pub fn guard(router: Router<AppState>, required: RequiredRole) -> Router<AppState> {
    match required {
        RequiredRole::Admin => router.route_layer(middleware::from_fn(require_admin)),
        RequiredRole::AnyAuthenticated => {
            router.route_layer(middleware::from_fn(require_authenticated))
        }
    }
}
