use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts},
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use tracing::debug;

use fitness_auth::{AuthError, Identity, extract_bearer};
use fitness_core::AppError;

use crate::state::AppState;

/// The verified caller of a protected route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser(pub Identity);

impl AuthUser {
    pub fn user_id(&self) -> i32 {
        self.0.user_id
    }

    pub fn is_admin(&self) -> bool {
        self.0.is_admin()
    }

    /// Trainer id to restrict reads to: `None` for admins, who see every row.
    pub fn trainer_scope(&self) -> Option<i32> {
        if self.is_admin() {
            None
        } else {
            Some(self.user_id())
        }
    }
}

/// Verifies the bearer token and records the caller for downstream guards and
/// handlers.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header = match req.headers().get(header::AUTHORIZATION) {
        Some(value) => Some(value.to_str().map_err(|_| AuthError::MalformedHeader)?),
        None => None,
    };

    let token = extract_bearer(header)?;
    let identity = state.token_codec.verify(token, Utc::now())?;
    debug!(user.id = %identity.user_id, user.role = %identity.role, "Authenticated request");

    req.extensions_mut().insert(AuthUser(identity));
    Ok(next.run(req).await)
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .copied()
            .ok_or_else(|| AuthError::MissingToken.into())
    }
}
