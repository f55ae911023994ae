use axum::{Router, routing::get};

use fitness_auth::RequiredRole;

use crate::middleware::role::guard;
use crate::state::AppState;

use super::controller::{create_admin, delete_admin, get_admin, get_admin_type, get_admins};

pub fn init_admins_router() -> Router<AppState> {
    guard(
        Router::new()
            .route("/", get(get_admins).post(create_admin))
            .route("/type", get(get_admin_type))
            .route("/{id}", get(get_admin).delete(delete_admin)),
        RequiredRole::Admin,
    )
}
