use axum::{Router, routing::get};

use fitness_auth::RequiredRole;

use crate::middleware::role::guard;
use crate::state::AppState;

use super::controller::{create_client, get_client, get_clients, update_client};

pub fn init_clients_router() -> Router<AppState> {
    guard(
        Router::new()
            .route("/", get(get_clients).post(create_client))
            .route("/{id}", get(get_client).put(update_client)),
        RequiredRole::Admin,
    )
}
