use axum::{
    Router,
    routing::{get, post, put},
};

use fitness_auth::RequiredRole;

use crate::middleware::role::guard;
use crate::state::AppState;

use super::controller::{
    create_workout_type, delete_workout_type, get_workout_type, get_workout_types,
    update_workout_type,
};

pub fn init_workout_types_router() -> Router<AppState> {
    let reads = guard(
        Router::new()
            .route("/", get(get_workout_types))
            .route("/{id}", get(get_workout_type)),
        RequiredRole::AnyAuthenticated,
    );

    let writes = guard(
        Router::new()
            .route("/", post(create_workout_type))
            .route("/{id}", put(update_workout_type).delete(delete_workout_type)),
        RequiredRole::Admin,
    );

    reads.merge(writes)
}
