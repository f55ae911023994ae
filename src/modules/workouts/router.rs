use axum::{
    Router,
    routing::{get, patch, post, put},
};

use fitness_auth::RequiredRole;

use crate::middleware::role::guard;
use crate::state::AppState;

use super::controller::{
    change_workout_status, create_workout, delete_workout, get_workout, get_workouts,
    get_workouts_by_date, get_workouts_by_interval, update_workout,
};

pub fn init_workouts_router() -> Router<AppState> {
    let shared = guard(
        Router::new()
            .route("/", get(get_workouts))
            .route("/by-date", get(get_workouts_by_date))
            .route("/by-interval", get(get_workouts_by_interval))
            .route("/{id}", get(get_workout))
            .route("/{id}/status", patch(change_workout_status)),
        RequiredRole::AnyAuthenticated,
    );

    let management = guard(
        Router::new()
            .route("/", post(create_workout))
            .route("/{id}", put(update_workout).delete(delete_workout)),
        RequiredRole::Admin,
    );

    shared.merge(management)
}
