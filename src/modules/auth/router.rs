use axum::{Router, routing::post};

use crate::state::AppState;

use super::controller::{admin_sign_in, trainer_sign_in};

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/admin/sign-in", post(admin_sign_in))
        .route("/trainer/sign-in", post(trainer_sign_in))
}
