use axum::{Router, routing::get};

use fitness_auth::RequiredRole;

use crate::middleware::role::guard;
use crate::state::AppState;

use super::controller::{
    create_trainer, delete_trainer, get_cash_by_day, get_cash_by_month, get_trainer, get_trainers,
};

pub fn init_trainers_router() -> Router<AppState> {
    let management = guard(
        Router::new()
            .route("/", get(get_trainers).post(create_trainer))
            .route("/{id}", get(get_trainer).delete(delete_trainer)),
        RequiredRole::Admin,
    );

    let cash = guard(
        Router::new()
            .route("/cash/day", get(get_cash_by_day))
            .route("/cash/month", get(get_cash_by_month)),
        RequiredRole::AnyAuthenticated,
    );

    management.merge(cash)
}
